//! Punch-out time estimation command.
//!
//! Takes a punch-in time and a required working duration and prints the
//! wall-clock time at which the requirement is satisfied, wrapping past
//! midnight. When no punch-in is given on the command line, the time is
//! collected interactively and shaped with the digit-masking helper, so
//! free-form entries like `0815` become `08:15`.

use crate::libs::estimator::{estimate_punch_out, mask_time};
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct EstimateArgs {
    #[arg(long, short, help = "Punch-in time (HH:MM or HH:MM:SS)")]
    punch_in: Option<String>,
    #[arg(long, short, default_value = "8:00:00", help = "Required working duration (H:MM:SS)")]
    duration: String,
}

pub fn cmd(args: EstimateArgs) -> Result<()> {
    let punch_in = match args.punch_in {
        Some(punch_in) => punch_in,
        None => {
            let entry: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptPunchIn.to_string())
                .allow_empty(true)
                .interact_text()?;
            mask_time(&entry)
        }
    };

    match estimate_punch_out(&punch_in, &args.duration) {
        Some(time) => msg_print!(Message::EstimatedPunchOut(time)),
        None => msg_warning!(Message::EstimateNotApplicable),
    }

    Ok(())
}
