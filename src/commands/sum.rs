use crate::{
    commands::input,
    libs::{config::Config, messages::Message, punch::parse_log, report::aggregate, summary::SummaryCalculator, view::View},
    msg_error, msg_print, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[arg(long, short, help = "Read the punch log from a file instead of the cache")]
    file: Option<PathBuf>,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let Some(text) = input::resolve_log_text(args.file.as_ref())? else {
        msg_error!(Message::InputCacheMissing);
        return Ok(());
    };

    if text.trim().is_empty() {
        msg_warning!(Message::InputEmpty);
        return Ok(());
    }

    let records = parse_log(&text);
    if records.is_empty() {
        msg_warning!(Message::NoValidPunches);
        return Ok(());
    }

    let schedule = Config::read()?.schedule();
    let summary = aggregate(&records, &schedule.business_window()).summarize(schedule.requirement());

    msg_print!(Message::SummaryHeader, true);
    View::summary(&summary)?;

    Ok(())
}
