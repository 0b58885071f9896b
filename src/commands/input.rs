//! Store or display the raw punch-log text.
//!
//! The raw blob is the only persisted artifact: it is cached verbatim under
//! a single fixed file and restored verbatim by later commands, mirroring a
//! paste-and-process workflow. The blob is never interpreted here.

use crate::libs::messages::Message;
use crate::libs::raw_log::RawLog;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use clap::Args;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InputArgs {
    /// File to read the punch log from; stdin is used when omitted
    #[arg(long, short, help = "Read the punch log from a file instead of stdin")]
    file: Option<PathBuf>,
    /// Print the cached punch log instead of storing a new one
    #[arg(long, short, help = "Show the cached punch log")]
    show: bool,
}

pub fn cmd(args: InputArgs) -> Result<()> {
    let raw_log = RawLog::new();

    if args.show {
        match raw_log.load()? {
            Some(text) => print!("{}", text),
            None => msg_warning!(Message::InputShowEmpty),
        }
        return Ok(());
    }

    let text = match &args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    if text.trim().is_empty() {
        msg_warning!(Message::InputEmpty);
        return Ok(());
    }

    raw_log.save(&text)?;
    msg_success!(Message::InputSaved(text.trim().lines().count()));
    Ok(())
}

/// Resolves punch-log text for processing commands.
///
/// A `--file` argument wins over the cached blob; `None` means neither
/// source had anything to offer.
pub fn resolve_log_text(file: Option<&PathBuf>) -> Result<Option<String>> {
    match file {
        Some(path) => Ok(Some(fs::read_to_string(path)?)),
        None => RawLog::new().load(),
    }
}
