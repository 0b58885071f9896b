use crate::{
    commands::input,
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
        punch::parse_log,
        report::aggregate,
        summary::SummaryCalculator,
    },
    msg_error, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, short = 'F', value_enum, default_value = "csv", help = "Export format")]
    format: ExportFormat,
    #[arg(long, short, help = "Output file path")]
    output: Option<PathBuf>,
    #[arg(long, short, help = "Read the punch log from a file instead of the cache")]
    file: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let Some(text) = input::resolve_log_text(args.file.as_ref())? else {
        msg_error!(Message::InputCacheMissing);
        return Ok(());
    };

    let records = parse_log(&text);
    if records.is_empty() {
        msg_warning!(Message::ExportNoData);
        return Ok(());
    }

    let schedule = Config::read()?.schedule();
    let days = aggregate(&records, &schedule.business_window());
    let summary = days.summarize(schedule.requirement());

    Exporter::new(args.format, args.output).export(&days, &summary)?;
    Ok(())
}
