pub mod estimate;
pub mod export;
pub mod init;
pub mod input;
pub mod report;
pub mod sum;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Store or show the raw punch-log text")]
    Input(input::InputArgs),
    #[command(about = "Prepare a per-day punch report")]
    Report(report::ReportArgs),
    #[command(about = "Get aggregate summary")]
    Sum(sum::SumArgs),
    #[command(about = "Estimate the punch-out time for a punch-in time")]
    Estimate(estimate::EstimateArgs),
    #[command(about = "Export day results to CSV, JSON, or Excel")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Input(args) => input::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Estimate(args) => estimate::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
