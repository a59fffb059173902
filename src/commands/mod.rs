pub mod init;
pub mod report;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Load and display the workshift report for a date range")]
    Report(report::ReportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> anyhow::Result<ExitCode> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args).map(|()| ExitCode::SUCCESS),
            Commands::Report(args) => report::cmd(args).await,
        }
    }
}
