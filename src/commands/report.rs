//! Report command: load a workshift report and print it.
//!
//! The date range comes from `--start`/`--end`; a missing bound is asked for
//! interactively when a terminal is attached. The report source is the
//! attendance API unless `--shifts` points at a local shift file.

use crate::{
    api::{AttendanceApi, LocalShifts, ReportApi},
    libs::{
        config::Config,
        loader::{InputSource, LoadOutcome, Notifier, ReportLoader},
        messages::Message,
        view::{CsvTable, HtmlTable, TerminalTable},
    },
    msg_debug, msg_print, msg_warning,
};
use anyhow::{anyhow, Result};
use clap::{Args, ValueEnum};
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Html,
    Csv,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    #[arg(long, help = "First day of the report (YYYY-MM-DD)")]
    start: Option<String>,
    #[arg(long, help = "Last day of the report (YYYY-MM-DD)")]
    end: Option<String>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Table, help = "Output format")]
    format: OutputFormat,
    #[arg(long, help = "Attendance API base URL")]
    api_url: Option<String>,
    #[arg(long, help = "Build the report from a local JSON file of shift records")]
    shifts: Option<PathBuf>,
}

/// Date range taken from the command line, completed by prompts.
pub struct PromptInput {
    start: String,
    end: String,
}

impl PromptInput {
    pub fn new(start: Option<String>, end: Option<String>) -> Result<Self> {
        Ok(Self {
            start: Self::value_or_prompt(start, Message::PromptStartDate)?,
            end: Self::value_or_prompt(end, Message::PromptEndDate)?,
        })
    }

    fn value_or_prompt(value: Option<String>, prompt: Message) -> Result<String> {
        match value {
            Some(value) => Ok(value.trim().to_string()),
            None if std::io::stdin().is_terminal() => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
                .with_prompt(prompt.to_string())
                .allow_empty(true)
                .interact_text()?
                .trim()
                .to_string()),
            None => Ok(String::new()),
        }
    }
}

impl InputSource for PromptInput {
    fn start_date(&self) -> String {
        self.start.clone()
    }

    fn end_date(&self) -> String {
        self.end.clone()
    }
}

/// Shows notices on the terminal.
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn alert(&mut self, message: &str) {
        msg_warning!(message);
    }
}

pub async fn cmd(args: ReportArgs) -> Result<ExitCode> {
    let config = Config::read()?;
    let input = PromptInput::new(args.start, args.end)?;

    let outcome = match args.shifts {
        Some(path) => {
            let source = LocalShifts::new(path).with_standard_minutes(config.standard_shift_minutes());
            show(source, &input, args.format).await?
        }
        None => {
            let url = config
                .resolve_api_url(args.api_url.as_deref())
                .ok_or_else(|| anyhow!(Message::ApiUrlMissing))?;
            show(AttendanceApi::new(&url), &input, args.format).await?
        }
    };

    // The notice is already on screen; only the status is left to report.
    Ok(if outcome.is_failure() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
}

/// Loads the report into the view for `format` and prints it when rows were rendered.
pub async fn show<A: ReportApi>(api: A, input: &PromptInput, format: OutputFormat) -> Result<LoadOutcome> {
    let loader = ReportLoader::new(api);
    let mut notifier = TerminalNotifier;

    let outcome = match format {
        OutputFormat::Table => {
            let mut view = TerminalTable::new();
            let outcome = loader.load_report(input, &mut view, &mut notifier).await;
            if matches!(outcome, LoadOutcome::Rendered { .. }) {
                msg_print!(Message::ReportHeader(input.start_date(), input.end_date()), true);
                view.printstd();
            }
            outcome
        }
        OutputFormat::Html => {
            let mut view = HtmlTable::new();
            let outcome = loader.load_report(input, &mut view, &mut notifier).await;
            if matches!(outcome, LoadOutcome::Rendered { .. }) {
                print!("{}", view.render());
            }
            outcome
        }
        OutputFormat::Csv => {
            let mut view = CsvTable::new();
            let outcome = loader.load_report(input, &mut view, &mut notifier).await;
            if matches!(outcome, LoadOutcome::Rendered { .. }) {
                view.write_to(std::io::stdout().lock())?;
            }
            outcome
        }
    };

    if let LoadOutcome::Rendered { rows } = outcome {
        msg_debug!(Message::ReportRowsRendered(rows));
    }
    Ok(outcome)
}
