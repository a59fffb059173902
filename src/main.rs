use shiftrep::commands::Cli;
use shiftrep::libs::messages::macros::is_debug_mode;
use shiftrep::msg_error;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenv::dotenv();

    // Diagnostics always reach stderr; debug mode lowers the threshold.
    let default_filter = if is_debug_mode() { "shiftrep=debug" } else { "shiftrep=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_writer(std::io::stderr)
        .init();

    match Cli::menu().await {
        Ok(code) => code,
        Err(e) => {
            msg_error!(e);
            ExitCode::FAILURE
        }
    }
}
