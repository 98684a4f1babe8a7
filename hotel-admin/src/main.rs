//! hotel-admin - command-line admin console for the hotel backend

mod cli;
mod commands;
mod console;
mod logger;
mod render;

use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use commands::Context;

/// Load `.env` and set up logging
fn setup_environment(cli: &Cli) -> anyhow::Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    logger::init_logger(&cli.log_level, cli.log_dir.as_deref())
}

#[tokio::main]
async fn main() -> ExitCode {
    // before parsing so clap's env fallbacks see it
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let _guard = match setup_environment(&cli) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("error: failed to initialise logging: {:#}", e);
            return ExitCode::FAILURE;
        }
    };

    let ctx = Context::new(&cli);
    tracing::debug!(command = ?cli.command, "running");
    match commands::run(cli, &ctx).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // screen failures were already shown as notices
            if !ctx.notifier.reported_error() {
                eprintln!("error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
