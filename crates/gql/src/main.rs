mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;
use std::process::ExitCode;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{e:#}");
                ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

/// `--verbose` wins over `LOG_LEVEL`. An unrecognized `LOG_LEVEL` falls back
/// to the default and is reported once logging is up.
fn select_log_level(cli: &Cli) -> (tracing::Level, Option<String>) {
    if cli.verbose {
        return (tracing::Level::DEBUG, None);
    }

    let Ok(env_val) = std::env::var("LOG_LEVEL") else {
        return (DEFAULT_LOG_LEVEL, None);
    };
    let env_val = env_val.trim();
    if env_val.eq_ignore_ascii_case("verbose") {
        return (tracing::Level::DEBUG, None);
    }
    match env_val.parse::<tracing::Level>() {
        Ok(level) => (level, None),
        Err(_) => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Ignoring unrecognized `LOG_LEVEL` value `{env_val}`.")),
        ),
    }
}

fn setup_logger(cli: &Cli) {
    let (log_level, warning) = select_log_level(cli);

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Logging at `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
