use std::io;
use std::process::ExitCode;
use clap::{Parser, ValueEnum};
use tracing::{error, Level};
use lms::core::domain::Configuration;
use lms::shell::controller::Shell;
use lms::utils::logging::setup_tracing;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<&LogLevel> for Level {
    fn from(level: &LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "library",
    about = "Browse, check out and return books of the library catalog",
    version
)]
struct Cli {
    /// Library branch the session runs against
    #[clap(long, default_value = "main")]
    branch: String,

    /// Name of the patron using this session
    #[clap(long, default_value = "Guest")]
    patron: String,

    /// Set log level
    #[clap(long, value_enum, default_value = "warn")]
    log_level: LogLevel,

    /// Emit logs as JSON lines on stderr
    #[clap(long)]
    json_logs: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(Level::from(&cli.log_level), cli.json_logs);

    let config = Configuration::new(cli.branch.as_str()).with_patron_name(cli.patron.as_str());
    let stdin = io::stdin();
    let stdout = io::stdout();
    match Shell::new(stdin.lock(), stdout.lock()).run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "console session failed");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
