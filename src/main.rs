//! `bookcat` command-line prompt.
//!
//! Reads `:tag: argument` lines from standard input and writes results to
//! standard output. Logs go to standard error.

use anyhow::{Context, Result};
use bookcat::{prompt, PromptConfig, Session};
use clap::{Parser, ValueEnum};
use std::io;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "bookcat",
    about = "A personal book catalog driven by `:tag: argument` commands",
    version
)]
struct Cli {
    /// Text shown before each input line
    #[clap(long, default_value = "> ")]
    prompt: String,

    /// Maximum number of hits a search prints, unless it gives its own limit
    #[clap(long, value_parser = clap::value_parser!(usize))]
    limit: Option<usize>,

    /// Stop at the first line that fails instead of reporting and going on
    #[clap(long)]
    strict: bool,

    /// Set log level (RUST_LOG takes precedence)
    #[clap(long, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

fn initialize_tracing(log_level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_filter_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let config = PromptConfig {
        prompt: cli.prompt,
        default_limit: cli.limit,
    };
    let mut session = Session::new(io::stdout().lock());
    let stdin = io::stdin().lock();

    if cli.strict {
        session.set_default_limit(config.default_limit);
        let executed = prompt::run_strict(stdin, &mut session).context("bookcat stopped")?;
        info!(executed, "input finished");
    } else {
        let stats = prompt::run(stdin, &mut session, &config).context("bookcat stopped")?;
        info!(
            executed = stats.executed,
            rejected = stats.rejected,
            "input finished"
        );
    }

    Ok(())
}
