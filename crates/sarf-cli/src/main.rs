//! `sarf` binary: one-shot lexicon commands and an interactive shell.
//!
//! The lexicon is seeded from `sarf.toml` (or the built-in seeds) on every
//! start; nothing is persisted between runs.

mod cli;
mod commands;
mod error;
mod render;
mod shell;
mod sink;

use crate::{
    cli::{Cli, Command},
    error::CliError,
    sink::TracingSink,
};
use clap::Parser;
use sarf::{config::SeedReport, core::obs::with_metrics_sink};
use std::{io, process::ExitCode, rc::Rc};
use tracing::{Level, info, warn};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        })
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    with_metrics_sink(Rc::new(TracingSink), || {
        let cwd = std::env::current_dir()?;
        let (mut lexicon, report) = sarf::open(cli.config.as_deref(), &cwd)?;
        log_seed(&report);

        match &cli.command {
            Command::Shell => shell::run(&mut lexicon),
            Command::Query(query) => commands::execute(query, &mut lexicon, &mut io::stdout()),
        }
    })
}

fn log_seed(report: &SeedReport) {
    info!(
        roots = report.roots_created,
        derivatives = report.derivatives_added,
        schemes = report.schemes,
        "lexicon seeded"
    );

    for skipped in &report.skipped_roots {
        warn!(root = %skipped.root, reason = %skipped.reason, "seed root skipped");
    }
}
