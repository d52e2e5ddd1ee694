//! Wrap unguarded `console.log` / `console.warn` calls with `if (DEBUG)`.

use std::path::PathBuf;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use rewrite::exit_codes;
use rewrite::guard::guard_source;
use rewrite::io::config::{DEFAULT_CONFIG_FILE, load_guard_rule};
use rewrite::io::document::WriteMode;
use rewrite::logging;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "wrap-console-logs",
    version,
    about = "Prefix unguarded logging statements with a DEBUG check"
)]
struct Cli {
    /// Source file to rewrite in place.
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// Config file (defaults to `rewrite.toml` when present).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report pending changes without writing the file.
    #[arg(long)]
    check: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let Some(path) = cli.path.clone() else {
        println!("{}", usage());
        std::process::exit(exit_codes::FAILURE);
    };
    match run(&cli, path) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

fn run(cli: &Cli, path: PathBuf) -> Result<i32> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let rule = load_guard_rule(&config_path)?;
    debug!(config = %config_path.display(), "config loaded");

    let mode = if cli.check {
        WriteMode::Check
    } else {
        WriteMode::Write
    };
    let report = guard_source(&path, &rule, mode)?;

    if cli.check {
        if report.changed {
            println!(
                "would wrap {} statements in {}",
                report.wrapped.len(),
                path.display()
            );
            return Ok(exit_codes::PENDING);
        }
        return Ok(exit_codes::OK);
    }

    println!("Processed {}", path.display());
    Ok(exit_codes::OK)
}

/// Usage line with `PATH` shown as required.
///
/// The argument is optional to clap only so a missing path can be reported
/// on stdout with exit code 1 instead of clap's own error path.
fn usage() -> String {
    Cli::command()
        .mut_arg("path", |arg| arg.required(true))
        .render_usage()
        .to_string()
}
