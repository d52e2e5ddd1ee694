//! Fan out `body.halloween-theme` selectors to every theme class.
//!
//! Rewrites the extension stylesheet in place. With no arguments it targets
//! `src/themes/youtube-theme.css` under the working directory.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use rewrite::exit_codes;
use rewrite::expand::expand_stylesheet;
use rewrite::io::config::{DEFAULT_CONFIG_FILE, load_themes_config};
use rewrite::io::document::WriteMode;
use rewrite::logging;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "expand-theme-selectors",
    version,
    about = "Expand halloween-theme selectors into one selector per theme"
)]
struct Cli {
    /// Config file (defaults to `rewrite.toml` when present).
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Report whether the stylesheet would change without writing it.
    #[arg(long)]
    check: bool,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::FAILURE);
        }
    }
}

fn run(cli: &Cli) -> Result<i32> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let themes = load_themes_config(&config_path)?;
    debug!(config = %config_path.display(), "config loaded");

    let stylesheet = &themes.stylesheet;
    let mode = if cli.check {
        WriteMode::Check
    } else {
        WriteMode::Write
    };
    let report = expand_stylesheet(stylesheet, &themes.theme_set(), mode)?;

    if cli.check {
        if report.changed {
            println!(
                "would rewrite {} ({} selector groups)",
                report.path.display(),
                report.groups
            );
            return Ok(exit_codes::PENDING);
        }
        return Ok(exit_codes::OK);
    }

    println!("✓ Fixed all selectors in {}", file_label(stylesheet));
    Ok(exit_codes::OK)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
