//! Debug-guard insertion for `wrap-console-logs`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::core::log_guard::LogGuard;
use crate::core::types::GuardRule;
use crate::io::document::{WriteMode, read_document, write_document};

/// Outcome of guarding one source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardReport {
    pub path: PathBuf,
    /// 1-based line numbers that received the guard.
    pub wrapped: Vec<usize>,
    /// 1-based line numbers skipped because they were already guarded.
    pub already_guarded: Vec<usize>,
    pub changed: bool,
}

/// Read `path`, guard its logging calls and (unless checking) write it back.
pub fn guard_source(path: &Path, rule: &GuardRule, mode: WriteMode) -> Result<GuardReport> {
    let guard = LogGuard::new(rule).context("build log guard")?;
    let original = read_document(path)?;
    let guarded = guard.apply(&original);
    let changed = guarded.changed();

    if mode == WriteMode::Write {
        write_document(path, &guarded.text)?;
    }
    info!(
        path = %path.display(),
        wrapped = guarded.wrapped.len(),
        already_guarded = guarded.already_guarded.len(),
        ?mode,
        "guarded source"
    );

    Ok(GuardReport {
        path: path.to_path_buf(),
        wrapped: guarded.wrapped,
        already_guarded: guarded.already_guarded,
        changed,
    })
}
