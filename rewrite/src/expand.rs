//! Stylesheet expansion for `expand-theme-selectors`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::core::selectors::expand_selectors;
use crate::core::types::ThemeSet;
use crate::io::document::{WriteMode, read_document, write_document};

/// Outcome of expanding one stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandReport {
    pub path: PathBuf,
    pub groups: usize,
    pub selectors: usize,
    /// True when the rewritten text differs from what was read.
    pub changed: bool,
}

/// Read `path`, expand its theme selectors and (unless checking) write it back.
pub fn expand_stylesheet(path: &Path, themes: &ThemeSet, mode: WriteMode) -> Result<ExpandReport> {
    let original = read_document(path)?;
    let expansion = expand_selectors(&original, themes)
        .with_context(|| format!("expand selectors in {}", path.display()))?;
    let changed = expansion.text != original;

    if mode == WriteMode::Write {
        write_document(path, &expansion.text)?;
    }
    info!(
        path = %path.display(),
        groups = expansion.groups,
        selectors = expansion.selectors,
        changed,
        ?mode,
        "expanded stylesheet"
    );

    Ok(ExpandReport {
        path: path.to_path_buf(),
        groups: expansion.groups,
        selectors: expansion.selectors,
        changed,
    })
}
