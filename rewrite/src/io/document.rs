//! Whole-file reads and writes.
//!
//! Files are overwritten in place with no temp-file/rename step; a concurrent
//! writer against the same path is not guarded against.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Whether an orchestration pass writes its result back to disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Overwrite the file, even when the transform changed nothing.
    Write,
    /// Compute the result and report it; never touch the file.
    Check,
}

/// Read the full contents of `path` as UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}

/// Overwrite `path` with `contents`.
pub fn write_document(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("write {}", path.display()))
}
