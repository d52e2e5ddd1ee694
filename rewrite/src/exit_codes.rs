//! Stable exit codes for the rewrite binaries.

/// Rewrite succeeded (or `--check` found nothing to change).
pub const OK: i32 = 0;
/// Missing argument, unreadable/unwritable file, or invalid config.
pub const FAILURE: i32 = 1;
/// `--check` found a file that would be rewritten.
pub const PENDING: i32 = 2;
