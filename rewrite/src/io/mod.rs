//! I/O helpers for the rewrite binaries.

pub mod config;
pub mod document;
