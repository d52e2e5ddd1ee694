//! Deterministic, pure text transforms.
//!
//! Core modules must be free of I/O side effects. They take the whole file
//! contents as a `&str` and return the rewritten text plus counts suitable
//! for reporting and tests.

pub mod css_scan;
pub mod log_guard;
pub mod selectors;
pub mod types;
