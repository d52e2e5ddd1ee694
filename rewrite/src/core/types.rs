//! Shared deterministic types for the core transforms.
//!
//! These types are the contract between config loading and the pure
//! transforms. They carry no paths and no I/O state.

use anyhow::{Result, bail};
use serde::Deserialize;

/// Class selector fragment that triggers expansion.
pub const DEFAULT_MARKER: &str = "body.halloween-theme";

/// Theme classes emitted for every marker-bearing selector, in output order.
pub const DEFAULT_TARGETS: [&str; 6] = [
    "body.halloween-theme",
    "body.theme-cyberpunk",
    "body.theme-matrix",
    "body.theme-synthwave",
    "body.theme-deepspace",
    "body.theme-toxic",
];

/// Conditional prefix inserted before unguarded logging calls.
pub const DEFAULT_GUARD_TOKEN: &str = "if (DEBUG)";

/// Logging calls that receive the guard prefix.
pub const DEFAULT_GUARD_CALLS: [&str; 2] = ["console.log", "console.warn"];

/// Marker class plus the ordered theme classes that replace it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSet {
    pub marker: String,
    /// Order is significant: it is the order selectors are emitted in.
    pub targets: Vec<String>,
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            targets: DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

/// Guard token and the call names it protects.
///
/// Deserialized directly from the `[guard]` config table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GuardRule {
    /// Text placed before the call, e.g. `if (DEBUG)`.
    pub token: String,
    /// Call names matched at statement position, e.g. `console.log`.
    pub calls: Vec<String>,
}

impl Default for GuardRule {
    fn default() -> Self {
        Self {
            token: DEFAULT_GUARD_TOKEN.to_string(),
            calls: DEFAULT_GUARD_CALLS.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl GuardRule {
    pub fn validate(&self) -> Result<()> {
        if self.token.trim().is_empty() {
            bail!("guard.token must not be empty");
        }
        if self.calls.is_empty() {
            bail!("guard.calls must be a non-empty array");
        }
        if self.calls.iter().any(|call| call.trim().is_empty()) {
            bail!("guard.calls must not contain blank entries");
        }
        Ok(())
    }
}
