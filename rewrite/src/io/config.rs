//! Rewrite configuration stored in `rewrite.toml`.
//!
//! Both binaries read the same file but each validates only its own table:
//! a broken `[themes]` table never stops `wrap-console-logs`, and vice versa.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use crate::core::types::{DEFAULT_MARKER, DEFAULT_TARGETS, GuardRule, ThemeSet};

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "rewrite.toml";

/// Stylesheet rewritten by `expand-theme-selectors` when nothing overrides it.
pub const DEFAULT_STYLESHEET: &str = "src/themes/youtube-theme.css";

/// Rewrite configuration (TOML).
///
/// Every field is optional; missing fields fall back to the built-in
/// theme list, stylesheet path and `if (DEBUG)` guard.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct RewriteConfig {
    pub themes: ThemesConfig,
    pub guard: GuardRule,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ThemesConfig {
    /// Stylesheet path, relative to the working directory.
    pub stylesheet: PathBuf,
    /// Class selector fragment that triggers expansion.
    pub marker: String,
    /// Replacement classes, in output order.
    pub targets: Vec<String>,
}

impl Default for ThemesConfig {
    fn default() -> Self {
        Self {
            stylesheet: PathBuf::from(DEFAULT_STYLESHEET),
            marker: DEFAULT_MARKER.to_string(),
            targets: DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl ThemesConfig {
    pub fn theme_set(&self) -> ThemeSet {
        ThemeSet {
            marker: self.marker.clone(),
            targets: self.targets.clone(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.stylesheet.as_os_str().is_empty() {
            return Err(anyhow!("themes.stylesheet must not be empty"));
        }
        if self.marker.trim().is_empty() {
            return Err(anyhow!("themes.marker must not be empty"));
        }
        if self.targets.is_empty() {
            return Err(anyhow!("themes.targets must be a non-empty array"));
        }
        if self.targets.iter().any(|t| t.trim().is_empty()) {
            return Err(anyhow!("themes.targets must not contain blank entries"));
        }
        Ok(())
    }
}

/// Parse the config file without validating any table.
///
/// If the file is missing, returns `RewriteConfig::default()`.
pub fn load_config(path: &Path) -> Result<RewriteConfig> {
    if !path.exists() {
        return Ok(RewriteConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

/// Load and validate the `[themes]` table.
pub fn load_themes_config(path: &Path) -> Result<ThemesConfig> {
    let cfg = load_config(path)?;
    cfg.themes
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg.themes)
}

/// Load and validate the `[guard]` table.
pub fn load_guard_rule(path: &Path) -> Result<GuardRule> {
    let cfg = load_config(path)?;
    cfg.guard
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg.guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, RewriteConfig::default());
        assert_eq!(cfg.themes.theme_set(), ThemeSet::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rewrite.toml");
        fs::write(
            &path,
            "[themes]\nstylesheet = \"styles/site.css\"\n\n[guard]\ntoken = \"if (VERBOSE)\"\n",
        )
        .expect("write");

        let themes = load_themes_config(&path).expect("themes");
        assert_eq!(themes.stylesheet, PathBuf::from("styles/site.css"));
        assert_eq!(themes.marker, DEFAULT_MARKER);
        assert_eq!(themes.targets.len(), 6);

        let guard = load_guard_rule(&path).expect("guard");
        assert_eq!(guard.token, "if (VERBOSE)");
        assert_eq!(guard.calls, GuardRule::default().calls);
    }

    #[test]
    fn empty_targets_fail_theme_validation() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rewrite.toml");
        fs::write(&path, "[themes]\ntargets = []\n").expect("write");

        let err = load_themes_config(&path).expect_err("invalid themes");
        assert!(format!("{err:#}").contains("themes.targets"));
    }

    #[test]
    fn broken_themes_table_does_not_affect_guard_rule() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rewrite.toml");
        fs::write(&path, "[themes]\ntargets = []\nmarker = \"\"\n").expect("write");

        let guard = load_guard_rule(&path).expect("guard");
        assert_eq!(guard, GuardRule::default());
    }

    #[test]
    fn blank_call_fails_guard_validation() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("rewrite.toml");
        fs::write(&path, "[guard]\ncalls = [\"console.log\", \" \"]\n").expect("write");

        let err = load_guard_rule(&path).expect_err("invalid guard");
        assert!(format!("{err:#}").contains("guard.calls"));
    }
}
