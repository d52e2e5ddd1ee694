//! Debug-guard insertion for logging statements.
//!
//! Line-oriented: each line is classified on its own, with a single line of
//! lookback to detect an existing guard.

use anyhow::{Context, Result};
use regex::Regex;
use tracing::debug;

use crate::core::types::GuardRule;

/// Rewritten source plus the lines that were touched or skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardedSource {
    pub text: String,
    /// 1-based line numbers that received the guard prefix.
    pub wrapped: Vec<usize>,
    /// 1-based line numbers left alone because the line above is a guard.
    pub already_guarded: Vec<usize>,
}

impl GuardedSource {
    pub fn changed(&self) -> bool {
        !self.wrapped.is_empty()
    }
}

/// Compiled matcher for one [`GuardRule`].
#[derive(Debug, Clone)]
pub struct LogGuard {
    token: String,
    call_re: Regex,
}

impl LogGuard {
    pub fn new(rule: &GuardRule) -> Result<Self> {
        rule.validate()?;

        let alternatives: Vec<String> = rule.calls.iter().map(|c| regex::escape(c)).collect();
        let pattern = format!(r"^(\s+)(?:{})\(", alternatives.join("|"));
        let call_re =
            Regex::new(&pattern).with_context(|| format!("compile call pattern {pattern}"))?;

        Ok(Self {
            token: rule.token.clone(),
            call_re,
        })
    }

    /// Prefix the guard token to every unguarded, indented logging call.
    ///
    /// Line count and order never change. Splitting and joining on `\n`
    /// keeps a trailing newline (and any `\r`) intact.
    pub fn apply(&self, text: &str) -> GuardedSource {
        let lines: Vec<&str> = text.split('\n').collect();
        let mut out = Vec::with_capacity(lines.len());
        let mut wrapped = Vec::new();
        let mut already_guarded = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            let Some(caps) = self.call_re.captures(line) else {
                out.push((*line).to_string());
                continue;
            };

            if idx > 0 && lines[idx - 1].contains(&self.token) {
                already_guarded.push(idx + 1);
                out.push((*line).to_string());
                continue;
            }

            let indent = caps.get(1).map_or("", |m| m.as_str());
            debug!(line = idx + 1, "wrapping logging call");
            wrapped.push(idx + 1);
            out.push(format!("{indent}{} {}", self.token, &line[indent.len()..]));
        }

        GuardedSource {
            text: out.join("\n"),
            wrapped,
            already_guarded,
        }
    }
}
