//! Stderr diagnostics for `expand-theme-selectors` and `wrap-console-logs`.
//!
//! Silent by default. With `RUST_LOG=rewrite=debug` each expanded selector run
//! (by byte offset) and each wrapped line (by line number) is logged, followed
//! by one `info` summary per file. The `Processed <path>` / `✓ Fixed ...`
//! status lines are plain stdout and do not depend on this.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber: `RUST_LOG` filter (default `warn`),
/// compact format, stderr.
///
/// ```bash
/// RUST_LOG=rewrite=info expand-theme-selectors --check
/// ```
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
