//! In-place text rewriters for a browser-extension source tree.
//!
//! Two independent passes share this crate:
//!
//! - **Theme selector expansion**: every stylesheet selector that mentions the
//!   marker theme class is fanned out into one selector per target theme.
//! - **Debug guards**: indented logging statements gain an `if (DEBUG)` prefix
//!   unless the line above already carries it.
//!
//! The layout keeps a strict split:
//!
//! - **[`core`]**: Pure, deterministic text transforms. No I/O.
//! - **[`io`]**: Whole-file reads/writes and the TOML config.
//!
//! [`expand`] and [`guard`] glue the two together for the CLI binaries.

pub mod core;
pub mod exit_codes;
pub mod expand;
pub mod guard;
pub mod io;
pub mod logging;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
