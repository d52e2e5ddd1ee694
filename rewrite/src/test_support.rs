//! Test-only fixtures and helpers shared by the library and binary tests.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::types::DEFAULT_TARGETS;

/// Source with two unguarded calls (lines 3 and 6) and one guarded (line 9).
pub const UNGUARDED_SOURCE: &str = "\
const DEBUG = false;
function start(motion) {
    console.log('[GAME MODE] Starting game with motion:', motion);
    this.state = 'playing';
    if (!this.canvas) {
        console.warn('[GAME MODE] No canvas');
    }
    if (DEBUG)
        console.log('[GAME MODE] Canvas ready');
}
";

/// [`UNGUARDED_SOURCE`] after guarding.
pub const GUARDED_SOURCE: &str = "\
const DEBUG = false;
function start(motion) {
    if (DEBUG) console.log('[GAME MODE] Starting game with motion:', motion);
    this.state = 'playing';
    if (!this.canvas) {
        if (DEBUG) console.warn('[GAME MODE] No canvas');
    }
    if (DEBUG)
        console.log('[GAME MODE] Canvas ready');
}
";

/// Expected expansion of `body.halloween-theme <rest>` under the default themes.
pub fn expanded(rest: &str) -> String {
    DEFAULT_TARGETS
        .iter()
        .map(|theme| format!("{theme} {rest}"))
        .collect::<Vec<_>>()
        .join(",\n")
}

/// Write `contents` to `root/relative`, creating parent directories.
pub fn write_fixture(root: &Path, relative: &str, contents: &str) -> PathBuf {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create fixture dir");
    }
    fs::write(&path, contents).expect("write fixture");
    path
}
