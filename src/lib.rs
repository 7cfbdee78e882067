//! Interactive terminal picker for supermux.
//!
//! The caller hands over a tab-separated list of sessions and windows; the
//! picker lets the user attach, detach, kill, refresh or create one, and
//! writes exactly one `action\tsession\twin` line back to a result file.

pub mod config;
pub mod logging;
pub mod picker;
pub mod tui;

/// Version string baked in at compile time by `build.rs`.
pub const VERSION: &str = env!("SUPERMUX_PICKER_VERSION");
