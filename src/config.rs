// Application-wide constants

use crate::logging::LEVEL_WARN;

/// Binary name used in usage messages
pub const APP_NAME: &str = "baguette";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Errors and warnings are shown unless `-v` asks for more
pub const DEFAULT_VERBOSITY: usize = LEVEL_WARN;

/// Event poll interval of the preview TUI, in milliseconds
pub const TUI_POLL_MS: u64 = 50;

/// Tabs are expanded to this many spaces in the preview panes
pub const TAB_WIDTH: usize = 4;
