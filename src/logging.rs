//! Verbosity-gated logging to stderr
//!
//! Messages go to stderr so that nothing interferes with files or the TUI on
//! stdout. The level is a process-wide atomic set once from the command line.

use std::sync::atomic::{AtomicUsize, Ordering};

pub const LEVEL_ERROR: usize = 0;
pub const LEVEL_WARN: usize = 1;
pub const LEVEL_INFO: usize = 2;
pub const LEVEL_DEBUG: usize = 3;
pub const LEVEL_TRACE: usize = 4;

static VERBOSITY_LEVEL: AtomicUsize = AtomicUsize::new(crate::config::DEFAULT_VERBOSITY);

pub fn set_verbosity_level(level: usize) {
    VERBOSITY_LEVEL.store(level.min(LEVEL_TRACE), Ordering::Relaxed);
}

pub fn get_verbosity_level() -> usize {
    VERBOSITY_LEVEL.load(Ordering::Relaxed)
}

pub fn enabled(level: usize) -> bool {
    get_verbosity_level() >= level
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        if $crate::logging::enabled($crate::logging::LEVEL_ERROR) {
            eprintln!("[ERROR] {}", format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        if $crate::logging::enabled($crate::logging::LEVEL_WARN) {
            eprintln!("[WARNING] {}", format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        if $crate::logging::enabled($crate::logging::LEVEL_INFO) {
            eprintln!("[INFO] {}", format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        if $crate::logging::enabled($crate::logging::LEVEL_DEBUG) {
            eprintln!("[DEBUG] {}", format!($($arg)*));
        }
    };
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        if $crate::logging::enabled($crate::logging::LEVEL_TRACE) {
            eprintln!("[TRACE] {}", format!($($arg)*));
        }
    };
}

/// Set the level from the number of `-v` flags on the command line.
pub fn initialize(verbose_count: usize) {
    set_verbosity_level(crate::config::DEFAULT_VERBOSITY + verbose_count);
    debug!("Logging initialized at level {}", get_verbosity_level());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(LEVEL_ERROR < LEVEL_WARN);
        assert!(LEVEL_WARN < LEVEL_INFO);
        assert!(LEVEL_INFO < LEVEL_DEBUG);
        assert!(LEVEL_DEBUG < LEVEL_TRACE);
    }

    #[test]
    fn test_set_level_is_clamped() {
        let previous = get_verbosity_level();
        set_verbosity_level(99);
        assert_eq!(get_verbosity_level(), LEVEL_TRACE);
        assert!(enabled(LEVEL_DEBUG));
        set_verbosity_level(previous);
    }
}
