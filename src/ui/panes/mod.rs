//! TUI pane rendering modules
//!
//! - [`source`]: token-highlighted code pane with line numbers
//! - [`status`]: status bar with direction, counters and keybindings

pub mod source;
pub mod status;

pub use source::{highlight_tokens, render_source_pane, SourceRenderData};
pub use status::{render_status_bar, StatusRenderData};
