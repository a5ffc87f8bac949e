//! Preview TUI built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! Shows a source file and its conversion side by side:
//!
//! - **[`app`]**: application state, keyboard event loop, direction switching
//! - **[`panes`]**: stateless render functions for the code panes and status bar
//! - **[`theme`]**: color palette shared by all panes
//!
//! Construct an [`App`] from the dictionary, the source text and a
//! [`Direction`](crate::keywords::Direction), then call [`App::run`].
//!
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
