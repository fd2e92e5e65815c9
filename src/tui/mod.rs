// ABOUTME: TUI module — ratatui full-screen interface for the RDSP chat widget.
// ABOUTME: Widget state, input handling, terminal plumbing, and rendering.

pub mod input;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod widget;
pub mod widgets;

pub use state::*;
pub use widget::ChatWidget;
