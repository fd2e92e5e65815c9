// ABOUTME: TUI widget sub-modules for header, chat, suggestions, and status bar.
// ABOUTME: Each widget is a pure rendering function over ChatWidget data.

pub mod chat;
pub mod header;
pub mod status;
pub mod suggestions;
