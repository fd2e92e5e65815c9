// ABOUTME: Library root for rdsp-chat — re-exports all modules for integration testing.
// ABOUTME: The binary entry point is in main.rs, which uses this crate as a library.

pub mod api;
pub mod app;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod tui;
