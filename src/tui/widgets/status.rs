// ABOUTME: Status bar widget — renders language, request state, message count, and key hints.
// ABOUTME: Displayed at the bottom of the TUI as a single-line summary.

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::i18n::Language;

/// Inputs for the status bar line.
pub struct StatusBarParams<'a> {
    pub endpoint: &'a str,
    pub language: Language,
    pub sending: bool,
    pub message_count: usize,
}

/// Render the status bar line.
pub fn status_line(params: &StatusBarParams<'_>) -> Line<'static> {
    let strings = params.language.strings();
    let dim = Style::default().fg(Color::DarkGray);

    let state = if params.sending {
        Span::styled(format!("{} ", strings.sending), Style::default().fg(Color::Yellow))
    } else {
        Span::styled(format!("{} ", strings.ready), Style::default().fg(Color::Green))
    };

    Line::from(vec![
        Span::styled(
            format!(" {} ", params.language.code().to_uppercase()),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled("| ", dim),
        state,
        Span::styled("| ", dim),
        Span::styled(
            format!("{} {} ", params.message_count, strings.messages),
            Style::default().fg(Color::White),
        ),
        Span::styled("| ", dim),
        Span::styled(format!("{} ", params.endpoint), dim),
        Span::styled("| ", dim),
        Span::styled(strings.key_hints, dim),
    ])
}
