// ABOUTME: Chat widget — renders chat messages into styled ratatui Lines.
// ABOUTME: User and bot messages get distinct prefixes and colors; bot replies may span lines.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::tui::state::{ChatMessage, MessageKind};

/// Render one chat message into styled Lines.
///
/// Every message except the first in the history is preceded by a blank
/// separator line, so a run of messages can be rendered independently and
/// concatenated.
pub fn message_lines(msg: &ChatMessage, first: bool) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if !first {
        lines.push(Line::from(""));
    }

    let (prefix, color) = match msg.kind {
        MessageKind::User => ("❯ ", Color::Green),
        MessageKind::Bot => ("⏺ ", Color::Cyan),
    };
    let time = msg.timestamp.format("%H:%M ").to_string();

    // lines() also strips the \r of CRLF replies.
    let mut text = msg.content.lines();
    lines.push(Line::from(vec![
        Span::styled(time, Style::default().fg(Color::DarkGray)),
        Span::styled(
            prefix,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw(text.next().unwrap_or_default().to_string()),
    ]));
    lines.extend(text.map(|rest| Line::from(Span::raw(rest.to_string()))));

    lines
}
