// ABOUTME: Header widget — title on the left and the FR | EN language toggle button.
// ABOUTME: The active language is highlighted; the toggle is reversed when it has focus.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use unicode_width::UnicodeWidthStr;

use crate::i18n::Language;

/// Columns taken by the `[ FR | EN ]` toggle.
pub const TOGGLE_WIDTH: u16 = 11;

fn title_text(language: Language) -> String {
    format!(" {} ", language.strings().title)
}

/// Column where the toggle starts, relative to the header's left edge.
pub fn toggle_offset(language: Language) -> u16 {
    u16::try_from(title_text(language).width()).unwrap_or(u16::MAX)
}

/// Render the header line with title and language toggle.
pub fn header_line(language: Language, toggle_focused: bool) -> Line<'static> {
    let active = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let inactive = Style::default().fg(Color::DarkGray);
    let bracket = if toggle_focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let (fr, en) = match language {
        Language::Fr => (active, inactive),
        Language::En => (inactive, active),
    };

    Line::from(vec![
        Span::styled(
            title_text(language),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("[", bracket),
        Span::styled(" FR ", fr),
        Span::styled("|", bracket),
        Span::styled(" EN ", en),
        Span::styled("]", bracket),
    ])
}
