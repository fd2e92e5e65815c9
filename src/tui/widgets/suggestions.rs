// ABOUTME: Suggestions widget — the prompt label and one button per canned question.
// ABOUTME: Buttons flow left to right and wrap to new rows; each button's area is reported for clicks.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use crate::tui::state::SuggestionButton;

/// Suggestion rows for a given width.
pub struct SuggestionLayout {
    pub lines: Vec<Line<'static>>,
    /// One area per button, relative to the top-left of the suggestion area.
    pub buttons: Vec<Rect>,
}

/// Lay out the label line and the buttons, wrapping whole buttons at `width`.
pub fn layout_suggestions(
    label: &str,
    buttons: &[SuggestionButton],
    focused: Option<usize>,
    width: u16,
) -> SuggestionLayout {
    let mut lines = vec![Line::from(Span::styled(
        label.to_string(),
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    ))];
    let mut rects = Vec::with_capacity(buttons.len());
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut x: u16 = 0;

    for (idx, button) in buttons.iter().enumerate() {
        let text = format!("[ {} ]", button.label);
        let button_width = u16::try_from(text.width()).unwrap_or(u16::MAX);

        if x > 0 && x.saturating_add(1).saturating_add(button_width) > width {
            lines.push(Line::from(std::mem::take(&mut row)));
            x = 0;
        }
        if x > 0 {
            row.push(Span::raw(" "));
            x += 1;
        }

        let y = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        rects.push(Rect::new(x, y, button_width.min(width.saturating_sub(x)), 1));

        let style = if focused == Some(idx) {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan)
        };
        row.push(Span::styled(text, style));
        x = x.saturating_add(button_width);
    }
    if !row.is_empty() {
        lines.push(Line::from(row));
    }

    SuggestionLayout {
        lines,
        buttons: rects,
    }
}
