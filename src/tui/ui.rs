// ABOUTME: Main TUI rendering function — assembles header, chat, suggestions, input, and status bar.
// ABOUTME: Splits the terminal frame into vertical layout chunks and delegates to widgets.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::tui::state::Focus;
use crate::tui::widget::ChatWidget;
use crate::tui::widgets::chat::message_lines;
use crate::tui::widgets::header::{TOGGLE_WIDTH, header_line, toggle_offset};
use crate::tui::widgets::status::{StatusBarParams, status_line};
use crate::tui::widgets::suggestions::layout_suggestions;

/// Maximum rows the suggestion area may take before it is clipped.
const MAX_SUGGESTION_HEIGHT: u16 = 5;

/// Render the full TUI screen layout to the given frame.
pub fn render(frame: &mut Frame, widget: &mut ChatWidget, endpoint: &str) {
    let area = frame.area();

    let focused_suggestion = match widget.focus {
        Focus::Suggestion(idx) => Some(idx),
        _ => None,
    };
    let suggestions = layout_suggestions(
        &widget.suggestion_label,
        &widget.suggestions,
        focused_suggestion,
        area.width,
    );
    let suggestion_height = u16::try_from(suggestions.lines.len())
        .unwrap_or(u16::MAX)
        .clamp(1, MAX_SUGGESTION_HEIGHT);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),                 // Header
            Constraint::Min(3),                    // Chat area
            Constraint::Length(suggestion_height), // Suggestions
            Constraint::Length(3),                 // Input row
            Constraint::Length(1),                 // Status bar
        ])
        .split(area);

    // Header with language toggle
    frame.render_widget(
        Paragraph::new(header_line(
            widget.language,
            widget.focus == Focus::LanguageToggle,
        )),
        chunks[0],
    );
    widget.click_targets.language_toggle = Rect::new(
        chunks[0].x.saturating_add(toggle_offset(widget.language)),
        chunks[0].y,
        TOGGLE_WIDTH,
        1,
    )
    .intersection(chunks[0]);

    render_chat(frame, widget, chunks[1]);

    let suggestion_area = chunks[2];
    widget.click_targets.suggestions = suggestions
        .buttons
        .iter()
        .map(|r| {
            Rect::new(
                suggestion_area.x.saturating_add(r.x),
                suggestion_area.y.saturating_add(r.y),
                r.width,
                r.height,
            )
            .intersection(suggestion_area)
        })
        .collect();
    frame.render_widget(Paragraph::new(suggestions.lines), suggestion_area);

    render_input_row(frame, widget, chunks[3]);

    let status = status_line(&StatusBarParams {
        endpoint,
        language: widget.language,
        sending: !widget.send_enabled(),
        message_count: widget.messages.len(),
    });
    frame.render_widget(Paragraph::new(status), chunks[4]);
}

/// Chat history, pinned to the bottom unless the user scrolled back.
///
/// Only the newest messages that cover the viewport plus the scroll offset are
/// wrapped and rendered, so the history can outgrow a `u16` line count.
fn render_chat(frame: &mut Frame, widget: &mut ChatWidget, chat_chunk: Rect) {
    let height = usize::from(chat_chunk.height);
    let needed = height + usize::from(widget.scroll_offset);

    let mut tail = Vec::new();
    let mut total_lines = 0usize;
    for (idx, msg) in widget.messages.iter().enumerate().rev() {
        let lines = message_lines(msg, idx == 0);
        // line_count() matches ratatui's own wrapping, so the bottom line is never hidden.
        total_lines += Paragraph::new(lines.clone())
            .wrap(Wrap { trim: false })
            .line_count(chat_chunk.width);
        tail.push(lines);
        if total_lines >= needed {
            break;
        }
    }
    let chat_paragraph =
        Paragraph::new(tail.into_iter().rev().flatten().collect::<Vec<_>>())
            .wrap(Wrap { trim: false });

    let max_scroll = total_lines.saturating_sub(height);
    if usize::from(widget.scroll_offset) > max_scroll {
        widget.scroll_offset = u16::try_from(max_scroll).unwrap_or(u16::MAX);
    }

    // scroll_offset is lines scrolled up from the bottom (0 = at bottom)
    let scroll = max_scroll.saturating_sub(usize::from(widget.scroll_offset));
    let scroll = u16::try_from(scroll).unwrap_or(u16::MAX);

    frame.render_widget(chat_paragraph.scroll((scroll, 0)), chat_chunk);
}

/// Input field with placeholder and cursor, followed by the send button.
fn render_input_row(frame: &mut Frame, widget: &mut ChatWidget, row: Rect) {
    let strings = widget.language.strings();
    let input_focused = widget.focus == Focus::Input;
    let sending = !widget.send_enabled();

    let mut block = Block::default()
        .borders(Borders::TOP | Borders::BOTTOM)
        .border_style(if input_focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    if sending {
        block = block.title(Span::styled(
            format!(" {} ", strings.sending),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let inner = block.inner(row);
    frame.render_widget(block, row);

    let send_label = format!("[ {} ]", strings.send);
    let button_width = (UnicodeWidthStr::width(send_label.as_str()) as u16 + 1).min(inner.width);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(button_width)])
        .split(inner);
    let (field, button) = (cols[0], cols[1]);
    widget.click_targets.input = field;
    widget.click_targets.send_button = button;

    // Scroll the field horizontally so the cursor stays visible.
    widget.input.clamp_cursor();
    let cursor_col = UnicodeWidthStr::width(widget.input.before_cursor()) as u16;
    let visible = field.width.saturating_sub(1);
    let h_scroll = cursor_col.saturating_sub(visible);

    let field_widget = if widget.input.value.is_empty() {
        Paragraph::new(Span::styled(
            widget.input.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Paragraph::new(widget.input.value.clone()).scroll((0, h_scroll))
    };
    frame.render_widget(field_widget, field);

    let button_style = if sending {
        Style::default().fg(Color::DarkGray)
    } else if widget.focus == Focus::SendButton {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {}", send_label), button_style)),
        button,
    );

    if input_focused && field.width > 0 && field.height > 0 {
        let cursor_x = field.x.saturating_add(cursor_col - h_scroll);
        frame.set_cursor_position(Position::new(cursor_x, field.y));
    }
}
