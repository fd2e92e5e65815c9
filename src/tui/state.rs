// ABOUTME: TUI state types — chat messages, the input field, focus, and request state.
// ABOUTME: Plain data owned by ChatWidget; rendering reads it, key handling mutates it.

use chrono::{DateTime, Local};
use ratatui::layout::{Position, Rect};

/// Who authored a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    User,
    Bot,
}

/// A single message in the chat history. Never edited once pushed.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(kind: MessageKind, content: String) -> Self {
        Self {
            kind,
            content,
            timestamp: Local::now(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.kind == MessageKind::User
    }
}

/// Whether a chat request is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Sending,
}

/// Why a send trigger did not start a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendRejected {
    /// The trimmed input was empty.
    EmptyInput,
    /// A request is already in flight.
    InFlight,
}

/// The focusable controls, in Tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    Suggestion(usize),
    SendButton,
    LanguageToggle,
}

/// A clickable suggestion that pre-fills the input with its question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionButton {
    pub label: String,
}

/// Screen areas of the clickable controls, as placed by the last render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClickTargets {
    pub language_toggle: Rect,
    /// Indexed like `ChatWidget::suggestions`; clipped buttons have an empty area.
    pub suggestions: Vec<Rect>,
    pub input: Rect,
    pub send_button: Rect,
}

impl ClickTargets {
    /// The control under a terminal cell, if any.
    pub fn hit(&self, column: u16, row: u16) -> Option<Focus> {
        let pos = Position::new(column, row);
        if self.language_toggle.contains(pos) {
            return Some(Focus::LanguageToggle);
        }
        if let Some(idx) = self.suggestions.iter().position(|r| r.contains(pos)) {
            return Some(Focus::Suggestion(idx));
        }
        if self.send_button.contains(pos) {
            return Some(Focus::SendButton);
        }
        if self.input.contains(pos) {
            return Some(Focus::Input);
        }
        None
    }
}

/// Single-line text input with a placeholder and a character-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub value: String,
    pub placeholder: String,
    pub cursor_pos: usize,
}

impl InputField {
    pub fn new(placeholder: &str) -> Self {
        Self {
            value: String::new(),
            placeholder: placeholder.to_string(),
            cursor_pos: 0,
        }
    }

    /// Replace the value and move the cursor to its end.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor_pos = self.char_len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    /// Return the total number of characters in the value.
    pub fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    /// Clamp the cursor position to the valid character range of the value.
    pub fn clamp_cursor(&mut self) {
        self.cursor_pos = self.cursor_pos.min(self.char_len());
    }

    /// Return the current cursor byte index in the UTF-8 value.
    pub fn cursor_byte_index(&self) -> usize {
        char_index_to_byte_index(&self.value, self.cursor_pos)
    }

    /// Insert a character at the cursor and advance by one character.
    pub fn insert_char(&mut self, c: char) {
        self.clamp_cursor();
        let byte_index = self.cursor_byte_index();
        self.value.insert(byte_index, c);
        self.cursor_pos += 1;
    }

    /// Insert a string at the cursor, dropping line breaks (the field is single-line).
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
            self.insert_char(c);
        }
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos == 0 {
            return;
        }

        let end = self.cursor_byte_index();
        let start = char_index_to_byte_index(&self.value, self.cursor_pos - 1);
        self.value.replace_range(start..end, "");
        self.cursor_pos -= 1;
    }

    /// Delete the character at the cursor.
    pub fn delete(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos >= self.char_len() {
            return;
        }

        let start = self.cursor_byte_index();
        let end = char_index_to_byte_index(&self.value, self.cursor_pos + 1);
        self.value.replace_range(start..end, "");
    }

    pub fn move_left(&mut self) {
        self.clamp_cursor();
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.clamp_cursor();
        if self.cursor_pos < self.char_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.char_len();
    }

    /// The value up to the cursor, used to place the terminal cursor.
    pub fn before_cursor(&self) -> &str {
        &self.value[..self.cursor_byte_index()]
    }
}

fn char_index_to_byte_index(s: &str, char_index: usize) -> usize {
    if char_index == 0 {
        return 0;
    }

    match s.char_indices().nth(char_index) {
        Some((idx, _)) => idx,
        None => s.len(),
    }
}
