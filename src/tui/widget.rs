// ABOUTME: ChatWidget — the whole application state and every chat operation.
// ABOUTME: Language, history, input, suggestions, and the single-slot request guard live here.

use tracing::{error, info};

use crate::api::{ChatClient, ChatError, ChatReply, ChatRequest};
use crate::i18n::Language;
use crate::tui::state::{
    ChatMessage, ClickTargets, Focus, InputField, MessageKind, RequestState, SendRejected,
    SuggestionButton,
};

/// Application state for the bilingual chat panel.
///
/// Rendering functions take `&ChatWidget` and derive everything they draw from
/// it, so a language switch or a new message shows up on the next frame.
#[derive(Debug)]
pub struct ChatWidget {
    pub language: Language,
    pub messages: Vec<ChatMessage>,
    pub input: InputField,
    pub suggestion_label: String,
    pub suggestions: Vec<SuggestionButton>,
    pub request_state: RequestState,
    pub focus: Focus,
    /// Lines scrolled up from the bottom of the chat panel (0 = pinned to bottom).
    pub scroll_offset: u16,
    /// Where the clickable controls were last drawn.
    pub click_targets: ClickTargets,
}

impl ChatWidget {
    /// Create the widget: welcome message, suggestions, empty focused input.
    pub fn new(language: Language) -> Self {
        let strings = language.strings();
        let mut widget = Self {
            language,
            messages: Vec::new(),
            input: InputField::new(strings.placeholder),
            suggestion_label: strings.suggestion_label.to_string(),
            suggestions: Vec::new(),
            request_state: RequestState::Idle,
            focus: Focus::Input,
            scroll_offset: 0,
            click_targets: ClickTargets::default(),
        };
        widget.push_message(MessageKind::Bot, strings.welcome.to_string());
        widget.update_suggestions();
        widget
    }

    /// Append a message to the history and scroll to the bottom.
    pub fn push_message(&mut self, kind: MessageKind, content: String) {
        self.messages.push(ChatMessage::new(kind, content));
        self.scroll_offset = 0;
    }

    /// Whether the send control accepts activation.
    pub fn send_enabled(&self) -> bool {
        self.request_state == RequestState::Idle
    }

    /// Start sending the current input.
    ///
    /// On success the user message is already in the history, the input is
    /// cleared, and the widget is `Sending` until [`ChatWidget::finish_send`].
    pub fn begin_send(&mut self) -> Result<ChatRequest, SendRejected> {
        if self.request_state == RequestState::Sending {
            return Err(SendRejected::InFlight);
        }
        let question = self.input.value.trim().to_string();
        if question.is_empty() {
            return Err(SendRejected::EmptyInput);
        }

        self.push_message(MessageKind::User, question.clone());
        self.input.clear();
        self.request_state = RequestState::Sending;

        Ok(ChatRequest {
            question,
            lang: self.language,
        })
    }

    /// Apply the outcome of the in-flight request and return to `Idle`.
    pub fn finish_send(&mut self, result: Result<ChatReply, ChatError>) {
        match result {
            Ok(reply) => self.push_message(MessageKind::Bot, reply.response),
            Err(e) => {
                error!(kind = e.kind(), error = %e, "API Error");
                let message = self.language.strings().error.to_string();
                self.push_message(MessageKind::Bot, message);
            }
        }
        self.request_state = RequestState::Idle;
        self.focus = Focus::Input;
    }

    /// Send the current input through `client` and wait for the reply.
    ///
    /// Performs exactly one request. Rejected triggers leave the widget untouched.
    pub async fn send_message(&mut self, client: &dyn ChatClient) -> Result<(), SendRejected> {
        let request = self.begin_send()?;
        let result = client.ask(&request).await;
        self.finish_send(result);
        Ok(())
    }

    /// Switch between French and English. Message history is not touched.
    pub fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        let strings = self.language.strings();
        self.input.placeholder = strings.placeholder.to_string();
        self.suggestion_label = strings.suggestion_label.to_string();
        self.update_suggestions();
        info!(lang = %self.language, "language switched");
    }

    /// Rebuild the suggestion buttons from the current language's questions.
    pub fn update_suggestions(&mut self) {
        self.suggestions.clear();
        self.suggestions.extend(
            self.language
                .suggestions()
                .iter()
                .map(|q| SuggestionButton {
                    label: q.to_string(),
                }),
        );
        if let Focus::Suggestion(idx) = self.focus {
            if idx >= self.suggestions.len() {
                self.focus = Focus::Input;
            }
        }
    }

    /// Pre-fill the input with `text` and focus it. Does not send.
    pub fn insert_question(&mut self, text: &str) {
        self.input.set_value(text);
        self.focus = Focus::Input;
    }

    /// Activate the suggestion button at `index`, if it exists.
    pub fn activate_suggestion(&mut self, index: usize) {
        if let Some(label) = self.suggestions.get(index).map(|b| b.label.clone()) {
            self.insert_question(&label);
        }
    }

    /// Move focus to the next control in Tab order.
    pub fn focus_next(&mut self) {
        let count = self.suggestions.len();
        self.focus = match self.focus {
            Focus::Input if count > 0 => Focus::Suggestion(0),
            Focus::Input => Focus::SendButton,
            Focus::Suggestion(idx) if idx + 1 < count => Focus::Suggestion(idx + 1),
            Focus::Suggestion(_) => Focus::SendButton,
            Focus::SendButton => Focus::LanguageToggle,
            Focus::LanguageToggle => Focus::Input,
        };
    }

    /// Move focus to the previous control in Tab order.
    pub fn focus_prev(&mut self) {
        let count = self.suggestions.len();
        self.focus = match self.focus {
            Focus::Input => Focus::LanguageToggle,
            Focus::Suggestion(0) => Focus::Input,
            Focus::Suggestion(idx) => Focus::Suggestion(idx - 1),
            Focus::SendButton if count > 0 => Focus::Suggestion(count - 1),
            Focus::SendButton => Focus::Input,
            Focus::LanguageToggle => Focus::SendButton,
        };
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
    }
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
