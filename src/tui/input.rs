// ABOUTME: Keyboard and mouse handling for the TUI — translates terminal events into widget operations.
// ABOUTME: Enter or a left click activates a control; Tab cycles focus; Ctrl+T toggles the language.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::debug;

use crate::api::ChatRequest;
use crate::tui::state::Focus;
use crate::tui::widget::ChatWidget;

const PAGE_SCROLL_STEP: u16 = 10;
const MOUSE_SCROLL_STEP: u16 = 3;

/// The result of processing a terminal event.
#[derive(Debug, PartialEq)]
pub enum InputResult {
    /// No action needed beyond a redraw.
    None,
    /// A request was started and must be issued.
    Send(ChatRequest),
    /// User wants to quit.
    Quit,
}

/// Process a key event against the widget and return the resulting action.
pub fn handle_key(widget: &mut ChatWidget, key: KeyEvent) -> InputResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    if ctrl && !alt && key.code == KeyCode::Char('c') {
        return InputResult::Quit;
    }
    if ctrl && !alt && key.code == KeyCode::Char('t') {
        widget.toggle_language();
        return InputResult::None;
    }
    // Ctrl or Alt chords are not text. Ctrl+Alt together is AltGr on some
    // platforms and types characters such as '@' on French layouts.
    if ctrl != alt && matches!(key.code, KeyCode::Char(_)) {
        return InputResult::None;
    }

    match key.code {
        KeyCode::Esc => InputResult::Quit,
        KeyCode::Tab => {
            widget.focus_next();
            InputResult::None
        }
        KeyCode::BackTab => {
            widget.focus_prev();
            InputResult::None
        }
        KeyCode::PageUp => {
            widget.scroll_up(PAGE_SCROLL_STEP);
            InputResult::None
        }
        KeyCode::PageDown => {
            widget.scroll_down(PAGE_SCROLL_STEP);
            InputResult::None
        }
        KeyCode::Up => {
            widget.scroll_up(1);
            InputResult::None
        }
        KeyCode::Down => {
            widget.scroll_down(1);
            InputResult::None
        }
        KeyCode::Enter => activate_focused(widget),
        _ => handle_edit_key(widget, key),
    }
}

/// Process a mouse event: the wheel scrolls the chat panel and a left click
/// activates the control under the pointer.
pub fn handle_mouse(widget: &mut ChatWidget, mouse: MouseEvent) -> InputResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => widget.scroll_up(MOUSE_SCROLL_STEP),
        MouseEventKind::ScrollDown => widget.scroll_down(MOUSE_SCROLL_STEP),
        MouseEventKind::Down(MouseButton::Left) => {
            match widget.click_targets.hit(mouse.column, mouse.row) {
                Some(Focus::Input) => widget.focus = Focus::Input,
                Some(target) => {
                    widget.focus = target;
                    return activate_focused(widget);
                }
                None => {}
            }
        }
        _ => {}
    }
    InputResult::None
}

/// Insert pasted text into the input field.
pub fn handle_paste(widget: &mut ChatWidget, text: &str) -> InputResult {
    widget.focus = Focus::Input;
    widget.input.insert_str(text);
    InputResult::None
}

/// Enter pressed: activate whichever control has focus.
fn activate_focused(widget: &mut ChatWidget) -> InputResult {
    match widget.focus {
        Focus::Input | Focus::SendButton => match widget.begin_send() {
            Ok(request) => InputResult::Send(request),
            Err(reason) => {
                debug!(?reason, "send ignored");
                InputResult::None
            }
        },
        Focus::Suggestion(idx) => {
            widget.activate_suggestion(idx);
            InputResult::None
        }
        Focus::LanguageToggle => {
            widget.toggle_language();
            InputResult::None
        }
    }
}

/// Text editing keys. Typing while a button has focus moves focus back to the input.
fn handle_edit_key(widget: &mut ChatWidget, key: KeyEvent) -> InputResult {
    let editing = matches!(
        key.code,
        KeyCode::Char(_)
            | KeyCode::Backspace
            | KeyCode::Delete
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Home
            | KeyCode::End
    );
    if !editing {
        return InputResult::None;
    }
    widget.focus = Focus::Input;

    let input = &mut widget.input;
    match key.code {
        KeyCode::Char(c) => input.insert_char(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => {}
    }
    InputResult::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::tui::state::ClickTargets;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(widget: &mut ChatWidget, text: &str) {
        for c in text.chars() {
            handle_key(widget, key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_then_enter_sends() {
        let mut widget = ChatWidget::default();
        type_text(&mut widget, "bonjour");
        let result = handle_key(&mut widget, key(KeyCode::Enter));
        assert_eq!(
            result,
            InputResult::Send(ChatRequest {
                question: "bonjour".to_string(),
                lang: Language::Fr,
            })
        );
        assert_eq!(widget.input.value, "");
    }

    #[test]
    fn enter_on_empty_input_does_nothing() {
        let mut widget = ChatWidget::default();
        type_text(&mut widget, "   ");
        assert_eq!(handle_key(&mut widget, key(KeyCode::Enter)), InputResult::None);
        assert_eq!(widget.messages.len(), 1);
    }

    #[test]
    fn enter_while_sending_is_rejected() {
        let mut widget = ChatWidget::default();
        type_text(&mut widget, "one");
        handle_key(&mut widget, key(KeyCode::Enter));
        type_text(&mut widget, "two");
        assert_eq!(handle_key(&mut widget, key(KeyCode::Enter)), InputResult::None);
        assert_eq!(widget.input.value, "two");
    }

    #[test]
    fn enter_on_send_button_sends() {
        let mut widget = ChatWidget::default();
        type_text(&mut widget, "hi");
        widget.focus = Focus::SendButton;
        assert!(matches!(
            handle_key(&mut widget, key(KeyCode::Enter)),
            InputResult::Send(_)
        ));
    }

    #[test]
    fn enter_on_suggestion_fills_input() {
        let mut widget = ChatWidget::default();
        handle_key(&mut widget, key(KeyCode::Tab));
        handle_key(&mut widget, key(KeyCode::Tab));
        assert_eq!(widget.focus, Focus::Suggestion(1));
        assert_eq!(handle_key(&mut widget, key(KeyCode::Enter)), InputResult::None);
        assert_eq!(widget.input.value, "Qui est éligible ?");
        assert_eq!(widget.focus, Focus::Input);
    }

    #[test]
    fn enter_on_toggle_switches_language() {
        let mut widget = ChatWidget::default();
        widget.focus = Focus::LanguageToggle;
        handle_key(&mut widget, key(KeyCode::Enter));
        assert_eq!(widget.language, Language::En);
    }

    #[test]
    fn ctrl_t_toggles_language() {
        let mut widget = ChatWidget::default();
        handle_key(&mut widget, ctrl('t'));
        assert_eq!(widget.language, Language::En);
        assert_eq!(widget.input.value, "");
    }

    #[test]
    fn quit_keys() {
        let mut widget = ChatWidget::default();
        assert_eq!(handle_key(&mut widget, key(KeyCode::Esc)), InputResult::Quit);
        assert_eq!(handle_key(&mut widget, ctrl('c')), InputResult::Quit);
    }

    #[test]
    fn ctrl_q_is_ignored() {
        let mut widget = ChatWidget::default();
        assert_eq!(handle_key(&mut widget, ctrl('q')), InputResult::None);
        assert_eq!(widget.input.value, "");
    }

    #[test]
    fn alt_chords_are_not_inserted() {
        let mut widget = ChatWidget::default();
        handle_key(&mut widget, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(widget.input.value, "");
    }

    #[test]
    fn altgr_characters_are_typed() {
        let mut widget = ChatWidget::default();
        let altgr = KeyModifiers::CONTROL | KeyModifiers::ALT;
        handle_key(&mut widget, KeyEvent::new(KeyCode::Char('@'), altgr));
        assert_eq!(widget.input.value, "@");
    }

    fn targets() -> ClickTargets {
        ClickTargets {
            language_toggle: Rect::new(16, 0, 11, 1),
            suggestions: vec![
                Rect::new(0, 10, 20, 1),
                Rect::new(21, 10, 20, 1),
                Rect::new(42, 10, 20, 1),
            ],
            input: Rect::new(0, 12, 60, 1),
            send_button: Rect::new(60, 12, 12, 1),
        }
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn clicking_a_suggestion_fills_input() {
        let mut widget = ChatWidget::default();
        widget.click_targets = targets();
        assert_eq!(handle_mouse(&mut widget, click(25, 10)), InputResult::None);
        assert_eq!(widget.input.value, "Qui est éligible ?");
        assert_eq!(widget.focus, Focus::Input);
        assert_eq!(widget.messages.len(), 1);
    }

    #[test]
    fn clicking_send_starts_request() {
        let mut widget = ChatWidget::default();
        widget.click_targets = targets();
        type_text(&mut widget, "bonjour");
        assert_eq!(
            handle_mouse(&mut widget, click(65, 12)),
            InputResult::Send(ChatRequest {
                question: "bonjour".to_string(),
                lang: Language::Fr,
            })
        );
        assert!(!widget.send_enabled());
    }

    #[test]
    fn clicking_send_while_sending_is_rejected() {
        let mut widget = ChatWidget::default();
        widget.click_targets = targets();
        type_text(&mut widget, "one");
        handle_mouse(&mut widget, click(65, 12));
        type_text(&mut widget, "two");
        assert_eq!(handle_mouse(&mut widget, click(65, 12)), InputResult::None);
        assert_eq!(widget.input.value, "two");
    }

    #[test]
    fn clicking_the_toggle_switches_language() {
        let mut widget = ChatWidget::default();
        widget.click_targets = targets();
        handle_mouse(&mut widget, click(20, 0));
        assert_eq!(widget.language, Language::En);
        assert_eq!(widget.suggestions[0].label, "What is RDSP?");
    }

    #[test]
    fn clicking_input_only_focuses_it() {
        let mut widget = ChatWidget::default();
        widget.click_targets = targets();
        type_text(&mut widget, "draft");
        widget.focus = Focus::SendButton;
        assert_eq!(handle_mouse(&mut widget, click(3, 12)), InputResult::None);
        assert_eq!(widget.focus, Focus::Input);
        assert_eq!(widget.input.value, "draft");
        assert!(widget.send_enabled());
    }

    #[test]
    fn clicking_empty_space_does_nothing() {
        let mut widget = ChatWidget::default();
        widget.click_targets = targets();
        assert_eq!(handle_mouse(&mut widget, click(5, 5)), InputResult::None);
        assert_eq!(widget.language, Language::Fr);
        assert_eq!(widget.input.value, "");
    }

    #[test]
    fn typing_on_a_button_refocuses_input() {
        let mut widget = ChatWidget::default();
        widget.focus = Focus::SendButton;
        type_text(&mut widget, "x");
        assert_eq!(widget.focus, Focus::Input);
        assert_eq!(widget.input.value, "x");
    }

    #[test]
    fn scroll_keys_adjust_offset() {
        let mut widget = ChatWidget::default();
        handle_key(&mut widget, key(KeyCode::PageUp));
        assert_eq!(widget.scroll_offset, 10);
        handle_key(&mut widget, key(KeyCode::Down));
        assert_eq!(widget.scroll_offset, 9);
        handle_key(&mut widget, key(KeyCode::PageDown));
        assert_eq!(widget.scroll_offset, 0);
    }

    #[test]
    fn paste_inserts_single_line() {
        let mut widget = ChatWidget::default();
        widget.focus = Focus::LanguageToggle;
        handle_paste(&mut widget, "What is\nRDSP?");
        assert_eq!(widget.input.value, "What isRDSP?");
        assert_eq!(widget.focus, Focus::Input);
    }
}
