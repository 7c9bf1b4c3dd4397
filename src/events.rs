//! Keybindings: Ctrl+P preview, Ctrl+S publish, Ctrl+T themes, Ctrl+Q quit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use crate::actions::Action;
use crate::state::Mode;

pub const TICK_RATE: Duration = Duration::from_millis(80);

pub fn key_to_action(event: &KeyEvent, mode: &Mode, picker_visible: bool) -> Option<Action> {
    // Accept Press and Repeat (hold key); ignore Release so we don't double-handle.
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let (code, mods) = (event.code, event.modifiers);

    if code == KeyCode::Char('q') && mods.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    // The preview overlay swallows everything: scroll and open keys work,
    // any other key closes it (the outside-click of a terminal).
    if mode.is_previewing() {
        return Some(match (code, mods) {
            (KeyCode::Up, _) => Action::PreviewScrollUp,
            (KeyCode::Down, _) => Action::PreviewScrollDown,
            (KeyCode::PageUp, _) => Action::PreviewScrollPageUp,
            (KeyCode::PageDown, _) => Action::PreviewScrollPageDown,
            (KeyCode::Char('o'), m) if m.is_empty() => Action::OpenPreviewInBrowser,
            _ => Action::ClosePreview,
        });
    }

    if picker_visible {
        return match code {
            KeyCode::Esc => Some(Action::PickerHide),
            KeyCode::Up => Some(Action::PickerUp),
            KeyCode::Down => Some(Action::PickerDown),
            KeyCode::Enter | KeyCode::Tab => Some(Action::PickerSelect),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Char(c) if !mods.contains(KeyModifiers::CONTROL) => Some(Action::Char(c)),
            _ => None,
        };
    }

    if mods.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('p') => Some(Action::Preview),
            KeyCode::Char('s') => Some(Action::Publish),
            KeyCode::Char('t') => Some(Action::PickerShow),
            _ => None,
        };
    }

    match code {
        KeyCode::Esc => Some(Action::DismissNotice),
        KeyCode::Enter => Some(Action::Newline),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Left => Some(Action::CursorLeft),
        KeyCode::Right => Some(Action::CursorRight),
        KeyCode::Up => Some(Action::CursorUp),
        KeyCode::Down => Some(Action::CursorDown),
        KeyCode::Home => Some(Action::CursorHome),
        KeyCode::End => Some(Action::CursorEnd),
        // Allow Alt for accented characters; Ctrl/Cmd chords were handled above.
        KeyCode::Char(c) if !mods.contains(KeyModifiers::SUPER) => Some(Action::Char(c)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn ctrl_p_previews_while_editing() {
        let action = key_to_action(
            &key(KeyCode::Char('p'), KeyModifiers::CONTROL),
            &Mode::Editing,
            false,
        );
        assert_eq!(action, Some(Action::Preview));
    }

    #[test]
    fn plain_chars_go_to_the_editor() {
        let action = key_to_action(&key(KeyCode::Char('p'), KeyModifiers::NONE), &Mode::Editing, false);
        assert_eq!(action, Some(Action::Char('p')));
    }

    #[test]
    fn any_key_closes_the_preview() {
        let previewing = Mode::Previewing { document: String::new(), scroll: 0 };
        let action = key_to_action(&key(KeyCode::Char('x'), KeyModifiers::NONE), &previewing, false);
        assert_eq!(action, Some(Action::ClosePreview));
    }

    #[test]
    fn o_opens_the_preview_in_a_browser() {
        let previewing = Mode::Previewing { document: String::new(), scroll: 0 };
        let action = key_to_action(&key(KeyCode::Char('o'), KeyModifiers::NONE), &previewing, false);
        assert_eq!(action, Some(Action::OpenPreviewInBrowser));
    }

    #[test]
    fn release_events_are_ignored() {
        let event =
            KeyEvent::new_with_kind(KeyCode::Char('a'), KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(key_to_action(&event, &Mode::Editing, false), None);
    }

    #[test]
    fn picker_captures_typing() {
        let action = key_to_action(&key(KeyCode::Char('r'), KeyModifiers::NONE), &Mode::Editing, true);
        assert_eq!(action, Some(Action::Char('r')));
        let action = key_to_action(&key(KeyCode::Enter, KeyModifiers::NONE), &Mode::Editing, true);
        assert_eq!(action, Some(Action::PickerSelect));
    }
}
