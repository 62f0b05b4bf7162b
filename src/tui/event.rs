use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

/// TUI-specific input events.
///
/// Key identity only. What a key *means* depends on the mode and is decided
/// by the dispatcher in `tui::dispatch`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// Ctrl+C, quits from any mode
    Interrupt,
    Escape,
    Submit,

    InputChar(char),
    Paste(String), // Bracketed paste
    Backspace,
    Delete,
    DeleteWordBack, // Ctrl+W
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    WordLeft,  // Ctrl+Left
    WordRight, // Ctrl+Right
    CursorHome,
    CursorEnd,

    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,

    Resize(u16, u16),
}

/// Block until the next event we care about arrives.
///
/// Events with no `TuiEvent` counterpart (key releases, focus, mouse moves)
/// come back as `None` so the caller can keep waiting.
pub fn next_event() -> io::Result<Option<TuiEvent>> {
    Ok(translate(event::read()?))
}

pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => translate_key(key_event),
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
            MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
            _ => None,
        },
        Event::Paste(data) => Some(TuiEvent::Paste(data)),
        Event::Resize(width, height) => Some(TuiEvent::Resize(width, height)),
        _ => None,
    }
}

fn translate_key(key_event: KeyEvent) -> Option<TuiEvent> {
    // Some terminals (and Windows) also report releases and repeats
    if key_event.kind != KeyEventKind::Press {
        return None;
    }
    log::debug!(
        "Key event: {:?} with modifiers {:?}",
        key_event.code,
        key_event.modifiers
    );
    match (key_event.modifiers, key_event.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Interrupt),
        (KeyModifiers::CONTROL, KeyCode::Char('w')) => Some(TuiEvent::DeleteWordBack),
        (KeyModifiers::CONTROL, KeyCode::Left) => Some(TuiEvent::WordLeft),
        (KeyModifiers::CONTROL, KeyCode::Right) => Some(TuiEvent::WordRight),
        // Other control chords are not text
        (modifiers, KeyCode::Char(_)) if modifiers.contains(KeyModifiers::CONTROL) => None,
        (_, KeyCode::Char(c)) => Some(TuiEvent::InputChar(c)),
        (_, KeyCode::Backspace) => Some(TuiEvent::Backspace),
        (_, KeyCode::Delete) => Some(TuiEvent::Delete),
        (_, KeyCode::Enter) => Some(TuiEvent::Submit),
        (_, KeyCode::Esc) => Some(TuiEvent::Escape),
        (_, KeyCode::Up) => Some(TuiEvent::CursorUp),
        (_, KeyCode::Down) => Some(TuiEvent::CursorDown),
        (_, KeyCode::Left) => Some(TuiEvent::CursorLeft),
        (_, KeyCode::Right) => Some(TuiEvent::CursorRight),
        (_, KeyCode::Home) => Some(TuiEvent::CursorHome),
        (_, KeyCode::End) => Some(TuiEvent::CursorEnd),
        (_, KeyCode::PageUp) => Some(TuiEvent::ScrollPageUp),
        (_, KeyCode::PageDown) => Some(TuiEvent::ScrollPageDown),
        _ => None,
    }
}
