//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! Strictly one event at a time: block on the next input event, dispatch it,
//! redraw. Nothing animates, so there is no poll timeout and no redraw timer.
//!
//! ## Dispatch
//!
//! Routing is mode-first. The same key means different things in Navigation
//! and Entry mode (`q` quits in one and is typed text in the other), so
//! `dispatch` checks the mode before it looks at the key:
//!
//! | Event       | Navigation        | Entry                   |
//! |-------------|-------------------|-------------------------|
//! | `q`         | quit              | typed                   |
//! | Ctrl+C      | quit              | quit                    |
//! | ↑/k, ↓/j    | move cursor       | typed / edit cursor     |
//! | i, a, n     | start entry       | typed                   |
//! | space, x    | toggle            | typed                   |
//! | d, r, u     | delete, all, none | typed                   |
//! | Enter       | -                 | add item, stay in Entry |
//! | Esc         | -                 | discard draft           |
//! | wheel, PgUp | scroll list       | -                       |
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
pub mod event;
pub mod theme;
mod ui;

use log::{debug, info};
use std::io::{self, stdout};

use crossterm::cursor::SetCursorStyle;
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::{ChecklistState, Mode, Viewport};
use crate::tui::component::EventHandler;
use crate::tui::components::{ChecklistViewState, InputBoxState, InputEvent};
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

pub use ui::draw_ui;

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    // Persistent component states
    pub checklist: ChecklistViewState,
    pub input_box: InputBoxState,
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            checklist: ChecklistViewState::new(),
            input_box: InputBoxState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
    }
}

/// Run the interactive checklist until the user quits.
///
/// The terminal is restored on every exit path, including errors.
pub fn run(config: &ResolvedConfig) -> io::Result<()> {
    let theme = Theme::from_palette(&config.palette);
    let mut terminal = ratatui::try_init()?;

    let result = TerminalModeGuard::new().and_then(|_guard| event_loop(&mut terminal, &theme));

    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, theme: &Theme) -> io::Result<()> {
    let size = terminal.size()?;
    let mut app = ChecklistState::with_viewport(Viewport {
        width: size.width,
        height: size.height,
    });
    let mut tui = TuiState::new();
    info!("Checklist started ({}x{})", size.width, size.height);

    loop {
        terminal.draw(|f| ui::draw_ui(f, &app.snapshot(), &mut tui, theme))?;

        let event = loop {
            if let Some(event) = event::next_event()? {
                break event;
            }
        };
        if dispatch(&mut app, &mut tui, &event) == Effect::Quit {
            info!(
                "Quit with {} items ({} completed)",
                app.len(),
                app.progress().completed
            );
            return Ok(());
        }
    }
}

/// Route one input event to the checklist or the presentation state.
pub fn dispatch(app: &mut ChecklistState, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    if let TuiEvent::Resize(width, height) = *event {
        return update(app, Action::Resize { width, height });
    }
    match app.mode() {
        Mode::Navigation => dispatch_navigation(app, tui, event),
        Mode::Entry => dispatch_entry(app, tui, event),
    }
}

fn dispatch_navigation(app: &mut ChecklistState, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    let action = match event {
        TuiEvent::Interrupt | TuiEvent::InputChar('q') => Action::Quit,
        TuiEvent::CursorUp | TuiEvent::InputChar('k') => Action::MoveCursor(-1),
        TuiEvent::CursorDown | TuiEvent::InputChar('j') => Action::MoveCursor(1),
        TuiEvent::InputChar('i' | 'a' | 'n') => {
            tui.input_box.reset();
            Action::EnterEntry
        }
        TuiEvent::InputChar(' ' | 'x') => Action::ToggleCurrent,
        TuiEvent::InputChar('d') => Action::DeleteCurrent,
        TuiEvent::InputChar('r') => Action::CompleteAll,
        TuiEvent::InputChar('u') => Action::UncompleteAll,
        _ => {
            // Everything else belongs to the list viewport
            tui.checklist.handle_event(event);
            return Effect::None;
        }
    };

    if matches!(action, Action::MoveCursor(_) | Action::DeleteCurrent) {
        tui.checklist.follow_cursor();
    }
    update(app, action)
}

fn dispatch_entry(app: &mut ChecklistState, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match event {
        TuiEvent::Escape => {
            tui.input_box.reset();
            tui.checklist.follow_cursor();
            update(app, Action::ExitEntry)
        }
        TuiEvent::Interrupt => update(app, Action::Quit),
        _ => {
            let Some(draft) = app.draft_mut() else {
                return Effect::None;
            };
            match tui.input_box.handle_event(draft, event) {
                Some(InputEvent::Submit) => update(app, Action::CommitDraft),
                Some(other) => {
                    debug!("Input: {:?}", other);
                    Effect::None
                }
                None => Effect::None,
            }
        }
    }
}
