//! # Actions
//!
//! Every change to the checklist becomes an `Action`.
//! User presses `x`? That's `Action::ToggleCurrent`.
//! Terminal resized? That's `Action::Resize { .. }`.
//!
//! The `update()` function takes the current state and an action, applies
//! it, and tells the caller what to do next. No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Every action is logged, so a session can be replayed from the log.

use log::debug;

use crate::core::state::ChecklistState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    MoveCursor(isize),
    ToggleCurrent,
    DeleteCurrent,
    CompleteAll,
    UncompleteAll,
    EnterEntry,
    /// Cancel composing; the draft is discarded.
    ExitEntry,
    /// Add the draft as an item and keep composing.
    CommitDraft,
    Resize { width: u16, height: u16 },
    Quit,
}

/// What the event loop should do after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(state: &mut ChecklistState, action: Action) -> Effect {
    debug!("Action: {:?}", action);
    match action {
        Action::MoveCursor(delta) => state.move_cursor(delta),
        Action::ToggleCurrent => state.toggle_completion(state.cursor()),
        Action::DeleteCurrent => state.delete_item(state.cursor()),
        Action::CompleteAll => state.complete_all(),
        Action::UncompleteAll => state.uncomplete_all(),
        Action::EnterEntry => state.enter_entry_mode(),
        Action::ExitEntry => state.exit_entry_mode(),
        Action::CommitDraft => state.commit_draft(),
        Action::Resize { width, height } => state.set_viewport(width, height),
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::{Mode, Viewport};
    use crate::test_support::{checklist, texts};
    use std::collections::BTreeSet;

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut state = checklist(&["a"]);
        assert_eq!(update(&mut state, Action::Quit), Effect::Quit);
        assert_eq!(state.len(), 1);
    }

    #[test]
    fn test_toggle_and_delete_act_on_cursor() {
        let mut state = checklist(&["a", "b", "c"]);
        update(&mut state, Action::MoveCursor(1));
        assert_eq!(update(&mut state, Action::ToggleCurrent), Effect::None);
        assert_eq!(state.completed_indices(), BTreeSet::from([1]));

        update(&mut state, Action::DeleteCurrent);
        assert_eq!(texts(&state), vec!["a", "c"]);
        assert!(state.completed_indices().is_empty());
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_toggle_on_empty_list_is_noop() {
        let mut state = checklist(&[]);
        assert_eq!(update(&mut state, Action::ToggleCurrent), Effect::None);
        assert_eq!(update(&mut state, Action::DeleteCurrent), Effect::None);
        assert!(state.is_empty());
    }

    #[test]
    fn test_entry_round_trip() {
        let mut state = checklist(&[]);
        update(&mut state, Action::EnterEntry);
        state.draft_mut().unwrap().push_str("Buy milk");
        update(&mut state, Action::CommitDraft);

        assert_eq!(texts(&state), vec!["Buy milk"]);
        assert_eq!(state.draft(), "");
        assert_eq!(state.mode(), Mode::Entry);

        update(&mut state, Action::ExitEntry);
        assert_eq!(state.mode(), Mode::Navigation);
    }

    #[test]
    fn test_complete_then_uncomplete_all() {
        let mut state = checklist(&["a", "b"]);
        update(&mut state, Action::CompleteAll);
        assert_eq!(state.completed_indices(), BTreeSet::from([0, 1]));
        update(&mut state, Action::UncompleteAll);
        assert!(state.completed_indices().is_empty());
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut state = checklist(&[]);
        update(
            &mut state,
            Action::Resize {
                width: 100,
                height: 30,
            },
        );
        assert_eq!(
            state.viewport(),
            Viewport {
                width: 100,
                height: 30
            }
        );
    }
}
