//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::core::state::ChecklistState;

/// Creates a checklist holding `items`, cursor on the first row.
pub fn checklist(items: &[&str]) -> ChecklistState {
    let mut state = ChecklistState::new();
    for item in items {
        state.add_item(item);
    }
    state
}

/// The item texts, in order.
pub fn texts(state: &ChecklistState) -> Vec<&str> {
    state.items().iter().map(|item| item.text.as_str()).collect()
}

/// Checks the cursor and completion invariants that must hold after every event.
pub fn assert_invariants(state: &ChecklistState) {
    let len = state.len();
    assert!(
        state.completed_indices().iter().all(|&index| index < len),
        "completed index out of range: {:?} (len {len})",
        state.completed_indices()
    );
    if len == 0 {
        assert_eq!(state.cursor(), 0, "cursor must be 0 on an empty list");
    } else {
        assert!(state.cursor() < len, "cursor {} out of range (len {len})", state.cursor());
    }
}

/// Flattens a `TestBackend` buffer into one string for `contains` checks,
/// one line per buffer row so matches never span two rows.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let width = usize::from(buffer.area.width).max(1);
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    #[test]
    fn buffer_text_keeps_rows_apart() {
        let mut buffer = Buffer::empty(Rect::new(0, 0, 3, 2));
        buffer.set_string(0, 0, "abc", ratatui::style::Style::default());
        buffer.set_string(0, 1, "def", ratatui::style::Style::default());

        let text = buffer_text(&buffer);
        assert_eq!(text, "abc\ndef");
        assert!(!text.contains("cd"));
    }
}
