//! # Checklist State
//!
//! The single mutable entity of pancake. Domain logic only, no terminal
//! types. Presentation state (scroll offsets, edit cursor) lives in the `tui`
//! module.
//!
//! ```text
//! ChecklistState
//! ├── items: Vec<Item>            // ordered entries, duplicates allowed
//! ├── completed: HashSet<ItemId>  // ids of completed items
//! ├── next_id: u64                // id counter, never reused
//! ├── cursor: usize               // highlighted row
//! ├── mode: Mode                  // Navigation | Entry
//! ├── draft: String               // text being composed (Entry only)
//! └── viewport: Viewport          // last reported terminal size
//! ```
//!
//! Completion is keyed by a stable [`ItemId`] handed out when an item is
//! added, so deleting a row can never shift another row's completion flag.
//! Callers that want positions use [`ChecklistState::completed_indices`].
//!
//! Every operation is total: out-of-range indices and empty lists are silent
//! no-ops. Inputs come from our own key table, never from untrusted data.

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

/// Stable identity of an item. Issued by `add_item`, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub text: String,
}

/// Which key table is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys move the cursor and run list commands.
    #[default]
    Navigation,
    /// Keys edit the draft of a new item.
    Entry,
}

/// Terminal size as last reported. Advisory: only used for layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// Completed-vs-total counts for the progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    /// Completion percentage rounded half to even (12.5 shows as 12), 0 for
    /// an empty list.
    pub fn percent(&self) -> u16 {
        if self.total == 0 {
            return 0;
        }
        let scaled = self.completed * 100;
        let (quotient, remainder) = (scaled / self.total, scaled % self.total);
        let rounded = match (2 * remainder).cmp(&self.total) {
            Ordering::Greater => quotient + 1,
            Ordering::Equal if quotient % 2 == 1 => quotient + 1,
            _ => quotient,
        };
        rounded as u16
    }
}

/// One row as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemView<'a> {
    pub text: &'a str,
    pub completed: bool,
}

/// Read-only view of the whole state, built once per frame.
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub items: Vec<ItemView<'a>>,
    pub cursor: usize,
    pub mode: Mode,
    pub draft: &'a str,
    pub viewport: Viewport,
    pub progress: Progress,
}

#[derive(Debug, Default)]
pub struct ChecklistState {
    items: Vec<Item>,
    completed: HashSet<ItemId>,
    next_id: u64,
    cursor: usize,
    mode: Mode,
    draft: String,
    viewport: Viewport,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport(viewport: Viewport) -> Self {
        Self {
            viewport,
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_completed(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(|item| self.completed.contains(&item.id))
    }

    /// Positions of the completed items, in list order.
    pub fn completed_indices(&self) -> BTreeSet<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.completed.contains(&item.id))
            .map(|(index, _)| index)
            .collect()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.completed.len(),
            total: self.items.len(),
        }
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            items: self
                .items
                .iter()
                .map(|item| ItemView {
                    text: &item.text,
                    completed: self.completed.contains(&item.id),
                })
                .collect(),
            cursor: self.cursor,
            mode: self.mode,
            draft: &self.draft,
            viewport: self.viewport,
            progress: self.progress(),
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Append `text` (trimmed). Blank text is ignored.
    pub fn add_item(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(Item {
            id,
            text: text.to_string(),
        });
    }

    pub fn toggle_completion(&mut self, index: usize) {
        let Some(item) = self.items.get(index) else {
            return;
        };
        if !self.completed.remove(&item.id) {
            self.completed.insert(item.id);
        }
    }

    /// Remove the item at `index`, drop its completion flag and clamp the
    /// cursor, all in one step.
    pub fn delete_item(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        let removed = self.items.remove(index);
        self.completed.remove(&removed.id);
        self.clamp_cursor();
    }

    pub fn complete_all(&mut self) {
        self.completed = self.items.iter().map(|item| item.id).collect();
    }

    pub fn uncomplete_all(&mut self) {
        self.completed.clear();
    }

    /// Move the cursor by `delta`, saturating at both ends of the list.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.items.is_empty() {
            self.cursor = 0;
            return;
        }
        let last = self.items.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn enter_entry_mode(&mut self) {
        self.mode = Mode::Entry;
        self.draft.clear();
    }

    /// Leave Entry mode, discarding the draft.
    pub fn exit_entry_mode(&mut self) {
        self.mode = Mode::Navigation;
        self.draft.clear();
    }

    /// Add the draft as a new item and clear it. Mode is left alone.
    pub fn commit_draft(&mut self) {
        let draft = std::mem::take(&mut self.draft);
        self.add_item(&draft);
    }

    /// The draft, writable only while composing.
    pub fn draft_mut(&mut self) -> Option<&mut String> {
        match self.mode {
            Mode::Entry => Some(&mut self.draft),
            Mode::Navigation => None,
        }
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = Viewport { width, height };
    }

    fn clamp_cursor(&mut self) {
        self.cursor = match self.items.len() {
            0 => 0,
            len => self.cursor.min(len - 1),
        };
    }
}
