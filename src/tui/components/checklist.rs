//! # ChecklistView Component
//!
//! Scrollable view of the checklist rows.
//!
//! ## Responsibilities
//!
//! - Display every item with its checkbox, and the cursor marker in
//!   Navigation mode
//! - Keep the cursor row on screen while it moves
//! - Let the wheel and page keys scroll freely without moving the cursor
//!
//! ## Architecture
//!
//! `ChecklistView` is a transient component (created each frame) that wraps
//! `&'a mut ChecklistViewState` (persistent state) and the snapshot rows
//! (props). Row heights are measured during render, so the scroll math
//! always matches the current terminal width.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::ItemView;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::item_row::ItemRow;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

/// Scroll state for the checklist.
/// Must be persisted in the parent TuiState.
#[derive(Debug)]
pub struct ChecklistViewState {
    /// Scroll offset and view state
    pub scroll_state: ScrollViewState,
    /// Row measurements from the last render
    pub layout: LayoutCache,
    /// When true, the next render scrolls the cursor row into view
    pub follow_cursor: bool,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
}

impl Default for ChecklistViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChecklistViewState {
    pub fn new() -> Self {
        Self {
            scroll_state: ScrollViewState::default(),
            layout: LayoutCache::default(),
            follow_cursor: true,
            viewport_height: 0,
        }
    }

    /// Re-attach the viewport to the cursor. Called after cursor moves.
    pub fn follow_cursor(&mut self) {
        self.follow_cursor = true;
    }

    fn max_offset(&self) -> u16 {
        self.layout.total_height().saturating_sub(self.viewport_height)
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.max_offset();
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }

    /// Scroll the viewport so row `idx` is fully visible.
    /// If the row is taller than the viewport, align its top edge.
    pub fn scroll_to_row(&mut self, idx: usize) {
        let Some(&item_bottom) = self.layout.prefix_heights.get(idx) else {
            return;
        };
        let item_top = item_bottom - self.layout.heights[idx];
        let offset_y = self.scroll_state.offset().y;

        if item_top < offset_y {
            self.scroll_state.set_offset(Position { x: 0, y: item_top });
        } else if item_bottom > offset_y + self.viewport_height {
            let new_y = item_bottom
                .saturating_sub(self.viewport_height)
                .min(item_top);
            self.scroll_state.set_offset(Position { x: 0, y: new_y });
        }
    }
}

/// Scrollable checklist component.
/// Created fresh each frame with references to state and data.
pub struct ChecklistView<'a> {
    pub state: &'a mut ChecklistViewState,
    pub items: &'a [ItemView<'a>],
    /// Row to mark with the cursor, `None` outside Navigation mode
    pub cursor: Option<usize>,
    pub theme: &'a Theme,
}

impl<'a> ChecklistView<'a> {
    pub fn new(
        state: &'a mut ChecklistViewState,
        items: &'a [ItemView<'a>],
        cursor: Option<usize>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            state,
            items,
            cursor,
            theme,
        }
    }
}

impl Component for ChecklistView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area

        // 1. Measure rows
        self.state.layout.rebuild(self.items, content_width);
        self.state.viewport_height = area.height;

        // 2. Position the viewport
        if self.state.follow_cursor
            && let Some(cursor) = self.cursor
        {
            self.state.scroll_to_row(cursor);
        }
        self.state.clamp_scroll();

        let scroll_offset = self.state.scroll_state.offset().y;
        let visible_range = self.state.layout.visible_range(scroll_offset, area.height);

        // 3. Render visible rows into a ScrollView
        let mut scroll_view =
            ScrollView::new(Size::new(content_width, self.state.layout.total_height()))
                .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
                .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset = self.state.layout.top_of(visible_range.start);
        for i in visible_range {
            let height = self.state.layout.heights[i];
            let row = ItemRow::new(self.items[i], self.cursor == Some(i), self.theme);
            scroll_view.render_widget(row, Rect::new(0, y_offset, content_width, height));
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

/// Manual scrolling detaches the viewport from the cursor until the cursor
/// moves again.
impl EventHandler for ChecklistViewState {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::CursorHome => self.scroll_state.scroll_to_top(),
            TuiEvent::CursorEnd => self.scroll_state.set_offset(Position {
                x: 0,
                y: self.max_offset(),
            }),
            _ => return None,
        }
        self.follow_cursor = false;
        self.clamp_scroll();
        None
    }
}

/// Row heights measured at the last render width.
#[derive(Debug, Default)]
pub struct LayoutCache {
    pub heights: Vec<u16>,
    /// Running sum of `heights`: bottom edge of each row
    pub prefix_heights: Vec<u16>,
}

impl LayoutCache {
    pub fn rebuild(&mut self, items: &[ItemView<'_>], content_width: u16) {
        self.heights = items
            .iter()
            .map(|item| ItemRow::calculate_height(item.text, content_width))
            .collect();
        self.prefix_heights = self
            .heights
            .iter()
            .scan(0u16, |acc, &h| {
                *acc = acc.saturating_add(h);
                Some(*acc)
            })
            .collect();
    }

    pub fn total_height(&self) -> u16 {
        self.prefix_heights.last().copied().unwrap_or(0)
    }

    /// Top edge of row `idx`.
    pub fn top_of(&self, idx: usize) -> u16 {
        match idx.checked_sub(1) {
            Some(prev) => self.prefix_heights.get(prev).copied().unwrap_or(0),
            None => 0,
        }
    }

    /// Rows overlapping the viewport, plus half a screen either side.
    pub fn visible_range(&self, scroll_offset: u16, viewport_height: u16) -> std::ops::Range<usize> {
        let buffer = viewport_height / 2;
        let buffered_start = scroll_offset.saturating_sub(buffer);
        let buffered_end = scroll_offset
            .saturating_add(viewport_height)
            .saturating_add(buffer);

        let start = self
            .prefix_heights
            .partition_point(|&end| end <= buffered_start);
        let end = self
            .prefix_heights
            .partition_point(|&end| end < buffered_end)
            .saturating_add(1)
            .min(self.prefix_heights.len());

        start..end.max(start)
    }
}
