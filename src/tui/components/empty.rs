//! # Empty State Component
//!
//! Shown in place of the list while the checklist has no items.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::theme::Theme;

pub const EMPTY_HINT: &str = "No todos yet. Press 'i' to add your first todo!";

pub struct EmptyState<'a> {
    theme: &'a Theme,
}

impl<'a> EmptyState<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Component for EmptyState<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let hint = Line::from(Span::styled(EMPTY_HINT, self.theme.instructions()));
        frame.render_widget(Paragraph::new(hint).wrap(Wrap { trim: true }), area);
    }
}
