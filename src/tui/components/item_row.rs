use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::core::state::ItemView;
use crate::tui::theme::Theme;

pub const CURSOR_MARKER: &str = "▶ ";
const NO_CURSOR: &str = "  ";
pub const CHECKED: &str = "[x] ";
pub const UNCHECKED: &str = "[ ] ";

/// Columns taken by the cursor marker and checkbox. Wrapped lines are
/// indented by the same amount so the text forms one column.
const PREFIX_WIDTH: u16 = 6;

/// A stateless component that renders one checklist row.
///
/// Created fresh each frame by `ChecklistView` for every visible item.
/// Long items wrap under their own text, never under the checkbox.
#[derive(Clone, Copy)]
pub struct ItemRow<'a> {
    pub item: ItemView<'a>,
    /// Row is under the cursor (only shown in Navigation mode)
    pub is_selected: bool,
    pub theme: &'a Theme,
}

impl<'a> ItemRow<'a> {
    pub fn new(item: ItemView<'a>, is_selected: bool, theme: &'a Theme) -> Self {
        Self {
            item,
            is_selected,
            theme,
        }
    }

    /// Rows needed to show `text` at `width`, without rendering it.
    ///
    /// Must wrap exactly like `render` so scroll math lines up with what is
    /// drawn.
    pub fn calculate_height(text: &str, width: u16) -> u16 {
        (wrap_text(text, width).len() as u16).max(1)
    }
}

fn wrap_text(text: &str, width: u16) -> Vec<String> {
    let text_width = width.saturating_sub(PREFIX_WIDTH);
    if text_width == 0 {
        // Degenerate: too narrow for any text, keep a single row
        return vec![String::new()];
    }
    let options = textwrap::Options::new(text_width as usize)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    textwrap::wrap(text, options)
        .into_iter()
        .map(|line| line.into_owned())
        .collect()
}

impl Widget for ItemRow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_style = self.theme.item(self.is_selected, self.item.completed);
        let (marker, marker_style) = if self.is_selected {
            (CURSOR_MARKER, self.theme.cursor())
        } else {
            (NO_CURSOR, text_style)
        };
        let (checkbox, checkbox_style) = if self.item.completed {
            (CHECKED, self.theme.checkbox())
        } else {
            (UNCHECKED, text_style)
        };

        let indent = " ".repeat(PREFIX_WIDTH as usize);
        let lines: Vec<Line> = wrap_text(self.item.text, area.width)
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                let mut spans = if i == 0 {
                    vec![
                        Span::styled(marker, marker_style),
                        Span::styled(checkbox, checkbox_style),
                    ]
                } else {
                    vec![Span::raw(indent.clone())]
                };
                spans.push(Span::styled(text, text_style));
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}
