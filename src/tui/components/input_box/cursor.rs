//! Edit-cursor tracking for the InputBox.
//!
//! `CursorState` owns the cursor byte offset and scroll offset. The draft
//! text itself belongs to the checklist state, so every method takes
//! `draft: &str` explicitly. The draft can be replaced behind our back
//! (commit, cancel), which is why `clamp_to` exists.

use super::text_wrap::{
    CONTENT_OFFSET, MAX_VISIBLE_LINES, byte_at_column, display_width, floor_char_boundary,
    inner_width, wrap_lines,
};
use ratatui::layout::Rect;

#[derive(Debug)]
pub(super) struct CursorState {
    /// Byte offset in the draft (0..=draft.len()), always a char boundary
    pub pos: usize,
    /// First wrapped line shown (0 when content fits)
    pub scroll_offset: u16,
    /// Width of the box at the last render (used for vertical movement)
    pub last_content_width: u16,
}

impl CursorState {
    const DEFAULT_WIDTH: u16 = 60;

    pub fn new() -> Self {
        Self {
            pos: 0,
            scroll_offset: 0,
            last_content_width: Self::DEFAULT_WIDTH,
        }
    }

    pub fn reset(&mut self) {
        self.pos = 0;
        self.scroll_offset = 0;
    }

    pub fn clamp_to(&mut self, draft: &str) {
        self.pos = floor_char_boundary(draft, self.pos);
    }

    /// Wrapped line index and display column of the cursor.
    pub fn line_and_column(&self, draft: &str, content_width: u16) -> (u16, u16) {
        let width = inner_width(content_width);
        if width == 0 {
            return (0, 0);
        }
        let lines = wrap_lines(draft, width);
        let starts = line_starts(draft, &lines);
        let line = current_line(&starts, self.pos);
        let column = display_width(&draft[starts[line]..self.pos]).min(width);
        (line as u16, column)
    }

    /// Move to the same column on the previous (`direction < 0`) or next
    /// wrapped line. Returns `false` at the first/last line.
    pub fn move_vertically(&mut self, draft: &str, direction: i16, content_width: u16) -> bool {
        let width = inner_width(content_width);
        if width == 0 || draft.is_empty() {
            return false;
        }
        let lines = wrap_lines(draft, width);
        let starts = line_starts(draft, &lines);
        let line = current_line(&starts, self.pos);

        let target = if direction < 0 {
            match line.checked_sub(1) {
                Some(target) => target,
                None => return false,
            }
        } else if line + 1 < lines.len() {
            line + 1
        } else {
            return false;
        };

        let column = display_width(&draft[starts[line]..self.pos]);
        let target_start = starts[target];
        let target_end = floor_char_boundary(draft, target_start + lines[target].len());
        self.pos = target_start + byte_at_column(&draft[target_start..target_end], column);
        true
    }

    /// Keep the cursor line inside the visible window.
    pub fn update_scroll_offset(&mut self, draft: &str, content_width: u16) {
        let total_lines = wrap_lines(draft, inner_width(content_width)).len() as u16;
        if total_lines <= MAX_VISIBLE_LINES {
            self.scroll_offset = 0;
            return;
        }

        let (cursor_line, _) = self.line_and_column(draft, content_width);
        if cursor_line < self.scroll_offset {
            self.scroll_offset = cursor_line;
        } else if cursor_line >= self.scroll_offset + MAX_VISIBLE_LINES {
            self.scroll_offset = cursor_line + 1 - MAX_VISIBLE_LINES;
        }
    }

    /// Terminal (column, row) of the cursor inside the bordered box at `area`.
    pub fn screen_pos(&self, draft: &str, area: Rect) -> (u16, u16) {
        let (line, column) = self.line_and_column(draft, area.width);
        let visible_line = line.saturating_sub(self.scroll_offset);
        (
            area.x + CONTENT_OFFSET + column,
            area.y + 1 + visible_line,
        )
    }
}

/// Byte offset in `draft` where each wrapped line starts.
fn line_starts(draft: &str, lines: &[String]) -> Vec<usize> {
    let mut offset = 0;
    lines
        .iter()
        .map(|line| {
            let start = draft[offset..]
                .find(line.as_str())
                .map_or(offset, |i| offset + i);
            offset = start + line.len();
            start
        })
        .collect()
}

/// Index of the last line starting at or before `pos`.
fn current_line(starts: &[usize], pos: usize) -> usize {
    starts.partition_point(|&start| start <= pos).saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Width 11 leaves an inner width of 7 after borders and padding.
    const WIDTH: u16 = 11;

    fn at(pos: usize) -> CursorState {
        CursorState {
            pos,
            ..CursorState::new()
        }
    }

    #[test]
    fn column_on_single_line() {
        assert_eq!(at(3).line_and_column("milk", 40), (0, 3));
        assert_eq!(at(0).line_and_column("", 40), (0, 0));
    }

    #[test]
    fn column_counts_trailing_space() {
        assert_eq!(at(5).line_and_column("milk ", 40), (0, 5));
    }

    #[test]
    fn cursor_on_wrapped_line() {
        // "buy oat" | "milk"
        let draft = "buy oat milk";
        assert_eq!(at(draft.len()).line_and_column(draft, WIDTH), (1, 4));
        assert_eq!(at(9).line_and_column(draft, WIDTH), (1, 1));
        assert_eq!(at(2).line_and_column(draft, WIDTH), (0, 2));
    }

    #[test]
    fn move_vertically_keeps_column() {
        let draft = "buy oat milk";
        let mut cursor = at(10); // "mi|lk"
        assert!(cursor.move_vertically(draft, -1, WIDTH));
        assert_eq!(cursor.pos, 2);
        assert!(!cursor.move_vertically(draft, -1, WIDTH));
        assert!(cursor.move_vertically(draft, 1, WIDTH));
        assert_eq!(cursor.pos, 10);
        assert!(!cursor.move_vertically(draft, 1, WIDTH));
    }

    #[test]
    fn move_vertically_uses_display_columns() {
        // "aaaaaaa" | "éééé": é is two bytes but one column
        let draft = "aaaaaaa éééé";
        let mut cursor = at(3);
        assert!(cursor.move_vertically(draft, 1, WIDTH));
        assert_eq!(cursor.pos, 8 + 3 * 'é'.len_utf8());
        assert_eq!(cursor.line_and_column(draft, WIDTH), (1, 3));

        assert!(cursor.move_vertically(draft, -1, WIDTH));
        assert_eq!(cursor.pos, 3);
    }

    #[test]
    fn move_vertically_stops_before_split_wide_glyph() {
        // "abc" | "日本語": column 3 falls inside 本
        let draft = "abc 日本語";
        let mut cursor = at(3);
        assert!(cursor.move_vertically(draft, 1, 10));
        assert_eq!(cursor.pos, 4 + '日'.len_utf8());
        assert_eq!(cursor.line_and_column(draft, 10), (1, 2));
    }

    #[test]
    fn clamp_to_shrunken_draft() {
        let mut cursor = at(12);
        cursor.clamp_to("abc");
        assert_eq!(cursor.pos, 3);
        cursor.clamp_to("");
        assert_eq!(cursor.pos, 0);
    }

    #[test]
    fn scroll_follows_cursor_past_visible_lines() {
        let draft = "aaaaaaa bbbbbbb ccccccc ddddddd";
        let mut cursor = at(draft.len());
        cursor.update_scroll_offset(draft, WIDTH);
        assert_eq!(cursor.scroll_offset, 1);

        cursor.pos = 0;
        cursor.update_scroll_offset(draft, WIDTH);
        assert_eq!(cursor.scroll_offset, 0);
    }

    #[test]
    fn screen_pos_accounts_for_border_and_padding() {
        let area = Rect::new(10, 5, 40, 3);
        assert_eq!(at(4).screen_pos("milk", area), (10 + 2 + 4, 6));
    }
}
