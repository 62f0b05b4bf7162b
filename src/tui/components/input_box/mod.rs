//! # InputBox Component
//!
//! The text field used in Entry mode to compose a new checklist item.
//!
//! ## Responsibilities
//!
//! - Edit the draft (insert, paste, backspace, delete, word deletion)
//! - Move the edit cursor (left/right, word jumps, home/end, wrapped lines)
//! - Report submission (Enter)
//! - Render the draft, or a placeholder, with the terminal cursor placed
//!
//! ## State Management
//!
//! The draft text is owned by `ChecklistState` and borrowed per call.
//! `InputBoxState` keeps only the edit cursor and scroll position, and lives
//! in `TuiState`. `InputBox` is the transient render wrapper.

mod cursor;
mod text_wrap;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph};

use crate::tui::component::Component;
use crate::tui::event::TuiEvent;
use crate::tui::theme::Theme;

use cursor::CursorState;
use text_wrap::{
    MAX_VISIBLE_LINES, VERTICAL_OVERHEAD, inner_width, next_char_boundary, next_word_boundary,
    prev_char_boundary, prev_word_boundary, wrap_line_count, wrap_lines,
};

pub const TITLE: &str = "Add new todo:";
pub const PLACEHOLDER: &str = "Enter your todo item...";

/// High-level events emitted by the InputBox
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Enter pressed; the caller commits the draft
    Submit,
    /// Draft text changed
    ContentChanged,
    /// Only the edit cursor moved
    CursorMoved,
}

/// Persistent edit state for the draft field.
#[derive(Debug)]
pub struct InputBoxState {
    cursor: CursorState,
}

impl Default for InputBoxState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputBoxState {
    pub fn new() -> Self {
        Self {
            cursor: CursorState::new(),
        }
    }

    /// Forget the edit position. Call whenever the draft is cleared.
    pub fn reset(&mut self) {
        self.cursor.reset();
    }

    /// Byte offset of the edit cursor in the draft.
    pub fn cursor_pos(&self) -> usize {
        self.cursor.pos
    }

    /// Box height for the draft at `content_width`, including borders.
    pub fn calculate_height(&self, draft: &str, content_width: u16) -> u16 {
        let content_lines = wrap_line_count(draft, inner_width(content_width));
        content_lines.min(MAX_VISIBLE_LINES) + VERTICAL_OVERHEAD
    }

    /// Apply an editing key to `draft`.
    pub fn handle_event(&mut self, draft: &mut String, event: &TuiEvent) -> Option<InputEvent> {
        self.cursor.clamp_to(draft);
        let pos = self.cursor.pos;

        match event {
            TuiEvent::InputChar(c) if !c.is_control() => {
                draft.insert(pos, *c);
                self.cursor.pos += c.len_utf8();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Paste(text) => {
                // Items are single-line: newlines and tabs become spaces
                let flat: String = text
                    .chars()
                    .map(|c| if c.is_control() { ' ' } else { c })
                    .collect();
                if flat.is_empty() {
                    return None;
                }
                draft.insert_str(pos, &flat);
                self.cursor.pos += flat.len();
                Some(InputEvent::ContentChanged)
            }
            TuiEvent::Backspace => (pos > 0).then(|| {
                let prev = prev_char_boundary(draft, pos);
                draft.drain(prev..pos);
                self.cursor.pos = prev;
                InputEvent::ContentChanged
            }),
            TuiEvent::Delete => (pos < draft.len()).then(|| {
                let next = next_char_boundary(draft, pos);
                draft.drain(pos..next);
                InputEvent::ContentChanged
            }),
            TuiEvent::DeleteWordBack => (pos > 0).then(|| {
                let start = prev_word_boundary(draft, pos);
                draft.drain(start..pos);
                self.cursor.pos = start;
                InputEvent::ContentChanged
            }),
            TuiEvent::CursorLeft => self.move_to(prev_char_boundary(draft, pos)),
            TuiEvent::CursorRight => self.move_to(next_char_boundary(draft, pos)),
            TuiEvent::WordLeft => self.move_to(prev_word_boundary(draft, pos)),
            TuiEvent::WordRight => self.move_to(next_word_boundary(draft, pos)),
            TuiEvent::CursorHome => self.move_to(0),
            TuiEvent::CursorEnd => self.move_to(draft.len()),
            TuiEvent::CursorUp => self
                .cursor
                .move_vertically(draft, -1, self.cursor.last_content_width)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::CursorDown => self
                .cursor
                .move_vertically(draft, 1, self.cursor.last_content_width)
                .then_some(InputEvent::CursorMoved),
            TuiEvent::Submit => {
                self.reset();
                Some(InputEvent::Submit)
            }
            _ => None,
        }
    }

    fn move_to(&mut self, pos: usize) -> Option<InputEvent> {
        (pos != self.cursor.pos).then(|| {
            self.cursor.pos = pos;
            InputEvent::CursorMoved
        })
    }
}

/// Transient render wrapper for the draft field.
pub struct InputBox<'a> {
    pub state: &'a mut InputBoxState,
    pub draft: &'a str,
    pub theme: &'a Theme,
}

impl<'a> InputBox<'a> {
    pub fn new(state: &'a mut InputBoxState, draft: &'a str, theme: &'a Theme) -> Self {
        Self {
            state,
            draft,
            theme,
        }
    }
}

impl Component for InputBox<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let cursor = &mut self.state.cursor;
        cursor.clamp_to(self.draft);
        cursor.last_content_width = area.width;
        cursor.update_scroll_offset(self.draft, area.width);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.input_border())
            .title(TITLE)
            .padding(Padding::horizontal(1));

        let body: Vec<Line> = if self.draft.is_empty() {
            vec![Line::from(Span::styled(PLACEHOLDER, self.theme.placeholder()))]
        } else {
            wrap_lines(self.draft, inner_width(area.width))
                .into_iter()
                .skip(cursor.scroll_offset as usize)
                .take(MAX_VISIBLE_LINES as usize)
                .map(|line| Line::from(Span::styled(line, Style::default().fg(self.theme.text))))
                .collect()
        };

        frame.render_widget(Paragraph::new(body).block(block), area);
        frame.set_cursor_position(cursor.screen_pos(self.draft, area));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn type_str(state: &mut InputBoxState, draft: &mut String, text: &str) {
        for c in text.chars() {
            state.handle_event(draft, &TuiEvent::InputChar(c));
        }
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut state = InputBoxState::new();
        let mut draft = String::new();

        let res = state.handle_event(&mut draft, &TuiEvent::InputChar('a'));
        assert_eq!(res, Some(InputEvent::ContentChanged));
        type_str(&mut state, &mut draft, "bc");
        assert_eq!(draft, "abc");

        let res = state.handle_event(&mut draft, &TuiEvent::Backspace);
        assert_eq!(res, Some(InputEvent::ContentChanged));
        assert_eq!(draft, "ab");
        assert_eq!(state.cursor_pos(), 2);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut state = InputBoxState::new();
        let mut draft = String::new();
        assert_eq!(state.handle_event(&mut draft, &TuiEvent::Backspace), None);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut state = InputBoxState::new();
        let mut draft = String::new();
        type_str(&mut state, &mut draft, "Buy milk");
        state.handle_event(&mut draft, &TuiEvent::WordLeft);
        type_str(&mut state, &mut draft, "oat ");
        assert_eq!(draft, "Buy oat milk");
    }

    #[test]
    fn test_home_end_and_delete() {
        let mut state = InputBoxState::new();
        let mut draft = String::new();
        type_str(&mut state, &mut draft, "xmilk");
        state.handle_event(&mut draft, &TuiEvent::CursorHome);
        assert_eq!(
            state.handle_event(&mut draft, &TuiEvent::Delete),
            Some(InputEvent::ContentChanged)
        );
        assert_eq!(draft, "milk");
        assert_eq!(state.handle_event(&mut draft, &TuiEvent::CursorHome), None);
        assert_eq!(
            state.handle_event(&mut draft, &TuiEvent::CursorEnd),
            Some(InputEvent::CursorMoved)
        );
        assert_eq!(state.handle_event(&mut draft, &TuiEvent::Delete), None);
    }

    #[test]
    fn test_delete_word_back() {
        let mut state = InputBoxState::new();
        let mut draft = String::new();
        type_str(&mut state, &mut draft, "walk the dog");
        state.handle_event(&mut draft, &TuiEvent::DeleteWordBack);
        assert_eq!(draft, "walk the ");
        assert_eq!(state.cursor_pos(), draft.len());
    }

    #[test]
    fn test_multibyte_editing() {
        let mut state = InputBoxState::new();
        let mut draft = String::new();
        type_str(&mut state, &mut draft, "café");
        state.handle_event(&mut draft, &TuiEvent::CursorLeft);
        state.handle_event(&mut draft, &TuiEvent::Delete);
        assert_eq!(draft, "caf");
        state.handle_event(&mut draft, &TuiEvent::Backspace);
        assert_eq!(draft, "ca");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut state = InputBoxState::new();
        let mut draft = String::new();
        state.handle_event(&mut draft, &TuiEvent::Paste("eggs\nbread\tjam".to_string()));
        assert_eq!(draft, "eggs bread jam");
        assert_eq!(state.cursor_pos(), draft.len());
    }

    #[test]
    fn test_control_chars_are_not_inserted() {
        let mut state = InputBoxState::new();
        let mut draft = String::new();
        assert_eq!(state.handle_event(&mut draft, &TuiEvent::InputChar('\u{7}')), None);
        assert!(draft.is_empty());
    }

    #[test]
    fn test_submit_resets_cursor() {
        let mut state = InputBoxState::new();
        let mut draft = String::new();
        type_str(&mut state, &mut draft, "hello");

        assert_eq!(state.handle_event(&mut draft, &TuiEvent::Submit), Some(InputEvent::Submit));
        assert_eq!(state.cursor_pos(), 0);
    }

    #[test]
    fn test_cursor_survives_draft_cleared_elsewhere() {
        let mut state = InputBoxState::new();
        let mut draft = String::new();
        type_str(&mut state, &mut draft, "hello");
        draft.clear();

        state.handle_event(&mut draft, &TuiEvent::InputChar('x'));
        assert_eq!(draft, "x");
    }

    #[test]
    fn test_calculate_height_grows_then_caps() {
        let state = InputBoxState::new();
        assert_eq!(state.calculate_height("", 40), 1 + VERTICAL_OVERHEAD);
        assert_eq!(state.calculate_height("buy oat milk", 11), 2 + VERTICAL_OVERHEAD);
        let long = "word ".repeat(40);
        assert_eq!(
            state.calculate_height(&long, 11),
            MAX_VISIBLE_LINES + VERTICAL_OVERHEAD
        );
    }

    #[test]
    fn test_render_shows_placeholder_when_empty() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = InputBoxState::new();
        let theme = Theme::default();

        terminal
            .draw(|f| InputBox::new(&mut state, "", &theme).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains(TITLE));
        assert!(text.contains(PLACEHOLDER));
    }

    #[test]
    fn test_render_shows_draft() {
        let backend = TestBackend::new(40, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = InputBoxState::new();
        let theme = Theme::default();

        terminal
            .draw(|f| InputBox::new(&mut state, "Buy milk", &theme).render(f, f.area()))
            .unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Buy milk"));
        assert!(!text.contains(PLACEHOLDER));
    }
}
