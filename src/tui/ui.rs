use crate::core::state::{Mode, Snapshot};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ChecklistView, EmptyState, Footer, InputBox, TitleBar};
use crate::tui::theme::Theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};

pub const TOO_SMALL: &str = "Terminal too small";

/// Container width cap, before padding.
const MAX_CONTAINER_WIDTH: u16 = 80;
const INPUT_MAX_WIDTH: u16 = 60;
const MIN_CONTENT_WIDTH: u16 = 16;
/// Padding inside the container: one row top and bottom, two columns each side
const PADDING: Margin = Margin {
    horizontal: 2,
    vertical: 1,
};

/// Content area inside the padded container, left-aligned in `area`.
pub fn content_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).min(MAX_CONTAINER_WIDTH);
    Rect { width, ..area }.inner(PADDING)
}

pub fn draw_ui(frame: &mut Frame, snapshot: &Snapshot, tui: &mut TuiState, theme: &Theme) {
    use Constraint::{Length, Min};

    let area = frame.area();
    frame.render_widget(Block::default().style(theme.container()), area);

    let content = content_area(area);
    let title_height = TitleBar::height(snapshot.progress);
    let input_width = content.width.min(INPUT_MAX_WIDTH);
    // One blank row above the input box and above the footer
    let input_height = match snapshot.mode {
        Mode::Entry => tui.input_box.calculate_height(snapshot.draft, input_width) + 1,
        Mode::Navigation => 0,
    };
    let footer_height = Footer::calculate_height(snapshot.mode, content.width) + 1;

    let required_height = title_height + 1 + input_height + footer_height;
    if content.width < MIN_CONTENT_WIDTH || content.height < required_height {
        draw_too_small(frame, area, theme);
        return;
    }

    let layout = Layout::vertical([
        Length(title_height),
        Min(1),
        Length(input_height),
        Length(footer_height),
    ]);
    let [title_area, list_area, input_area, footer_area] = layout.areas(content);

    TitleBar::new(snapshot.progress, theme).render(frame, title_area);

    if snapshot.items.is_empty() {
        EmptyState::new(theme).render(frame, list_area);
    } else {
        let cursor = (snapshot.mode == Mode::Navigation).then_some(snapshot.cursor);
        ChecklistView::new(&mut tui.checklist, &snapshot.items, cursor, theme)
            .render(frame, list_area);
    }

    if snapshot.mode == Mode::Entry {
        let input_area = Rect {
            y: input_area.y + 1,
            width: input_width,
            height: input_area.height.saturating_sub(1),
            ..input_area
        };
        InputBox::new(&mut tui.input_box, snapshot.draft, theme).render(frame, input_area);
    }

    let footer_area = Rect {
        y: footer_area.y + 1,
        height: footer_area.height.saturating_sub(1),
        ..footer_area
    };
    Footer::new(snapshot.mode, theme).render(frame, footer_area);
}

fn draw_too_small(frame: &mut Frame, area: Rect, theme: &Theme) {
    let message = Paragraph::new(Line::styled(TOO_SMALL, theme.error()));
    frame.render_widget(message, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::ChecklistState;
    use crate::test_support::{buffer_text, checklist};
    use crate::tui::components::empty::EMPTY_HINT;
    use crate::tui::components::input_box::{PLACEHOLDER, TITLE};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(state: &ChecklistState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                draw_ui(f, &state.snapshot(), &mut tui, &theme);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_content_area_caps_width() {
        let content = content_area(Rect::new(0, 0, 200, 50));
        assert_eq!(content, Rect::new(2, 1, 76, 48));

        let content = content_area(Rect::new(0, 0, 40, 10));
        assert_eq!(content, Rect::new(2, 1, 32, 8));
    }

    #[test]
    fn test_empty_list_shows_hint() {
        let text = render(&ChecklistState::new(), 80, 24);
        assert!(text.contains("Checklist"));
        assert!(text.contains(EMPTY_HINT));
        assert!(!text.contains("Progress"));
        assert!(text.contains("q: quit"));
    }

    #[test]
    fn test_items_progress_and_markers() {
        let mut state = checklist(&["Buy milk", "Walk dog"]);
        state.toggle_completion(0);
        let text = render(&state, 80, 24);

        assert!(text.contains("Progress: 1/2 completed (50%)"));
        assert!(text.contains("▶ [x] Buy milk"));
        assert!(text.contains("  [ ] Walk dog"));
        assert!(!text.contains(TITLE));
    }

    #[test]
    fn test_entry_mode_shows_input_box() {
        let mut state = checklist(&["Buy milk"]);
        state.enter_entry_mode();
        let text = render(&state, 80, 24);

        assert!(text.contains(TITLE));
        assert!(text.contains(PLACEHOLDER));
        assert!(text.contains("Press Enter to add"));
        // No cursor marker outside Navigation mode
        assert!(!text.contains('▶'));
    }

    #[test]
    fn test_entry_mode_shows_draft() {
        let mut state = ChecklistState::new();
        state.enter_entry_mode();
        if let Some(draft) = state.draft_mut() {
            draft.push_str("Pay rent");
        }
        let text = render(&state, 80, 24);

        assert!(text.contains("Pay rent"));
        assert!(!text.contains(PLACEHOLDER));
    }

    #[test]
    fn test_terminal_too_small() {
        let text = render(&checklist(&["Buy milk"]), 30, 5);
        assert!(text.contains(TOO_SMALL));
        assert!(!text.contains("Checklist"));
    }
}
