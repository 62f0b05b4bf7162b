//! # Footer Component
//!
//! Key hints for the current mode, wrapped to the container width.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::core::state::Mode;
use crate::tui::component::Component;
use crate::tui::theme::Theme;

const SEPARATOR: &str = " • ";

const NAVIGATION_HINTS: &[&str] = &[
    "i/n: add todo",
    "space/x: toggle",
    "d: delete",
    "↑↓/j/k: navigate",
    "r: complete all",
    "u: uncomplete all",
    "q: quit",
];

const ENTRY_HINTS: &[&str] = &["Press Enter to add", "Esc to cancel", "Ctrl+C to quit"];

pub struct Footer<'a> {
    pub mode: Mode,
    pub theme: &'a Theme,
}

impl<'a> Footer<'a> {
    pub fn new(mode: Mode, theme: &'a Theme) -> Self {
        Self { mode, theme }
    }

    pub fn hint_text(mode: Mode) -> String {
        let hints = match mode {
            Mode::Navigation => NAVIGATION_HINTS,
            Mode::Entry => ENTRY_HINTS,
        };
        hints.join(SEPARATOR)
    }

    fn lines(mode: Mode, width: u16) -> Vec<String> {
        if width == 0 {
            return Vec::new();
        }
        textwrap::wrap(&Self::hint_text(mode), width as usize)
            .into_iter()
            .map(|line| line.into_owned())
            .collect()
    }

    pub fn calculate_height(mode: Mode, width: u16) -> u16 {
        Self::lines(mode, width).len() as u16
    }
}

impl Component for Footer<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = Self::lines(self.mode, area.width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, self.theme.footer())))
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_hint_text_per_mode() {
        assert_eq!(
            Footer::hint_text(Mode::Entry),
            "Press Enter to add • Esc to cancel • Ctrl+C to quit"
        );
        let nav = Footer::hint_text(Mode::Navigation);
        assert!(nav.starts_with("i/n: add todo • space/x: toggle"));
        assert!(nav.ends_with("q: quit"));
    }

    #[test]
    fn test_height_grows_when_narrow() {
        assert_eq!(Footer::calculate_height(Mode::Entry, 80), 1);
        assert!(Footer::calculate_height(Mode::Navigation, 30) > 1);
        assert_eq!(Footer::calculate_height(Mode::Navigation, 0), 0);
    }

    #[test]
    fn test_renders_entry_hints() {
        let theme = Theme::default();
        let mut terminal = Terminal::new(TestBackend::new(60, 1)).unwrap();
        terminal
            .draw(|f| Footer::new(Mode::Entry, &theme).render(f, f.area()))
            .unwrap();

        assert!(buffer_text(terminal.backend().buffer()).contains("Esc to cancel"));
    }
}
