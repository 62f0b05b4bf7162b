//! # TitleBar Component
//!
//! Header of the checklist screen: the "Checklist" title and, once there is
//! anything to count, the progress line.
//!
//! ## Design Decisions
//!
//! ### Stateless Component
//!
//! TitleBar is purely presentational. It receives the progress figures as
//! props and has no internal state:
//!
//! ```rust,ignore
//! let mut title_bar = TitleBar::new(snapshot.progress, &theme);
//! title_bar.render(frame, area);
//! ```
//!
//! ### Height
//!
//! The parent lays out the screen before rendering, so the height is
//! available up front via `TitleBar::height`. The progress line is dropped
//! entirely on an empty list, where the empty-state hint takes over.

use crate::core::state::Progress;
use crate::tui::component::Component;
use crate::tui::theme::Theme;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub const TITLE: &str = "Checklist";

/// Checklist header showing the title and completion progress.
pub struct TitleBar<'a> {
    pub progress: Progress,
    pub theme: &'a Theme,
}

impl<'a> TitleBar<'a> {
    pub fn new(progress: Progress, theme: &'a Theme) -> Self {
        Self { progress, theme }
    }

    /// Rows used: title, blank, then progress and a blank when non-empty.
    pub fn height(progress: Progress) -> u16 {
        if progress.total > 0 { 4 } else { 2 }
    }

    /// `Progress: C/T completed (P%)`
    pub fn progress_text(progress: Progress) -> String {
        format!(
            "Progress: {}/{} completed ({}%)",
            progress.completed,
            progress.total,
            progress.percent()
        )
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut lines = vec![
            Line::from(Span::styled(format!(" {TITLE} "), self.theme.title())),
            Line::default(),
        ];
        if self.progress.total > 0 {
            lines.push(Line::from(Span::styled(
                Self::progress_text(self.progress),
                self.theme.instructions(),
            )));
        }

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(progress: Progress) -> String {
        let theme = Theme::default();
        let backend = TestBackend::new(60, TitleBar::height(progress));
        let mut terminal = Terminal::new(backend).unwrap();

        terminal
            .draw(|f| {
                TitleBar::new(progress, &theme).render(f, f.area());
            })
            .unwrap();

        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_progress_text_format() {
        let progress = Progress {
            completed: 1,
            total: 3,
        };
        assert_eq!(
            TitleBar::progress_text(progress),
            "Progress: 1/3 completed (33%)"
        );
    }

    #[test]
    fn test_title_bar_with_progress() {
        let text = render(Progress {
            completed: 2,
            total: 2,
        });
        assert!(text.contains("Checklist"));
        assert!(text.contains("Progress: 2/2 completed (100%)"));
    }

    #[test]
    fn test_title_bar_empty_list_hides_progress() {
        let text = render(Progress::default());
        assert!(text.contains("Checklist"));
        assert!(!text.contains("Progress"));
        assert_eq!(TitleBar::height(Progress::default()), 2);
    }
}
