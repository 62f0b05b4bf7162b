//! # Theme
//!
//! The color palette and the styles derived from it. Built once at startup
//! from the resolved config and handed to the renderer by reference; it is
//! never mutated afterwards.
//!
//! Row styles depend on two flags:
//!
//! | selected | completed | style                                  |
//! |----------|-----------|----------------------------------------|
//! | no       | no        | text color                             |
//! | yes      | no        | primary, bold, selection background    |
//! | no       | yes       | muted, crossed out                     |
//! | yes      | yes       | secondary, bold, crossed out, selection|

use std::str::FromStr;

use log::warn;
use ratatui::style::{Color, Modifier, Style};

use crate::core::config::Palette;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub text: Color,
    pub muted: Color,
    pub error: Color,
    pub background: Color,
    pub selection: Color,
    pub title_background: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette(&Palette::default())
    }
}

impl Theme {
    /// Parse every palette entry. A color that fails to parse falls back to
    /// the built-in default for that slot.
    pub fn from_palette(palette: &Palette) -> Self {
        let defaults = Palette::default();
        Self {
            primary: parse_color("primary", &palette.primary, &defaults.primary),
            secondary: parse_color("secondary", &palette.secondary, &defaults.secondary),
            accent: parse_color("accent", &palette.accent, &defaults.accent),
            text: parse_color("text", &palette.text, &defaults.text),
            muted: parse_color("muted", &palette.muted, &defaults.muted),
            error: parse_color("error", &palette.error, &defaults.error),
            background: parse_color("background", &palette.background, &defaults.background),
            selection: parse_color("selection", &palette.selection, &defaults.selection),
            title_background: parse_color(
                "title_background",
                &palette.title_background,
                &defaults.title_background,
            ),
        }
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .bg(self.title_background)
            .add_modifier(Modifier::BOLD)
    }

    pub fn item(&self, selected: bool, completed: bool) -> Style {
        match (selected, completed) {
            (false, false) => Style::default().fg(self.text),
            (true, false) => Style::default()
                .fg(self.primary)
                .bg(self.selection)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default()
                .fg(self.muted)
                .add_modifier(Modifier::CROSSED_OUT),
            (true, true) => Style::default()
                .fg(self.secondary)
                .bg(self.selection)
                .add_modifier(Modifier::BOLD | Modifier::CROSSED_OUT),
        }
    }

    pub fn cursor(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    pub fn checkbox(&self) -> Style {
        Style::default().fg(self.secondary).add_modifier(Modifier::BOLD)
    }

    /// Hints and the progress line.
    pub fn instructions(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::ITALIC)
    }

    pub fn footer(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn input_border(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn placeholder(&self) -> Style {
        Style::default().fg(self.muted).add_modifier(Modifier::ITALIC)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn container(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }
}

fn parse_color(slot: &str, value: &str, default: &str) -> Color {
    Color::from_str(value.trim()).unwrap_or_else(|_| {
        warn!("Invalid {} color {:?}, using {}", slot, value, default);
        Color::from_str(default).unwrap_or(Color::Reset)
    })
}
