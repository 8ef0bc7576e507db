//! Named palettes and their light/dark renditions.
//!
//! A theme only changes colours. Nothing about layout or behaviour depends
//! on it.

use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The palettes a select can be dressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Theme {
    #[default]
    Default,
    Ocean,
    Lemonade,
    Purple,
}

/// Returned when a theme name is not one of [`Theme::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}` (expected default, ocean, lemonade or purple)")]
pub struct UnknownTheme(pub String);

impl Theme {
    pub const ALL: [Theme; 4] = [Theme::Default, Theme::Ocean, Theme::Lemonade, Theme::Purple];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Default => "default",
            Theme::Ocean => "ocean",
            Theme::Lemonade => "lemonade",
            Theme::Purple => "purple",
        }
    }

    /// Scope class for the palette, e.g. `theme-ocean`.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Default => "theme-default",
            Theme::Ocean => "theme-ocean",
            Theme::Lemonade => "theme-lemonade",
            Theme::Purple => "theme-purple",
        }
    }

    /// The next theme in [`Theme::ALL`], wrapping.
    pub fn next(self) -> Theme {
        let idx = Theme::ALL.iter().position(|t| *t == self).unwrap_or(0);
        Theme::ALL[(idx + 1) % Theme::ALL.len()]
    }

    fn accent(self) -> Color {
        match self {
            Theme::Default => Color::Rgb(37, 99, 235),
            Theme::Ocean => Color::Rgb(14, 116, 144),
            Theme::Lemonade => Color::Rgb(202, 138, 4),
            Theme::Purple => Color::Rgb(126, 34, 206),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

impl TryFrom<String> for Theme {
    type Error = UnknownTheme;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Class applied alongside the theme class when dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// Concrete styles for one (theme, dark mode) combination.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    /// Trigger background and label.
    pub trigger: Style,
    /// Open/closed indicator glyph.
    pub indicator: Style,
    /// Placeholder label when nothing is selected.
    pub placeholder: Style,
    /// List panel background.
    pub list: Style,
    /// List border.
    pub border: Style,
    /// An ordinary entry.
    pub item: Style,
    /// The entry matching the current selection.
    pub selected_item: Style,
}

impl Palette {
    pub fn for_theme(theme: Theme, dark: bool) -> Self {
        let accent = theme.accent();
        if dark {
            let panel = Color::Rgb(31, 41, 55);
            Self {
                trigger: Style::default().fg(Color::Rgb(229, 231, 235)).bg(accent),
                indicator: Style::default().fg(Color::Rgb(156, 163, 175)).bg(accent),
                placeholder: Style::default().fg(Color::Rgb(156, 163, 175)).bg(accent),
                list: Style::default().bg(panel),
                border: Style::default().fg(Color::Rgb(55, 65, 81)).bg(panel),
                item: Style::default().fg(Color::Rgb(156, 163, 175)).bg(panel),
                selected_item: Style::default()
                    .fg(Color::Rgb(209, 213, 219))
                    .bg(Color::Rgb(55, 65, 81))
                    .add_modifier(Modifier::BOLD),
            }
        } else {
            Self {
                trigger: Style::default().fg(Color::White).bg(accent),
                indicator: Style::default().fg(Color::Rgb(229, 231, 235)).bg(accent),
                placeholder: Style::default().fg(Color::Rgb(229, 231, 235)).bg(accent),
                list: Style::default().bg(Color::White),
                border: Style::default().fg(Color::Rgb(229, 231, 235)).bg(Color::White),
                item: Style::default().fg(Color::Rgb(31, 41, 55)).bg(Color::White),
                selected_item: Style::default()
                    .fg(accent)
                    .bg(Color::Rgb(243, 244, 246))
                    .add_modifier(Modifier::BOLD),
            }
        }
    }
}
