use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind}: {value:?}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

/// Desktop colour scheme. Persisted as a user preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn desktop_bg(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(24, 28, 40),
            Theme::Light => Color::Rgb(170, 190, 210),
        }
    }

    pub fn wallpaper_fg(self) -> Color {
        match self {
            Theme::Dark => Color::Rgb(50, 58, 80),
            Theme::Light => Color::Rgb(140, 160, 185),
        }
    }

    pub fn window_bg(self) -> Color {
        match self {
            Theme::Dark => Color::Black,
            Theme::Light => Color::White,
        }
    }

    pub fn window_fg(self) -> Color {
        match self {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    pub fn header_active_bg(self) -> Color {
        Color::Blue
    }

    pub fn header_inactive_bg(self) -> Color {
        match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        }
    }

    pub fn header_fg(self) -> Color {
        Color::White
    }

    pub fn border(self) -> Color {
        Color::DarkGray
    }

    pub fn taskbar_bg(self) -> Color {
        match self {
            Theme::Dark => Color::DarkGray,
            Theme::Light => Color::Gray,
        }
    }

    pub fn taskbar_fg(self) -> Color {
        Color::Black
    }

    pub fn taskbar_active_bg(self) -> Color {
        Color::Rgb(200, 100, 0)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => Err(UnknownVariant {
                kind: "theme",
                value: other.to_string(),
            }),
        }
    }
}

/// Background pattern drawn behind the windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Wallpaper {
    Plain,
    #[default]
    Dots,
    Grid,
    Waves,
}

impl Wallpaper {
    pub const ALL: [Wallpaper; 4] = [
        Wallpaper::Plain,
        Wallpaper::Dots,
        Wallpaper::Grid,
        Wallpaper::Waves,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Wallpaper::Plain => "plain",
            Wallpaper::Dots => "dots",
            Wallpaper::Grid => "grid",
            Wallpaper::Waves => "waves",
        }
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|w| *w == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Glyph for the cell at `(column, row)`.
    pub fn glyph_at(self, column: u16, row: u16) -> char {
        match self {
            Wallpaper::Plain => ' ',
            Wallpaper::Dots => {
                if column % 4 == 0 && row % 2 == 0 {
                    '·'
                } else {
                    ' '
                }
            }
            Wallpaper::Grid => match (column % 8 == 0, row % 4 == 0) {
                (true, true) => '+',
                (true, false) => '¦',
                (false, true) => '-',
                (false, false) => ' ',
            },
            Wallpaper::Waves => {
                if (column + row * 2) % 12 < 2 {
                    '~'
                } else {
                    ' '
                }
            }
        }
    }
}

impl fmt::Display for Wallpaper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wallpaper {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                kind: "wallpaper",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_round_trips_through_str() {
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        let err = "neon".parse::<Theme>().unwrap_err();
        assert_eq!(err.to_string(), "unknown theme: \"neon\"");
    }

    #[test]
    fn wallpaper_cycles_through_all() {
        let mut w = Wallpaper::Plain;
        for _ in 0..Wallpaper::ALL.len() {
            w = w.next();
        }
        assert_eq!(w, Wallpaper::Plain);
    }

    #[test]
    fn plain_wallpaper_is_blank() {
        assert_eq!(Wallpaper::Plain.glyph_at(0, 0), ' ');
        assert_eq!(Wallpaper::Dots.glyph_at(0, 0), '·');
    }
}
