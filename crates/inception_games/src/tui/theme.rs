//! Resolved colours passed to the renderer.

use crate::config::{parse_color, ConfigError, ThemeSettings};
use inception_tictactoe::Player;
use ratatui::style::{Color, Modifier, Style};

/// Colours for one run of the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Hovered playable cell.
    pub highlight: Color,
    /// Keyboard cursor.
    pub cursor: Color,
    /// Grid lines and empty cells.
    pub grid: Color,
}

impl Theme {
    /// Colour of a player's mark.
    pub fn mark_color(&self, player: Player) -> Color {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    /// Bold style for a player's mark.
    pub fn mark_style(&self, player: Player) -> Style {
        Style::default()
            .fg(self.mark_color(player))
            .add_modifier(Modifier::BOLD)
    }
}

impl TryFrom<&ThemeSettings> for Theme {
    type Error = ConfigError;

    fn try_from(settings: &ThemeSettings) -> Result<Self, Self::Error> {
        Ok(Self {
            x: parse_color("theme.x_color", settings.x_color())?,
            o: parse_color("theme.o_color", settings.o_color())?,
            highlight: parse_color("theme.highlight", settings.highlight())?,
            cursor: parse_color("theme.cursor", settings.cursor())?,
            grid: parse_color("theme.grid", settings.grid())?,
        })
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Red,
            highlight: Color::Rgb(0xff, 0xfc, 0xb3),
            cursor: Color::White,
            grid: Color::DarkGray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_match_default_theme() {
        let theme = Theme::try_from(&ThemeSettings::default()).unwrap();
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_mark_color() {
        let theme = Theme::default();
        assert_eq!(theme.mark_color(Player::X), Color::Blue);
        assert_eq!(theme.mark_color(Player::O), Color::Red);
    }
}
