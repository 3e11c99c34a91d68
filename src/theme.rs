// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Visual styling and color configuration for the TUI.
//!
//! This module defines the application's color palette and provides utilities
//! for converting colors between Ratatui's internal representation and external
//! formats (such as hexadecimal strings) used for terminal emulator styling.

use ratatui::style::Color;

use crate::game::{Outcome, Player};

#[derive(Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) hint_colour: Color,
    pub(crate) cursor_bg: Color,

    pub(crate) player_x_fg: Color,
    pub(crate) player_o_fg: Color,
    pub(crate) win_fg: Color,
    pub(crate) draw_fg: Color,

    pub(crate) commander_colour: Color,
    pub(crate) error_colour: Color,
}

impl Default for Theme {
    // Returns the standard application theme.
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    // Constructs the default theme.
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(30, 27, 46),
            accent_colour: Color::Rgb(129, 140, 248),
            border_colour: Color::Rgb(102, 102, 102),
            hint_colour: Color::Rgb(90, 90, 110),
            cursor_bg: Color::Rgb(55, 50, 85),

            player_x_fg: Color::Rgb(59, 130, 246),
            player_o_fg: Color::Rgb(168, 85, 247),
            win_fg: Color::Rgb(34, 197, 94),
            draw_fg: Color::Rgb(234, 179, 8),

            commander_colour: Color::Rgb(220, 220, 220),
            error_colour: Color::Rgb(239, 68, 68),
        }
    }

    pub(crate) fn player_colour(&self, player: Player) -> Color {
        match player {
            Player::X => self.player_x_fg,
            Player::O => self.player_o_fg,
        }
    }

    /// Colour of the status line: the mover's colour while the game is on,
    /// then green for a win or yellow for a draw.
    pub(crate) fn status_colour(&self, outcome: Outcome, current: Player) -> Color {
        match outcome {
            Outcome::Undecided => self.player_colour(current),
            Outcome::Won(_) => self.win_fg,
            Outcome::Draw => self.draw_fg,
        }
    }

    /// Converts a [`ratatui::style::Color`] into a CSS-style hexadecimal
    /// string.
    ///
    /// This is primarily used to set the terminal emulator's background color
    /// via escape sequences. Returns `None` for anything but an `Rgb` colour.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
