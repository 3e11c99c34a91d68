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

//! Unicode and Emoji symbols for the TUI.

pub(crate) const ICON_TROPHY: &str = "\u{1F3C6}";
pub(crate) const ICON_PLAYERS: &str = "\u{1F465}";

pub(crate) const ICON_WIN: &str = "\u{1F389}";
pub(crate) const ICON_DRAW: &str = "\u{1F91D}";
