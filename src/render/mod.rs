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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every processed event to provide a reactive user interface.

mod commander;
pub(crate) mod icons;
mod sidebar;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    App,
    render::{commander::draw_commander, sidebar::draw_sidebar},
};

const HEADER_HEIGHT: u16 = 3;
const SIDEBAR_WIDTH: u16 = 34;

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into a header, the side panels, the
///   board and the command line.
/// * **State Mapping**: Drawing the session snapshot (board, status and
///   score).
/// * **Styling**: Applying colors and borders defined in the application
///   theme.
///
/// The board view is borrowed mutably so it can record where each cell was
/// drawn for mouse hit-testing.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    // Outer layout: header, main, footer
    let [header, main, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    // Main layout: sidebar, board
    let [sidebar, board] =
        Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)]).areas(main);

    draw_header(f, header, app);
    draw_sidebar(f, sidebar, app);

    app.board_view.draw(f, board, &app.theme, app.pulse);

    draw_commander(f, footer, app);
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let title = Line::from(vec![
        Span::styled(
            "Tic-Tac-Toe",
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "  Challenge a friend. First to get three in a row wins!",
            Style::default().fg(app.theme.hint_colour),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(app.theme.border_colour));

    f.render_widget(
        Paragraph::new(vec![Line::from(""), title])
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
