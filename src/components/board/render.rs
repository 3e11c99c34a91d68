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

//! UI rendering logic for the board.
//!
//! Draws the 3x3 grid, highlights the cursor and any winning triple, and
//! overlays the result of a finished game on top of the grid.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::{
    components::BoardView,
    game::{BOARD_WIDTH, Cell, Outcome, logic::winning_line},
    render::icons::{ICON_DRAW, ICON_WIN},
    theme::Theme,
    util::layout::center_rect,
};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;
const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

impl BoardView {
    /// Draws the board and records where each cell landed on screen.
    ///
    /// `pulse` alternates on every tick and drives the emphasis of the result
    /// announcement.
    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme, pulse: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(" Board ");

        let inner = block.inner(area);
        f.render_widget(block, area);

        let grid = center_rect(inner, GRID_WIDTH, GRID_HEIGHT);

        let rows = Layout::vertical([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(grid);

        let line = winning_line(self.snapshot.board());

        for row in 0..BOARD_WIDTH {
            let cols = Layout::horizontal([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(rows[row * 2]);

            for col in 0..BOARD_WIDTH {
                let index = row * BOARD_WIDTH + col;
                let cell_area = cols[col * 2];
                self.cell_areas[index] = cell_area;

                let highlighted = line.is_some_and(|l| l.contains(&index));
                self.draw_cell(f, cell_area, index, highlighted, theme);

                if col + 1 < BOARD_WIDTH {
                    let sep = Paragraph::new(vec![Line::from("│"); CELL_HEIGHT as usize])
                        .style(Style::default().fg(theme.border_colour));
                    f.render_widget(sep, cols[col * 2 + 1]);
                }
            }

            if row + 1 < BOARD_WIDTH {
                let sep = Paragraph::new("─".repeat(grid.width as usize))
                    .style(Style::default().fg(theme.border_colour));
                f.render_widget(sep, rows[row * 2 + 1]);
            }
        }

        if self.snapshot.outcome().is_decided() {
            self.draw_announcement(f, grid, theme, pulse);
        }
    }

    fn draw_cell(&self, f: &mut Frame, area: Rect, index: usize, highlighted: bool, theme: &Theme) {
        let cell = self.snapshot.board().get(index).unwrap_or_default();

        let (text, mut style) = match cell {
            Cell::Empty => ((index + 1).to_string(), Style::default().fg(theme.hint_colour)),
            Cell::Taken(player) => (
                player.to_string(),
                Style::default()
                    .fg(theme.player_colour(player))
                    .add_modifier(Modifier::BOLD),
            ),
        };

        if highlighted {
            style = style.fg(theme.win_fg);
        }

        if self.snapshot.is_active() && index == self.cursor {
            style = style.bg(theme.cursor_bg);
        }

        // Pad to the cell height so the mark sits on the middle line
        let lines = vec![Line::from(""), Line::from(text), Line::from("")];
        let paragraph = Paragraph::new(lines)
            .style(style)
            .alignment(Alignment::Center);

        f.render_widget(paragraph, area);
    }

    fn draw_announcement(&self, f: &mut Frame, grid: Rect, theme: &Theme, pulse: bool) {
        let (icon, headline, colour) = match self.snapshot.outcome() {
            Outcome::Won(player) => (ICON_WIN, format!("Player {player} Wins!"), theme.win_fg),
            Outcome::Draw => (ICON_DRAW, "It's a Draw!".to_string(), theme.draw_fg),
            Outcome::Undecided => return,
        };

        let emphasis = if pulse {
            Modifier::BOLD
        } else {
            Modifier::BOLD | Modifier::DIM
        };

        let popup = center_rect(grid, GRID_WIDTH - 4, 5);

        let text = vec![
            Line::from(vec![
                Span::raw(format!("{icon} ")),
                Span::styled(headline, Style::default().fg(colour).add_modifier(emphasis)),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "n: play again",
                Style::default().fg(theme.hint_colour),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colour));

        f.render_widget(Clear, popup);
        f.render_widget(
            Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(block),
            popup,
        );
    }
}
