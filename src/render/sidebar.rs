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

//! Render the game status, score board and rules panels.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::{
    App,
    game::{Outcome, Player, logic::available_moves},
    render::icons::{ICON_PLAYERS, ICON_TROPHY},
    session::{GameState, ScoreTally},
    theme::Theme,
};

const STATUS_HEIGHT: u16 = 6;
const SCORE_HEIGHT: u16 = 7;

/// The one-line summary of the game: whose turn it is, or how it ended.
pub(crate) fn status_text(game: &GameState) -> String {
    match game.outcome() {
        Outcome::Undecided => format!("Player {}'s turn", game.current_player()),
        Outcome::Won(player) => format!("Player {player} wins!"),
        Outcome::Draw => "It's a draw!".to_string(),
    }
}

pub(crate) fn draw_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let [status_area, score_area, rules_area] = Layout::vertical([
        Constraint::Length(STATUS_HEIGHT),
        Constraint::Length(SCORE_HEIGHT),
        Constraint::Min(0),
    ])
    .areas(area);

    draw_status(f, status_area, app.session.game(), &app.theme);
    draw_score(f, score_area, app.session.tally(), &app.theme);

    if app.show_rules {
        draw_rules(f, rules_area, &app.theme);
    }
}

fn panel<'a>(title: String, theme: &Theme) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_colour))
        .title(title)
        .padding(Padding::horizontal(1))
}

fn draw_status(f: &mut Frame, area: Rect, game: &GameState, theme: &Theme) {
    let colour = theme.status_colour(game.outcome(), game.current_player());

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            status_text(game),
            Style::default().fg(colour).add_modifier(Modifier::BOLD),
        )),
    ];

    if game.is_active() {
        let free = available_moves(game.board()).len();
        lines.push(Line::from(Span::styled(
            format!("{free} cells left"),
            Style::default().fg(theme.hint_colour),
        )));
    } else {
        lines.push(Line::from(Span::styled(
            "Press n to play again",
            Style::default().fg(theme.accent_colour),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel(format!(" {ICON_PLAYERS} Game Status "), theme));

    f.render_widget(paragraph, area);
}

fn draw_score(f: &mut Frame, area: Rect, tally: &ScoreTally, theme: &Theme) {
    let block = panel(format!(" {ICON_TROPHY} Score Board "), theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = [
        ("Player X", tally.wins(Player::X), theme.player_x_fg),
        ("Player O", tally.wins(Player::O), theme.player_o_fg),
        ("Draws", tally.draws, theme.hint_colour),
    ];

    let [rows_area, _, hint_area] = Layout::vertical([
        Constraint::Length(rows.len() as u16),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let row_areas = Layout::vertical([Constraint::Length(1); 3]).split(rows_area);

    for ((label, count, colour), row_area) in rows.into_iter().zip(row_areas.iter()) {
        f.render_widget(Paragraph::new(label), *row_area);
        f.render_widget(
            Paragraph::new(count.to_string())
                .alignment(Alignment::Right)
                .style(Style::default().fg(colour).add_modifier(Modifier::BOLD)),
            *row_area,
        );
    }

    f.render_widget(
        Paragraph::new("r: reset stats")
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hint_colour)),
        hint_area,
    );
}

fn draw_rules(f: &mut Frame, area: Rect, theme: &Theme) {
    let steps = [
        ("Take Turns", "Players alternate between X and O"),
        ("Get Three in a Row", "Horizontally, vertically, or diagonally"),
        ("Win the Game", "First to get three in a row wins!"),
    ];

    let mut lines = Vec::new();
    for (number, (title, detail)) in steps.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. ", number + 1),
                Style::default().fg(theme.accent_colour),
            ),
            Span::styled(*title, Style::default().add_modifier(Modifier::BOLD)),
        ]));
        lines.push(Line::from(Span::styled(
            format!("   {detail}"),
            Style::default().fg(theme.hint_colour),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel(" How to Play ".to_string(), theme));

    f.render_widget(paragraph, area);
}
