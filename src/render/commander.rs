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

//! Render the command-line interface.
//!
//! The bottom line of the screen shows, in order of preference: the command
//! line while it is being typed, the last error message, or the key hints.

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

const KEY_HINTS: &[(&str, &str)] = &[
    ("1-9", "play"),
    ("arrows", "move"),
    ("enter", "place"),
    ("n", "new game"),
    ("r", "reset stats"),
    (":", "command"),
    ("q", "quit"),
];

pub(crate) fn draw_commander(f: &mut Frame, area: Rect, app: &App) {
    let commander = &app.commander;

    let [container] = Layout::horizontal([Constraint::Min(1)])
        .horizontal_margin(1)
        .areas(area);

    if commander.active() {
        let line = Line::from(vec![Span::raw(":"), Span::raw(commander.input.value())]);
        f.render_widget(
            Paragraph::new(line).style(Style::default().fg(app.theme.commander_colour)),
            container,
        );

        let cursor_x = container.x + 1 + commander.input.cursor() as u16;
        f.set_cursor_position((cursor_x, container.y));
        return;
    }

    if let Some(message) = &app.message {
        f.render_widget(
            Paragraph::new(message.as_str()).style(Style::default().fg(app.theme.error_colour)),
            container,
        );
        return;
    }

    let mut spans = Vec::new();
    for (key, action) in KEY_HINTS {
        spans.push(Span::styled(*key, Style::default().fg(app.theme.accent_colour)));
        spans.push(Span::styled(
            format!(" {action}  "),
            Style::default().fg(app.theme.hint_colour),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), container);
}
