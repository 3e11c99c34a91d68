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

use tracing::{info, warn};

use crate::{App, config, session::SessionCommand};

pub(super) fn handle_session_command(app: &mut App, command: SessionCommand) {
    app.apply(command);
}

pub(super) fn handle_toggle_rules(app: &mut App) {
    app.show_rules = !app.show_rules;
    app.config.show_rules = app.show_rules;
}

pub(super) fn handle_save_config(app: &mut App) {
    match config::save_config(&app.config) {
        Ok(()) => info!("Configuration saved"),
        Err(e) => {
            warn!(error = %e, "Failed to save configuration");
            app.message = Some(format!("Failed to save configuration: {e}"));
        }
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!(%message, "Error reported");
    app.message = Some(message);
}

pub(super) fn handle_tick(app: &mut App) {
    app.pulse = !app.pulse;
}
