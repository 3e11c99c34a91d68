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

//! Application configuration.
//!
//! This module manages the application configuration file. Only preferences
//! live here; scores are never written to disk.

use serde::{Deserialize, Serialize};

const CONFIG_NAME: &str = "oxo";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,

    /// Capture mouse events so cells can be clicked.
    pub mouse: bool,

    /// Interval between UI ticks, in milliseconds.
    pub tick_rate_ms: u64,

    /// Show the "How to Play" panel at start-up.
    pub show_rules: bool,

    pub log_file: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            mouse: true,
            tick_rate_ms: 250,
            show_rules: true,
            log_file: "oxo.log".to_string(),
        }
    }
}

/// Loads the configuration file, creating it with defaults on first run.
///
/// Logging is configured from the result, so a failure is returned to the
/// caller to report once a subscriber exists.
pub fn load_config() -> Result<AppConfig, confy::ConfyError> {
    confy::load(CONFIG_NAME, None)
}

pub fn save_config(cfg: &AppConfig) -> Result<(), confy::ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

