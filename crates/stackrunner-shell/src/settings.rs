// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Tunables of the shell itself, as opposed to the game configuration.

use serde::{Deserialize, Serialize};
use stackrunner_core::config::DEFAULT_CANVAS_PARENT;
use stackrunner_core::viewport::DEFAULT_RESPONSIVE_BREAKPOINT;
use std::time::Duration;

/// Shell configuration. Every field has a default, so an empty document is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellSettings {
    /// How long an error notification stays on screen, in milliseconds.
    #[serde(default = "default_dwell_ms")]
    pub notification_dwell_ms: u64,
    /// Viewport widths at or below this fill the viewport.
    #[serde(default = "default_breakpoint")]
    pub responsive_breakpoint: u32,
    /// Id of the element the canvas is attached to.
    #[serde(default = "default_canvas_parent")]
    pub canvas_parent: String,
    /// Appended to the instructions area after a successful boot.
    #[serde(default = "default_instructions_hint")]
    pub instructions_hint: String,
}

fn default_dwell_ms() -> u64 {
    5000
}

fn default_breakpoint() -> u32 {
    DEFAULT_RESPONSIVE_BREAKPOINT
}

fn default_canvas_parent() -> String {
    DEFAULT_CANVAS_PARENT.to_string()
}

fn default_instructions_hint() -> String {
    "Press L for Leaderboard • Press S for Stats • Press P to Pause".to_string()
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            notification_dwell_ms: default_dwell_ms(),
            responsive_breakpoint: default_breakpoint(),
            canvas_parent: default_canvas_parent(),
            instructions_hint: default_instructions_hint(),
        }
    }
}

impl ShellSettings {
    /// The notification dwell time.
    pub fn notification_dwell(&self) -> Duration {
        Duration::from_millis(self.notification_dwell_ms)
    }
}
