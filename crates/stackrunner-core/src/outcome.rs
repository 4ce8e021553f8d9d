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

//! End-of-round outcomes accepted by the debug commands.

use std::fmt;

/// Who won a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Outcome {
    /// The player reached the goal first.
    #[default]
    PlayerWins,
    /// The villain reached the goal first.
    VillainWins,
    /// Nobody won.
    Draw,
}

impl Outcome {
    /// Parses an outcome scenario string.
    ///
    /// Accepts `"player"`, `"villain"` and `"draw"` (case-insensitive, surrounding
    /// whitespace ignored). Anything else, including no argument at all, falls back
    /// to [`Outcome::PlayerWins`].
    pub fn from_scenario(scenario: Option<&str>) -> Self {
        let Some(raw) = scenario else {
            return Self::default();
        };

        match raw.trim().to_ascii_lowercase().as_str() {
            "player" => Outcome::PlayerWins,
            "villain" => Outcome::VillainWins,
            "draw" => Outcome::Draw,
            other => {
                log::debug!("Unrecognised outcome '{other}', defaulting to player.");
                Self::default()
            }
        }
    }

    /// The scenario string this outcome is parsed from.
    pub const fn as_scenario(self) -> &'static str {
        match self {
            Outcome::PlayerWins => "player",
            Outcome::VillainWins => "villain",
            Outcome::Draw => "draw",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_scenario())
    }
}
