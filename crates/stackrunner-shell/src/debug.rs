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

//! Diagnostic commands that can be invoked from outside the game.
//!
//! Commands are registered once at boot. Each takes an optional outcome
//! scenario and forwards it to a debug entry point of the gameplay scene.

use crate::error::DebugCommandError;
use crate::state::ShellState;
use stackrunner_core::{GameplayScene, Outcome, SceneKey};
use std::collections::BTreeMap;

/// Shows the victory screen.
pub const DEBUG_VICTORY: &str = "debugVictory";

/// Shows the game-over screen.
pub const DEBUG_GAME_OVER: &str = "debugGameOver";

type ForwardFn = Box<dyn Fn(&mut dyn GameplayScene, Outcome)>;

struct DebugCommand {
    description: String,
    forward: ForwardFn,
}

/// What happened to an invoked command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugDispatch {
    /// The gameplay scene received the command.
    Forwarded(Outcome),
    /// The gameplay scene could not be resolved; only a diagnostic was logged.
    SceneUnavailable,
}

/// Name → forwarding function. Re-registering a name replaces the command.
pub struct DebugCommandRegistry {
    target: SceneKey,
    commands: BTreeMap<String, DebugCommand>,
}

impl DebugCommandRegistry {
    /// Creates an empty registry forwarding into `target`.
    pub fn new(target: SceneKey) -> Self {
        Self {
            target,
            commands: BTreeMap::new(),
        }
    }

    /// Creates a registry with the victory and game-over commands.
    pub fn with_defaults(target: SceneKey) -> Self {
        let mut registry = Self::new(target);
        registry.register(DEBUG_VICTORY, "Show victory screen", |scene, outcome| {
            scene.debug_show_victory(outcome)
        });
        registry.register(DEBUG_GAME_OVER, "Show game over screen", |scene, outcome| {
            scene.debug_show_game_over(outcome)
        });
        registry
    }

    /// Registers a command. The last registration of a name wins.
    pub fn register(
        &mut self,
        name: &str,
        description: &str,
        forward: impl Fn(&mut dyn GameplayScene, Outcome) + 'static,
    ) {
        let replaced = self
            .commands
            .insert(
                name.to_string(),
                DebugCommand {
                    description: description.to_string(),
                    forward: Box::new(forward),
                },
            )
            .is_some();
        if replaced {
            log::debug!("Debug command '{name}' re-registered.");
        }
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Logs how to call every command with every outcome.
    pub fn log_usage(&self) {
        log::info!("Debug helpers loaded! Use these commands:");
        for (name, command) in &self.commands {
            for outcome in [Outcome::PlayerWins, Outcome::VillainWins, Outcome::Draw] {
                log::info!(
                    "  {name}(\"{scenario}\") - {description} ({outcome:?})",
                    scenario = outcome.as_scenario(),
                    description = command.description,
                );
            }
        }
    }

    /// Runs a command.
    ///
    /// An unrecognised or missing scenario falls back to
    /// [`Outcome::PlayerWins`]. An unresolvable gameplay scene is logged and
    /// reported as [`DebugDispatch::SceneUnavailable`]; only an unknown command
    /// name is an error.
    pub fn invoke(
        &self,
        name: &str,
        scenario: Option<&str>,
        shell: &mut ShellState,
    ) -> Result<DebugDispatch, DebugCommandError> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| DebugCommandError::UnknownCommand(name.to_string()))?;
        let outcome = Outcome::from_scenario(scenario);

        let Some(scene) = shell
            .engine_mut()
            .and_then(|engine| engine.gameplay_scene(self.target))
        else {
            log::error!("{} not found", self.target);
            return Ok(DebugDispatch::SceneUnavailable);
        };

        (command.forward)(scene, outcome);
        Ok(DebugDispatch::Forwarded(outcome))
    }
}
