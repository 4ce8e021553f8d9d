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

mod common;

use common::{booted_shell, EngineHarness, Screen};
use stackrunner_core::{EventHub, Outcome};
use stackrunner_shell::{DebugCommandError, DebugDispatch, Shell, ShellSettings};

#[test]
fn test_debug_commands_forward_to_gameplay_scene() {
    let mut booted = booted_shell();

    let victory = booted.shell.run_debug_command("debugVictory", Some("draw"));
    let game_over = booted.shell.run_debug_command("debugGameOver", None);

    assert_eq!(victory, Ok(DebugDispatch::Forwarded(Outcome::Draw)));
    assert_eq!(game_over, Ok(DebugDispatch::Forwarded(Outcome::PlayerWins)));
    assert_eq!(
        booted.engine.log.borrow().renders,
        vec!["victory:draw", "game_over:player"]
    );
}

#[test]
fn test_unrecognised_outcome_falls_back_to_player() {
    let mut booted = booted_shell();

    let result = booted.shell.run_debug_command("debugVictory", Some("alien"));

    assert_eq!(result, Ok(DebugDispatch::Forwarded(Outcome::PlayerWins)));
}

#[test]
fn test_debug_commands_after_destroy_do_nothing() {
    let mut booted = booted_shell();
    booted.shell.destroy();

    let result = booted.shell.run_debug_command("debugGameOver", Some("villain"));

    assert_eq!(result, Ok(DebugDispatch::SceneUnavailable));
    assert!(booted.engine.log.borrow().renders.is_empty());
}

#[test]
fn test_commands_do_not_exist_before_boot() {
    let engine = EngineHarness::new();
    let mut shell = Shell::new(ShellSettings::default(), EventHub::new(), Screen::default());
    assert!(shell.debug_commands().is_empty());

    let result = shell.run_debug_command("debugVictory", None);
    assert_eq!(
        result,
        Err(DebugCommandError::UnknownCommand("debugVictory".to_string()))
    );

    shell.boot(engine.capabilities(), common::WIDE).unwrap();
    assert_eq!(shell.debug_commands(), vec!["debugGameOver", "debugVictory"]);
}
