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

use common::{booted_shell, EngineHarness, Screen, WIDE};
use stackrunner_core::{Dependency, EventHub, HostViewport, SceneKey, ViewportMode};
use stackrunner_shell::shell::BOOT_FAILURE_TEXT;
use stackrunner_shell::{Shell, ShellError, ShellSettings};

#[test]
fn test_every_missing_mandatory_subset_aborts_boot() {
    let mandatory = [
        Dependency::EngineLibrary,
        Dependency::Config,
        Dependency::MazeGenerator,
        Dependency::CollisionSystem,
    ];

    for mask in 1u8..16 {
        // --- 1. ARRANGE ---
        let engine = EngineHarness::new();
        let screen = Screen::default();
        let mut shell = Shell::new(ShellSettings::default(), EventHub::new(), screen.clone());
        let mut caps = engine.capabilities();
        let mut expected = Vec::new();
        for (bit, dependency) in mandatory.iter().enumerate() {
            if mask & (1 << bit) == 0 {
                continue;
            }
            expected.push(*dependency);
            match dependency {
                Dependency::EngineLibrary => caps.engine_factory = None,
                Dependency::Config => caps.config = None,
                Dependency::MazeGenerator => caps.maze_generator = None,
                Dependency::CollisionSystem => caps.collision_system = None,
                Dependency::Connectivity => unreachable!(),
            }
        }

        // --- 2. ACT ---
        let result = shell.boot(caps, WIDE);

        // --- 3. ASSERT ---
        let Err(ShellError::MissingDependencies(missing)) = result else {
            panic!("mask {mask:04b} should fail verification");
        };
        let reported: Vec<_> = missing.iter().map(|m| m.dependency).collect();
        assert_eq!(reported, expected, "mask {mask:04b} reported the wrong set");
        assert_eq!(
            engine.log.borrow().constructions,
            0,
            "The engine must not be constructed when verification fails"
        );
        assert_eq!(screen.fallback.borrow().as_deref(), Some(BOOT_FAILURE_TEXT));
        assert!(!shell.is_booted());
    }
}

#[test]
fn test_missing_wallet_boots_without_blockchain_features() {
    let engine = EngineHarness::new();
    let mut shell = Shell::new(ShellSettings::default(), EventHub::new(), Screen::default());
    let mut caps = engine.capabilities();
    caps.connectivity = None;

    shell.boot(caps, WIDE).expect("connectivity is optional");

    assert!(!shell.features().wallet_enabled);
    assert!(shell.engine().is_some());
}

#[test]
fn test_second_boot_keeps_the_first_engine() {
    let mut booted = booted_shell();
    let second = EngineHarness::new();

    let result = booted.shell.boot(second.capabilities(), WIDE);

    assert!(matches!(result, Err(ShellError::AlreadyBooted)));
    assert_eq!(booted.engine.log.borrow().constructions, 1);
    assert_eq!(second.log.borrow().constructions, 0);
    assert!(booted.shell.engine().is_some());
}

#[test]
fn test_engine_config_follows_viewport() {
    let engine = EngineHarness::new();
    let mut shell = Shell::new(ShellSettings::default(), EventHub::new(), Screen::default());

    let profile = shell
        .boot(engine.capabilities(), HostViewport::new(600, 900))
        .unwrap();

    assert_eq!(profile.mode, ViewportMode::Responsive);
    let log = engine.log.borrow();
    let config = log.last_config.as_ref().unwrap();
    assert_eq!((config.width, config.height), (600, 900));
    assert_eq!(config.background_color, "#1a1a2e");
    assert_eq!(config.scenes.first(), Some(&SceneKey::Boot));
    assert_eq!(config.scenes.last(), Some(&SceneKey::Ui));
    assert_eq!(config.physics.gravity, (0.0, 0.0));
    assert_eq!(config.scale.min, (320, 240));
    assert_eq!(config.scale.max, (1200, 900));
}
