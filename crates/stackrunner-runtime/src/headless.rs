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

//! A headless host and engine.
//!
//! The engine keeps a real scene state machine but renders nothing. The
//! surface prints to a writer.

use stackrunner_core::{
    BootstrapFailure, CollaboratorModule, DisplaySurface, EngineConfig, EngineFactory,
    EngineFault, ErrorNotification, EventHub, GameEngine, GameplayScene, NotificationId, Outcome,
    SceneActivity, SceneKey, Subscription,
};
use std::collections::HashMap;
use std::io::Write;

/// Builds [`HeadlessEngine`]s that raise faults on a shared hub.
pub struct HeadlessFactory {
    faults: EventHub<EngineFault>,
}

impl HeadlessFactory {
    pub fn new(faults: EventHub<EngineFault>) -> Self {
        Self { faults }
    }
}

impl EngineFactory for HeadlessFactory {
    fn create(&self, config: &EngineConfig) -> Result<Box<dyn GameEngine>, BootstrapFailure> {
        if config.width == 0 || config.height == 0 {
            return Err(BootstrapFailure {
                reason: format!("invalid canvas size {}x{}", config.width, config.height),
            });
        }
        Ok(Box::new(HeadlessEngine::start(config, self.faults.clone())))
    }
}

/// Runs the registered scenes without drawing them.
///
/// Construction runs the boot scene and goes straight to gameplay: the
/// title, wallet and maze-creation flows need a player in front of a screen.
pub struct HeadlessEngine {
    scenes: HashMap<SceneKey, SceneActivity>,
    gameplay: HeadlessGameScene,
    faults: EventHub<EngineFault>,
    destroyed: bool,
}

impl HeadlessEngine {
    pub fn start(config: &EngineConfig, faults: EventHub<EngineFault>) -> Self {
        let mut scenes: HashMap<_, _> = config
            .scenes
            .iter()
            .map(|key| (*key, SceneActivity::Inactive))
            .collect();
        log::info!(
            "Headless engine up: {}x{} canvas in #{} with {} scenes",
            config.width,
            config.height,
            config.parent,
            scenes.len()
        );

        for key in [SceneKey::Game, SceneKey::Ui] {
            if let Some(activity) = scenes.get_mut(&key) {
                *activity = SceneActivity::Active;
            }
        }

        Self {
            scenes,
            gameplay: HeadlessGameScene::default(),
            faults,
            destroyed: false,
        }
    }

    fn transition(&mut self, key: SceneKey, from: SceneActivity, to: SceneActivity) {
        match self.scenes.get_mut(&key) {
            Some(activity) if *activity == from => {
                *activity = to;
                log::debug!("{key}: {from:?} -> {to:?}");
            }
            Some(activity) => log::debug!("{key}: ignoring {to:?} while {activity:?}"),
            None => {
                self.faults.publish(EngineFault {
                    scene: Some(key),
                    message: "scene is not registered".to_string(),
                });
            }
        }
    }
}

impl GameEngine for HeadlessEngine {
    fn scene_activity(&self, key: SceneKey) -> SceneActivity {
        self.scenes.get(&key).copied().unwrap_or_default()
    }

    fn pause_scene(&mut self, key: SceneKey) {
        self.transition(key, SceneActivity::Active, SceneActivity::Paused);
    }

    fn resume_scene(&mut self, key: SceneKey) {
        self.transition(key, SceneActivity::Paused, SceneActivity::Active);
    }

    fn restart_scene(&mut self, key: SceneKey) {
        if key == SceneKey::Game {
            self.gameplay.reset();
        }
        if let Some(activity) = self.scenes.get_mut(&key) {
            *activity = SceneActivity::Active;
        }
    }

    fn gameplay_scene(&mut self, key: SceneKey) -> Option<&mut dyn GameplayScene> {
        if self.destroyed || key != SceneKey::Game {
            return None;
        }
        Some(&mut self.gameplay)
    }

    fn subscribe_faults(&self) -> Subscription<EngineFault> {
        self.faults.subscribe()
    }

    fn destroy(&mut self, remove_canvas: bool) {
        for activity in self.scenes.values_mut() {
            *activity = SceneActivity::Inactive;
        }
        self.destroyed = true;
        if remove_canvas {
            log::debug!("Canvas removed.");
        }
    }
}

/// The gameplay scene's end-of-round screens.
#[derive(Debug, Default)]
pub struct HeadlessGameScene {
    round: u32,
    screen: Option<(&'static str, Outcome)>,
}

impl HeadlessGameScene {
    fn reset(&mut self) {
        self.round += 1;
        self.screen = None;
        log::info!("Round {} started.", self.round + 1);
    }

    fn show(&mut self, screen: &'static str, outcome: Outcome) {
        self.screen = Some((screen, outcome));
        log::info!("Round {}: {screen} screen ({outcome})", self.round + 1);
    }
}

impl GameplayScene for HeadlessGameScene {
    fn debug_show_victory(&mut self, outcome: Outcome) {
        self.show("victory", outcome);
    }

    fn debug_show_game_over(&mut self, outcome: Outcome) {
        self.show("game over", outcome);
    }
}

/// A collaborator that only needs to exist.
pub struct NamedModule(pub &'static str);

impl CollaboratorModule for NamedModule {
    fn module_name(&self) -> &str {
        self.0
    }
}

/// Draws the shell's UI as lines of text.
pub struct TerminalSurface<W: Write> {
    out: W,
}

impl<W: Write> TerminalSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if let Err(err) = self.out.write_fmt(format_args!("{text}\n")) {
            log::warn!("Failed to write to the terminal: {err}");
        }
    }
}

impl<W: Write> DisplaySurface for TerminalSurface<W> {
    fn append_overlay(&mut self, notification: &ErrorNotification) {
        self.line(format_args!("[!] {} {}", notification.id, notification.message));
    }

    fn remove_overlay(&mut self, id: NotificationId) {
        self.line(format_args!("[-] {id}"));
    }

    fn replace_contents(&mut self, text: &str) {
        self.line(format_args!("{text}"));
    }

    fn append_instructions(&mut self, text: &str) -> bool {
        self.line(format_args!("{text}"));
        true
    }
}
