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

#![allow(dead_code)]

use stackrunner_core::{
    BootstrapFailure, CollaboratorModule, DisplaySurface, EngineConfig, EngineFactory,
    EngineFault, ErrorNotification, EventHub, GameConfig, GameEngine, GameplayScene, HostEvent,
    HostViewport, NotificationId, Outcome, SceneActivity, SceneKey, Subscription,
};
use stackrunner_shell::{Capabilities, Shell, ShellSettings};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const WIDE: HostViewport = HostViewport::new(1280, 800);

/// What the scripted engine has been asked to do.
#[derive(Default)]
pub struct EngineLog {
    pub activity: HashMap<SceneKey, SceneActivity>,
    pub restarts: usize,
    pub destroyed: bool,
    pub renders: Vec<String>,
    pub constructions: usize,
    pub last_config: Option<EngineConfig>,
}

/// A scripted engine that starts its gameplay scene on construction, the way
/// the title flow eventually does.
#[derive(Clone)]
pub struct EngineHarness {
    pub log: Rc<RefCell<EngineLog>>,
    pub faults: EventHub<EngineFault>,
}

impl EngineHarness {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(EngineLog::default())),
            faults: EventHub::new(),
        }
    }

    pub fn activity(&self) -> SceneActivity {
        self.log
            .borrow()
            .activity
            .get(&SceneKey::Game)
            .copied()
            .unwrap_or_default()
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities::new()
            .with_engine_factory(ScriptedFactory {
                harness: self.clone(),
            })
            .with_config(GameConfig::default())
            .with_maze_generator(Module("maze"))
            .with_collision_system(Module("collision"))
            .with_connectivity(Module("wallet"))
    }
}

pub struct ScriptedFactory {
    harness: EngineHarness,
}

impl EngineFactory for ScriptedFactory {
    fn create(&self, config: &EngineConfig) -> Result<Box<dyn GameEngine>, BootstrapFailure> {
        {
            let mut log = self.harness.log.borrow_mut();
            log.constructions += 1;
            log.last_config = Some(config.clone());
            log.activity.insert(SceneKey::Game, SceneActivity::Active);
        }
        Ok(Box::new(ScriptedEngine {
            harness: self.harness.clone(),
            scene: ScriptedScene {
                log: Rc::clone(&self.harness.log),
            },
        }))
    }
}

pub struct ScriptedEngine {
    harness: EngineHarness,
    scene: ScriptedScene,
}

impl ScriptedEngine {
    fn set(&self, key: SceneKey, activity: SceneActivity) {
        self.harness.log.borrow_mut().activity.insert(key, activity);
    }
}

impl GameEngine for ScriptedEngine {
    fn scene_activity(&self, key: SceneKey) -> SceneActivity {
        self.harness
            .log
            .borrow()
            .activity
            .get(&key)
            .copied()
            .unwrap_or_default()
    }

    fn pause_scene(&mut self, key: SceneKey) {
        self.set(key, SceneActivity::Paused);
    }

    fn resume_scene(&mut self, key: SceneKey) {
        self.set(key, SceneActivity::Active);
    }

    fn restart_scene(&mut self, key: SceneKey) {
        self.harness.log.borrow_mut().restarts += 1;
        self.set(key, SceneActivity::Active);
    }

    fn gameplay_scene(&mut self, key: SceneKey) -> Option<&mut dyn GameplayScene> {
        (key == SceneKey::Game).then_some(&mut self.scene as &mut dyn GameplayScene)
    }

    fn subscribe_faults(&self) -> Subscription<EngineFault> {
        self.harness.faults.subscribe()
    }

    fn destroy(&mut self, _remove_canvas: bool) {
        let mut log = self.harness.log.borrow_mut();
        log.destroyed = true;
        log.activity.clear();
    }
}

pub struct ScriptedScene {
    log: Rc<RefCell<EngineLog>>,
}

impl GameplayScene for ScriptedScene {
    fn debug_show_victory(&mut self, outcome: Outcome) {
        self.log.borrow_mut().renders.push(format!("victory:{outcome}"));
    }

    fn debug_show_game_over(&mut self, outcome: Outcome) {
        self.log.borrow_mut().renders.push(format!("game_over:{outcome}"));
    }
}

pub struct Module(pub &'static str);

impl CollaboratorModule for Module {
    fn module_name(&self) -> &str {
        self.0
    }
}

/// Overlays currently drawn, plus whatever replaced the page.
#[derive(Clone, Default)]
pub struct Screen {
    pub overlays: Rc<RefCell<Vec<ErrorNotification>>>,
    pub fallback: Rc<RefCell<Option<String>>>,
}

impl Screen {
    pub fn messages(&self) -> Vec<String> {
        self.overlays
            .borrow()
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl DisplaySurface for Screen {
    fn append_overlay(&mut self, notification: &ErrorNotification) {
        self.overlays.borrow_mut().push(notification.clone());
    }

    fn remove_overlay(&mut self, id: NotificationId) {
        self.overlays.borrow_mut().retain(|n| n.id != id);
    }

    fn replace_contents(&mut self, text: &str) {
        self.overlays.borrow_mut().clear();
        *self.fallback.borrow_mut() = Some(text.to_string());
    }

    fn append_instructions(&mut self, _text: &str) -> bool {
        false
    }
}

/// A booted shell with handles on everything around it.
pub struct Booted {
    pub shell: Shell,
    pub engine: EngineHarness,
    pub host: EventHub<HostEvent>,
    pub screen: Screen,
}

pub fn booted_shell() -> Booted {
    let engine = EngineHarness::new();
    let host = EventHub::new();
    let screen = Screen::default();
    let mut shell = Shell::new(ShellSettings::default(), host.clone(), screen.clone());
    shell
        .boot(engine.capabilities(), WIDE)
        .expect("boot with every collaborator should succeed");
    Booted {
        shell,
        engine,
        host,
        screen,
    }
}
