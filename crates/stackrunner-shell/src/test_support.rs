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

//! Fakes shared by the unit tests of this crate.

use crate::verifier::Capabilities;
use stackrunner_core::{
    BootstrapFailure, CollaboratorModule, DisplaySurface, EngineConfig, EngineFactory,
    EngineFault, ErrorNotification, EventHub, GameConfig, GameEngine, GameplayScene,
    NotificationId, Outcome, SceneActivity, SceneKey, Subscription,
};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// What the fake engine has been asked to do.
#[derive(Default)]
pub struct EngineProbe {
    pub activity: HashMap<SceneKey, SceneActivity>,
    pub restarts: usize,
    pub destroyed: bool,
    pub canvas_removed: bool,
    pub renders: Vec<(&'static str, Outcome)>,
    pub game_scene_missing: bool,
    pub config: Option<EngineConfig>,
    pub constructions: usize,
    pub fail_with: Option<String>,
}

/// Shared handles to a fake engine, kept by the test after the engine is boxed.
#[derive(Clone)]
pub struct EngineRig {
    pub probe: Rc<RefCell<EngineProbe>>,
    pub faults: EventHub<EngineFault>,
}

impl EngineRig {
    pub fn new() -> Self {
        Self {
            probe: Rc::new(RefCell::new(EngineProbe::default())),
            faults: EventHub::new(),
        }
    }

    pub fn factory(&self) -> FakeFactory {
        FakeFactory { rig: self.clone() }
    }

    pub fn engine(&self) -> Box<dyn GameEngine> {
        Box::new(FakeEngine {
            rig: self.clone(),
            scene: FakeGameScene {
                probe: Rc::clone(&self.probe),
            },
        })
    }

    pub fn set_activity(&self, activity: SceneActivity) {
        self.probe
            .borrow_mut()
            .activity
            .insert(SceneKey::Game, activity);
    }

    pub fn activity(&self) -> SceneActivity {
        self.probe
            .borrow()
            .activity
            .get(&SceneKey::Game)
            .copied()
            .unwrap_or_default()
    }
}

pub struct FakeFactory {
    rig: EngineRig,
}

impl EngineFactory for FakeFactory {
    fn create(&self, config: &EngineConfig) -> Result<Box<dyn GameEngine>, BootstrapFailure> {
        let mut probe = self.rig.probe.borrow_mut();
        if let Some(reason) = probe.fail_with.clone() {
            return Err(BootstrapFailure { reason });
        }
        probe.constructions += 1;
        probe.config = Some(config.clone());
        drop(probe);
        Ok(self.rig.engine())
    }
}

/// Applies every request unconditionally, so the shell's guards are what
/// the tests observe.
pub struct FakeEngine {
    rig: EngineRig,
    scene: FakeGameScene,
}

impl GameEngine for FakeEngine {
    fn scene_activity(&self, key: SceneKey) -> SceneActivity {
        self.rig
            .probe
            .borrow()
            .activity
            .get(&key)
            .copied()
            .unwrap_or_default()
    }

    fn pause_scene(&mut self, key: SceneKey) {
        self.rig
            .probe
            .borrow_mut()
            .activity
            .insert(key, SceneActivity::Paused);
    }

    fn resume_scene(&mut self, key: SceneKey) {
        self.rig
            .probe
            .borrow_mut()
            .activity
            .insert(key, SceneActivity::Active);
    }

    fn restart_scene(&mut self, key: SceneKey) {
        let mut probe = self.rig.probe.borrow_mut();
        probe.restarts += 1;
        probe.activity.insert(key, SceneActivity::Active);
    }

    fn gameplay_scene(&mut self, key: SceneKey) -> Option<&mut dyn GameplayScene> {
        if key != SceneKey::Game || self.rig.probe.borrow().game_scene_missing {
            return None;
        }
        Some(&mut self.scene)
    }

    fn subscribe_faults(&self) -> Subscription<EngineFault> {
        self.rig.faults.subscribe()
    }

    fn destroy(&mut self, remove_canvas: bool) {
        let mut probe = self.rig.probe.borrow_mut();
        probe.destroyed = true;
        probe.canvas_removed = remove_canvas;
        probe.activity.clear();
    }
}

pub struct FakeGameScene {
    probe: Rc<RefCell<EngineProbe>>,
}

impl GameplayScene for FakeGameScene {
    fn debug_show_victory(&mut self, outcome: Outcome) {
        self.probe.borrow_mut().renders.push(("victory", outcome));
    }

    fn debug_show_game_over(&mut self, outcome: Outcome) {
        self.probe.borrow_mut().renders.push(("game_over", outcome));
    }
}

pub struct StubModule(pub &'static str);

impl CollaboratorModule for StubModule {
    fn module_name(&self) -> &str {
        self.0
    }
}

pub fn full_capabilities(rig: &EngineRig) -> Capabilities {
    Capabilities::new()
        .with_engine_factory(rig.factory())
        .with_config(GameConfig::default())
        .with_maze_generator(StubModule("maze"))
        .with_collision_system(StubModule("collision"))
        .with_connectivity(StubModule("wallet"))
}

/// Everything drawn on the fake display surface.
#[derive(Default)]
pub struct SurfaceLog {
    pub overlays: Vec<ErrorNotification>,
    pub removed: Vec<NotificationId>,
    pub replaced_with: Option<String>,
    pub instructions: Vec<String>,
    pub has_instructions: bool,
    pub panic_on_append: bool,
}

#[derive(Clone, Default)]
pub struct RecordingSurface {
    pub log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        let surface = Self::default();
        surface.log.borrow_mut().has_instructions = true;
        surface
    }

    pub fn visible_messages(&self) -> Vec<String> {
        self.log
            .borrow()
            .overlays
            .iter()
            .map(|n| n.message.clone())
            .collect()
    }
}

impl DisplaySurface for RecordingSurface {
    fn append_overlay(&mut self, notification: &ErrorNotification) {
        if self.log.borrow().panic_on_append {
            panic!("surface exploded");
        }
        self.log.borrow_mut().overlays.push(notification.clone());
    }

    fn remove_overlay(&mut self, id: NotificationId) {
        let mut log = self.log.borrow_mut();
        log.overlays.retain(|n| n.id != id);
        log.removed.push(id);
    }

    fn replace_contents(&mut self, text: &str) {
        let mut log = self.log.borrow_mut();
        log.overlays.clear();
        log.replaced_with = Some(text.to_string());
    }

    fn append_instructions(&mut self, text: &str) -> bool {
        let mut log = self.log.borrow_mut();
        if !log.has_instructions {
            return false;
        }
        log.instructions.push(text.to_string());
        true
    }
}
