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

//! The contract between the shell and the engine it supervises.

use crate::config::EngineConfig;
use crate::event::Subscription;
use crate::scene::{GameplayScene, SceneActivity, SceneKey};
use thiserror::Error;

/// A failure raised inside the running engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineFault {
    /// The scene that raised the fault, if known.
    pub scene: Option<SceneKey>,
    /// Description of the fault.
    pub message: String,
}

impl EngineFault {
    /// Creates a fault not tied to any scene.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            scene: None,
            message: message.into(),
        }
    }
}

/// Engine construction failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("engine construction failed: {reason}")]
pub struct BootstrapFailure {
    /// Why construction failed.
    pub reason: String,
}

/// A live engine instance: the rendering, physics and scene-management runtime.
///
/// The scene-keyed operations mirror the engine's scene manager. They apply to
/// one scene at a time and never fail; asking for an operation a scene cannot
/// take is the caller's problem, which is why the shell checks
/// [`scene_activity`](GameEngine::scene_activity) first.
pub trait GameEngine {
    /// Reports the current activity of a scene.
    fn scene_activity(&self, key: SceneKey) -> SceneActivity;

    /// Returns `true` if the scene is running.
    fn is_active(&self, key: SceneKey) -> bool {
        self.scene_activity(key) == SceneActivity::Active
    }

    /// Returns `true` if the scene is suspended.
    fn is_paused(&self, key: SceneKey) -> bool {
        self.scene_activity(key) == SceneActivity::Paused
    }

    /// Suspends a scene.
    fn pause_scene(&mut self, key: SceneKey);

    /// Resumes a suspended scene.
    fn resume_scene(&mut self, key: SceneKey);

    /// Shuts a scene down and starts it again from a clean state.
    fn restart_scene(&mut self, key: SceneKey);

    /// Resolves the gameplay scene registered under `key`, if it exists.
    fn gameplay_scene(&mut self, key: SceneKey) -> Option<&mut dyn GameplayScene>;

    /// Subscribes to failures raised inside the engine.
    fn subscribe_faults(&self) -> Subscription<EngineFault>;

    /// Tears down every scene and releases the engine's resources.
    ///
    /// With `remove_canvas` the canvas is detached from the display as well.
    fn destroy(&mut self, remove_canvas: bool);
}

/// The engine library: builds engine instances from a configuration.
pub trait EngineFactory {
    /// Constructs a new engine.
    fn create(&self, config: &EngineConfig) -> Result<Box<dyn GameEngine>, BootstrapFailure>;
}
