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

//! Pause, resume, restart and destroy for the primary gameplay scene.
//!
//! The controller keeps no state of its own. Every operation re-reads the
//! scene's activity from the engine and only acts when the current state
//! allows it; anything else is a silent no-op, which makes all four
//! operations idempotent.

use crate::state::ShellState;
use stackrunner_core::{SceneActivity, SceneKey};

/// Lifecycle of the primary gameplay scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    /// No engine yet, or the scene has not been started.
    NotStarted,
    /// The scene is running.
    Active,
    /// The scene is suspended.
    Paused,
    /// The engine was destroyed. Terminal.
    Destroyed,
}

impl LifecycleState {
    /// Returns `true` if `pause()` would have an effect.
    pub fn can_pause(self) -> bool {
        self == LifecycleState::Active
    }

    /// Returns `true` if `resume()` would have an effect.
    pub fn can_resume(self) -> bool {
        self == LifecycleState::Paused
    }

    /// Returns `true` if `restart()` would have an effect. A paused or
    /// not-started scene is never restarted.
    pub fn can_restart(self) -> bool {
        self == LifecycleState::Active
    }
}

/// Drives the lifecycle of one designated scene.
#[derive(Debug, Clone, Copy)]
pub struct LifecycleController {
    primary: SceneKey,
}

impl Default for LifecycleController {
    fn default() -> Self {
        Self::new(SceneKey::Game)
    }
}

impl LifecycleController {
    /// Creates a controller targeting `primary`.
    pub fn new(primary: SceneKey) -> Self {
        Self { primary }
    }

    /// The scene this controller drives.
    pub fn primary(&self) -> SceneKey {
        self.primary
    }

    /// Reads the current state from the engine.
    pub fn state(&self, shell: &ShellState) -> LifecycleState {
        match shell.engine() {
            None if shell.is_booted() => LifecycleState::Destroyed,
            None => LifecycleState::NotStarted,
            Some(engine) => match engine.scene_activity(self.primary) {
                SceneActivity::Active => LifecycleState::Active,
                SceneActivity::Paused => LifecycleState::Paused,
                SceneActivity::Inactive => LifecycleState::NotStarted,
            },
        }
    }

    /// Pauses the scene if it is running.
    ///
    /// ## Returns
    /// `true` if the scene was paused by this call.
    pub fn pause(&self, shell: &mut ShellState) -> bool {
        if !self.state(shell).can_pause() {
            log::trace!("pause ignored: {} is not active", self.primary);
            return false;
        }
        let Some(engine) = shell.engine_mut() else {
            return false;
        };
        engine.pause_scene(self.primary);
        log::info!("{} paused.", self.primary);
        true
    }

    /// Resumes the scene if it is paused.
    ///
    /// ## Returns
    /// `true` if the scene was resumed by this call.
    pub fn resume(&self, shell: &mut ShellState) -> bool {
        if !self.state(shell).can_resume() {
            log::trace!("resume ignored: {} is not paused", self.primary);
            return false;
        }
        let Some(engine) = shell.engine_mut() else {
            return false;
        };
        engine.resume_scene(self.primary);
        log::info!("{} resumed.", self.primary);
        true
    }

    /// Restarts the scene from a clean state if it is running.
    ///
    /// ## Returns
    /// `true` if the scene was restarted by this call.
    pub fn restart(&self, shell: &mut ShellState) -> bool {
        if !self.state(shell).can_restart() {
            log::trace!("restart ignored: {} is not active", self.primary);
            return false;
        }
        let Some(engine) = shell.engine_mut() else {
            return false;
        };
        engine.restart_scene(self.primary);
        log::info!("{} restarted.", self.primary);
        true
    }

    /// Tears down the whole engine, every scene included, and clears the handle.
    ///
    /// ## Returns
    /// `true` if an engine was destroyed by this call.
    pub fn destroy(&self, shell: &mut ShellState) -> bool {
        let Some(mut engine) = shell.take_engine() else {
            log::trace!("destroy ignored: no engine");
            return false;
        };
        engine.destroy(true);
        log::info!("Engine destroyed.");
        true
    }
}
