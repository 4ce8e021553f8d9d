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

use super::game::GameConfig;
use crate::scene::SceneKey;
use crate::viewport::ViewportProfile;
use serde::Serialize;

/// DOM-style id of the element the canvas is attached to.
pub const DEFAULT_CANVAS_PARENT: &str = "game-container";

/// Everything the engine library needs to construct an engine instance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineConfig {
    /// Canvas width in logical pixels.
    pub width: u32,
    /// Canvas height in logical pixels.
    pub height: u32,
    /// Id of the element the canvas is attached to.
    pub parent: String,
    /// Clear colour of the canvas.
    pub background_color: String,
    /// Scenes to register, in precedence order. Only the first is started.
    pub scenes: Vec<SceneKey>,
    /// Physics subsystem settings.
    pub physics: PhysicsConfig,
    /// Canvas scaling policy.
    pub scale: ScaleConfig,
    /// Rasterisation settings.
    pub render: RenderConfig,
    /// Input settings.
    pub input: InputConfig,
}

impl EngineConfig {
    /// Assembles the engine configuration for a viewport profile.
    pub fn assemble(profile: &ViewportProfile, game: &GameConfig, parent: &str) -> Self {
        Self {
            width: profile.width,
            height: profile.height,
            parent: parent.to_string(),
            background_color: game.colors.background.clone(),
            scenes: SceneKey::REGISTRATION_ORDER.to_vec(),
            physics: PhysicsConfig::default(),
            scale: ScaleConfig::default(),
            render: RenderConfig::default(),
            input: InputConfig::default(),
        }
    }
}

/// Arcade-style 2D physics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PhysicsConfig {
    /// Ambient gravity as `(x, y)`.
    pub gravity: (f32, f32),
    /// Draws collision bodies when `true`.
    pub debug: bool,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: (0.0, 0.0),
            debug: false,
        }
    }
}

/// How the canvas is scaled to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScaleMode {
    /// Scale uniformly until one axis fills the parent.
    Fit,
}

/// Canvas scaling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScaleConfig {
    /// Scaling mode.
    pub mode: ScaleMode,
    /// Centre the canvas on both axes.
    pub center_both: bool,
    /// Smallest scaled size as `(width, height)`.
    pub min: (u32, u32),
    /// Largest scaled size as `(width, height)`.
    pub max: (u32, u32),
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            mode: ScaleMode::Fit,
            center_both: true,
            min: (320, 240),
            max: (1200, 900),
        }
    }
}

/// Rasterisation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderConfig {
    /// Smooth edges.
    pub antialias: bool,
    /// Nearest-neighbour sampling for pixel art.
    pub pixel_art: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            antialias: true,
            pixel_art: false,
        }
    }
}

/// Input settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputConfig {
    /// Accept touch input.
    pub touch: bool,
    /// Pointer smoothing; `0.0` disables it.
    pub smooth_factor: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            touch: true,
            smooth_factor: 0.0,
        }
    }
}
