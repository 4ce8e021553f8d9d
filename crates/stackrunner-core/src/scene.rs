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

//! Scene identifiers, the activity states an engine reports for them, and the
//! debug contract exposed by the gameplay scene.

use crate::outcome::Outcome;
use serde::Serialize;
use std::fmt;

/// Identifies one of the scenes registered with the engine at boot.
///
/// The declaration order is the registration order: the boot/preload scene
/// comes first and fixes scene-switch precedence. Registration does not imply
/// that every scene is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SceneKey {
    /// Preloads assets and hands over to the title screen.
    Boot,
    /// The title screen.
    Title,
    /// The wallet-connection flow.
    ConnectWallet,
    /// The maze-creation flow.
    MazeCreation,
    /// The gameplay scene, target of lifecycle operations.
    Game,
    /// The overlay UI drawn on top of gameplay.
    Ui,
}

impl SceneKey {
    /// Every scene, in registration order.
    pub const REGISTRATION_ORDER: [SceneKey; 6] = [
        SceneKey::Boot,
        SceneKey::Title,
        SceneKey::ConnectWallet,
        SceneKey::MazeCreation,
        SceneKey::Game,
        SceneKey::Ui,
    ];

    /// The name the engine registers the scene under.
    pub const fn as_str(self) -> &'static str {
        match self {
            SceneKey::Boot => "BootScene",
            SceneKey::Title => "TitleScene",
            SceneKey::ConnectWallet => "ConnectWalletScene",
            SceneKey::MazeCreation => "MazeCreationScene",
            SceneKey::Game => "GameScene",
            SceneKey::Ui => "UIScene",
        }
    }
}

impl fmt::Display for SceneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The activity of a scene as reported by the engine.
///
/// The shell never caches this value; it is re-read before every lifecycle
/// operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneActivity {
    /// Not yet started, or already shut down.
    #[default]
    Inactive,
    /// Running and receiving updates.
    Active,
    /// Started but suspended.
    Paused,
}

/// Debug-rendering entry points of the gameplay scene.
///
/// Both methods render an end-of-round screen for the given outcome without
/// touching the actual game state.
pub trait GameplayScene {
    /// Shows the victory screen.
    fn debug_show_victory(&mut self, outcome: Outcome);

    /// Shows the game-over screen.
    fn debug_show_game_over(&mut self, outcome: Outcome);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_starts_with_boot() {
        assert_eq!(SceneKey::REGISTRATION_ORDER[0], SceneKey::Boot);
        assert_eq!(SceneKey::REGISTRATION_ORDER[5], SceneKey::Ui);
    }

    #[test]
    fn test_scene_names_are_unique() {
        let mut names: Vec<_> = SceneKey::REGISTRATION_ORDER
            .iter()
            .map(|k| k.as_str())
            .collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), SceneKey::REGISTRATION_ORDER.len());
    }

    #[test]
    fn test_display_uses_registered_name() {
        assert_eq!(SceneKey::Game.to_string(), "GameScene");
    }

    #[test]
    fn test_default_activity_is_inactive() {
        assert_eq!(SceneActivity::default(), SceneActivity::Inactive);
    }
}
