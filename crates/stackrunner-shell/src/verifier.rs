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

//! Checks the injected collaborators before boot.
//!
//! Collaborators are handed to the shell as [`Capabilities`], a bag of optional
//! references. Verification turns it into [`VerifiedCapabilities`], whose
//! mandatory fields are no longer optional, so the bootstrapper cannot run with
//! anything missing.

use crate::state::FeatureFlags;
use stackrunner_core::{CollaboratorModule, Dependency, EngineFactory, GameConfig, MissingDependency};

/// Collaborators offered to the shell. Any of them may be missing.
#[derive(Default)]
pub struct Capabilities {
    /// The engine library.
    pub engine_factory: Option<Box<dyn EngineFactory>>,
    /// The game configuration object.
    pub config: Option<GameConfig>,
    /// The maze-generation module.
    pub maze_generator: Option<Box<dyn CollaboratorModule>>,
    /// The collision-detection module.
    pub collision_system: Option<Box<dyn CollaboratorModule>>,
    /// The wallet connectivity module. Optional.
    pub connectivity: Option<Box<dyn CollaboratorModule>>,
}

impl Capabilities {
    /// Creates an empty set of capabilities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provides the engine library.
    pub fn with_engine_factory(mut self, factory: impl EngineFactory + 'static) -> Self {
        self.engine_factory = Some(Box::new(factory));
        self
    }

    /// Provides the game configuration.
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Provides the maze generator.
    pub fn with_maze_generator(mut self, module: impl CollaboratorModule + 'static) -> Self {
        self.maze_generator = Some(Box::new(module));
        self
    }

    /// Provides the collision system.
    pub fn with_collision_system(mut self, module: impl CollaboratorModule + 'static) -> Self {
        self.collision_system = Some(Box::new(module));
        self
    }

    /// Provides the wallet connectivity module.
    pub fn with_connectivity(mut self, module: impl CollaboratorModule + 'static) -> Self {
        self.connectivity = Some(Box::new(module));
        self
    }

    fn is_present(&self, dependency: Dependency) -> bool {
        match dependency {
            Dependency::EngineLibrary => self.engine_factory.is_some(),
            Dependency::Config => self.config.is_some(),
            Dependency::MazeGenerator => self.maze_generator.is_some(),
            Dependency::CollisionSystem => self.collision_system.is_some(),
            Dependency::Connectivity => self.connectivity.is_some(),
        }
    }
}

/// Collaborators that passed verification.
pub struct VerifiedCapabilities {
    /// The engine library.
    pub engine_factory: Box<dyn EngineFactory>,
    /// The game configuration object.
    pub config: GameConfig,
    /// The maze-generation module.
    pub maze_generator: Box<dyn CollaboratorModule>,
    /// The collision-detection module.
    pub collision_system: Box<dyn CollaboratorModule>,
    /// The wallet connectivity module, if provided.
    pub connectivity: Option<Box<dyn CollaboratorModule>>,
    /// Features available with these collaborators.
    pub features: FeatureFlags,
}

/// Validates [`Capabilities`] before boot.
pub struct DependencyVerifier;

impl DependencyVerifier {
    /// Verifies that every mandatory collaborator is present.
    ///
    /// Logs one entry per missing or absent dependency before returning.
    ///
    /// ## Returns
    /// The verified collaborators, or one [`MissingDependency`] per missing
    /// mandatory collaborator. A missing connectivity module is not an error; it
    /// clears [`FeatureFlags::wallet_enabled`].
    pub fn verify(
        capabilities: Capabilities,
    ) -> Result<VerifiedCapabilities, Vec<MissingDependency>> {
        let mut missing = Vec::new();
        let mut features = FeatureFlags::default();

        for dependency in Dependency::ALL {
            if capabilities.is_present(dependency) {
                continue;
            }
            if dependency.is_mandatory() {
                log::error!("{} not loaded", dependency);
                missing.push(MissingDependency { dependency });
            } else {
                log::warn!("{} not loaded - blockchain features will be disabled", dependency);
                features.wallet_enabled = false;
            }
        }

        let Capabilities {
            engine_factory,
            config,
            maze_generator,
            collision_system,
            connectivity,
        } = capabilities;

        match (engine_factory, config, maze_generator, collision_system) {
            (Some(engine_factory), Some(config), Some(maze_generator), Some(collision_system))
                if missing.is_empty() =>
            {
                log::debug!(
                    "Collaborators verified: {}, {}{}",
                    maze_generator.module_name(),
                    collision_system.module_name(),
                    connectivity
                        .as_ref()
                        .map(|c| format!(", {}", c.module_name()))
                        .unwrap_or_default()
                );
                Ok(VerifiedCapabilities {
                    engine_factory,
                    config,
                    maze_generator,
                    collision_system,
                    connectivity,
                    features,
                })
            }
            _ => Err(missing),
        }
    }
}
