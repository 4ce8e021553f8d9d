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

//! Identifiers for the collaborators the shell needs before it may boot.

use std::fmt;
use thiserror::Error;

/// A collaborator the shell checks for before boot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dependency {
    /// The rendering/physics/scene engine library.
    EngineLibrary,
    /// The game configuration object.
    Config,
    /// The maze-generation module.
    MazeGenerator,
    /// The collision-detection module.
    CollisionSystem,
    /// The wallet/ledger connectivity module.
    Connectivity,
}

impl Dependency {
    /// Every dependency, mandatory ones first.
    pub const ALL: [Dependency; 5] = [
        Dependency::EngineLibrary,
        Dependency::Config,
        Dependency::MazeGenerator,
        Dependency::CollisionSystem,
        Dependency::Connectivity,
    ];

    /// Returns `true` if boot cannot proceed without this dependency.
    pub const fn is_mandatory(self) -> bool {
        !matches!(self, Dependency::Connectivity)
    }

    /// Human-readable name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            Dependency::EngineLibrary => "engine library",
            Dependency::Config => "game configuration",
            Dependency::MazeGenerator => "maze generator",
            Dependency::CollisionSystem => "collision system",
            Dependency::Connectivity => "wallet connectivity",
        }
    }
}

impl fmt::Display for Dependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A mandatory dependency that was not provided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("required dependency '{dependency}' is not loaded")]
pub struct MissingDependency {
    /// The dependency that is absent.
    pub dependency: Dependency,
}

/// A collaborator module whose presence is all the shell checks.
///
/// The maze generator, the collision system and the connectivity module live
/// outside the shell; only their existence is verified.
pub trait CollaboratorModule {
    /// Identifier used in diagnostics.
    fn module_name(&self) -> &str;
}
