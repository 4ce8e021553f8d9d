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

//! # StackRunner Core
//!
//! Foundational crate containing the contracts the shell supervises and the
//! value types exchanged across them: scenes, outcomes, viewport profiles,
//! engine configuration, host events and error notifications.
//!
//! Nothing here renders, simulates or handles input. The types describe the
//! narrow surface the shell needs from the engine and the host environment.

#![warn(missing_docs)]

pub mod config;
pub mod dependency;
pub mod engine;
pub mod event;
pub mod host;
pub mod notification;
pub mod outcome;
pub mod scene;
pub mod viewport;

pub use config::{EngineConfig, GameConfig, Palette};
pub use dependency::{CollaboratorModule, Dependency, MissingDependency};
pub use engine::{BootstrapFailure, EngineFactory, EngineFault, GameEngine};
pub use event::{EventHub, Subscription};
pub use host::{DisplaySurface, HostEvent, HostViewport};
pub use notification::{ErrorNotification, NotificationId};
pub use outcome::Outcome;
pub use scene::{GameplayScene, SceneActivity, SceneKey};
pub use viewport::{ViewportMode, ViewportProfile};
