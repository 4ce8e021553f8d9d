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

//! # StackRunner Shell
//!
//! The application shell around the engine. It verifies the injected
//! collaborators, boots exactly one engine instance, and supervises it:
//!
//! - [`verifier`] checks that every mandatory collaborator is present.
//! - [`bootstrap`] derives the viewport profile and constructs the engine.
//! - [`interceptor`] turns engine and host failures into notifications.
//! - [`lifecycle`] pauses, resumes, restarts and destroys the gameplay scene.
//! - [`visibility`] pauses the game when the host goes to the background.
//! - [`debug`] exposes diagnostic commands that forward into the gameplay scene.
//!
//! [`Shell`] ties them together around a single [`ShellState`].

pub mod bootstrap;
pub mod debug;
pub mod error;
pub mod interceptor;
pub mod lifecycle;
pub mod notifications;
pub mod settings;
pub mod shell;
pub mod state;
pub mod verifier;
pub mod visibility;

#[cfg(test)]
mod test_support;

pub use bootstrap::EngineBootstrapper;
pub use debug::{DebugCommandRegistry, DebugDispatch};
pub use error::{DebugCommandError, ShellError};
pub use interceptor::{ErrorInterceptor, FailureChannel};
pub use lifecycle::{LifecycleController, LifecycleState};
pub use notifications::NotificationOverlay;
pub use settings::ShellSettings;
pub use shell::Shell;
pub use state::{FeatureFlags, ShellState};
pub use verifier::{Capabilities, DependencyVerifier, VerifiedCapabilities};
pub use visibility::VisibilityWatcher;
