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

//! The shell's single piece of mutable state.

use stackrunner_core::{GameEngine, ViewportProfile};

/// Optional features, cleared when their collaborator is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Wallet and ledger features. Cleared without a connectivity module.
    pub wallet_enabled: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            wallet_enabled: true,
        }
    }
}

/// State owned by one shell.
///
/// Holds the only engine handle. At most one engine is ever constructed per
/// `ShellState`: `booted` stays set after the engine is destroyed.
#[derive(Default)]
pub struct ShellState {
    engine: Option<Box<dyn GameEngine>>,
    booted: bool,
    features: FeatureFlags,
    viewport: Option<ViewportProfile>,
}

impl ShellState {
    /// Creates an empty, not-yet-booted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once an engine has been installed, even if it was
    /// destroyed since.
    pub fn is_booted(&self) -> bool {
        self.booted
    }

    /// The live engine, if any.
    pub fn engine(&self) -> Option<&dyn GameEngine> {
        self.engine.as_deref()
    }

    /// The live engine, mutably.
    pub fn engine_mut(&mut self) -> Option<&mut (dyn GameEngine + 'static)> {
        self.engine.as_deref_mut()
    }

    /// Feature flags computed at boot.
    pub fn features(&self) -> FeatureFlags {
        self.features
    }

    /// The viewport profile computed at boot.
    pub fn viewport(&self) -> Option<ViewportProfile> {
        self.viewport
    }

    /// Installs a freshly constructed engine and marks the state booted.
    pub(crate) fn install(
        &mut self,
        engine: Box<dyn GameEngine>,
        features: FeatureFlags,
        viewport: ViewportProfile,
    ) {
        debug_assert!(!self.booted, "engine installed twice");
        self.engine = Some(engine);
        self.booted = true;
        self.features = features;
        self.viewport = Some(viewport);
    }

    /// Removes the engine, leaving the state booted but engine-less.
    pub(crate) fn take_engine(&mut self) -> Option<Box<dyn GameEngine>> {
        self.engine.take()
    }
}
