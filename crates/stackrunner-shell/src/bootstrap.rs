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

//! Constructs the single engine instance from verified collaborators.

use crate::error::ShellError;
use crate::settings::ShellSettings;
use crate::state::ShellState;
use crate::verifier::VerifiedCapabilities;
use stackrunner_core::{EngineConfig, HostViewport, ViewportProfile};

/// Derives the canvas profile, assembles the engine configuration and asks
/// the engine library for an instance.
pub struct EngineBootstrapper {
    breakpoint: u32,
    canvas_parent: String,
}

impl EngineBootstrapper {
    /// Creates a bootstrapper from the shell settings.
    pub fn new(settings: &ShellSettings) -> Self {
        Self {
            breakpoint: settings.responsive_breakpoint,
            canvas_parent: settings.canvas_parent.clone(),
        }
    }

    fn profile(&self, capabilities: &VerifiedCapabilities, host: HostViewport) -> ViewportProfile {
        ViewportProfile::derive(host, capabilities.config.base_dimensions(), self.breakpoint)
    }

    /// The configuration the engine will be built with for `host`.
    pub fn plan(&self, capabilities: &VerifiedCapabilities, host: HostViewport) -> EngineConfig {
        let profile = self.profile(capabilities, host);
        EngineConfig::assemble(&profile, &capabilities.config, &self.canvas_parent)
    }

    /// Constructs the engine and installs it into `shell`.
    ///
    /// At most one construction is ever attempted per successful boot: once
    /// the state is booted every further call fails with
    /// [`ShellError::AlreadyBooted`] without touching the factory.
    ///
    /// ## Returns
    /// The viewport profile the engine was built with.
    pub fn boot(
        &self,
        shell: &mut ShellState,
        capabilities: VerifiedCapabilities,
        host: HostViewport,
    ) -> Result<ViewportProfile, ShellError> {
        if shell.is_booted() {
            return Err(ShellError::AlreadyBooted);
        }

        let profile = self.profile(&capabilities, host);
        log::debug!(
            "Viewport {}x{} -> canvas {}x{} ({:?})",
            host.width,
            host.height,
            profile.width,
            profile.height,
            profile.mode
        );

        let config = EngineConfig::assemble(&profile, &capabilities.config, &self.canvas_parent);
        let engine = capabilities.engine_factory.create(&config).map_err(|failure| {
            log::error!("Failed to initialize game: {failure}");
            failure
        })?;

        shell.install(engine, capabilities.features, profile);
        Ok(profile)
    }
}
