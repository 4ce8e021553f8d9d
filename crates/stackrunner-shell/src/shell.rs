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

//! The shell context object: one per application.

use crate::bootstrap::EngineBootstrapper;
use crate::debug::{DebugCommandRegistry, DebugDispatch};
use crate::error::{DebugCommandError, ShellError};
use crate::interceptor::{ErrorInterceptor, GAME_ERROR_MESSAGE};
use crate::lifecycle::{LifecycleController, LifecycleState};
use crate::notifications::NotificationOverlay;
use crate::settings::ShellSettings;
use crate::state::{FeatureFlags, ShellState};
use crate::verifier::{Capabilities, DependencyVerifier};
use crate::visibility::VisibilityWatcher;
use stackrunner_core::{
    DisplaySurface, ErrorNotification, EventHub, GameEngine, HostEvent, HostViewport,
    NotificationId, SceneKey, ViewportProfile,
};
use std::time::Instant;

/// Replaces the display surface when the engine cannot be brought up.
pub const BOOT_FAILURE_TEXT: &str = "Error: Failed to load game engine. Please refresh the page.";

/// Owns the engine and everything wired against it.
///
/// Host events are published onto the hub given to [`Shell::new`] and handled
/// on the next [`Shell::pump`]. Nothing runs in the background.
pub struct Shell {
    settings: ShellSettings,
    state: ShellState,
    host_events: EventHub<HostEvent>,
    surface: Box<dyn DisplaySurface>,
    overlay: NotificationOverlay,
    lifecycle: LifecycleController,
    interceptor: Option<ErrorInterceptor>,
    watcher: Option<VisibilityWatcher>,
    debug: Option<DebugCommandRegistry>,
}

impl Shell {
    /// Creates an unbooted shell drawing onto `surface`.
    pub fn new(
        settings: ShellSettings,
        host_events: EventHub<HostEvent>,
        surface: impl DisplaySurface + 'static,
    ) -> Self {
        let overlay = NotificationOverlay::new(settings.notification_dwell());
        Self {
            settings,
            state: ShellState::new(),
            host_events,
            surface: Box::new(surface),
            overlay,
            lifecycle: LifecycleController::new(SceneKey::Game),
            interceptor: None,
            watcher: None,
            debug: None,
        }
    }

    /// Boots the shell. See [`Shell::boot_at`].
    pub fn boot(
        &mut self,
        capabilities: Capabilities,
        viewport: HostViewport,
    ) -> Result<ViewportProfile, ShellError> {
        self.boot_at(capabilities, viewport, Instant::now())
    }

    /// Verifies the collaborators, constructs the engine and installs the
    /// error interceptor, visibility watcher and debug commands.
    ///
    /// A fatal failure replaces the display surface with [`BOOT_FAILURE_TEXT`]
    /// and leaves the shell unbooted. `now` timestamps any notification shown.
    pub fn boot_at(
        &mut self,
        capabilities: Capabilities,
        viewport: HostViewport,
        now: Instant,
    ) -> Result<ViewportProfile, ShellError> {
        if self.state.is_booted() {
            log::warn!("Boot requested but the shell is already booted.");
            return Err(ShellError::AlreadyBooted);
        }

        log::info!("Initializing StackRunner...");

        let verified = match DependencyVerifier::verify(capabilities) {
            Ok(verified) => verified,
            Err(missing) => {
                self.surface.replace_contents(BOOT_FAILURE_TEXT);
                let err = ShellError::MissingDependencies(missing);
                log::error!("{err}");
                return Err(err);
            }
        };
        log::info!("All dependencies loaded successfully");

        let bootstrapper = EngineBootstrapper::new(&self.settings);
        let profile = match bootstrapper.boot(&mut self.state, verified, viewport) {
            Ok(profile) => profile,
            Err(err) => {
                self.surface.replace_contents(BOOT_FAILURE_TEXT);
                self.overlay
                    .show(self.surface.as_mut(), GAME_ERROR_MESSAGE, now);
                return Err(err);
            }
        };

        if let Some(engine) = self.state.engine() {
            self.interceptor = Some(ErrorInterceptor::install(engine, &self.host_events));
        }
        self.watcher = Some(VisibilityWatcher::install(&self.host_events));

        let debug = DebugCommandRegistry::with_defaults(self.lifecycle.primary());
        debug.log_usage();
        self.debug = Some(debug);

        if !self
            .surface
            .append_instructions(&self.settings.instructions_hint)
        {
            log::debug!("Host has no instructions area; hint skipped.");
        }

        log::info!("StackRunner initialized successfully");
        Ok(profile)
    }

    /// Handles queued host and engine events and expires old notifications.
    pub fn pump(&mut self) -> Vec<NotificationId> {
        self.pump_at(Instant::now())
    }

    /// [`Shell::pump`] against an explicit clock.
    ///
    /// ## Returns
    /// The ids of the notifications shown by this pump.
    pub fn pump_at(&mut self, now: Instant) -> Vec<NotificationId> {
        let shown = match &self.interceptor {
            Some(interceptor) => interceptor.dispatch(&mut self.overlay, self.surface.as_mut(), now),
            None => Vec::new(),
        };
        if let Some(watcher) = &self.watcher {
            watcher.dispatch(&self.lifecycle, &mut self.state);
        }
        let expired = self.overlay.expire(self.surface.as_mut(), now);
        if expired > 0 {
            log::trace!("{expired} notification(s) expired.");
        }
        shown
    }

    /// Pauses the gameplay scene if it is running.
    pub fn pause_game(&mut self) -> bool {
        self.lifecycle.pause(&mut self.state)
    }

    /// Resumes the gameplay scene if it is paused.
    pub fn resume_game(&mut self) -> bool {
        self.lifecycle.resume(&mut self.state)
    }

    /// Restarts the gameplay scene if it is running.
    pub fn restart_game(&mut self) -> bool {
        self.lifecycle.restart(&mut self.state)
    }

    /// Destroys the engine. The shell cannot be booted again afterwards.
    pub fn destroy(&mut self) -> bool {
        self.lifecycle.destroy(&mut self.state)
    }

    /// Destroys the engine, removes every listener and clears the overlays.
    pub fn shutdown(&mut self) {
        self.destroy();
        if let Some(interceptor) = self.interceptor.take() {
            interceptor.dispose();
        }
        if let Some(watcher) = self.watcher.take() {
            watcher.dispose();
        }
        self.debug = None;
        self.overlay.clear(self.surface.as_mut());
    }

    /// Current state of the gameplay scene, read from the engine.
    pub fn lifecycle_state(&self) -> LifecycleState {
        self.lifecycle.state(&self.state)
    }

    /// Runs a debug command against the gameplay scene.
    ///
    /// Commands exist only after a successful boot; before that every name is
    /// unknown.
    pub fn run_debug_command(
        &mut self,
        name: &str,
        scenario: Option<&str>,
    ) -> Result<DebugDispatch, DebugCommandError> {
        match &self.debug {
            Some(debug) => debug.invoke(name, scenario, &mut self.state),
            None => Err(DebugCommandError::UnknownCommand(name.to_string())),
        }
    }

    /// Names of the registered debug commands.
    pub fn debug_commands(&self) -> Vec<&str> {
        self.debug
            .as_ref()
            .map(|debug| debug.names().collect())
            .unwrap_or_default()
    }

    /// Removes a notification before its dwell time is up.
    pub fn dismiss_notification(&mut self, id: NotificationId) -> bool {
        self.overlay.dismiss(self.surface.as_mut(), id)
    }

    /// The notifications currently on screen, oldest first.
    pub fn notifications(&self) -> &[ErrorNotification] {
        self.overlay.live()
    }

    /// Read-only access to the engine, if one is running.
    pub fn engine(&self) -> Option<&dyn GameEngine> {
        self.state.engine()
    }

    /// Whether a boot ever succeeded.
    pub fn is_booted(&self) -> bool {
        self.state.is_booted()
    }

    /// Feature flags computed at boot.
    pub fn features(&self) -> FeatureFlags {
        self.state.features()
    }

    /// Canvas profile computed at boot.
    pub fn viewport_profile(&self) -> Option<ViewportProfile> {
        self.state.viewport()
    }

    /// The settings this shell was created with.
    pub fn settings(&self) -> &ShellSettings {
        &self.settings
    }
}
