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

//! Converts engine and host failures into notifications.
//!
//! Three channels are watched: faults raised inside the engine, synchronous
//! failures that escaped to the host, and deferred failures nobody handled.
//! Each failure ends in exactly one notification and one log entry; nothing is
//! rethrown.

use crate::notifications::NotificationOverlay;
use stackrunner_core::{
    DisplaySurface, EngineFault, EventHub, GameEngine, HostEvent, NotificationId, Subscription,
};
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

/// Shown for engine faults and uncaught host failures.
pub const GAME_ERROR_MESSAGE: &str = "Game error occurred. Please refresh the page.";

/// Shown for unhandled deferred failures. Most of them come from wallet and
/// ledger calls, hence the network wording.
pub const CONNECTION_ERROR_MESSAGE: &str = "Connection error. Please check your network.";

/// Where an intercepted failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureChannel {
    /// A fault raised inside the engine.
    EngineRuntime,
    /// A synchronous failure that reached the host.
    UncaughtHost,
    /// A deferred failure with no handler.
    UnhandledAsync,
}

impl FailureChannel {
    /// The message shown to the user for this channel.
    pub const fn user_message(self) -> &'static str {
        match self {
            FailureChannel::EngineRuntime | FailureChannel::UncaughtHost => GAME_ERROR_MESSAGE,
            FailureChannel::UnhandledAsync => CONNECTION_ERROR_MESSAGE,
        }
    }
}

/// Listeners on the three failure channels.
pub struct ErrorInterceptor {
    engine_faults: Subscription<EngineFault>,
    host_events: Subscription<HostEvent>,
}

impl ErrorInterceptor {
    /// Subscribes to the engine's faults and to the host's failure events.
    pub fn install(engine: &dyn GameEngine, host_events: &EventHub<HostEvent>) -> Self {
        log::debug!("Installing error interceptor.");
        Self {
            engine_faults: engine.subscribe_faults(),
            host_events: host_events.subscribe(),
        }
    }

    /// Handles every failure queued since the last call.
    ///
    /// ## Returns
    /// The ids of the notifications that were shown.
    pub fn dispatch(
        &self,
        overlay: &mut NotificationOverlay,
        surface: &mut dyn DisplaySurface,
        now: Instant,
    ) -> Vec<NotificationId> {
        let mut shown = Vec::new();

        for fault in self.engine_faults.drain() {
            match fault.scene {
                Some(scene) => log::error!("Engine error in {scene}: {}", fault.message),
                None => log::error!("Engine error: {}", fault.message),
            }
            shown.extend(notify(overlay, surface, FailureChannel::EngineRuntime, now));
        }

        for event in self.host_events.drain() {
            let channel = match event {
                HostEvent::UncaughtError { message } => {
                    log::error!("Global error: {message}");
                    FailureChannel::UncaughtHost
                }
                HostEvent::UnhandledRejection { reason } => {
                    log::error!("Unhandled rejection: {reason}");
                    FailureChannel::UnhandledAsync
                }
                HostEvent::VisibilityChanged { .. } => continue,
            };
            shown.extend(notify(overlay, surface, channel, now));
        }

        shown
    }

    /// Unregisters every listener.
    pub fn dispose(self) {
        log::debug!("Error interceptor removed.");
    }
}

/// Shows the notification for `channel`. A panic while drawing is contained
/// here and logged.
fn notify(
    overlay: &mut NotificationOverlay,
    surface: &mut dyn DisplaySurface,
    channel: FailureChannel,
    now: Instant,
) -> Option<NotificationId> {
    let result = panic::catch_unwind(AssertUnwindSafe(|| {
        overlay.show(surface, channel.user_message(), now)
    }));

    match result {
        Ok(id) => {
            log::debug!("Notification {id} shown for {channel:?}.");
            Some(id)
        }
        Err(_) => {
            log::error!("Failed to show the notification for {channel:?}; continuing.");
            None
        }
    }
}
