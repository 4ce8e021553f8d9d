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

//! Pauses the game when the host goes to the background.

use crate::lifecycle::LifecycleController;
use crate::state::ShellState;
use stackrunner_core::{EventHub, HostEvent, Subscription};

/// Listens for host visibility changes.
///
/// Going to the background pauses the primary scene. Coming back to the
/// foreground does nothing: the player resumes explicitly, so audio and
/// animation never restart while nobody is looking.
pub struct VisibilityWatcher {
    events: Subscription<HostEvent>,
}

impl VisibilityWatcher {
    /// Subscribes to the host's events.
    pub fn install(host_events: &EventHub<HostEvent>) -> Self {
        Self {
            events: host_events.subscribe(),
        }
    }

    /// Handles every visibility change queued since the last call.
    ///
    /// ## Returns
    /// How many transitions to the background were seen.
    pub fn dispatch(&self, lifecycle: &LifecycleController, shell: &mut ShellState) -> usize {
        let mut hidden_count = 0;
        for event in self.events.drain() {
            match event {
                HostEvent::VisibilityChanged { hidden: true } => {
                    hidden_count += 1;
                    if lifecycle.pause(shell) {
                        log::info!("Host went to the background; game paused.");
                    }
                }
                HostEvent::VisibilityChanged { hidden: false } => {
                    log::debug!("Host back in the foreground; waiting for the player to resume.");
                }
                _ => {}
            }
        }
        hidden_count
    }

    /// Unregisters the listener.
    pub fn dispose(self) {
        log::debug!("Visibility watcher removed.");
    }
}
