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

//! The degraded-mode channel: transient error banners over the display.

use stackrunner_core::{DisplaySurface, ErrorNotification, NotificationId};
use std::time::{Duration, Instant};

/// Tracks the notifications currently on screen and removes them when their
/// dwell time runs out.
///
/// Notifications are independent: a new one never cancels or replaces an
/// older one, they simply stack.
pub struct NotificationOverlay {
    dwell: Duration,
    next_id: u64,
    live: Vec<ErrorNotification>,
}

impl NotificationOverlay {
    /// Creates an overlay whose notifications live for `dwell`.
    pub fn new(dwell: Duration) -> Self {
        Self {
            dwell,
            next_id: 1,
            live: Vec::new(),
        }
    }

    /// Creates a notification and appends it to the surface.
    pub fn show(
        &mut self,
        surface: &mut dyn DisplaySurface,
        message: &str,
        now: Instant,
    ) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        let notification = ErrorNotification::new(id, message, now, self.dwell);
        surface.append_overlay(&notification);
        self.live.push(notification);
        id
    }

    /// Removes a notification before its dwell time is up.
    ///
    /// ## Returns
    /// `false` if the notification was already gone.
    pub fn dismiss(&mut self, surface: &mut dyn DisplaySurface, id: NotificationId) -> bool {
        let Some(index) = self.live.iter().position(|n| n.id == id) else {
            return false;
        };
        self.live.remove(index);
        surface.remove_overlay(id);
        true
    }

    /// Removes every notification whose dwell time has elapsed.
    ///
    /// ## Returns
    /// How many notifications were removed.
    pub fn expire(&mut self, surface: &mut dyn DisplaySurface, now: Instant) -> usize {
        let mut removed = 0;
        self.live.retain(|n| {
            if n.is_expired(now) {
                surface.remove_overlay(n.id);
                removed += 1;
                false
            } else {
                true
            }
        });
        removed
    }

    /// Removes every notification immediately.
    pub fn clear(&mut self, surface: &mut dyn DisplaySurface) {
        for n in self.live.drain(..) {
            surface.remove_overlay(n.id);
        }
    }

    /// The notifications currently on screen, oldest first.
    pub fn live(&self) -> &[ErrorNotification] {
        &self.live
    }
}
