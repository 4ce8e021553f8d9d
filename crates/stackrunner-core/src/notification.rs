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

//! Transient user-facing messages describing an intercepted failure.

use std::fmt;
use std::time::{Duration, Instant};

/// Identifies one notification for the lifetime of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(pub u64);

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One intercepted failure, shown as an auto-dismissing overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotification {
    /// Unique id, used to remove the overlay.
    pub id: NotificationId,
    /// The message shown to the user.
    pub message: String,
    /// When the notification was raised.
    pub created_at: Instant,
    /// When the overlay removes itself.
    pub expires_at: Instant,
}

impl ErrorNotification {
    /// Creates a notification that lives for `dwell` after `now`.
    pub fn new(id: NotificationId, message: impl Into<String>, now: Instant, dwell: Duration) -> Self {
        Self {
            id,
            message: message.into(),
            created_at: now,
            expires_at: now + dwell,
        }
    }

    /// Returns `true` once the dwell time has elapsed.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
