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

//! The host environment as seen by the shell: its viewport, the events it
//! raises and the display surface notifications are drawn on.

use crate::notification::{ErrorNotification, NotificationId};

/// Dimensions of the host viewport at the time of the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HostViewport {
    /// Viewport width in logical pixels.
    pub width: u32,
    /// Viewport height in logical pixels.
    pub height: u32,
}

impl HostViewport {
    /// Creates a viewport description.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Signals raised by the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    /// The application moved to the background (`hidden == true`) or back to
    /// the foreground.
    VisibilityChanged {
        /// Whether the application is now hidden.
        hidden: bool,
    },
    /// A synchronous failure escaped to the host.
    UncaughtError {
        /// Description of the failure.
        message: String,
    },
    /// A deferred operation failed and nobody handled it.
    UnhandledRejection {
        /// Description of the rejection reason.
        reason: String,
    },
}

/// The surface the shell draws its degraded-mode UI on.
///
/// Implemented by the host. Overlays are independent: appending one never
/// affects the others.
pub trait DisplaySurface {
    /// Appends a fixed-position overlay showing the notification.
    fn append_overlay(&mut self, notification: &ErrorNotification);

    /// Removes a previously appended overlay. Unknown ids are ignored.
    fn remove_overlay(&mut self, id: NotificationId);

    /// Replaces everything on the surface with a plain-text message.
    fn replace_contents(&mut self, text: &str);

    /// Appends a line to the instructions area.
    ///
    /// Returns `false` if the surface has no instructions area.
    fn append_instructions(&mut self, text: &str) -> bool;
}
