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

//! Canvas sizing derived once at boot from the host viewport.

use crate::host::HostViewport;

/// Viewport widths at or below this value are treated as handheld devices.
pub const DEFAULT_RESPONSIVE_BREAKPOINT: u32 = 768;

/// How the canvas dimensions were chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportMode {
    /// The canvas fills the live host viewport.
    Responsive,
    /// The canvas uses the configured base dimensions.
    Fixed,
}

/// Canvas dimensions chosen at boot.
///
/// Computed once and never revisited: the shell does no live resize handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportProfile {
    /// Canvas width in logical pixels.
    pub width: u32,
    /// Canvas height in logical pixels.
    pub height: u32,
    /// Whether the size tracks the viewport or the configuration.
    pub mode: ViewportMode,
}

impl ViewportProfile {
    /// Derives the canvas profile for a host viewport.
    ///
    /// ## Arguments
    /// * `host` - The live dimensions of the host viewport.
    /// * `base` - The configured `(width, height)` used on wide viewports.
    /// * `breakpoint` - Widths at or below this fill the viewport instead.
    pub fn derive(host: HostViewport, base: (u32, u32), breakpoint: u32) -> Self {
        if host.width <= breakpoint {
            Self {
                width: host.width,
                height: host.height,
                mode: ViewportMode::Responsive,
            }
        } else {
            Self {
                width: base.0,
                height: base.1,
                mode: ViewportMode::Fixed,
            }
        }
    }

    /// Returns `true` if the canvas fills the host viewport.
    pub fn is_responsive(&self) -> bool {
        self.mode == ViewportMode::Responsive
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: (u32, u32) = (1000, 700);

    #[test]
    fn test_narrow_viewport_is_responsive() {
        let host = HostViewport::new(390, 844);
        let profile = ViewportProfile::derive(host, BASE, DEFAULT_RESPONSIVE_BREAKPOINT);
        assert_eq!(profile.width, 390);
        assert_eq!(profile.height, 844);
        assert!(profile.is_responsive());
    }

    #[test]
    fn test_breakpoint_itself_is_responsive() {
        let host = HostViewport::new(768, 1024);
        let profile = ViewportProfile::derive(host, BASE, DEFAULT_RESPONSIVE_BREAKPOINT);
        assert_eq!(profile.mode, ViewportMode::Responsive);
        assert_eq!((profile.width, profile.height), (768, 1024));
    }

    #[test]
    fn test_wide_viewport_uses_base_dimensions() {
        let host = HostViewport::new(1920, 1080);
        let profile = ViewportProfile::derive(host, BASE, DEFAULT_RESPONSIVE_BREAKPOINT);
        assert_eq!((profile.width, profile.height), BASE);
        assert_eq!(profile.mode, ViewportMode::Fixed);
    }
}
