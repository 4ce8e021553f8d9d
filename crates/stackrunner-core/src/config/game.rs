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

use serde::{Deserialize, Serialize};

/// The game configuration object supplied to the shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Canvas width on wide viewports.
    #[serde(default = "default_canvas_width")]
    pub canvas_width: u32,
    /// Canvas height on wide viewports.
    #[serde(default = "default_canvas_height")]
    pub canvas_height: u32,
    /// Colour palette.
    #[serde(default)]
    pub colors: Palette,
}

fn default_canvas_width() -> u32 {
    1000
}

fn default_canvas_height() -> u32 {
    700
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            colors: Palette::default(),
        }
    }
}

impl GameConfig {
    /// The configured canvas size as `(width, height)`.
    pub fn base_dimensions(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }
}

/// Colours used by the engine and scenes, as CSS hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    /// Clear colour of the canvas.
    #[serde(default = "default_background")]
    pub background: String,
}

fn default_background() -> String {
    "#1a1a2e".to_string()
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: default_background(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let cfg: GameConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn test_partial_palette_override() {
        let cfg: GameConfig =
            serde_json::from_str(r##"{"canvas_width": 800, "colors": {"background": "#000000"}}"##)
                .unwrap();
        assert_eq!(cfg.base_dimensions(), (800, 700));
        assert_eq!(cfg.colors.background, "#000000");
    }
}
