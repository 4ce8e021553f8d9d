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

//! Runtime configuration file.

use serde::Deserialize;
use stackrunner_core::GameConfig;
use stackrunner_shell::ShellSettings;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failures while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read '{path}'")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file is not a valid configuration document.
    #[error("failed to parse '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the runtime reads from `--config`.
///
/// ```json
/// { "game": { "canvas_width": 1000 }, "shell": { "notification_dwell_ms": 3000 } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    pub shell: ShellSettings,
}

impl RuntimeConfig {
    /// Loads the configuration. No path, or a path that does not exist,
    /// yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::warn!("Config file '{}' not found, using defaults.", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        let config = Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded configuration from '{}'.", path.display());
        Ok(config)
    }

    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}
