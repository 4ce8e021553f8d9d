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

//! Error types surfaced by the shell.

use stackrunner_core::{BootstrapFailure, MissingDependency};
use thiserror::Error;

/// Failures that stop the shell from booting.
#[derive(Debug, Error)]
pub enum ShellError {
    /// The shell already owns an engine, or owned one before it was destroyed.
    #[error("the shell has already been booted")]
    AlreadyBooted,

    /// One or more mandatory collaborators were not provided.
    #[error("boot aborted, missing dependencies: {}", format_missing(.0))]
    MissingDependencies(Vec<MissingDependency>),

    /// The engine library failed to construct an engine.
    #[error(transparent)]
    Bootstrap(#[from] BootstrapFailure),
}

fn format_missing(missing: &[MissingDependency]) -> String {
    missing
        .iter()
        .map(|m| m.dependency.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures reported by the debug command surface.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DebugCommandError {
    /// No command is registered under this name.
    #[error("unknown debug command '{0}'")]
    UnknownCommand(String),
}
