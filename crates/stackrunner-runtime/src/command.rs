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

//! Line commands accepted on stdin or from a script.

use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Pause,
    Resume,
    Restart,
    /// The host window goes to the background.
    Hide,
    /// The host window comes back to the foreground.
    Show,
    /// The engine raises a runtime fault.
    Fault(String),
    /// The host raises an uncaught error.
    ScriptError(String),
    /// An asynchronous operation fails with nobody awaiting it.
    Rejection(String),
    /// A registered debug command with its optional scenario.
    Debug {
        name: String,
        scenario: Option<String>,
    },
    /// Removes a notification by id.
    Dismiss(u64),
    Destroy,
    Status,
    /// Advances the session clock.
    Wait(Duration),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
    #[error("invalid number '{0}'")]
    InvalidNumber(String),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let argument = (!rest.is_empty()).then(|| rest.to_string());

        let text = |name: &'static str| argument.clone().ok_or(ParseCommandError::MissingArgument(name));
        let number = |name: &'static str| -> Result<u64, ParseCommandError> {
            let raw = text(name)?;
            raw.parse()
                .map_err(|_| ParseCommandError::InvalidNumber(raw))
        };

        let command = match word {
            "" => return Err(ParseCommandError::Empty),
            "pause" => Command::Pause,
            "resume" => Command::Resume,
            "restart" => Command::Restart,
            "hide" => Command::Hide,
            "show" => Command::Show,
            "fault" => Command::Fault(text("fault")?),
            "script-error" => Command::ScriptError(text("script-error")?),
            "rejection" => Command::Rejection(text("rejection")?),
            "dismiss" => Command::Dismiss(number("dismiss")?),
            "destroy" => Command::Destroy,
            "status" => Command::Status,
            "wait" => Command::Wait(Duration::from_millis(number("wait")?)),
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            name => Command::Debug {
                name: name.to_string(),
                scenario: argument,
            },
        };
        Ok(command)
    }
}

/// Printed by `help`.
pub const USAGE: &str = "\
commands:
  pause | resume | restart | destroy      lifecycle of the gameplay scene
  hide | show                             host visibility
  fault <msg>                             engine runtime failure
  script-error <msg>                      uncaught host failure
  rejection <msg>                         unhandled async failure
  debugVictory [player|villain|draw]      show the victory screen
  debugGameOver [player|villain|draw]     show the game-over screen
  dismiss <id>                            remove a notification
  wait <ms>                               advance the clock
  status | help | quit";
