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

//! A booted shell driven by line commands.

use crate::command::{Command, USAGE};
use crate::config::RuntimeConfig;
use crate::headless::{HeadlessFactory, NamedModule};
use stackrunner_core::{DisplaySurface, EngineFault, EventHub, HostEvent, HostViewport, NotificationId};
use stackrunner_shell::{Capabilities, DebugDispatch, Shell, ShellError};
use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

/// Whether the session keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// How the host and its collaborators are set up.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub viewport: HostViewport,
    pub wallet: bool,
}

pub struct Session {
    shell: Shell,
    host: EventHub<HostEvent>,
    faults: EventHub<EngineFault>,
    started: Instant,
    elapsed: Duration,
}

impl Session {
    /// Boots a shell around a headless engine.
    pub fn boot(
        config: RuntimeConfig,
        options: &SessionOptions,
        surface: impl DisplaySurface + 'static,
    ) -> Result<Self, ShellError> {
        let host = EventHub::new();
        let faults = EventHub::new();
        let started = Instant::now();

        let mut capabilities = Capabilities::new()
            .with_engine_factory(HeadlessFactory::new(faults.clone()))
            .with_config(config.game)
            .with_maze_generator(NamedModule("maze generator"))
            .with_collision_system(NamedModule("collision system"));
        if options.wallet {
            capabilities = capabilities.with_connectivity(NamedModule("wallet connector"));
        }

        let mut shell = Shell::new(config.shell, host.clone(), surface);
        shell.boot_at(capabilities, options.viewport, started)?;

        Ok(Self {
            shell,
            host,
            faults,
            started,
            elapsed: Duration::ZERO,
        })
    }

    /// The session clock. Only `wait` moves it.
    pub fn now(&self) -> Instant {
        self.started + self.elapsed
    }

    pub fn shell(&self) -> &Shell {
        &self.shell
    }

    /// Reads commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut dyn Write) -> io::Result<()> {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match line.parse::<Command>() {
                Ok(command) => {
                    if self.execute(command, out)? == Flow::Quit {
                        break;
                    }
                }
                Err(err) => writeln!(out, "error: {err}")?,
            }
        }
        self.shell.shutdown();
        Ok(())
    }

    /// Runs one command, then lets the shell handle whatever it raised.
    pub fn execute(&mut self, command: Command, out: &mut dyn Write) -> io::Result<Flow> {
        match command {
            Command::Pause => report(out, "pause", self.shell.pause_game())?,
            Command::Resume => report(out, "resume", self.shell.resume_game())?,
            Command::Restart => report(out, "restart", self.shell.restart_game())?,
            Command::Destroy => report(out, "destroy", self.shell.destroy())?,
            Command::Hide => {
                self.host.publish(HostEvent::VisibilityChanged { hidden: true });
            }
            Command::Show => {
                self.host
                    .publish(HostEvent::VisibilityChanged { hidden: false });
            }
            Command::Fault(message) => {
                self.faults.publish(EngineFault::new(message));
            }
            Command::ScriptError(message) => {
                self.host.publish(HostEvent::UncaughtError { message });
            }
            Command::Rejection(reason) => {
                self.host.publish(HostEvent::UnhandledRejection { reason });
            }
            Command::Debug { name, scenario } => {
                match self.shell.run_debug_command(&name, scenario.as_deref()) {
                    Ok(DebugDispatch::Forwarded(outcome)) => writeln!(out, "{name}: {outcome}")?,
                    Ok(DebugDispatch::SceneUnavailable) => {
                        writeln!(out, "{name}: gameplay scene unavailable")?
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            Command::Dismiss(id) => {
                report(out, "dismiss", self.shell.dismiss_notification(NotificationId(id)))?
            }
            Command::Wait(duration) => self.elapsed += duration,
            Command::Status => self.status(out)?,
            Command::Help => writeln!(out, "{USAGE}")?,
            Command::Quit => return Ok(Flow::Quit),
        }

        self.shell.pump_at(self.now());
        Ok(Flow::Continue)
    }

    fn status(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "state: {:?}", self.shell.lifecycle_state())?;
        if let Some(profile) = self.shell.viewport_profile() {
            writeln!(
                out,
                "canvas: {}x{} ({:?})",
                profile.width, profile.height, profile.mode
            )?;
        }
        let wallet = if self.shell.features().wallet_enabled {
            "enabled"
        } else {
            "disabled"
        };
        writeln!(out, "wallet: {wallet}")?;
        writeln!(out, "notifications: {}", self.shell.notifications().len())?;
        for notification in self.shell.notifications() {
            let left = notification.expires_at.saturating_duration_since(self.now());
            writeln!(
                out,
                "  {} {} ({}ms left)",
                notification.id,
                notification.message,
                left.as_millis()
            )?;
        }
        Ok(())
    }
}

fn report(out: &mut dyn Write, action: &str, applied: bool) -> io::Result<()> {
    if applied {
        writeln!(out, "{action}: ok")
    } else {
        writeln!(out, "{action}: ignored")
    }
}
