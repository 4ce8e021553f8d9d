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

// StackRunner headless runtime
// Boots the shell and drives it from stdin or a script file.

mod command;
mod config;
mod headless;
mod session;

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stackrunner_core::HostViewport;

use crate::config::RuntimeConfig;
use crate::headless::TerminalSurface;
use crate::session::{Session, SessionOptions};

#[derive(Parser, Debug)]
#[command(name = "stackrunner", about = "Headless StackRunner shell")]
struct Cli {
    /// JSON file with `game` and `shell` sections.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Host viewport as WIDTHxHEIGHT.
    #[arg(long, value_parser = parse_viewport, default_value = "1280x800")]
    viewport: HostViewport,

    /// Boot without the wallet connector.
    #[arg(long)]
    no_wallet: bool,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,
}

fn parse_viewport(raw: &str) -> Result<HostViewport, String> {
    let (width, height) = raw
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got '{raw}'"))?;
    let width = width
        .trim()
        .parse()
        .map_err(|_| format!("invalid width '{width}'"))?;
    let height = height
        .trim()
        .parse()
        .map_err(|_| format!("invalid height '{height}'"))?;
    Ok(HostViewport::new(width, height))
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = RuntimeConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let options = SessionOptions {
        viewport: cli.viewport,
        wallet: !cli.no_wallet,
    };

    let mut session = Session::boot(config, &options, TerminalSurface::new(io::stdout()))
        .context("StackRunner failed to boot")?;

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("opening script '{}'", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };
    session.run(input, &mut io::stdout())?;
    log::info!("Session ended ({:?}).", session.shell().lifecycle_state());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_viewport() {
        assert_eq!(parse_viewport("390x844"), Ok(HostViewport::new(390, 844)));
        assert_eq!(parse_viewport("1920X1080"), Ok(HostViewport::new(1920, 1080)));
        assert!(parse_viewport("1920").is_err());
        assert!(parse_viewport("wide x tall").is_err());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::parse_from([
            "stackrunner",
            "--viewport",
            "600x900",
            "--no-wallet",
            "--script",
            "demo.txt",
        ]);
        assert_eq!(cli.viewport, HostViewport::new(600, 900));
        assert!(cli.no_wallet);
        assert_eq!(cli.script, Some(PathBuf::from("demo.txt")));
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["stackrunner"]);
        assert_eq!(cli.viewport, HostViewport::new(1280, 800));
        assert!(!cli.no_wallet);
    }
}
