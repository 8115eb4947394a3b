//! Terminal front-end for Elemental Clash.
//!
//! Type `play`, `rules`, `back` or `quit` on the menus, a card number to
//! play it, an element name to place a Wild win, and `reset` to start over.

use std::fs;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use elemental_clash::services::{present_frame, FallbackFlavor, FileCheckMedia, TimedFlavor};
use elemental_clash::ui::{parse_command, App, TerminalRenderer};
use elemental_clash::MatchConfig;

/// Play Elemental Clash against the scripted opponent.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// JSON match configuration. Defaults are used when omitted.
    config: Option<PathBuf>,

    /// Seed the match RNG, overriding the configuration.
    #[arg(long)]
    seed: Option<u64>,
}

fn load_config(args: &Args) -> Result<MatchConfig> {
    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            MatchConfig::from_json(&json)
                .with_context(|| format!("loading config {}", path.display()))?
        }
        None => MatchConfig::default(),
    };
    Ok(match args.seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let flavor = TimedFlavor::new(FallbackFlavor, Duration::from_millis(config.flavor_timeout_ms));
    let mut app = App::new(config, Box::new(FileCheckMedia::new()), Box::new(flavor));
    let mut renderer = TerminalRenderer::new(io::stdout());

    app.start();
    present_frame(&mut renderer, &app.view());

    for line in io::stdin().lock().lines() {
        let line = line?;
        match parse_command(&line) {
            Some(event) => app.handle(event),
            None => log::warn!("Unknown command: {}", line.trim()),
        }
        if !app.is_running() {
            break;
        }
        present_frame(&mut renderer, &app.view());
    }

    Ok(())
}
