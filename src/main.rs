//! Terminal Crab Crawl runner (default binary).
//!
//! Runs games back to back until the player declines a replay. Each run holds
//! raw mode only while it is on screen; the summary and replay prompt use the
//! normal screen.

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

use crab_crawl::core::{Game, GameConfig, SimpleRng};
use crab_crawl::engine::{play_once, FixedTicker};
use crab_crawl::input::TerminalInput;
use crab_crawl::term::{TerminalRenderer, TerminalScreen};
use crab_crawl::types::Variant;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum VariantArg {
    /// Seven-row lane, fish on rows 1-4, half-row tolerance
    #[default]
    Deep,
    /// Five-row lane, fish on row 2, one-row tolerance
    Shallow,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Deep => Variant::Deep,
            VariantArg::Shallow => Variant::Shallow,
        }
    }
}

#[derive(Parser)]
#[command(name = "crab-crawl", about = "Jump over the octopuses, dodge the fish")]
struct Args {
    /// Rule set for the lane
    #[arg(short, long, default_value_t, value_enum)]
    variant: VariantArg,

    /// Seed for obstacle spawning (default: from the clock)
    #[arg(short, long)]
    seed: Option<u32>,

    /// Write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Start running immediately instead of counting down
    #[arg(long)]
    no_countdown: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
        let file = File::create(path)
            .with_context(|| format!("create log file {}", path.display()))?;
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, file);
    }

    let mut config = GameConfig::new(args.variant.into());
    if args.no_countdown {
        config = config.without_countdown();
    }
    let mut seeds = SimpleRng::new(args.seed.unwrap_or_else(clock_seed));
    info!("crab-crawl starting: variant={}", config.variant.as_str());

    let mut screen = TerminalScreen::new();
    let mut input = TerminalInput::new();
    let mut renderer = TerminalRenderer::new();

    loop {
        let mut game = Game::new(config, seeds.next_u32());
        let mut ticker = FixedTicker::default();
        play_once(&mut screen, &mut game, &mut input, &mut renderer, &mut ticker)?;

        println!("{}", "\n".repeat(4));
        for line in game.summary_lines() {
            println!("  {line}");
        }
        println!();

        if !ask_replay()? {
            println!("\n  Thanks for playing Crab Crawl!\n");
            return Ok(());
        }
        println!();
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn ask_replay() -> Result<bool> {
    print!("  Play again? (Y/N): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
