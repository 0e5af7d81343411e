//! Tournament CLI
//!
//! Run a match between two engines and print or save the report.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_core::Engine;
use clap::{Parser, ValueEnum};
use classical_engine::ClassicalEngine;
use random_engine::RandomEngine;
use tournament::{MatchConfig, MatchRunner};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EngineKind {
    /// Minimax with alpha-beta pruning
    Classical,
    /// Uniformly random legal moves
    Random,
}

impl EngineKind {
    fn build(self, seed: Option<u64>) -> Box<dyn Engine> {
        match self {
            EngineKind::Classical => Box::new(ClassicalEngine::new()),
            EngineKind::Random => match seed {
                Some(seed) => Box::new(RandomEngine::with_seed(seed)),
                None => Box::new(RandomEngine::new()),
            },
        }
    }
}

/// Play engines against each other
#[derive(Debug, Parser)]
#[command(name = "tournament", version, about)]
struct Args {
    /// Engine that plays White in the first game
    #[arg(long, value_enum, default_value_t = EngineKind::Classical)]
    white: EngineKind,

    /// Engine that plays Black in the first game
    #[arg(long, value_enum, default_value_t = EngineKind::Random)]
    black: EngineKind,

    /// Number of games (overrides the config file)
    #[arg(short, long)]
    games: Option<u32>,

    /// Search depth 1-4 (overrides the config file)
    #[arg(short, long)]
    depth: Option<u8>,

    /// Seed for openings and the random engine (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,

    /// TOML match configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write the JSON report here
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "tournament=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)
            .with_context(|| format!("loading match config {}", path.display()))?,
        None => MatchConfig::default(),
    };
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(depth) = args.depth {
        config.depth = depth;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    config.validate()?;

    let mut engine1 = args.white.build(config.seed);
    let mut engine2 = args.black.build(config.seed.map(|s| s.wrapping_add(1)));

    tracing::info!(
        white = engine1.name(),
        black = engine2.name(),
        games = config.games,
        depth = config.depth,
        "starting match"
    );

    let runner = MatchRunner::new(config);
    let report = runner.run_match(engine1.as_mut(), engine2.as_mut())?;

    report.print_report();

    if let Some(path) = &args.output {
        report
            .save(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
        tracing::info!(path = %path.display(), "report saved");
    }

    Ok(())
}
