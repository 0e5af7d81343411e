//! Match runner for chess-lab engines
//!
//! This crate provides infrastructure for:
//! - Running matches between engines through the game-flow layer
//! - Loading match settings from TOML
//! - Writing per-game records and totals as JSON
//!
//! # Usage
//!
//! ```bash
//! # Minimax at depth 2 against the random mover
//! cargo run -p tournament -- --white classical --black random --games 10 --depth 2
//!
//! # Settings from a file, report to JSON
//! cargo run -p tournament -- --config match.toml --output report.json
//! ```

mod config;
mod match_runner;
mod results;

pub use config::*;
pub use match_runner::*;
pub use results::*;
