mod session;

use std::io::{self, BufRead};

use anyhow::Result;
use classical_engine::ClassicalEngine;
use session::UciSession;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stdout carries the protocol, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "uci_engine=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = UciSession::new(ClassicalEngine::new());

    for line in stdin.lock().lines() {
        if !session.handle(&line?, &mut stdout)? {
            break;
        }
    }
    Ok(())
}
