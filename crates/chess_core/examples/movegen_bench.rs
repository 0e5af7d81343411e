//! Legal move generation benchmark for profiling with cargo-flamegraph.
//!
//! Every legal move costs a board clone plus an opposing attack scan, so
//! this is the number that bounds how deep the minimax engine can afford
//! to look.
//!
//! Usage:
//!   cargo flamegraph --example movegen_bench -p chess_core

use chess_core::{Board, legal_moves_into};
use std::time::{Duration, Instant};

const TEST_POSITIONS: &[(&str, &str)] = &[
    (
        "Start",
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1",
    ),
    (
        "Italian",
        "r1bqk1nr/pppp1ppp/2n5/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 4 4",
    ),
    (
        "Middlegame",
        "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - -",
    ),
    ("Rook endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -"),
    (
        "Pinned pieces",
        "r1bqkbnr/ppp2ppp/2np4/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w - - 0 4",
    ),
];

const ITERATIONS: usize = 2_000;

fn main() {
    println!("=== Legal Move Generation Benchmark ===");
    println!("Iterations per position: {ITERATIONS}");
    println!();

    let mut move_buf = Vec::with_capacity(128);
    let mut total_moves = 0usize;
    let mut total_time = Duration::ZERO;

    for (name, fen) in TEST_POSITIONS {
        let board = match Board::from_fen(fen) {
            Ok(b) => b,
            Err(e) => {
                eprintln!("{name}: {e}");
                continue;
            }
        };

        print!("{name:.<20}");

        let start = Instant::now();
        let mut moves_generated = 0usize;

        for _ in 0..ITERATIONS {
            legal_moves_into(&board, board.side_to_move, &mut move_buf);
            moves_generated += move_buf.len();
        }

        let elapsed = start.elapsed();
        total_moves += moves_generated;
        total_time += elapsed;

        let moves_per_pos = moves_generated as f64 / ITERATIONS as f64;
        let pps = ITERATIONS as f64 / elapsed.as_secs_f64().max(f64::EPSILON);

        println!(" {moves_per_pos:>5.1} moves/pos, {pps:>10.0} pos/sec ({elapsed:>8.3?})");
    }

    println!();
    println!("{:=<70}", "");
    println!("TOTAL: {total_moves} moves in {total_time:.3?}");
}
