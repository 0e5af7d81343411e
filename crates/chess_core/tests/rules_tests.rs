//! Scenario and property tests for the rules engine
//!
//! - Fool's mate and corner stalemate classification
//! - Move generation invariants over a spread of reachable positions
//! - Clone isolation of simulated moves

use chess_core::{
    Board, Color, GameStatus, Move, Square, classify, legal_moves, legal_targets,
    pseudo_legal_targets,
};

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

/// Start position plus every position one and two plies in.
fn sample_positions() -> Vec<Board> {
    let mut out = vec![Board::startpos()];
    for &fen in &[
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w KQkq - 0 1",
        "4r1k1/8/8/8/8/8/4N3/4K3 w - -",
        "8/P3k3/8/8/8/8/4K2p/8 w - -",
        "4k3/8/8/8/8/8/8/K3R3 b - -",
    ] {
        out.push(Board::from_fen(fen).unwrap());
    }

    let start = Board::startpos();
    for m1 in legal_moves(&start, Color::White) {
        let b1 = start.after_move(m1);
        for m2 in legal_moves(&b1, Color::Black).into_iter().step_by(5) {
            out.push(b1.after_move(m2));
        }
        out.push(b1);
    }
    out
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_fools_mate() {
    let mut board = Board::startpos();
    for m in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let mover = board.side_to_move;
        let piece = board.piece_at(mv(m).from).unwrap();
        assert_eq!(piece.color, mover);
        assert!(legal_targets(&board, &piece).contains(&mv(m).to));
        board.make_move(mv(m));
    }

    assert_eq!(board.side_to_move, Color::White);
    assert!(board.in_check(Color::White));
    assert_eq!(
        classify(&board, Color::White),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
}

#[test]
fn test_stalemate_lone_king_in_corner() {
    // Black king h8; white queen g6 covers g8, g7 and h7 without attacking h8
    let board = Board::from_fen("7k/8/6Q1/8/8/8/8/K7 b - -").unwrap();
    let h8: Square = "h8".parse().unwrap();
    assert!(!board.is_attacked(h8, Color::White));
    for s in ["g8", "g7", "h7"] {
        assert!(board.is_attacked(s.parse().unwrap(), Color::White), "{s}");
    }
    assert_eq!(classify(&board, Color::Black), GameStatus::Stalemate);
}

#[test]
fn test_stalemate_with_both_kings() {
    let board = Board::from_fen("k7/2K5/1Q6/8/8/8/8/8 b - -").unwrap();
    assert!(legal_moves(&board, Color::Black).is_empty());
    assert!(!board.in_check(Color::Black));
    assert_eq!(classify(&board, Color::Black), GameStatus::Stalemate);
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn test_no_self_capture_and_legal_subset_of_pseudo() {
    for board in sample_positions() {
        for color in [Color::White, Color::Black] {
            for piece in board.pieces(color) {
                let pseudo = pseudo_legal_targets(&piece, &board);
                for to in &pseudo {
                    assert!(to.row() < 8 && to.col() < 8);
                    if let Some(pc) = board.piece_at(*to) {
                        assert_ne!(pc.color, color, "self capture from {}", piece.position);
                    }
                }
                for to in legal_targets(&board, &piece) {
                    assert!(pseudo.contains(&to));
                }
            }
        }
    }
}

#[test]
fn test_legal_move_never_leaves_mover_in_check() {
    for board in sample_positions() {
        let mover = board.side_to_move;
        for m in legal_moves(&board, mover) {
            assert!(!board.after_move(m).in_check(mover), "{m} leaves king in check");
        }
    }
}

#[test]
fn test_simulation_never_observable() {
    for board in sample_positions().into_iter().take(40) {
        let snapshot = board.clone();
        let mover = board.side_to_move;
        for m in legal_moves(&board, mover) {
            let _ = board.would_cause_own_check(m, mover);
            let mut sim = board.after_move(m);
            sim.set_piece(m.to, None);
        }
        assert_eq!(board, snapshot);
    }
}

#[test]
fn test_positions_stay_in_sync_after_moves() {
    for board in sample_positions().into_iter().take(40) {
        for m in legal_moves(&board, board.side_to_move) {
            let next = board.after_move(m);
            for s in Square::all() {
                if let Some(pc) = next.piece_at(s) {
                    assert_eq!(pc.position, s);
                }
            }
        }
    }
}
