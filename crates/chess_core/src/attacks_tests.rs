use super::*;

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

#[test]
fn test_knight_attacks_square() {
    let b = Board::from_fen("4k3/8/8/8/4N3/8/8/4K3 w - -").unwrap();
    assert!(b.is_attacked(sq("f6"), Color::White));
    assert!(b.is_attacked(sq("c3"), Color::White));
    assert!(!b.is_attacked(sq("e5"), Color::White));
}

#[test]
fn test_slider_attack_blocked() {
    // Rook on a1 sees up the a-file until the pawn on a4; the pawn itself
    // only reaches a5
    let b = Board::from_fen("4k3/8/8/8/P7/8/8/R3K3 w - -").unwrap();
    assert!(b.is_attacked(sq("a3"), Color::White));
    assert!(!b.is_attacked(sq("a6"), Color::White));
}

#[test]
fn test_pawn_attacks_only_occupied_diagonals() {
    // Attack is defined through pseudo-legal targets, so an empty diagonal
    // in front of a pawn is not attacked but an enemy piece there is.
    let b = Board::from_fen("4k3/8/8/3n4/4P3/8/8/4K3 w - -").unwrap();
    assert!(b.is_attacked(sq("d5"), Color::White));
    assert!(!b.is_attacked(sq("f5"), Color::White));
}

#[test]
fn test_in_check() {
    let b = Board::from_fen("4k3/8/8/8/8/8/8/4RK2 b - -").unwrap();
    assert!(b.in_check(Color::Black));
    assert!(!b.in_check(Color::White));
}

#[test]
fn test_in_check_without_king_is_false() {
    let b = Board::from_fen("8/8/8/8/8/8/8/R7 b - -").unwrap();
    assert!(!b.in_check(Color::Black));
    assert!(!b.in_check(Color::White));
}

#[test]
fn test_would_cause_own_check_pinned_piece() {
    // Bishop on e2 is pinned against the king by the rook on e8
    let b = Board::from_fen("4r1k1/8/8/8/8/8/4B3/4K3 w - -").unwrap();
    let before = b.clone();
    assert!(b.would_cause_own_check(Move::new(sq("e2"), sq("d3")), Color::White));
    assert!(!b.would_cause_own_check(Move::new(sq("e1"), sq("d1")), Color::White));
    assert_eq!(b, before);
}

#[test]
fn test_king_cannot_step_into_attack() {
    let b = Board::from_fen("3r2k1/8/8/8/8/8/8/4K3 w - -").unwrap();
    assert!(b.would_cause_own_check(Move::new(sq("e1"), sq("d1")), Color::White));
    assert!(!b.would_cause_own_check(Move::new(sq("e1"), sq("f1")), Color::White));
}
