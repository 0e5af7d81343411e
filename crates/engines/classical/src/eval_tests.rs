use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_startpos_is_balanced() {
    let board = Board::startpos();
    assert!(approx(evaluate(&board, Color::White), 0.0));
    assert!(approx(evaluate(&board, Color::Black), 0.0));
}

#[test]
fn test_extra_queen_material_plus_mobility() {
    // Material +9; mobility 22 (queen 17 + king 5) vs 5 for the black king
    let board = Board::from_fen("4k3/8/8/8/8/8/8/Q3K3 w - -").unwrap();
    assert!(approx(evaluate(&board, Color::White), 10.7));
}

#[test]
fn test_evaluation_is_antisymmetric() {
    for fen in [
        "4k3/8/8/8/8/8/8/Q3K3 w - -",
        "r1bqkbnr/pppp1ppp/2n5/4p3/2B1P3/5Q2/PPPP1PPP/RNB1K1NR w - -",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - -",
    ] {
        let board = Board::from_fen(fen).unwrap();
        let white = evaluate(&board, Color::White);
        let black = evaluate(&board, Color::Black);
        assert!(approx(white, -black), "{fen}: {white} vs {black}");
    }
}

#[test]
fn test_center_bonus_shape() {
    for (row, col) in [(3, 3), (3, 4), (4, 3), (4, 4)] {
        assert_eq!(CENTER_BONUS[row][col], 2);
    }
    assert_eq!(CENTER_BONUS[2][2], 1);
    assert_eq!(CENTER_BONUS[5][5], 1);
    assert_eq!(CENTER_BONUS[0][0], 0);
    assert_eq!(CENTER_BONUS[7][3], 0);
}

#[test]
fn test_centralised_pawn_scores_higher() {
    // Same material; pawn on d4 (bonus 2) vs pawn on a3 (bonus 0). The
    // a-pawn and the d-pawn each have one move, kings are far apart.
    let center = Board::from_fen("k7/8/8/8/3P4/8/8/7K w - -").unwrap();
    let edge = Board::from_fen("k7/8/8/8/8/P7/8/7K w - -").unwrap();
    assert!(approx(
        evaluate(&center, Color::White) - evaluate(&edge, Color::White),
        0.2
    ));
}

#[test]
fn test_piece_values() {
    assert_eq!(piece_value(PieceKind::Pawn), 1.0);
    assert_eq!(piece_value(PieceKind::Knight), 3.0);
    assert_eq!(piece_value(PieceKind::Bishop), 3.0);
    assert_eq!(piece_value(PieceKind::Rook), 5.0);
    assert_eq!(piece_value(PieceKind::Queen), 9.0);
    assert_eq!(piece_value(PieceKind::King), 1000.0);
}
