use super::*;

#[test]
fn test_startpos_with_moves() {
    let board = set_position_from_uci(&["startpos", "moves", "e2e4", "e7e5"]).unwrap();
    assert_eq!(board.side_to_move, Color::White);
    assert!(board.piece_at("e4".parse().unwrap()).is_some());
    assert!(board.piece_at("e5".parse().unwrap()).is_some());
}

#[test]
fn test_fen_position() {
    let board = set_position_from_uci(&["fen", "k7/2K5/1Q6/8/8/8/8/8", "b", "-", "-", "0", "1"])
        .unwrap();
    assert_eq!(board.side_to_move, Color::Black);
    assert_eq!(board.king_square(Color::Black), Some("a8".parse().unwrap()));
}

#[test]
fn test_empty_args_is_startpos() {
    assert_eq!(set_position_from_uci(&[]).unwrap(), Board::startpos());
}

#[test]
fn test_rejects_illegal_and_unknown() {
    assert_eq!(
        set_position_from_uci(&["startpos", "moves", "e2e5"]),
        Err(ParseError::IllegalMove("e2e5".parse().unwrap()))
    );
    // Black cannot move first
    assert!(set_position_from_uci(&["startpos", "moves", "e7e5"]).is_err());
    assert!(matches!(
        set_position_from_uci(&["kiwipete"]),
        Err(ParseError::Position(_))
    ));
}

#[test]
fn test_move_to_uci() {
    let board = Board::startpos();
    let mv = parse_uci_move(&board, "g1f3").unwrap();
    assert_eq!(move_to_uci(mv), "g1f3");
}
