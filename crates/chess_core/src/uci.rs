use crate::{board::Board, error::ParseError, movegen::legal_targets, types::*};

pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Parses a coordinate move and accepts it only if it is legal for the side
/// to move.
pub fn parse_uci_move(board: &Board, txt: &str) -> Result<Move, ParseError> {
    let mv: Move = txt.parse()?;
    let legal = board
        .piece_at(mv.from)
        .filter(|pc| pc.color == board.side_to_move)
        .is_some_and(|pc| legal_targets(board, &pc).contains(&mv.to));
    if legal {
        Ok(mv)
    } else {
        Err(ParseError::IllegalMove(mv))
    }
}

/// Builds a board from the arguments of a UCI `position` command:
/// `startpos [moves ...]` or `fen <fields> [moves ...]`.
pub fn set_position_from_uci(args: &[&str]) -> Result<Board, ParseError> {
    let moves_at = args.iter().position(|&a| a == "moves");
    let (setup, moves) = match moves_at {
        Some(i) => (&args[..i], &args[i + 1..]),
        None => (args, &[][..]),
    };

    let mut board = match setup.split_first() {
        None => Board::startpos(),
        Some((&"startpos", _)) => Board::startpos(),
        Some((&"fen", fields)) => Board::from_fen(&fields.join(" "))?,
        Some((other, _)) => return Err(ParseError::Position(other.to_string())),
    };

    for txt in moves {
        let mv = parse_uci_move(&board, txt)?;
        board.make_move(mv);
    }
    Ok(board)
}

#[cfg(test)]
#[path = "uci_tests.rs"]
mod uci_tests;
