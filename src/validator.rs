use thiserror::Error;

use crate::board::Board;
use crate::types::{Position, Side};

/// Classification of a proposed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveClass {
    OutOfBounds,
    WrongPiece,
    Jump,
    Simple,
    Blocked,
}

/// Reason a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("coordinates out of range")]
    OutOfBounds,
    #[error("source square does not hold the player's piece")]
    WrongPiece,
    #[error("destination square is occupied")]
    Blocked,
}

impl From<Rejection> for MoveClass {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::OutOfBounds => Self::OutOfBounds,
            Rejection::WrongPiece => Self::WrongPiece,
            Rejection::Blocked => Self::Blocked,
        }
    }
}

/// A move that passed every gate, with its captured square if it is a jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidMove {
    pub side: Side,
    pub from: Position,
    pub to: Position,
    pub captured: Option<Position>,
}

impl ValidMove {
    pub fn class(&self) -> MoveClass {
        if self.captured.is_some() {
            MoveClass::Jump
        } else {
            MoveClass::Simple
        }
    }
}

/// Classifies a proposed move without touching the board.
pub fn classify(
    board: &Board,
    player: char,
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
) -> MoveClass {
    match validate(board, player, from_row, from_col, to_row, to_col) {
        Ok(valid) => valid.class(),
        Err(rejection) => rejection.into(),
    }
}

/// Runs the gates in order: bounds, ownership, jump, simple, blocked.
///
/// Direction and distance are not checked; any empty destination is a
/// legal simple move for a piece the player owns.
pub fn validate(
    board: &Board,
    player: char,
    from_row: i32,
    from_col: i32,
    to_row: i32,
    to_col: i32,
) -> Result<ValidMove, Rejection> {
    let (Some(from), Some(to)) = (
        Position::checked(from_row, from_col),
        Position::checked(to_row, to_col),
    ) else {
        return Err(Rejection::OutOfBounds);
    };

    let side = Side::from_char(player).ok_or(Rejection::WrongPiece)?;
    match board.get(from) {
        Some(piece) if piece.side == side => {}
        _ => return Err(Rejection::WrongPiece),
    }

    if board.get(to).is_some() {
        return Err(Rejection::Blocked);
    }

    let mid = from.midpoint(to);
    let captured = match board.get(mid) {
        Some(piece) if piece.side == side.opponent() => Some(mid),
        _ => None,
    };

    Ok(ValidMove {
        side,
        from,
        to,
        captured,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn pos(row: u8, col: u8) -> Position {
        Position { row, col }
    }

    #[test]
    fn t01_any_out_of_range_coordinate_is_rejected_first() {
        let board = Board::new();

        for (fr, fc, tr, tc) in [(-1, 1, 3, 2), (2, 8, 3, 2), (2, 1, 8, 2), (2, 1, 3, -1)] {
            assert_eq!(classify(&board, 'R', fr, fc, tr, tc), MoveClass::OutOfBounds);
        }
        // Bounds win over ownership.
        assert_eq!(classify(&board, 'X', 9, 9, 9, 9), MoveClass::OutOfBounds);
    }

    #[test]
    fn t02_moving_opponent_or_empty_square_is_wrong_piece() {
        let board = Board::new();

        assert_eq!(classify(&board, 'R', 5, 0, 4, 1), MoveClass::WrongPiece);
        assert_eq!(classify(&board, 'B', 2, 1, 3, 2), MoveClass::WrongPiece);
        assert_eq!(classify(&board, 'R', 3, 2, 4, 3), MoveClass::WrongPiece);
        assert_eq!(classify(&board, 'Q', 2, 1, 3, 2), MoveClass::WrongPiece);
    }

    #[test]
    fn t03_jump_over_opponent_into_empty_square() {
        let mut board = Board::new();
        board.set(pos(3, 2), Some(Piece::man(Side::Black)));

        let valid = validate(&board, 'R', 2, 1, 4, 3).unwrap();

        assert_eq!(valid.class(), MoveClass::Jump);
        assert_eq!(valid.captured, Some(pos(3, 2)));
    }

    #[test]
    fn jump_may_capture_a_king() {
        let mut board = Board::empty();
        board.set(pos(5, 2), Some(Piece::man(Side::Black)));
        board.set(pos(4, 3), Some(Piece::king(Side::Red)));

        assert_eq!(classify(&board, 'B', 5, 2, 3, 4), MoveClass::Jump);
    }

    #[test]
    fn t04_empty_destination_without_capture_is_simple() {
        let board = Board::new();

        assert_eq!(classify(&board, 'R', 2, 1, 3, 2), MoveClass::Simple);
        // Jumping over an own piece does not capture it.
        assert_eq!(classify(&board, 'R', 1, 0, 3, 2), MoveClass::Simple);
    }

    #[test]
    fn t05_occupied_destination_is_blocked() {
        let board = Board::new();

        assert_eq!(classify(&board, 'R', 1, 0, 2, 1), MoveClass::Blocked);
        assert_eq!(classify(&board, 'R', 2, 1, 2, 1), MoveClass::Blocked);
    }

    #[test]
    fn t06_odd_delta_jumps_over_truncated_midpoint() {
        let mut board = Board::empty();
        board.set(pos(2, 1), Some(Piece::man(Side::Red)));
        board.set(pos(3, 2), Some(Piece::man(Side::Black)));

        // (2+5)/2 = 3 and (1+4)/2 = 2.
        let valid = validate(&board, 'R', 2, 1, 5, 4).unwrap();

        assert_eq!(valid.class(), MoveClass::Jump);
        assert_eq!(valid.captured, Some(pos(3, 2)));
    }

    #[test]
    fn backward_step_midpoint_lands_on_empty_destination() {
        let mut board = Board::empty();
        board.set(pos(3, 2), Some(Piece::king(Side::Red)));
        board.set(pos(2, 2), Some(Piece::man(Side::Black)));

        // (3+2)/2 = 2 and (2+1)/2 = 1: the destination itself.
        assert_eq!(classify(&board, 'R', 3, 2, 2, 1), MoveClass::Simple);
    }

    #[test]
    fn rejection_messages_name_the_failed_gate() {
        assert_eq!(Rejection::OutOfBounds.to_string(), "coordinates out of range");
        assert_eq!(
            Rejection::Blocked.to_string(),
            "destination square is occupied"
        );
    }

    #[test]
    fn king_belongs_only_to_its_own_side() {
        let mut board = Board::empty();
        board.set(pos(4, 3), Some(Piece::king(Side::Black)));

        assert_eq!(classify(&board, 'R', 4, 3, 3, 2), MoveClass::WrongPiece);
        assert_eq!(classify(&board, 'B', 4, 3, 3, 2), MoveClass::Simple);
    }
}
