use std::fmt;

use serde::Serialize;

pub const BOARD_SIZE: usize = 8;

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Red,
    Black,
}

impl Side {
    /// Parses the player letter used on the console (`R`/`B`, any case).
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'R' => Some(Self::Red),
            'B' => Some(Self::Black),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Black => 'B',
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Black,
            Self::Black => Self::Red,
        }
    }

    /// Row on which a man of this side is crowned.
    pub fn promotion_row(self) -> u8 {
        match self {
            Self::Red => 0,
            Self::Black => (BOARD_SIZE - 1) as u8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Piece {
    pub side: Side,
    pub rank: Rank,
}

impl Piece {
    pub const fn man(side: Side) -> Self {
        Self {
            side,
            rank: Rank::Man,
        }
    }

    pub const fn king(side: Side) -> Self {
        Self {
            side,
            rank: Rank::King,
        }
    }

    /// Crowning an existing king leaves it unchanged.
    pub fn promoted(self) -> Self {
        Self::king(self.side)
    }

    /// Console symbol: `R`/`B` for men, `K` for a king of either side.
    pub fn symbol(self) -> char {
        match self.rank {
            Rank::Man => self.side.to_char(),
            Rank::King => 'K',
        }
    }
}

/// A board coordinate that has already passed the bounds check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: u8,
    pub col: u8,
}

impl Position {
    /// Returns `None` when either coordinate falls outside `0..8`.
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        let in_range = |v: i32| (0..BOARD_SIZE as i32).contains(&v);
        if in_range(row) && in_range(col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Square halfway between `self` and `other`, rounding toward zero.
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            row: (self.row + other.row) / 2,
            col: (self.col + other.col) / 2,
        }
    }
}

/// An accepted move. Its `Display` form is the canonical history key,
/// e.g. `R(2,1)->(4,3)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MoveRecord {
    pub player: Side,
    pub from: Position,
    pub to: Position,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{})->({},{})",
            self.player.to_char(),
            self.from.row,
            self.from.col,
            self.to.row,
            self.to.col
        )
    }
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: [[char; BOARD_SIZE]; BOARD_SIZE],
    pub red_pieces: u8,
    pub black_pieces: u8,
    pub red_score: u32,
    pub black_score: u32,
    pub move_count: usize,
    /// Contract:
    /// - Lexicographically greatest accepted move string, not the latest one.
    /// - `None` before the first accepted move.
    pub most_recent_move: Option<String>,
    /// Chronologically last accepted move.
    pub last_move: Option<String>,
}
