use crate::board::Board;
use crate::history::History;
use crate::types::{BOARD_SIZE, GameSnapshot, MoveRecord, Side};
use crate::validator::{self, Rejection, ValidMove};

/// Everything one checkers session owns: board, scores and move history.
#[derive(Debug, Clone, Default)]
pub struct GameState {
    board: Board,
    red_score: u32,
    black_score: u32,
    history: History,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            red_score: 0,
            black_score: 0,
            history: History::new(),
        }
    }

    /// Starts a fresh game: starting layout, zero scores, empty history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Applies a move and reports whether it was accepted.
    pub fn apply_move(
        &mut self,
        player: char,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> bool {
        self.try_apply_move(player, from_row, from_col, to_row, to_col)
            .is_ok()
    }

    /// Validates then applies a move. A rejected move leaves the state untouched.
    pub fn try_apply_move(
        &mut self,
        player: char,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    ) -> Result<MoveRecord, Rejection> {
        let valid = validator::validate(&self.board, player, from_row, from_col, to_row, to_col)?;
        Ok(self.commit(valid))
    }

    pub fn red_score(&self) -> u32 {
        self.red_score
    }

    pub fn black_score(&self) -> u32 {
        self.black_score
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Red => self.red_score,
            Side::Black => self.black_score,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn board_snapshot(&self) -> [[char; BOARD_SIZE]; BOARD_SIZE] {
        self.board.to_symbols()
    }

    pub fn most_recent_by_priority(&self) -> Option<&str> {
        self.history.most_recent_by_priority()
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.history.last_move()
    }

    pub fn to_snapshot(&self) -> GameSnapshot {
        let (red_pieces, black_pieces) = self.board.count();
        GameSnapshot {
            board: self.board_snapshot(),
            red_pieces,
            black_pieces,
            red_score: self.red_score,
            black_score: self.black_score,
            move_count: self.history.len(),
            most_recent_move: self.most_recent_by_priority().map(str::to_string),
            last_move: self.last_move().map(ToString::to_string),
        }
    }

    // Every step below is infallible, so a validated move is applied in full.
    fn commit(&mut self, mv: ValidMove) -> MoveRecord {
        let piece = self.board.get(mv.from);
        self.board.set(mv.to, piece);
        self.board.set(mv.from, None);

        if let Some(captured) = mv.captured {
            self.board.set(captured, None);
            match mv.side {
                Side::Red => self.red_score += 1,
                Side::Black => self.black_score += 1,
            }
        }

        if mv.to.row == mv.side.promotion_row() {
            self.board.set(mv.to, piece.map(|p| p.promoted()));
        }

        let record = MoveRecord {
            player: mv.side,
            from: mv.from,
            to: mv.to,
        };
        self.history.record(record);
        record
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board) {
        self.board = board;
    }
}
