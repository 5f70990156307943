use crate::types::{BOARD_SIZE, Piece, Position, Side};

pub type Cell = Option<Piece>;

/// Checkers board state: one optional piece per square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the starting layout:
    /// dark squares (row+col odd) of rows 0-2 hold red men, rows 5-7 black men.
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.initialize();
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Resets all 64 squares to the starting layout.
    pub fn initialize(&mut self) {
        for (row, line) in self.cells.iter_mut().enumerate() {
            for (col, cell) in line.iter_mut().enumerate() {
                *cell = if (row + col) % 2 == 0 {
                    None
                } else if row < 3 {
                    Some(Piece::man(Side::Red))
                } else if row > 4 {
                    Some(Piece::man(Side::Black))
                } else {
                    None
                };
            }
        }
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Returns `(red_count, black_count)`.
    pub fn count(&self) -> (u8, u8) {
        let mut red = 0;
        let mut black = 0;
        for piece in self.cells.iter().flatten().flatten() {
            match piece.side {
                Side::Red => red += 1,
                Side::Black => black += 1,
            }
        }
        (red, black)
    }

    /// Converts the board to display symbols: ' ' empty, 'R'/'B' men, 'K' kings.
    pub fn to_symbols(&self) -> [[char; BOARD_SIZE]; BOARD_SIZE] {
        let mut out = [[' '; BOARD_SIZE]; BOARD_SIZE];
        for (row, line) in self.cells.iter().enumerate() {
            for (col, cell) in line.iter().enumerate() {
                out[row][col] = cell.map_or(' ', Piece::symbol);
            }
        }
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(row: u8, col: u8) -> Position {
        Position { row, col }
    }

    #[test]
    fn t01_initial_layout_fills_dark_squares_of_outer_rows() {
        let board = Board::new();

        assert_eq!(board.count(), (12, 12));
        assert_eq!(board.get(pos(0, 1)), Some(Piece::man(Side::Red)));
        assert_eq!(board.get(pos(2, 1)), Some(Piece::man(Side::Red)));
        assert_eq!(board.get(pos(5, 0)), Some(Piece::man(Side::Black)));
        assert_eq!(board.get(pos(7, 6)), Some(Piece::man(Side::Black)));
        assert_eq!(board.get(pos(0, 0)), None);
        assert_eq!(board.get(pos(3, 2)), None);
        assert_eq!(board.get(pos(4, 3)), None);
    }

    #[test]
    fn initialize_restores_layout_after_edits() {
        let mut board = Board::new();
        board.set(pos(2, 1), None);
        board.set(pos(4, 3), Some(Piece::king(Side::Black)));

        board.initialize();

        assert_eq!(board, Board::new());
    }

    #[test]
    fn symbols_render_men_kings_and_blanks() {
        let mut board = Board::empty();
        board.set(pos(0, 1), Some(Piece::man(Side::Red)));
        board.set(pos(7, 0), Some(Piece::man(Side::Black)));
        board.set(pos(3, 4), Some(Piece::king(Side::Red)));

        let symbols = board.to_symbols();

        assert_eq!(symbols[0][1], 'R');
        assert_eq!(symbols[7][0], 'B');
        assert_eq!(symbols[3][4], 'K');
        assert_eq!(symbols[0][0], ' ');
    }
}
