//! Console session: player registration, command parsing and text output.

use crate::game::GameState;
use crate::history::OrderedIndex;
use crate::types::Side;

pub const MOVE_OK: &str = "Move made successfully!";
pub const MOVE_INVALID: &str = "Invalid move. Try again.";
pub const NO_MOVES: &str = "No moves made yet.";
pub const GOODBYE: &str = "Thanks for playing! Hope you had fun! Goodbye.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Move {
        player: char,
        from_row: i32,
        from_col: i32,
        to_row: i32,
        to_col: i32,
    },
}

/// Parses `Q` or `<player> <fromRow> <fromCol> <toRow> <toCol>`.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut tokens = line.split_whitespace();
    let head = tokens.next().ok_or_else(|| "empty command".to_string())?;

    let mut chars = head.chars();
    let player = match (chars.next(), chars.next()) {
        (Some(c), None) => c,
        _ => return Err(format!("expected a single player letter, got {head:?}")),
    };
    if player.eq_ignore_ascii_case(&'q') {
        return Ok(Command::Quit);
    }

    let mut coords = [0i32; 4];
    for (idx, slot) in coords.iter_mut().enumerate() {
        let token = tokens
            .next()
            .ok_or_else(|| format!("expected 4 coordinates, got {idx}"))?;
        *slot = token
            .parse()
            .map_err(|_| format!("coordinate {token:?} is not a number"))?;
    }
    if let Some(extra) = tokens.next() {
        return Err(format!("unexpected trailing input {extra:?}"));
    }

    let [from_row, from_col, to_row, to_col] = coords;
    Ok(Command::Move {
        player,
        from_row,
        from_col,
        to_row,
        to_col,
    })
}

/// Result of feeding one input line to a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue(String),
    Quit(String),
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    game: GameState,
    red_players: OrderedIndex<String>,
    black_players: OrderedIndex<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn register_player(&mut self, side: Side, name: &str) {
        let roster = match side {
            Side::Red => &mut self.red_players,
            Side::Black => &mut self.black_players,
        };
        roster.insert(name.to_string());
    }

    /// Registered names for `side`, alphabetically.
    pub fn players(&self, side: Side) -> Vec<&str> {
        let roster = match side {
            Side::Red => &self.red_players,
            Side::Black => &self.black_players,
        };
        roster
            .iter_in_order()
            .into_iter()
            .map(String::as_str)
            .collect()
    }

    pub fn handle_line(&mut self, line: &str) -> Outcome {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(err) => return Outcome::Continue(format!("{MOVE_INVALID} ({err})")),
        };

        match command {
            Command::Quit => Outcome::Quit(GOODBYE.to_string()),
            Command::Move {
                player,
                from_row,
                from_col,
                to_row,
                to_col,
            } => {
                if self
                    .game
                    .apply_move(player, from_row, from_col, to_row, to_col)
                {
                    Outcome::Continue(format!("{MOVE_OK}\n{}", self.render_recent_move()))
                } else {
                    Outcome::Continue(MOVE_INVALID.to_string())
                }
            }
        }
    }

    pub fn render_board(&self) -> String {
        let mut out = String::from("   0 1 2 3 4 5 6 7\n");
        for (row, cells) in self.game.board_snapshot().iter().enumerate() {
            out.push_str(&row.to_string());
            out.push(' ');
            for &cell in cells {
                out.push(cell);
                out.push(' ');
            }
            out.push('\n');
        }
        out
    }

    pub fn render_scores(&self) -> String {
        format!(
            "Red Player's Score: {}\nBlack Player's Score: {}",
            self.game.red_score(),
            self.game.black_score()
        )
    }

    pub fn render_recent_move(&self) -> String {
        match self.game.most_recent_by_priority() {
            Some(mv) => format!("Most recent move: {mv}"),
            None => NO_MOVES.to_string(),
        }
    }
}
