use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use checkers::session::{Outcome, Session};
use checkers::types::Side;

fn main() -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut stdout = io::stdout();
    let mut session = Session::new();

    for (side, label) in [(Side::Red, "Red"), (Side::Black, "Black")] {
        write!(stdout, "Enter {label} Player's name: ")?;
        stdout.flush()?;
        let Some(name) = read_line(&mut input)? else {
            return Ok(());
        };
        session.register_player(side, name.trim());
    }

    loop {
        write!(stdout, "{}", session.render_board())?;
        writeln!(stdout, "{}", session.render_scores())?;
        write!(stdout, "Enter the player and move (e.g. R 2 1 3 2), Q to quit: ")?;
        stdout.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        match session.handle_line(&line) {
            Outcome::Continue(message) => writeln!(stdout, "{message}")?,
            Outcome::Quit(message) => {
                writeln!(stdout, "{message}")?;
                break;
            }
        }
    }

    Ok(())
}

/// Returns `None` at end of input.
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok((read > 0).then_some(line))
}
