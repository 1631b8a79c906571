use std::io::{self, BufRead, Write};

use minesweep_core::{Coord2, Game, RevealOutcome};
use thiserror::Error;

const QUIT: &str = "q";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("input must be in the format 'row,col' (no spaces)")]
    Format,
    #[error("row and column must be integers")]
    NotInteger,
    #[error("row and column must be between 1 and {0} (inclusive)")]
    OutOfRange(usize),
}

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    /// Zero-based coordinates to reveal
    Reveal(Coord2),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Quit,
    Won,
    Lost,
    EndOfInput,
}

/// Parses `row,col` with one-based values in `1..=dimension`.
pub fn parse_input(text: &str, dimension: usize) -> Result<Command, InputError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case(QUIT) {
        return Ok(Command::Quit);
    }

    let parts: Vec<_> = text.split(',').collect();
    let [row, col] = parts[..] else {
        return Err(InputError::Format);
    };

    let parse = |part: &str| part.trim().parse::<i64>().map_err(|_| InputError::NotInteger);
    let (row, col) = (parse(row)?, parse(col)?);

    let in_range = |n: i64| usize::try_from(n).is_ok_and(|n| (1..=dimension).contains(&n));
    if in_range(row) && in_range(col) {
        Ok(Command::Reveal((row as usize - 1, col as usize - 1)))
    } else {
        Err(InputError::OutOfRange(dimension))
    }
}

/// Runs the read-reveal-print loop until the player quits, wins, hits a mine or input runs
/// out.
pub fn play<R, W, E>(game: &mut Game, mut input: R, out: &mut W, err: &mut E) -> io::Result<SessionEnd>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    writeln!(out, "{}", game.render_game_state())?;
    if game.in_win_state() {
        writeln!(out, "you win!")?;
        return Ok(SessionEnd::Won);
    }

    loop {
        writeln!(
            out,
            "enter a row,col number (1-indexed, ex: 1,4) - type {QUIT} to quit"
        )?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            log::debug!("Input closed");
            return Ok(SessionEnd::EndOfInput);
        }

        let (row, col) = match parse_input(&line, game.dimension()) {
            Ok(Command::Quit) => {
                writeln!(out, "quitting - good game")?;
                return Ok(SessionEnd::Quit);
            }
            Ok(Command::Reveal(coords)) => coords,
            Err(e) => {
                log::debug!("Rejected input {:?}: {e}", line.trim_end());
                writeln!(err, "{}", game.board())?;
                writeln!(err, "bad input: {e}")?;
                continue;
            }
        };

        let outcome = match game.reveal(row, col) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(err, "bad input: {e}")?;
                continue;
            }
        };

        if matches!(outcome, RevealOutcome::HitMine) {
            writeln!(out, "you lose")?;
            return Ok(SessionEnd::Lost);
        }
        if !outcome.has_update() {
            log::debug!("{:?} already uncovered", (row, col));
            continue;
        }

        writeln!(out)?;
        writeln!(out, "{}", game.render_game_state())?;
        writeln!(out)?;

        if game.in_win_state() {
            writeln!(out, "you win!")?;
            return Ok(SessionEnd::Won);
        }
    }
}
