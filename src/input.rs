//! Parsing of the text a human types at the console.

use crate::board::{Board, Coord};
use crate::error::{GameError, InputError};

/// Parse `"<column> <row>"`, both 1-indexed, into a board coordinate.
///
/// Checks run in a fixed order: every token numeric, exactly two tokens,
/// each in `1..=3`. An empty line counts as not numeric.
pub fn parse_coordinates(line: &str) -> Result<Coord, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() || !tokens.iter().all(|t| t.chars().all(|c| c.is_ascii_digit())) {
        return Err(InputError::NotNumbers);
    }
    if tokens.len() != 2 {
        return Err(InputError::WrongCount);
    }
    let column = parse_axis(tokens[0])?;
    let row = parse_axis(tokens[1])?;
    Coord::new(column, row).ok_or(InputError::OutOfRange)
}

fn parse_axis(token: &str) -> Result<usize, InputError> {
    match token.parse::<usize>() {
        Ok(n @ 1..=3) => Ok(n - 1),
        _ => Err(InputError::OutOfRange),
    }
}

/// Parse a 9-symbol initial state line, ignoring surrounding whitespace.
pub fn parse_initial_state(line: &str) -> Result<Board, GameError> {
    Board::from_cells(line.trim())
}
