//! Error kinds raised by the board, the players and the console.
//!
//! All of them except [`GameError::Io`] are recoverable somewhere: the
//! coordinator re-prompts or resamples, the menu asks for cells again.

use derive_more::{Display, Error};

use crate::board::{Coord, Mark};

/// Why a line of human coordinates was rejected.
///
/// The `Display` text is shown to the player verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum InputError {
    #[display("You should enter numbers!")]
    NotNumbers,
    #[display("You should enter two numbers!")]
    WrongCount,
    #[display("Coordinates should be from 1 to 3!")]
    OutOfRange,
}

#[derive(Debug, Display, Error)]
pub enum GameError {
    /// Target cell already holds a mark; the board was not touched.
    #[display("This cell is occupied! Choose another one!")]
    CellOccupied { coord: Coord },
    #[display("{reason}")]
    MalformedInput { reason: InputError },
    #[display("Malformed initial state: {reason}")]
    MalformedInitialState { reason: String },
    /// The input stream ended while a line was expected.
    #[display("input closed")]
    InputClosed,
    #[display("player {mark} found no empty cell after {attempts} attempts")]
    PlayerStalled { mark: Mark, attempts: usize },
    #[display("console I/O failed: {source}")]
    Io { source: std::io::Error },
}

impl From<InputError> for GameError {
    fn from(reason: InputError) -> Self {
        GameError::MalformedInput { reason }
    }
}

impl From<std::io::Error> for GameError {
    fn from(source: std::io::Error) -> Self {
        GameError::Io { source }
    }
}

impl GameError {
    /// True for errors the coordinator or menu handles by asking again.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::CellOccupied { .. }
                | GameError::MalformedInput { .. }
                | GameError::MalformedInitialState { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_messages() {
        assert_eq!(InputError::NotNumbers.to_string(), "You should enter numbers!");
        assert_eq!(InputError::WrongCount.to_string(), "You should enter two numbers!");
        assert_eq!(
            InputError::OutOfRange.to_string(),
            "Coordinates should be from 1 to 3!"
        );
    }

    #[test]
    fn test_recoverable_kinds() {
        let occupied = GameError::CellOccupied {
            coord: Coord::new(0, 0).unwrap(),
        };
        assert!(occupied.is_recoverable());
        assert!(GameError::from(InputError::WrongCount).is_recoverable());
        assert!(!GameError::InputClosed.is_recoverable());
    }
}
