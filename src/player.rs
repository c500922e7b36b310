//! The two kinds of participant: a human at the console and a computer that
//! picks cells uniformly at random.

use std::io::{BufRead, Write};

use clap::ValueEnum;
use tracing::debug;

use crate::board::{Board, Coord, Mark};
use crate::console::Console;
use crate::constants::CELLS;
use crate::error::GameError;
use crate::input::parse_coordinates;

/// Player type as chosen on the command line or in the menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PlayerKind {
    /// Human entering coordinates at the console
    #[value(name = "user")]
    User,
    /// Computer choosing uniformly at random
    #[value(name = "easy")]
    Easy,
}

impl PlayerKind {
    /// Parse a menu label (`user`, `easy`).
    pub fn from_label(label: &str) -> Option<PlayerKind> {
        <PlayerKind as ValueEnum>::from_str(label, false).ok()
    }
}

pub enum Player {
    Human { mark: Mark },
    RandomComputer { mark: Mark, rng: fastrand::Rng },
}

impl Player {
    /// Build a player of `kind` holding `mark`. Computers get their own RNG
    /// forked from `rng`, so a seeded `rng` reproduces their moves.
    pub fn new(kind: PlayerKind, mark: Mark, rng: &mut fastrand::Rng) -> Player {
        match kind {
            PlayerKind::User => Player::Human { mark },
            PlayerKind::Easy => Player::RandomComputer {
                mark,
                rng: rng.fork(),
            },
        }
    }

    pub fn mark(&self) -> Mark {
        match self {
            Player::Human { mark } | Player::RandomComputer { mark, .. } => *mark,
        }
    }

    pub fn kind(&self) -> PlayerKind {
        match self {
            Player::Human { .. } => PlayerKind::User,
            Player::RandomComputer { .. } => PlayerKind::Easy,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, Player::Human { .. })
    }

    /// Produce one candidate coordinate. It may point at an occupied cell;
    /// the coordinator decides what to do with that.
    ///
    /// A human is re-prompted on malformed input until a well-formed line
    /// arrives or input ends.
    pub fn choose_move<R: BufRead, W: Write>(
        &mut self,
        _board: &Board,
        console: &mut Console<R, W>,
    ) -> Result<Coord, GameError> {
        match self {
            Player::Human { mark } => loop {
                let line = console.prompt("Enter the coordinates: ")?;
                match parse_coordinates(&line) {
                    Ok(coord) => return Ok(coord),
                    Err(reason) => {
                        debug!(%mark, %reason, "malformed coordinates");
                        console.say(reason.to_string())?;
                    }
                }
            },
            Player::RandomComputer { mark, rng } => {
                let coord = Coord::from_index(rng.usize(0..CELLS));
                debug!(%mark, %coord, "random candidate");
                Ok(coord)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_kind_labels() {
        assert_eq!(PlayerKind::from_label("user"), Some(PlayerKind::User));
        assert_eq!(PlayerKind::from_label("easy"), Some(PlayerKind::Easy));
        assert_eq!(PlayerKind::from_label("hard"), None);
        assert_eq!(PlayerKind::from_label("USER"), None);
    }

    #[test]
    fn test_human_reprompts_until_valid() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut player = Player::new(PlayerKind::User, Mark::X, &mut rng);
        let mut console = Console::new(Cursor::new("a b\n1\n4 1\n3 2\n"), Vec::new());

        let coord = player.choose_move(&Board::new(), &mut console).unwrap();
        assert_eq!((coord.column(), coord.row()), (2, 1));

        let output = String::from_utf8(console.into_output()).unwrap();
        assert!(output.contains("You should enter numbers!"));
        assert!(output.contains("You should enter two numbers!"));
        assert!(output.contains("Coordinates should be from 1 to 3!"));
        assert_eq!(output.matches("Enter the coordinates: ").count(), 4);
    }

    #[test]
    fn test_human_input_closed() {
        let mut rng = fastrand::Rng::with_seed(1);
        let mut player = Player::new(PlayerKind::User, Mark::O, &mut rng);
        let mut console = Console::new(Cursor::new("x\n"), Vec::new());
        assert!(matches!(
            player.choose_move(&Board::new(), &mut console),
            Err(GameError::InputClosed)
        ));
    }

    #[test]
    fn test_random_covers_every_cell() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut player = Player::new(PlayerKind::Easy, Mark::O, &mut rng);
        let mut console = Console::new(Cursor::new(""), Vec::new());
        let board = Board::new();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(player.choose_move(&board, &mut console).unwrap());
        }
        assert_eq!(seen.len(), 9);
        assert!(console.into_output().is_empty());
    }

    #[test]
    fn test_marks_and_kinds() {
        let mut rng = fastrand::Rng::with_seed(3);
        let human = Player::new(PlayerKind::User, Mark::X, &mut rng);
        let computer = Player::new(PlayerKind::Easy, Mark::O, &mut rng);
        assert_eq!(human.mark(), Mark::X);
        assert_eq!(computer.mark(), Mark::O);
        assert!(human.is_human());
        assert_eq!(computer.kind(), PlayerKind::Easy);
    }
}
