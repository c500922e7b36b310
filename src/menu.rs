//! Outer command loop.
//!
//! ## Commands
//!
//! - `start <p1> <p2>` - Play one game; each player is `user` or `easy`
//! - `exit` - Leave the menu
//!
//! Anything else is answered with `Bad parameters!`.
//!
//! ## Example
//!
//! ```ignore
//! use tictactoe_rust::console::Console;
//! use tictactoe_rust::menu::Menu;
//! let mut menu = Menu::new(fastrand::Rng::new());
//! menu.run(&mut Console::stdio())?;
//! ```

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use crate::board::{Board, GameStatus};
use crate::console::Console;
use crate::error::GameError;
use crate::game::Game;
use crate::input::parse_initial_state;
use crate::player::PlayerKind;

/// A parsed menu line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start([PlayerKind; 2]),
    Exit,
    Bad,
}

impl Command {
    pub fn parse(line: &str) -> Command {
        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            ["exit"] => Command::Exit,
            ["start", first, second] => {
                match (PlayerKind::from_label(first), PlayerKind::from_label(second)) {
                    (Some(a), Some(b)) => Command::Start([a, b]),
                    _ => Command::Bad,
                }
            }
            _ => Command::Bad,
        }
    }
}

pub struct Menu {
    rng: fastrand::Rng,
    /// Ask for a 9-symbol starting position before each game.
    ask_cells: bool,
    results: Vec<GameStatus>,
}

impl Menu {
    pub fn new(rng: fastrand::Rng) -> Self {
        Self {
            rng,
            ask_cells: false,
            results: Vec::new(),
        }
    }

    pub fn with_initial_cells(mut self, ask_cells: bool) -> Self {
        self.ask_cells = ask_cells;
        self
    }

    /// Results of the games finished so far, in order.
    pub fn results(&self) -> &[GameStatus] {
        &self.results
    }

    /// Read commands until `exit` or end of input.
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<(), GameError> {
        loop {
            let line = match console.prompt("Input command: ") {
                Ok(line) => line,
                Err(GameError::InputClosed) => return Ok(()),
                Err(err) => return Err(err),
            };
            match self.execute(Command::parse(&line), console) {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(GameError::InputClosed) => {
                    warn!("input closed during a game");
                    return Ok(());
                }
                Err(err) => return Err(err),
            }
        }
    }

    /// Execute one command. Returns `false` when the menu should stop.
    fn execute<R: BufRead, W: Write>(
        &mut self,
        command: Command,
        console: &mut Console<R, W>,
    ) -> Result<bool, GameError> {
        debug!(?command, "menu command");
        match command {
            Command::Exit => Ok(false),
            Command::Bad => {
                console.say("Bad parameters!")?;
                Ok(true)
            }
            Command::Start(kinds) => {
                let board = if self.ask_cells {
                    Self::read_initial_board(console)?
                } else {
                    Board::new()
                };
                let mut game = Game::new(board, kinds, &mut self.rng);
                let status = game.play(console)?;
                self.results.push(status);
                Ok(true)
            }
        }
    }

    fn read_initial_board<R: BufRead, W: Write>(
        console: &mut Console<R, W>,
    ) -> Result<Board, GameError> {
        let mut prompt = "Enter cells: ";
        loop {
            let line = console.prompt(prompt)?;
            match parse_initial_state(&line) {
                Ok(board) => return Ok(board),
                Err(err) if err.is_recoverable() => {
                    debug!(%err, "rejected initial state");
                    prompt = "Unknown sequence. Enter cells: ";
                }
                Err(err) => return Err(err),
            }
        }
    }
}
