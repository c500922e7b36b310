//! Tictactoe-Rust: a console tic-tac-toe engine.
//!
//! This crate provides a 3x3 board engine with move validation and
//! win/draw detection, a turn coordinator alternating two players, and a
//! small line-oriented menu for playing at the terminal.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry, winning lines and limits
//! - [`board`] - Board state, moves and terminal status
//! - [`error`] - Recoverable error kinds
//! - [`input`] - Parsing of typed coordinates and seed strings
//! - [`player`] - Human and random-computer players
//! - [`console`] - Line IO over any reader/writer pair
//! - [`game`] - Turn coordination until a win or draw
//! - [`menu`] - The `start` / `exit` command loop
//!
//! ## Example
//!
//! ```
//! use tictactoe_rust::board::{Board, Coord, GameStatus, Mark};
//!
//! let mut board = Board::new();
//! for i in 0..3 {
//!     board.place_mark(Mark::X, Coord::new(i, i).unwrap()).unwrap();
//! }
//! assert_eq!(board.status(), GameStatus::Win(Mark::X));
//! println!("{board}");
//! ```

pub mod board;
pub mod console;
pub mod constants;
pub mod error;
pub mod game;
pub mod input;
pub mod menu;
pub mod player;
