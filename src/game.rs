//! Turn coordination between two players over one board.
//!
//! A [`Game`] owns the board and both players. Each turn it asks the active
//! player for a coordinate, applies it, re-renders the board and passes the
//! turn until the board reaches a win or a draw.

use std::io::{BufRead, Write};

use tracing::{debug, info, instrument};

use crate::board::{Board, GameStatus, Mark};
use crate::console::Console;
use crate::constants::MAX_RANDOM_ATTEMPTS;
use crate::error::GameError;
use crate::player::{Player, PlayerKind};

pub struct Game {
    board: Board,
    /// Player one holds X, player two holds O.
    players: [Player; 2],
    active: usize,
    moves: usize,
}

impl Game {
    /// Set up a game on `board`. The player whose mark is due on `board`
    /// moves first, which on an empty board is always player one.
    pub fn new(board: Board, kinds: [PlayerKind; 2], rng: &mut fastrand::Rng) -> Self {
        let players = [
            Player::new(kinds[0], Mark::X, rng),
            Player::new(kinds[1], Mark::O, rng),
        ];
        let active = match board.next_mark() {
            Mark::X => 0,
            Mark::O => 1,
        };
        Self {
            board,
            players,
            active,
            moves: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.active]
    }

    /// Accepted moves in this game, not counting seeded marks.
    pub fn moves(&self) -> usize {
        self.moves
    }

    /// Play one accepted move and return the resulting status.
    ///
    /// A terminal board is returned as is. Occupied cells send a human back to
    /// the prompt and make a computer sample again.
    #[instrument(skip_all, fields(mark = %self.players[self.active].mark()))]
    pub fn play_turn<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<GameStatus, GameError> {
        let status = self.board.status();
        if status.is_terminal() {
            return Ok(status);
        }

        let player = &mut self.players[self.active];
        let mark = player.mark();
        if !player.is_human() {
            console.say("Making move level \"easy\"")?;
        }

        let mut attempts = 0;
        let coord = loop {
            let coord = player.choose_move(&self.board, console)?;
            match self.board.place_mark(mark, coord) {
                Ok(()) => break coord,
                Err(err @ GameError::CellOccupied { .. }) => {
                    if player.is_human() {
                        console.say(err.to_string())?;
                        continue;
                    }
                    attempts += 1;
                    if attempts >= MAX_RANDOM_ATTEMPTS {
                        return Err(GameError::PlayerStalled { mark, attempts });
                    }
                }
                Err(err) => return Err(err),
            }
        };

        self.moves += 1;
        debug!(%mark, %coord, moves = self.moves, "move accepted");
        console.show(self.board.render())?;

        let status = self.board.status();
        if !status.is_terminal() {
            self.active = 1 - self.active;
        }
        Ok(status)
    }

    /// Play until the board is terminal, then print the result line.
    pub fn play<R: BufRead, W: Write>(
        &mut self,
        console: &mut Console<R, W>,
    ) -> Result<GameStatus, GameError> {
        info!(
            x = ?self.players[0].kind(),
            o = ?self.players[1].kind(),
            cells = %self.board.to_cells(),
            "game started"
        );
        console.show(self.board.render())?;

        let mut status = self.board.status();
        while !status.is_terminal() {
            status = self.play_turn(console)?;
        }

        info!(%status, moves = self.moves, "game finished");
        console.say(status.to_string())?;
        Ok(status)
    }
}
