//! Whole-game tests driving the turn coordinator through scripted consoles.

use std::io::Cursor;

use tictactoe_rust::board::{Board, GameStatus, Mark};
use tictactoe_rust::console::Console;
use tictactoe_rust::error::GameError;
use tictactoe_rust::game::Game;
use tictactoe_rust::player::PlayerKind;

fn scripted(input: &str) -> Console<Cursor<String>, Vec<u8>> {
    Console::new(Cursor::new(input.to_string()), Vec::new())
}

fn output_of(console: Console<Cursor<String>, Vec<u8>>) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_two_humans_diagonal_win() {
    let mut rng = fastrand::Rng::with_seed(0);
    let mut game = Game::new(Board::new(), [PlayerKind::User, PlayerKind::User], &mut rng);
    let mut console = scripted("1 1\n2 1\n2 2\n3 1\n3 3\n");

    let status = game.play(&mut console).unwrap();
    assert_eq!(status, GameStatus::Win(Mark::X));
    assert_eq!(game.moves(), 5);
    assert_eq!(game.board().mark_count(), 5);

    let output = output_of(console);
    assert!(output.ends_with("X wins\n"));
    // initial board plus one render per move
    assert_eq!(output.matches("    1 2 3").count(), 6);
}

#[test]
fn test_malformed_and_occupied_input_recovers() {
    let mut rng = fastrand::Rng::with_seed(0);
    let mut game = Game::new(Board::new(), [PlayerKind::User, PlayerKind::User], &mut rng);
    // X: 1 1; O: junk, 1 1 (taken), 1 2; X: 2 1; O: 2 2; X: 3 1 wins bottom row
    let mut console = scripted("1 1\nfoo\n1 1\n1 2\n2 1\n2 2\n3 1\n");

    assert_eq!(game.play(&mut console).unwrap(), GameStatus::Win(Mark::X));
    assert_eq!(game.moves(), 5);

    let output = output_of(console);
    assert!(output.contains("You should enter numbers!"));
    assert!(output.contains("This cell is occupied! Choose another one!"));
}

#[test]
fn test_o_can_win() {
    let mut rng = fastrand::Rng::with_seed(0);
    let mut game = Game::new(Board::new(), [PlayerKind::User, PlayerKind::User], &mut rng);
    let mut console = scripted("1 1\n1 3\n2 1\n2 3\n3 2\n3 3\n");

    assert_eq!(game.play(&mut console).unwrap(), GameStatus::Win(Mark::O));
    assert!(output_of(console).ends_with("O wins\n"));
}

#[test]
fn test_draw_result_line() {
    let mut rng = fastrand::Rng::with_seed(0);
    let board = Board::from_cells("XOXXOOOX_").unwrap();
    let mut game = Game::new(board, [PlayerKind::User, PlayerKind::User], &mut rng);
    let mut console = scripted("3 1\n");

    assert_eq!(game.play(&mut console).unwrap(), GameStatus::Draw);
    assert!(output_of(console).ends_with("Draw\n"));
}

#[test]
fn test_random_games_always_terminate_consistently() {
    for seed in 0..200 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut game = Game::new(Board::new(), [PlayerKind::Easy, PlayerKind::Easy], &mut rng);
        let mut console = scripted("");

        let status = game.play(&mut console).unwrap();
        assert!(status.is_terminal());
        assert_eq!(status, game.board().status());
        assert_eq!(game.board().mark_count(), game.moves());

        let output = output_of(console);
        assert_eq!(output.matches("Making move level \"easy\"").count(), game.moves());
        assert!(output.ends_with(&format!("{status}\n")));
    }
}

#[test]
fn test_same_seed_same_game() {
    let play = |seed| {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut game = Game::new(Board::new(), [PlayerKind::Easy, PlayerKind::Easy], &mut rng);
        game.play(&mut scripted("")).unwrap();
        game.board().to_cells()
    };
    assert_eq!(play(5), play(5));
}

#[test]
fn test_human_against_computer() {
    let mut rng = fastrand::Rng::with_seed(3);
    let mut game = Game::new(Board::new(), [PlayerKind::User, PlayerKind::Easy], &mut rng);
    // enough candidate moves for X; occupied ones are re-asked
    let script = "1 1\n2 1\n3 1\n1 2\n2 2\n3 2\n1 3\n2 3\n3 3\n".repeat(3);
    let mut console = scripted(&script);

    let status = game.play(&mut console).unwrap();
    assert!(status.is_terminal());
    assert_eq!(game.board().mark_count(), game.moves());
}

#[test]
fn test_closed_input_aborts_human_turn() {
    let mut rng = fastrand::Rng::with_seed(0);
    let mut game = Game::new(Board::new(), [PlayerKind::User, PlayerKind::User], &mut rng);
    let mut console = scripted("2 2\n");

    assert!(matches!(game.play(&mut console), Err(GameError::InputClosed)));
    assert_eq!(game.moves(), 1);
    assert_eq!(game.board().to_cells(), "____X____");
}
