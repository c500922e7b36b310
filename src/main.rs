//! Tictactoe-Rust: console tic-tac-toe.
//!
//! ## Usage
//!
//! - `tictactoe-rust` - Start the interactive menu
//! - `tictactoe-rust menu --ask-cells` - Menu that asks for a starting position
//! - `tictactoe-rust play --x user --o easy` - Play a single game directly

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tictactoe_rust::board::Board;
use tictactoe_rust::console::Console;
use tictactoe_rust::game::Game;
use tictactoe_rust::menu::Menu;
use tictactoe_rust::player::PlayerKind;

/// Tictactoe-Rust: console tic-tac-toe against a friend or a random computer
#[derive(Parser)]
#[command(name = "tictactoe-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for the computer players' random choices
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read `start <p1> <p2>` / `exit` commands from the console
    Menu {
        /// Ask for a 9-symbol starting position (X, O, _) before each game
        #[arg(long)]
        ask_cells: bool,
    },
    /// Play one game and exit
    Play {
        /// Who plays X (moves first)
        #[arg(long, value_enum, default_value = "user")]
        x: PlayerKind,
        /// Who plays O
        #[arg(long, value_enum, default_value = "easy")]
        o: PlayerKind,
        /// Starting position, 9 symbols of X, O, _ from the top row down
        #[arg(long)]
        cells: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    let mut console = Console::stdio();

    match cli.command {
        Some(Commands::Play { x, o, cells }) => {
            let board = match cells {
                Some(cells) => Board::from_cells(&cells)
                    .with_context(|| format!("invalid --cells {cells:?}"))?,
                None => Board::new(),
            };
            let mut game = Game::new(board, [x, o], &mut rng);
            game.play(&mut console).context("game aborted")?;
        }
        Some(Commands::Menu { ask_cells }) => {
            Menu::new(rng)
                .with_initial_cells(ask_cells)
                .run(&mut console)
                .context("menu aborted")?;
        }
        None => {
            Menu::new(rng).run(&mut console).context("menu aborted")?;
        }
    }

    Ok(())
}
