//! The 3x3 board: cell state, move validation and terminal-status detection.

use std::fmt;

use tracing::debug;

use crate::constants::{CELLS, LINES, SIZE, SYMBOL_EMPTY, SYMBOL_O, SYMBOL_X};
use crate::error::GameError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => SYMBOL_X,
            Mark::O => SYMBOL_O,
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    /// Symbol used in seed strings.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => SYMBOL_EMPTY,
            Cell::Marked(mark) => mark.symbol(),
        }
    }

    fn from_symbol(c: char) -> Option<Cell> {
        match c.to_ascii_uppercase() {
            SYMBOL_X => Some(Cell::Marked(Mark::X)),
            SYMBOL_O => Some(Cell::Marked(Mark::O)),
            SYMBOL_EMPTY => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// A point on the board, `column` left to right and `row` bottom to top.
///
/// Both components are always below [`SIZE`]; [`Coord::new`] is the only way in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    column: usize,
    row: usize,
}

impl Coord {
    pub fn new(column: usize, row: usize) -> Option<Coord> {
        (column < SIZE && row < SIZE).then_some(Coord { column, row })
    }

    pub fn column(self) -> usize {
        self.column
    }

    pub fn row(self) -> usize {
        self.row
    }

    /// All nine coordinates, bottom row first.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE).flat_map(|row| (0..SIZE).map(move |column| Coord { column, row }))
    }

    fn index(self) -> usize {
        (SIZE - 1 - self.row) * SIZE + self.column
    }

    pub(crate) fn from_index(idx: usize) -> Coord {
        Coord {
            column: idx % SIZE,
            row: SIZE - 1 - idx / SIZE,
        }
    }
}

impl fmt::Display for Coord {
    /// 1-indexed, the way a player types it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.column + 1, self.row + 1)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Win(Mark),
    Draw,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "Game not finished"),
            GameStatus::Win(mark) => write!(f, "{mark} wins"),
            GameStatus::Draw => write!(f, "Draw"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from nine symbols (`X`, `O`, `_`), top row first.
    ///
    /// Letters are accepted in either case.
    pub fn from_cells(text: &str) -> Result<Board, GameError> {
        let symbols: Vec<char> = text.chars().collect();
        if symbols.len() != CELLS {
            return Err(GameError::MalformedInitialState {
                reason: format!("expected {CELLS} symbols, got {}", symbols.len()),
            });
        }
        let mut board = Board::new();
        for (i, &c) in symbols.iter().enumerate() {
            board.cells[i] = Cell::from_symbol(c).ok_or_else(|| {
                GameError::MalformedInitialState {
                    reason: format!("unknown symbol {c:?}"),
                }
            })?;
        }
        Ok(board)
    }

    /// Inverse of [`Board::from_cells`].
    pub fn to_cells(&self) -> String {
        self.cells.iter().map(|c| c.symbol()).collect()
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.index()]
    }

    pub fn is_empty(&self, coord: Coord) -> bool {
        self.cell(coord) == Cell::Empty
    }

    /// Put `mark` on an empty cell. An occupied cell leaves the board as it was.
    pub fn place_mark(&mut self, mark: Mark, coord: Coord) -> Result<(), GameError> {
        if !self.is_empty(coord) {
            debug!(%mark, %coord, "rejected move on occupied cell");
            return Err(GameError::CellOccupied { coord });
        }
        self.cells[coord.index()] = Cell::Marked(mark);
        Ok(())
    }

    pub fn mark_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    fn count_of(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|&&c| c == Cell::Marked(mark))
            .count()
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == Cell::Empty)
            .map(|(i, _)| Coord::from_index(i))
    }

    /// Mark whose turn it is, judged from the counts on the board.
    pub fn next_mark(&self) -> Mark {
        if self.count_of(Mark::X) > self.count_of(Mark::O) {
            Mark::O
        } else {
            Mark::X
        }
    }

    /// Lines are scanned rows, columns, diagonals; the first uniform one wins.
    pub fn status(&self) -> GameStatus {
        for [a, b, c] in LINES {
            if let Cell::Marked(mark) = self.cells[a] {
                if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] {
                    return GameStatus::Win(mark);
                }
            }
        }
        if self.cells.contains(&Cell::Empty) {
            GameStatus::InProgress
        } else {
            GameStatus::Draw
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Board {
    /// Framed grid with column labels on top and row labels on the left.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let border = "-".repeat(2 * SIZE + 3);
        write!(f, "   ")?;
        for column in 1..=SIZE {
            write!(f, " {column}")?;
        }
        writeln!(f)?;
        writeln!(f, "  {border}")?;
        for (i, cells) in self.cells.chunks(SIZE).enumerate() {
            write!(f, "{} |", SIZE - i)?;
            for cell in cells {
                let ch = match cell {
                    Cell::Empty => ' ',
                    Cell::Marked(mark) => mark.symbol(),
                };
                write!(f, " {ch}")?;
            }
            writeln!(f, " |")?;
        }
        writeln!(f, "  {border}")
    }
}
