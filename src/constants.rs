//! Board geometry, textual symbols and coordinator limits.
//!
//! The board is stored as a flat array of [`CELLS`] entries, row-major from
//! the top row down. Coordinates are `(column, row)` with row 0 at the
//! bottom, so the index of a point is `(SIZE - 1 - row) * SIZE + column`.

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length.
pub const SIZE: usize = 3;

/// Total number of cells.
pub const CELLS: usize = SIZE * SIZE;

/// Every line that wins the game, as flat indices.
///
/// Rows first, then columns, then the two diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

// =============================================================================
// Symbols
// =============================================================================

pub const SYMBOL_X: char = 'X';
pub const SYMBOL_O: char = 'O';

/// Empty cell in seed strings.
pub const SYMBOL_EMPTY: char = '_';

// =============================================================================
// Turn Coordinator
// =============================================================================

/// Upper bound on occupied-cell samples a random player may draw in one turn.
///
/// With at least one empty cell the chance of hitting this is below 1e-50.
pub const MAX_RANDOM_ATTEMPTS: usize = 1000;
