//! 3x3 board: tile storage and coordinate-checked access.

use crate::types::Tile;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Number of rows on the board.
pub const ROWS: usize = 3;

/// Number of columns on the board.
pub const COLS: usize = 3;

/// Coordinate pair outside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
#[display("location ({row}, {col}) is outside the 3x3 board")]
pub struct OutOfBounds {
    /// Offending row index.
    pub row: usize,
    /// Offending column index.
    pub col: usize,
}

impl std::error::Error for OutOfBounds {}

/// 3x3 tic-tac-toe board.
///
/// The board is mechanism, not policy: it stores tiles and checks
/// coordinates, but performs no move-legality checks. Legality lives in
/// the rule predicates and is enforced by [`crate::Game`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Tiles in row-major order (0-8).
    tiles: [Tile; ROWS * COLS],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            tiles: [Tile::Empty; ROWS * COLS],
        }
    }

    fn index(row: usize, col: usize) -> Result<usize, OutOfBounds> {
        if row < ROWS && col < COLS {
            Ok(row * COLS + col)
        } else {
            Err(OutOfBounds { row, col })
        }
    }

    /// Gets the tile at the given location.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] when `row` or `col` is not in `0..3`.
    pub fn tile_at(&self, row: usize, col: usize) -> Result<Tile, OutOfBounds> {
        Ok(self.tiles[Self::index(row, col)?])
    }

    /// Replaces the tile at the given location.
    ///
    /// Any tile may be written, including [`Tile::Empty`]; callers that
    /// need legality checks run the rule predicates first.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] when `row` or `col` is not in `0..3`.
    #[instrument(skip(self))]
    pub fn mark(&mut self, row: usize, col: usize, tile: Tile) -> Result<(), OutOfBounds> {
        let idx = Self::index(row, col)?;
        self.tiles[idx] = tile;
        Ok(())
    }

    /// Resets every cell to [`Tile::Empty`].
    pub fn clear(&mut self) {
        self.tiles = [Tile::Empty; ROWS * COLS];
    }

    /// Returns true iff every cell is empty.
    pub fn is_empty(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_empty())
    }

    /// Returns true iff no cell is empty.
    pub fn is_full(&self) -> bool {
        self.tiles.iter().all(|tile| !tile.is_empty())
    }

    /// Iterates the rows top to bottom, each as an array of three tiles.
    pub fn iter_rows(&self) -> impl Iterator<Item = [Tile; COLS]> + '_ {
        (0..ROWS).map(|row| [self.at(row, 0), self.at(row, 1), self.at(row, 2)])
    }

    /// In-range access for coordinates fixed at the call site.
    pub(crate) fn at(&self, row: usize, col: usize) -> Tile {
        debug_assert!(row < ROWS && col < COLS);
        self.tiles[row * COLS + col]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..ROWS {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..COLS {
                write!(f, "[{}]", self.at(row, col))?;
            }
        }
        Ok(())
    }
}
