//! Error taxonomy for game operations.

use crate::board::OutOfBounds;
use crate::types::Tile;

/// Errors a call to [`crate::Game::mark`] can report.
///
/// Every variant is recoverable and leaves the game untouched: either the
/// whole move applies, or nothing changes. `GameAlreadyFinished` is
/// cleared only by starting a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The coordinates fall outside the 3x3 board.
    #[display("invalid board location at ({row}, {col})")]
    InvalidBoardLocation {
        /// Offending row index.
        row: usize,
        /// Offending column index.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("illegal move at ({row}, {col}): cell already holds '{occupied}'")]
    IllegalPlayerMove {
        /// Row of the occupied cell.
        row: usize,
        /// Column of the occupied cell.
        col: usize,
        /// The mark already present.
        occupied: Tile,
    },

    /// The game has concluded; no further moves until a new game starts.
    #[display("game is already finished")]
    GameAlreadyFinished,
}

impl std::error::Error for GameError {}

impl From<OutOfBounds> for GameError {
    fn from(err: OutOfBounds) -> Self {
        GameError::InvalidBoardLocation {
            row: err.row,
            col: err.col,
        }
    }
}
