//! Move-legality and winning-condition predicates.
//!
//! Rules are pure and stateless: each takes the board and its arguments
//! explicitly and answers a single yes/no question. [`crate::Game`]
//! composes them; alternative front-ends may reuse them directly.

use crate::board::{Board, COLS, OutOfBounds, ROWS};
use crate::types::Tile;
use tracing::instrument;

/// Legality gates a move must pass before the board changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum BoardRule {
    /// The target cell must currently be empty.
    CannotOverwriteNonEmptyCell,
    /// The tile being written must not be the empty tile.
    CannotSetTileAsEmpty,
}

impl BoardRule {
    /// Returns true if marking `tile` at `(row, col)` satisfies this rule.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfBounds`] when the rule inspects the board and the
    /// location falls outside it.
    #[instrument(skip(board))]
    pub fn check(
        self,
        board: &Board,
        row: usize,
        col: usize,
        tile: Tile,
    ) -> Result<bool, OutOfBounds> {
        match self {
            BoardRule::CannotOverwriteNonEmptyCell => Ok(board.tile_at(row, col)?.is_empty()),
            BoardRule::CannotSetTileAsEmpty => Ok(!tile.is_empty()),
        }
    }
}

/// Winning line shapes, each checked against one target tile.
///
/// A winner exists when any condition reports a full line of the target.
/// After a move only the mover's tile needs checking: the opponent's
/// lines cannot have changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub enum WinCondition {
    /// Some row holds three of the target tile.
    RowMatchesValue,
    /// Some column holds three of the target tile.
    ColumnMatchesValue,
    /// Either diagonal holds three of the target tile.
    DiagonalMatchesValue,
}

impl WinCondition {
    /// Returns true if a line of this shape is filled with `target`.
    #[instrument(skip(board))]
    pub fn check(self, board: &Board, target: Tile) -> bool {
        match self {
            WinCondition::RowMatchesValue => {
                (0..ROWS).any(|row| (0..COLS).all(|col| board.at(row, col) == target))
            }
            WinCondition::ColumnMatchesValue => {
                (0..COLS).any(|col| (0..ROWS).all(|row| board.at(row, col) == target))
            }
            WinCondition::DiagonalMatchesValue => {
                const DIAGONALS: [[(usize, usize); 3]; 2] = [
                    [(0, 0), (1, 1), (2, 2)],
                    [(2, 0), (1, 1), (0, 2)],
                ];
                DIAGONALS
                    .iter()
                    .any(|line| line.iter().all(|&(row, col)| board.at(row, col) == target))
            }
        }
    }
}
