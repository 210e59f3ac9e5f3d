//! Tic-tac-toe rules engine.
//!
//! An embeddable core for two-player tic-tac-toe: board state, move
//! validation, turn alternation, win and draw detection, and score
//! tracking across successive games sharing one [`Game`]. Rendering,
//! input handling, networking and opponent strategy are left to the
//! embedding front-end.
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Game, Player};
//!
//! let mut game = Game::new();
//! game.mark(0, 0)?; // player 1
//! game.mark(1, 0)?; // player 2
//! game.mark(0, 1)?;
//! game.mark(1, 1)?;
//! game.mark(0, 2)?; // player 1 completes the top row
//! assert!(game.is_finished());
//! assert_eq!(game.winner(), Some(Player::One));
//! assert_eq!(game.scoreboard().wins(Player::One), 1);
//! # Ok::<(), tictactoe_core::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod board;
mod error;
mod game;
mod rules;
mod types;

// Crate-level exports - Board and coordinate checking
pub use board::{Board, COLS, OutOfBounds, ROWS};

// Crate-level exports - Error taxonomy
pub use error::GameError;

// Crate-level exports - Game state machine
pub use game::{Game, GameStatus, Scoreboard};

// Crate-level exports - Rule predicates (reusable by alternative front-ends)
pub use rules::{BoardRule, WinCondition};

// Crate-level exports - Domain types
pub use types::{Player, Tile};
