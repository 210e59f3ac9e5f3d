//! Game state machine: turn sequencing, scoring, and game-over detection.

use crate::board::Board;
use crate::error::GameError;
use crate::rules::{BoardRule, WinCondition};
use crate::types::{Player, Tile};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// Cumulative win counts per player across successive games.
///
/// Both players are always present, starting from zero. Obtained from
/// [`Game::scoreboard`] as a value snapshot; the game keeps the only
/// mutable copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    wins: [u32; 2],
}

impl Scoreboard {
    /// Win count for the given player.
    pub fn wins(&self, player: Player) -> u32 {
        self.wins[Self::slot(player)]
    }

    fn slot(player: Player) -> usize {
        match player {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    fn record_win(&mut self, player: Player) {
        self.wins[Self::slot(player)] += 1;
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended with a winner.
    Won(Player),
    /// Game ended with a full board and no winning line.
    Draw,
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => write!(f, "in progress"),
            GameStatus::Won(player) => write!(f, "{player} wins"),
            GameStatus::Draw => write!(f, "draw"),
        }
    }
}

/// Two-player tic-tac-toe game.
///
/// Owns the board and orchestrates turn alternation, move validation,
/// win and draw detection, and the scoreboard carried across successive
/// games. Single-threaded and synchronous; an embedding host serializes
/// access to each instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    turn: Player,
    scores: Scoreboard,
    finished: bool,
    winner: Option<Player>,
}

impl Game {
    /// Creates a fresh game: empty board, zero scores, player 1 to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::One,
            scores: Scoreboard::default(),
            finished: false,
            winner: None,
        }
    }

    /// Marks the current player's tile at the given location.
    ///
    /// On success the game advances: the turn passes to the other player,
    /// or the game finishes when the move completes a line (crediting the
    /// mover on the scoreboard) or fills the board. On failure nothing
    /// changes.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameAlreadyFinished`] when the game has concluded.
    /// - [`GameError::InvalidBoardLocation`] when `row` or `col` is not in `0..3`.
    /// - [`GameError::IllegalPlayerMove`] when the cell already holds a mark.
    ///
    /// The checks run in that order: a finished game reports
    /// [`GameError::GameAlreadyFinished`] even for out-of-range
    /// coordinates.
    #[instrument(skip(self), fields(player = %self.turn))]
    pub fn mark(&mut self, row: usize, col: usize) -> Result<(), GameError> {
        if self.finished {
            warn!("move rejected: game is finished");
            return Err(GameError::GameAlreadyFinished);
        }
        let tile = self.turn.tile();
        if !BoardRule::CannotOverwriteNonEmptyCell.check(&self.board, row, col, tile)? {
            let occupied = self.board.tile_at(row, col)?;
            warn!(%occupied, "move rejected: cell already marked");
            return Err(GameError::IllegalPlayerMove { row, col, occupied });
        }
        self.board.mark(row, col, tile)?;
        debug!(%tile, "tile placed");
        self.update_status(tile);
        Ok(())
    }

    /// Applies the post-move transition: finish on a win or a full board,
    /// otherwise pass the turn. The turn does not advance on a finish, so
    /// `turn` still names the last mover.
    fn update_status(&mut self, tile: Tile) {
        if WinCondition::iter().any(|condition| condition.check(&self.board, tile)) {
            self.finished = true;
            self.winner = Some(self.turn);
            self.scores.record_win(self.turn);
            debug!(winner = %self.turn, "game won");
        } else if self.board.is_full() {
            self.finished = true;
            debug!("game drawn");
        } else {
            self.turn = self.turn.opponent();
        }
    }

    /// Starts the next game: clears the board, the finished flag and the
    /// winner while keeping the scoreboard.
    ///
    /// The opening turn goes to whoever was due to move next: the loser
    /// of a win, or the player who would have followed the last move of
    /// a draw.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        self.turn = self.turn.opponent();
        self.board.clear();
        self.finished = false;
        self.winner = None;
        debug!(opening = %self.turn, "new game started");
    }

    /// The player whose move is expected next.
    pub fn current_player(&self) -> Player {
        self.turn
    }

    /// Snapshot of the cumulative win counts.
    pub fn scoreboard(&self) -> Scoreboard {
        self.scores
    }

    /// Read access to the board, e.g. for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns true once the game has concluded.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The winning player; present only for a finished, non-drawn game.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Match-friendly view of the finished flag and winner.
    pub fn status(&self) -> GameStatus {
        match (self.finished, self.winner) {
            (false, _) => GameStatus::InProgress,
            (true, Some(player)) => GameStatus::Won(player),
            (true, None) => GameStatus::Draw,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
