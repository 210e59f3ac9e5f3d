//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// First player, marks X (opens a fresh game).
    One,
    /// Second player, marks O.
    Two,
}

impl Player {
    /// Returns the other player.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Returns the tile this player writes to the board.
    pub fn tile(self) -> Tile {
        Tile::Marked(self)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "player 1"),
            Player::Two => write!(f, "player 2"),
        }
    }
}

/// The mark occupying a single board cell.
///
/// A closed set: a cell is either empty or marked by one of the two
/// players. Replacing a cell's content means writing a new `Tile` into
/// the board, never mutating one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Cell without a mark.
    Empty,
    /// Cell marked by a player.
    Marked(Player),
}

impl Tile {
    /// Single-character representation: `" "`, `"X"` or `"O"`.
    pub fn symbol(self) -> &'static str {
        match self {
            Tile::Empty => " ",
            Tile::Marked(Player::One) => "X",
            Tile::Marked(Player::Two) => "O",
        }
    }

    /// Returns true if the cell holds no mark.
    pub fn is_empty(self) -> bool {
        matches!(self, Tile::Empty)
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_symbols() {
        assert_eq!(Tile::Empty.symbol(), " ");
        assert_eq!(Tile::Marked(Player::One).symbol(), "X");
        assert_eq!(Tile::Marked(Player::Two).symbol(), "O");
    }

    #[test]
    fn test_opponent_is_cyclic() {
        assert_eq!(Player::One.opponent(), Player::Two);
        assert_eq!(Player::Two.opponent(), Player::One);
        assert_eq!(Player::One.opponent().opponent(), Player::One);
    }

    #[test]
    fn test_player_tiles() {
        assert_eq!(Player::One.tile(), Tile::Marked(Player::One));
        assert_eq!(Player::Two.tile(), Tile::Marked(Player::Two));
        assert!(!Player::One.tile().is_empty());
    }
}
