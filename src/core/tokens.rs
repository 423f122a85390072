//! Per-player token state.
//!
//! A `TokenBoard` is the complete mutable state of a game: the position of
//! all eight tokens. It is a tiny `Copy` value, so the move engine and the
//! AI search hand out fresh snapshots instead of mutating in place.

use serde::{Deserialize, Serialize};

use super::player::{PlayerId, PLAYER_COUNT};
use super::position::Position;

/// Tokens owned by each player.
pub const TOKENS_PER_PLAYER: usize = 4;

/// Token identifier, unique within one player's four tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenId(pub u8);

impl TokenId {
    /// Create a new token ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw token index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over a player's token IDs.
    pub fn all() -> impl Iterator<Item = TokenId> {
        (0..TOKENS_PER_PLAYER as u8).map(TokenId)
    }
}

impl std::fmt::Display for TokenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {}", self.0)
    }
}

/// Positions of all eight tokens.
///
/// Tokens are never destroyed: a captured token resets to `Start`, a
/// finished token rests at `Home`. Snapshot semantics; see the move engine
/// for the only mutation path used during play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenBoard {
    positions: [[Position; TOKENS_PER_PLAYER]; PLAYER_COUNT],
}

impl TokenBoard {
    /// Fresh game state: all eight tokens at `Start`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            positions: [[Position::Start; TOKENS_PER_PLAYER]; PLAYER_COUNT],
        }
    }

    /// Position of one token.
    #[must_use]
    pub fn position(&self, player: PlayerId, token: TokenId) -> Position {
        self.positions[player.index()][token.index()]
    }

    /// Set the position of one token.
    pub fn set_position(&mut self, player: PlayerId, token: TokenId, position: Position) {
        self.positions[player.index()][token.index()] = position;
    }

    /// Iterate over one player's tokens as `(TokenId, Position)` pairs.
    pub fn iter(&self, player: PlayerId) -> impl Iterator<Item = (TokenId, Position)> + '_ {
        self.positions[player.index()]
            .iter()
            .enumerate()
            .map(|(i, &pos)| (TokenId(i as u8), pos))
    }

    /// Number of the player's tokens that have finished.
    #[must_use]
    pub fn count_home(&self, player: PlayerId) -> usize {
        self.iter(player).filter(|(_, p)| *p == Position::Home).count()
    }

    /// Number of the player's tokens still waiting to enter.
    #[must_use]
    pub fn count_at_start(&self, player: PlayerId) -> usize {
        self.iter(player).filter(|(_, p)| *p == Position::Start).count()
    }

    /// True iff all four of the player's tokens are `Home`.
    #[must_use]
    pub fn has_won(&self, player: PlayerId) -> bool {
        self.count_home(player) == TOKENS_PER_PLAYER
    }

    /// True iff the player has at least one token on the board proper.
    #[must_use]
    pub fn has_token_on_course(&self, player: PlayerId) -> bool {
        self.iter(player).any(|(_, p)| p.is_on_course())
    }
}

impl Default for TokenBoard {
    fn default() -> Self {
        Self::new()
    }
}
