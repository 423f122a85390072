//! Applying a move: stack-together, capture-on-landing, win queries.
//!
//! `apply_move` is pure with respect to its inputs: it takes a `TokenBoard`
//! snapshot and returns a new one along with the moved and captured token
//! ids. Validation of the destination against the resolver's options is the
//! caller's job; `is_legal_destination` exists for that check.

use smallvec::{smallvec, SmallVec};

use crate::board::graph::BoardGraph;
use crate::core::player::PlayerId;
use crate::core::position::Position;
use crate::core::tokens::{TokenBoard, TokenId};
use crate::movement::{destination_options, DestinationOption};

/// Fresh token map: all eight tokens at `Start`.
#[must_use]
pub fn create_initial_tokens() -> TokenBoard {
    TokenBoard::new()
}

/// Result of applying one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The new token state; the input snapshot is untouched.
    pub tokens: TokenBoard,
    /// Tokens that moved together as a stack.
    pub moved: SmallVec<[TokenId; 4]>,
    /// Opponent tokens reset to `Start` by this move.
    pub captured: SmallVec<[TokenId; 4]>,
}

/// The stack moving together with the selected token: every token of the
/// player on the same physical cell. Tokens at `Start`/`Home` never stack,
/// so selecting one of those moves it alone.
#[must_use]
pub fn stack_token_ids(
    board: &BoardGraph,
    tokens: &TokenBoard,
    player: PlayerId,
    token: TokenId,
) -> SmallVec<[TokenId; 4]> {
    let selected = tokens.position(player, token);
    if !selected.is_on_course() {
        return smallvec![token];
    }

    let cell = board.cell_key(selected);
    tokens
        .iter(player)
        .filter(|&(_, pos)| pos.is_on_course() && board.cell_key(pos) == cell)
        .map(|(id, _)| id)
        .collect()
}

/// Apply a move of `token` (and its stack) to `destination`.
///
/// Any opponent token on the destination cell is captured and reset to
/// `Start`. The scan covers all four opponent tokens even though normal play
/// leaves at most one there. Moves to `Home` capture nothing.
#[must_use]
pub fn apply_move(
    board: &BoardGraph,
    tokens: &TokenBoard,
    player: PlayerId,
    token: TokenId,
    destination: Position,
) -> MoveOutcome {
    let mut next = *tokens;

    let moved = stack_token_ids(board, tokens, player, token);
    for &id in &moved {
        next.set_position(player, id, destination);
    }

    let mut captured = SmallVec::new();
    if destination != Position::Home {
        let opponent = player.opponent();
        let destination_cell = board.cell_key(destination);
        for (id, pos) in tokens.iter(opponent) {
            if pos.is_on_course() && board.cell_key(pos) == destination_cell {
                next.set_position(opponent, id, Position::Start);
                captured.push(id);
            }
        }
    }

    MoveOutcome {
        tokens: next,
        moved,
        captured,
    }
}

/// Check a destination option against the resolver before applying it.
#[must_use]
pub fn is_legal_destination(
    board: &BoardGraph,
    tokens: &TokenBoard,
    player: PlayerId,
    token: TokenId,
    steps: i8,
    option: &DestinationOption,
) -> bool {
    destination_options(board, tokens.position(player, token), steps).contains(option)
}
