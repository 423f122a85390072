//! Legal-action enumeration over a pending move queue.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::graph::BoardGraph;
use crate::core::player::PlayerId;
use crate::core::position::{CellKey, Position};
use crate::core::tokens::{TokenBoard, TokenId};
use crate::movement::destination_options;

/// One playable action: spend a queued value on a token toward a destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AiAction {
    /// Index into the pending queue of the value being spent.
    pub queue_index: usize,
    /// The selected token (its stack moves with it).
    pub token: TokenId,
    pub destination: Position,
    pub used_branch: bool,
}

/// Every legal action for the queue against the current board.
///
/// Actions are deduplicated by (queue index, origin cell, destination,
/// branch flag): stacked tokens would otherwise emit one identical action
/// each. Finished tokens cannot move, and a Back Do on a token still at
/// `Start` is a no-op and is not offered.
#[must_use]
pub fn legal_actions(
    board: &BoardGraph,
    tokens: &TokenBoard,
    player: PlayerId,
    queue: &[i8],
) -> Vec<AiAction> {
    let mut seen: FxHashSet<(usize, CellKey, Position, bool)> = FxHashSet::default();
    let mut actions = Vec::new();

    for (queue_index, &value) in queue.iter().enumerate() {
        for (token, position) in tokens.iter(player) {
            if position == Position::Home {
                continue;
            }
            if value < 0 && position == Position::Start {
                continue;
            }

            let origin_cell = board.cell_key(position);
            for option in destination_options(board, position, value) {
                let key = (queue_index, origin_cell, option.position, option.used_branch);
                if seen.insert(key) {
                    actions.push(AiAction {
                        queue_index,
                        token,
                        destination: option.position,
                        used_branch: option.used_branch,
                    });
                }
            }
        }
    }

    actions
}
