//! Movement resolution.
//!
//! Given a token position and a signed step count, compute every reachable
//! destination. Forward moves walk `next` edges, optionally taking the
//! origin's branch shortcut on the first hop only. Backward moves (Back Do)
//! walk the precomputed reverse adjacency breadth-first; a node with no
//! predecessors retreats to `Start`.
//!
//! Movement always originates from the token's *concrete* node. Tokens on
//! the shared center cell are recorded as one of `CA`/`CB`/`CD`, so a path
//! never leaks onto a diagonal it only coincidentally shares a cell with.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::graph::{BoardGraph, Link};
use crate::core::position::Position;

/// One candidate outcome of applying a throw value to a position.
///
/// The branch flag matters because two paths from the same origin can land
/// on the same position; only genuinely distinct destinations are kept.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DestinationOption {
    pub position: Position,
    pub used_branch: bool,
}

/// Destination options for one (position, steps) query. At most three in
/// practice: one per distinct retreat predecessor or branch split.
pub type DestinationList = SmallVec<[DestinationOption; 4]>;

/// Advance a position forward by `steps` hops along one concrete path.
///
/// `use_branch` takes the origin's branch edge on the first hop where one
/// exists. A non-positive step count or a `Home` position is returned
/// unchanged. Walking past the final node yields `Home`; so does a missing
/// edge, defensively.
#[must_use]
pub fn advance(board: &BoardGraph, position: Position, steps: i8, use_branch: bool) -> Position {
    if steps <= 0 || position == Position::Home {
        return position;
    }

    let mut remaining = steps;
    let mut first_hop = true;

    let mut current = match position {
        Position::Start => {
            // Entering the board consumes one hop and can never branch.
            remaining -= 1;
            first_hop = false;
            BoardGraph::ENTRY
        }
        Position::On(id) => id,
        Position::Home => unreachable!(),
    };

    while remaining > 0 {
        let node = board.node(current);
        let link = match (first_hop && use_branch, node.branch_next) {
            (true, Some(branch)) => Link::Node(branch),
            _ => node.next,
        };

        current = match link {
            Link::Home => return Position::Home,
            Link::Node(next) => next,
        };

        remaining -= 1;
        first_hop = false;
    }

    Position::On(current)
}

/// All reachable destinations for a position and a signed step count.
///
/// Empty for `Home` or zero steps. Options are deduplicated by resulting
/// position; a branch option is only emitted when it differs from the
/// straight path.
#[must_use]
pub fn destination_options(board: &BoardGraph, position: Position, steps: i8) -> DestinationList {
    if position == Position::Home || steps == 0 {
        return DestinationList::new();
    }

    if steps < 0 {
        return retreat_options(board, position, steps.unsigned_abs() as u32);
    }

    let mut options = DestinationList::new();
    options.push(DestinationOption {
        position: advance(board, position, steps, false),
        used_branch: false,
    });

    // Branch shortcut is only available from a concrete node carrying one,
    // never from Start.
    if let Position::On(id) = position {
        if board.branch_of(id).is_some() {
            let branched = advance(board, position, steps, true);
            if options.iter().all(|o| o.position != branched) {
                options.push(DestinationOption {
                    position: branched,
                    used_branch: true,
                });
            }
        }
    }

    options
}

/// Breadth-first reverse walk of exactly `hops` hops.
///
/// Every predecessor of each frontier position joins the next frontier; a
/// position without predecessors (the entry node, or `Start` itself)
/// retreats to `Start`. One option per distinct resulting position, in
/// stable order.
fn retreat_options(board: &BoardGraph, position: Position, hops: u32) -> DestinationList {
    let mut frontier: FxHashSet<Position> = FxHashSet::default();
    frontier.insert(position);

    for _ in 0..hops {
        let mut next = FxHashSet::default();
        for pos in frontier {
            match pos {
                Position::Start => {
                    next.insert(Position::Start);
                }
                Position::Home => {}
                Position::On(id) => {
                    let predecessors = board.predecessors(id);
                    if predecessors.is_empty() {
                        next.insert(Position::Start);
                    } else {
                        for &pred in predecessors {
                            next.insert(Position::On(pred));
                        }
                    }
                }
            }
        }
        frontier = next;
    }

    let mut options: DestinationList = frontier
        .into_iter()
        .map(|position| DestinationOption {
            position,
            used_branch: false,
        })
        .collect();

    // Hash-set drain order is arbitrary; keep results stable for callers.
    options.sort_by_key(|o| match o.position {
        Position::Start => 0,
        Position::On(id) => 1 + id.index(),
        Position::Home => usize::MAX,
    });

    options
}
