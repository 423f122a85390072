//! The fixed board graph.
//!
//! ## Topology
//!
//! The standard board is an outer ring of 20 nodes (`M0`..`M19`, entry at
//! `M0`, exit past `M19`) plus three diagonal paths of five nodes each. The
//! A diagonal leaves the ring at corner `M4`, the B diagonal at `M9`, and
//! the D diagonal at `M14`; diagonals are entered via `branch_next` edges
//! taken only as the *first* step of a move. The three middle diagonal nodes
//! (`CA`/`CB`/`CD`) share one physical `CENTER` cell, and the A and D
//! diagonals cross the same four waypoint cells (`X1`/`X2`/`X4`/`X5`) in
//! opposite directions.
//!
//! ## Derived indexes
//!
//! Built once at construction:
//! - reverse adjacency (forward + branch edges inverted) for retreat moves;
//! - shortest hop-distance-to-home per node (both edge kinds), consumed by
//!   the AI progress metric.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::position::{CellId, CellKey, NodeId, Position, NODE_COUNT};

/// Station classification of a node. Informational only; carries no rule
/// semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationType {
    Normal,
    Corner,
    Center,
}

impl StationType {
    /// Priority used when several nodes share one cell: the cell displays
    /// the most significant classification.
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            StationType::Normal => 1,
            StationType::Corner => 2,
            StationType::Center => 3,
        }
    }
}

/// Forward edge target: another node, or off the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Link {
    Node(NodeId),
    Home,
}

/// One point on the board graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Display coordinates in board percent. Unused by rule logic.
    pub x: f32,
    pub y: f32,
    /// Forward neighbor.
    pub next: Link,
    /// Shortcut taken only as the first step of a move, where present.
    pub branch_next: Option<NodeId>,
    /// Physical cell this node occupies. Several nodes may share one cell.
    pub cell: CellId,
    pub station: StationType,
}

/// The immutable board graph plus its derived indexes.
///
/// Complete and closed: every node has a `next`, and `Home` has no outgoing
/// edges. Build once at startup with [`BoardGraph::standard`].
#[derive(Clone, Debug)]
pub struct BoardGraph {
    nodes: Vec<Node>,
    predecessors: Vec<SmallVec<[NodeId; 2]>>,
    home_distance: Vec<u32>,
    entry_distance: u32,
}

impl BoardGraph {
    /// The board's single entry node: a token leaving `Start` lands here.
    pub const ENTRY: NodeId = NodeId::M0;

    /// Build the standard Yutnori board.
    #[must_use]
    pub fn standard() -> Self {
        let nodes = standard_nodes();
        let predecessors = build_predecessors(&nodes);
        let home_distance = build_home_distances(&nodes, &predecessors);
        let entry_distance = home_distance[Self::ENTRY.index()];

        Self {
            nodes,
            predecessors,
            home_distance,
            entry_distance,
        }
    }

    /// Look up a node.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// All nodes, in id order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Forward neighbor of a node.
    #[must_use]
    pub fn next_of(&self, id: NodeId) -> Link {
        self.node(id).next
    }

    /// Branch neighbor of a node, where one exists.
    #[must_use]
    pub fn branch_of(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).branch_next
    }

    /// Predecessors of a node under forward and branch edges.
    ///
    /// A node may have several predecessors because branch edges merge back
    /// into the ring. The entry node has none.
    #[must_use]
    pub fn predecessors(&self, id: NodeId) -> &[NodeId] {
        &self.predecessors[id.index()]
    }

    /// Canonical cell identity of a position.
    ///
    /// `Start`/`Home` are their own keys; an on-course position collapses to
    /// its node's shared cell.
    #[must_use]
    pub fn cell_key(&self, position: Position) -> CellKey {
        match position {
            Position::Start => CellKey::Start,
            Position::Home => CellKey::Home,
            Position::On(id) => CellKey::Cell(self.node(id).cell),
        }
    }

    /// Shortest hop count from a node to `Home`, counting both edge kinds.
    #[must_use]
    pub fn home_distance(&self, id: NodeId) -> u32 {
        self.home_distance[id.index()]
    }

    /// Race progress of a position: hop-distance-to-home inverted, so closer
    /// to home scores higher. `Start` is 0 and `Home` is one more than the
    /// entry node's distance. The head of the long diagonal points away from
    /// home and scores no better than `Start`.
    #[must_use]
    pub fn progress(&self, position: Position) -> i32 {
        match position {
            Position::Start => 0,
            Position::Home => self.entry_distance as i32 + 1,
            Position::On(id) => {
                self.entry_distance as i32 + 1 - self.home_distance[id.index()] as i32
            }
        }
    }
}

/// The standard node table.
fn standard_nodes() -> Vec<Node> {
    use StationType::{Center, Corner, Normal};

    let node = |id: NodeId,
                x: f32,
                y: f32,
                next: Link,
                branch_next: Option<NodeId>,
                cell: CellId,
                station: StationType| Node {
        id,
        x,
        y,
        next,
        branch_next,
        cell,
        station,
    };
    let to = |id: NodeId| Link::Node(id);

    vec![
        // Outer ring, entry at M0, running up the right edge.
        node(NodeId::M0, 90.0, 74.0, to(NodeId::M1), None, CellId::M0, Normal),
        node(NodeId::M1, 90.0, 58.0, to(NodeId::M2), None, CellId::M1, Normal),
        node(NodeId::M2, 90.0, 42.0, to(NodeId::M3), None, CellId::M2, Normal),
        node(NodeId::M3, 90.0, 26.0, to(NodeId::M4), None, CellId::M3, Normal),
        node(NodeId::M4, 90.0, 10.0, to(NodeId::M5), Some(NodeId::A1), CellId::M4, Corner),
        node(NodeId::M5, 74.0, 10.0, to(NodeId::M6), None, CellId::M5, Normal),
        node(NodeId::M6, 58.0, 10.0, to(NodeId::M7), None, CellId::M6, Normal),
        node(NodeId::M7, 42.0, 10.0, to(NodeId::M8), None, CellId::M7, Normal),
        node(NodeId::M8, 26.0, 10.0, to(NodeId::M9), None, CellId::M8, Normal),
        node(NodeId::M9, 10.0, 10.0, to(NodeId::M10), Some(NodeId::B1), CellId::M9, Corner),
        node(NodeId::M10, 10.0, 26.0, to(NodeId::M11), None, CellId::M10, Normal),
        node(NodeId::M11, 10.0, 42.0, to(NodeId::M12), None, CellId::M11, Normal),
        node(NodeId::M12, 10.0, 58.0, to(NodeId::M13), None, CellId::M12, Normal),
        node(NodeId::M13, 10.0, 74.0, to(NodeId::M14), None, CellId::M13, Normal),
        node(NodeId::M14, 10.0, 90.0, to(NodeId::M15), Some(NodeId::D1), CellId::M14, Corner),
        node(NodeId::M15, 26.0, 90.0, to(NodeId::M16), None, CellId::M15, Normal),
        node(NodeId::M16, 42.0, 90.0, to(NodeId::M17), None, CellId::M16, Normal),
        node(NodeId::M17, 58.0, 90.0, to(NodeId::M18), None, CellId::M17, Normal),
        node(NodeId::M18, 74.0, 90.0, to(NodeId::M19), None, CellId::M18, Normal),
        node(NodeId::M19, 90.0, 90.0, Link::Home, None, CellId::M19, Corner),
        // A diagonal: M4 corner across the center to M14.
        node(NodeId::A1, 74.0, 26.0, to(NodeId::A2), None, CellId::X1, Normal),
        node(NodeId::A2, 58.0, 42.0, to(NodeId::CA), None, CellId::X2, Normal),
        node(NodeId::CA, 50.0, 50.0, to(NodeId::A4), None, CellId::CENTER, Center),
        node(NodeId::A4, 42.0, 58.0, to(NodeId::A5), None, CellId::X4, Normal),
        node(NodeId::A5, 26.0, 74.0, to(NodeId::M14), None, CellId::X5, Normal),
        // B diagonal: M9 corner across the center to M19.
        node(NodeId::B1, 26.0, 26.0, to(NodeId::B2), None, CellId::B1, Normal),
        node(NodeId::B2, 42.0, 42.0, to(NodeId::CB), None, CellId::B2, Normal),
        node(NodeId::CB, 50.0, 50.0, to(NodeId::B4), None, CellId::CENTER, Center),
        node(NodeId::B4, 58.0, 58.0, to(NodeId::B5), None, CellId::B4, Normal),
        node(NodeId::B5, 74.0, 74.0, to(NodeId::M19), None, CellId::B5, Normal),
        // D diagonal: M14 corner back across the center to M4, crossing the
        // A waypoints in the opposite direction.
        node(NodeId::D1, 26.0, 74.0, to(NodeId::D2), None, CellId::X5, Normal),
        node(NodeId::D2, 42.0, 58.0, to(NodeId::CD), None, CellId::X4, Normal),
        node(NodeId::CD, 50.0, 50.0, to(NodeId::D4), None, CellId::CENTER, Center),
        node(NodeId::D4, 58.0, 42.0, to(NodeId::D5), None, CellId::X2, Normal),
        node(NodeId::D5, 74.0, 26.0, to(NodeId::M4), None, CellId::X1, Normal),
    ]
}

/// Invert forward and branch edges.
fn build_predecessors(nodes: &[Node]) -> Vec<SmallVec<[NodeId; 2]>> {
    let mut predecessors: Vec<SmallVec<[NodeId; 2]>> = vec![SmallVec::new(); NODE_COUNT];

    for node in nodes {
        if let Link::Node(next) = node.next {
            predecessors[next.index()].push(node.id);
        }
        if let Some(branch) = node.branch_next {
            predecessors[branch.index()].push(node.id);
        }
    }

    predecessors
}

/// BFS from the home edge over the reverse adjacency. Unweighted, so the
/// first visit is the shortest hop count.
fn build_home_distances(nodes: &[Node], predecessors: &[SmallVec<[NodeId; 2]>]) -> Vec<u32> {
    let mut distance = vec![u32::MAX; NODE_COUNT];
    let mut queue = VecDeque::new();

    for node in nodes {
        if node.next == Link::Home {
            distance[node.id.index()] = 1;
            queue.push_back(node.id);
        }
    }

    while let Some(id) = queue.pop_front() {
        let next_distance = distance[id.index()] + 1;
        for &pred in &predecessors[id.index()] {
            if distance[pred.index()] == u32::MAX {
                distance[pred.index()] = next_distance;
                queue.push_back(pred);
            }
        }
    }

    distance
}
