//! Positions on and off the board.
//!
//! ## Identifiers
//!
//! Nodes and cells are interned as small indices (`NodeId`, `CellId`) with
//! named constants for every entry in the standard board table. Several
//! nodes share one physical cell: the three diagonal paths converge on a
//! single visual center square, and the A/D diagonals cross the same four
//! waypoints in opposite directions.
//!
//! ## Position
//!
//! A token is either waiting to enter (`Start`), finished (`Home`), or on a
//! concrete graph node. `Home` is terminal; `Start` maps only to the board's
//! single entry node. A token on a shared cell still records its *concrete*
//! node so movement never backtracks across a coincidentally shared cell.

use serde::{Deserialize, Serialize};

/// Number of nodes in the standard board graph.
pub const NODE_COUNT: usize = 35;

/// Number of distinct physical cells on the standard board.
pub const CELL_COUNT: usize = 29;

/// Interned identifier of a board graph node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u8);

macro_rules! node_consts {
    ($($name:ident = $idx:expr),* $(,)?) => {
        impl NodeId {
            $(pub const $name: NodeId = NodeId($idx);)*
        }
    };
}

node_consts! {
    M0 = 0, M1 = 1, M2 = 2, M3 = 3, M4 = 4, M5 = 5, M6 = 6, M7 = 7,
    M8 = 8, M9 = 9, M10 = 10, M11 = 11, M12 = 12, M13 = 13, M14 = 14,
    M15 = 15, M16 = 16, M17 = 17, M18 = 18, M19 = 19,
    A1 = 20, A2 = 21, CA = 22, A4 = 23, A5 = 24,
    B1 = 25, B2 = 26, CB = 27, B4 = 28, B5 = 29,
    D1 = 30, D2 = 31, CD = 32, D4 = 33, D5 = 34,
}

const NODE_NAMES: [&str; NODE_COUNT] = [
    "M0", "M1", "M2", "M3", "M4", "M5", "M6", "M7", "M8", "M9", "M10", "M11", "M12", "M13",
    "M14", "M15", "M16", "M17", "M18", "M19", "A1", "A2", "CA", "A4", "A5", "B1", "B2", "CB",
    "B4", "B5", "D1", "D2", "CD", "D4", "D5",
];

impl NodeId {
    /// Get the raw node index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Human-readable node name from the standard board table.
    #[must_use]
    pub fn name(self) -> &'static str {
        NODE_NAMES[self.index()]
    }

    /// Iterate over all node IDs.
    pub fn all() -> impl Iterator<Item = NodeId> {
        (0..NODE_COUNT as u8).map(NodeId)
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Interned identifier of a physical board cell.
///
/// Distinct from [`NodeId`]: multiple nodes may occupy one cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellId(pub u8);

macro_rules! cell_consts {
    ($($name:ident = $idx:expr),* $(,)?) => {
        impl CellId {
            $(pub const $name: CellId = CellId($idx);)*
        }
    };
}

cell_consts! {
    M0 = 0, M1 = 1, M2 = 2, M3 = 3, M4 = 4, M5 = 5, M6 = 6, M7 = 7,
    M8 = 8, M9 = 9, M10 = 10, M11 = 11, M12 = 12, M13 = 13, M14 = 14,
    M15 = 15, M16 = 16, M17 = 17, M18 = 18, M19 = 19,
    B1 = 20, B2 = 21, B4 = 22, B5 = 23,
    X1 = 24, X2 = 25, X4 = 26, X5 = 27,
    CENTER = 28,
}

const CELL_NAMES: [&str; CELL_COUNT] = [
    "M0", "M1", "M2", "M3", "M4", "M5", "M6", "M7", "M8", "M9", "M10", "M11", "M12", "M13",
    "M14", "M15", "M16", "M17", "M18", "M19", "B1", "B2", "B4", "B5", "X1", "X2", "X4", "X5",
    "CENTER",
];

impl CellId {
    /// Get the raw cell index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Human-readable cell name from the standard board table.
    #[must_use]
    pub fn name(self) -> &'static str {
        CELL_NAMES[self.index()]
    }
}

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Where a token is: not yet entered, on a concrete node, or finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Not yet entered the board.
    Start,
    /// On a concrete board node.
    On(NodeId),
    /// Finished the course. Terminal: no outgoing edges.
    Home,
}

impl Position {
    /// True if the token is on the board proper (neither `Start` nor `Home`).
    #[must_use]
    pub const fn is_on_course(self) -> bool {
        matches!(self, Position::On(_))
    }

    /// The concrete node, if on course.
    #[must_use]
    pub const fn node(self) -> Option<NodeId> {
        match self {
            Position::On(id) => Some(id),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Position::Start => f.write_str("START"),
            Position::Home => f.write_str("HOME"),
            Position::On(id) => f.write_str(id.name()),
        }
    }
}

/// Canonical cell identity of a position.
///
/// `Start`/`Home` are their own sentinels; on-course positions collapse to
/// the shared cell of their node (all three center nodes become `CENTER`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKey {
    Start,
    Cell(CellId),
    Home,
}

impl std::fmt::Display for CellKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CellKey::Start => f.write_str("START"),
            CellKey::Home => f.write_str("HOME"),
            CellKey::Cell(id) => f.write_str(id.name()),
        }
    }
}
