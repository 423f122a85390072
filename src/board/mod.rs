//! Board topology: the node graph and rendering-only layout accessors.

pub mod graph;
pub mod layout;

pub use graph::{BoardGraph, Link, Node, StationType};
pub use layout::{BoardCell, BoardLine, BOARD_LINES};
