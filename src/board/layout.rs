//! Rendering-only topology accessors.
//!
//! The UI layer draws cells and line segments; none of this carries rule
//! semantics. Cells deduplicate the node table by shared cell key, keeping
//! the most significant station classification for shared cells.

use serde::{Deserialize, Serialize};

use crate::core::position::{CellId, CELL_COUNT};

use super::graph::{BoardGraph, StationType};

/// One drawable cell: a deduplicated physical board position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardCell {
    pub id: CellId,
    pub x: f32,
    pub y: f32,
    pub station: StationType,
}

/// One drawable line segment of the board frame.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardLine {
    pub id: &'static str,
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

/// The board frame: four edges and two diagonals.
pub const BOARD_LINES: [BoardLine; 6] = [
    BoardLine { id: "top", x1: 10.0, y1: 10.0, x2: 90.0, y2: 10.0 },
    BoardLine { id: "right", x1: 90.0, y1: 10.0, x2: 90.0, y2: 90.0 },
    BoardLine { id: "bottom", x1: 90.0, y1: 90.0, x2: 10.0, y2: 90.0 },
    BoardLine { id: "left", x1: 10.0, y1: 90.0, x2: 10.0, y2: 10.0 },
    BoardLine { id: "diag-a", x1: 90.0, y1: 10.0, x2: 10.0, y2: 90.0 },
    BoardLine { id: "diag-b", x1: 10.0, y1: 10.0, x2: 90.0, y2: 90.0 },
];

impl BoardGraph {
    /// Deduplicated cell list for rendering, in cell-id order.
    ///
    /// The first node occupying a cell fixes its coordinates; the station
    /// classification upgrades to the highest-priority node on the cell.
    #[must_use]
    pub fn cells(&self) -> Vec<BoardCell> {
        let mut cells: [Option<BoardCell>; CELL_COUNT] = [None; CELL_COUNT];

        for node in self.nodes() {
            match &mut cells[node.cell.index()] {
                slot @ None => {
                    *slot = Some(BoardCell {
                        id: node.cell,
                        x: node.x,
                        y: node.y,
                        station: node.station,
                    });
                }
                Some(cell) => {
                    if node.station.priority() > cell.station.priority() {
                        cell.station = node.station;
                    }
                }
            }
        }

        cells.into_iter().flatten().collect()
    }
}
