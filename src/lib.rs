//! # yut-engine
//!
//! A Yutnori (윷놀이) game core: board topology, throw generation, movement
//! resolution, move application with capture, and a bounded-depth heuristic AI.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: Token state is a small `Copy` snapshot
//!    (`TokenBoard`). Every operation takes a snapshot and returns a new one;
//!    nothing mutates shared state.
//!
//! 2. **Data-Driven Board**: The board is a flat node table with
//!    forward/branch pointers and shared cell identities. All rule behavior
//!    (shortcuts, the merged center cell, retreat targets) falls out of the
//!    graph data, never out of special-cased node ids.
//!
//! 3. **Deterministic Randomness**: The only randomness lives in
//!    `ThrowRng`, which is seedable for reproducible games and tests.
//!
//! ## Modules
//!
//! - `core`: Player/token ids, positions, token-state snapshots, RNG
//! - `board`: Node graph, reverse adjacency, cell keys, layout accessors
//! - `throws`: Four-stick throws, scoring, the Back Do policy flag
//! - `movement`: Destination resolution for forward and backward moves
//! - `engine`: Move application, captures, win queries, turn machine
//! - `ai`: Legal-action enumeration, board evaluation, queue search

pub mod core;
pub mod board;
pub mod throws;
pub mod movement;
pub mod engine;
pub mod ai;

// Re-export the public game-core surface.
pub use crate::core::{
    CellId, CellKey, NodeId, PlayerId, Position, ThrowRng, TokenBoard, TokenId,
    PLAYER_COUNT, TOKENS_PER_PLAYER,
};

pub use crate::board::{BoardCell, BoardGraph, BoardLine, Link, Node, StationType, BOARD_LINES};

pub use crate::throws::{roll_throw, BackDoPolicy, StickFace, Throw};

pub use crate::movement::{advance, destination_options, DestinationList, DestinationOption};

pub use crate::engine::{
    apply_move, create_initial_tokens, is_legal_destination, stack_token_ids, MoveOutcome,
    ThrowOutcome, TurnState,
};

pub use crate::ai::{evaluate_board, legal_actions, AiAction, AiConfig, AiPlanner};
