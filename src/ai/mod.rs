//! Heuristic AI planner.
//!
//! The planner operates only on the public movement and move-engine
//! contracts: it enumerates legal actions for the pending move queue, scores
//! immediate outcomes, and searches the remaining queue to a bounded depth.
//! It is pure and deterministic over immutable `TokenBoard` snapshots.

pub mod actions;
pub mod config;
pub mod eval;
pub mod search;

pub use actions::{legal_actions, AiAction};
pub use config::AiConfig;
pub use eval::evaluate_board;
pub use search::AiPlanner;
