//! Move application and turn bookkeeping.

pub mod moves;
pub mod turn;

pub use moves::{
    apply_move, create_initial_tokens, is_legal_destination, stack_token_ids, MoveOutcome,
};
pub use turn::{ThrowOutcome, TurnState};
