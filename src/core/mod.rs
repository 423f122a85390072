//! Core vocabulary types: players, tokens, positions, RNG.
//!
//! These are the building blocks every other module speaks in. They carry no
//! board knowledge; anything that needs topology (cell keys, distances)
//! lives in `board`.

pub mod player;
pub mod position;
pub mod rng;
pub mod tokens;

pub use player::{PlayerId, PLAYER_COUNT};
pub use position::{CellId, CellKey, NodeId, Position, CELL_COUNT, NODE_COUNT};
pub use rng::ThrowRng;
pub use tokens::{TokenBoard, TokenId, TOKENS_PER_PLAYER};
