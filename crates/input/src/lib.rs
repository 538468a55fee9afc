//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The mapping is
//! status-aware: once the game is over, any key other than quit starts a new
//! game.

pub mod map;

pub use blocks_types as types;

pub use map::{action_for_key, handle_key_event, should_quit};
