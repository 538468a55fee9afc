//! Blocks (workspace facade crate).
//!
//! Re-exports the member crates under `crates/` as `blocks::{core,input,term,types}`.

pub use blocks_core as core;
pub use blocks_input as input;
pub use blocks_term as term;
pub use blocks_types as types;
