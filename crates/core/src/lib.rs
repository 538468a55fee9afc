//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the falling-block rules, state management, and the
//! discrete-time simulation. It has no dependencies on terminal, input, or I/O,
//! which makes it:
//!
//! - **Deterministic**: the same seed and the same inputs replay the same game
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: a renderer only needs a [`GameSnapshot`]
//!
//! # Module Structure
//!
//! - [`board`]: rectangular grid with collision checks and row clearing
//! - [`pieces`]: the seven-shape catalog and square-matrix rotation
//! - [`cursor`]: falling piece position with a staged column, plus the next-piece slot
//! - [`engine`]: the state machine driving steps, input and scoring
//! - [`clock`]: wall-clock throttling of logical steps
//! - [`config`]: board geometry and timing constants
//! - [`rng`]: seeded uniform piece randomizer
//! - [`scoring`]: row-clear, drop and level arithmetic
//! - [`snapshot`]: owned copies of state for renderers
//!
//! # Rules
//!
//! - Pieces spawn horizontally centered at the spawn row.
//! - Gravity moves the piece one row every `max(1, 10 - level)` steps.
//! - A blocked piece rests for two gravity steps, then merges.
//! - Rotation is a plain quarter-turn; there are no wall kicks.
//! - A piece that cannot leave the spawn row ends the game.
//!
//! # Example
//!
//! ```
//! use blocks_core::{Engine, EngineConfig};
//! use blocks_core::types::GameAction;
//!
//! let mut engine = Engine::new(EngineConfig::default().with_seed(12345)).unwrap();
//!
//! engine.apply_action(GameAction::MoveRight);
//! engine.apply_action(GameAction::RotateCw);
//! engine.apply_action(GameAction::HardDrop);
//!
//! assert!(engine.score() > 0); // Hard drop awards points
//! ```
//!
//! # Timing
//!
//! Call [`Engine::tick`] with a monotonic millisecond timestamp as often as
//! convenient; at most one logical step runs per 16ms frame.

pub mod board;
pub mod clock;
pub mod config;
pub mod cursor;
pub mod engine;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blocks_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::FrameClock;
pub use config::EngineConfig;
pub use cursor::{NextPiece, PieceCursor};
pub use engine::{Engine, FallOutcome, StepReport};
pub use pieces::{catalog, Shape};
pub use rng::{Randomizer, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
