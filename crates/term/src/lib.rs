//! Terminal front-end for the block engine.
//!
//! Rendering goes through a small framebuffer of styled glyphs rather than a
//! widget toolkit:
//! - [`view`] turns a snapshot into a framebuffer (pure, unit-tested)
//! - [`renderer`] flushes framebuffers to the terminal with crossterm
//! - [`palette`] holds the board and piece colors

pub mod fb;
pub mod palette;
pub mod renderer;
pub mod view;

pub use blocks_core as core;
pub use blocks_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{encode_frame_into, TerminalRenderer};
pub use view::{BoardView, Viewport};
