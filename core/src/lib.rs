//! Core rules of Lazer Showdown, an 8x8 laser-reflection puzzle.
//!
//! Place the rotatable laser emitter, angled mirrors, and point targets on
//! the grid, then fire: the beam walks cell by cell, bends at mirrors, and
//! scores (and consumes) the first target it reaches before leaving the
//! board. [`GameSession`] owns the state, the unbounded undo/redo history,
//! and the dice RNG; [`save`] round-trips the whole state through JSON.
//! Rendering and input stay outside: commands return plain values (the
//! traced beam path, outcomes) for a front end to present.

pub use action::*;
pub use beam::*;
pub use engine::*;
pub use error::*;
pub use history::*;
pub use piece::*;
pub use state::*;
pub use types::*;

mod action;
mod beam;
mod engine;
mod error;
mod history;
mod piece;
pub mod save;
mod state;
mod types;

pub use save::DEFAULT_SAVE_FILE;
