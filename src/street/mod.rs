//! Street traffic simulation.
//!
//! Each interior lane is an independent 1-D cellular automaton. Every tick
//! the lane shifts one cell toward the player and a new entry cell is
//! generated from a decision table keyed on the lane's lookahead window.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
