//! Core game state and the concurrent loop around it.

pub mod constants;
pub mod game_loop;
pub mod game_state;

pub use constants::*;
pub use game_loop::*;
pub use game_state::*;
