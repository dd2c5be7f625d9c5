//! Street - Terminal Street-Crossing Game Library
//!
//! This module exposes the simulation and game loop for testing and for
//! the binary.

pub mod config;
pub mod core;
pub mod error;
pub mod input;
pub mod level;
pub mod player;
pub mod speed;
pub mod street;
pub mod ui;

pub use config::GameConfig;
pub use crate::core::constants::*;
pub use crate::core::game_loop::{play, LoopExit, SharedGame};
pub use crate::core::game_state::{Game, Scene, Transition, WallTint};
pub use error::{ConfigError, StreetError};
pub use input::Command;
pub use level::LevelCounter;
pub use player::{Direction, Player};
pub use speed::SpeedController;
pub use street::{EntryRule, ObstacleField};
