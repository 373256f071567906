//! Commonly used types and utilities for ease of import.

pub use crate::{
    choose_ai_target, coord_to_human, place_fleet_random, AiMemory, Board, BoardError, Coord,
    Difficulty, Game, GameConfig, GameError, Phase, ShotResult, Side,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, Session};
