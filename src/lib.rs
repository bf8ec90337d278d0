//! # Stonehenge
//!
//! A two-player claiming game on a triangular board, with exact minimax
//! search and a cheap lookahead heuristic.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: geometry, leylines, immutable state, rendering
//! - [`ai`] — Strategy trait, recursive and iterative minimax, rough outcome
//! - [`play`] — Game driver and match tallies
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod play;

pub use ai::{iterative_minimax, recursive_minimax, rough_outcome_strategy};
pub use game::{Game, GameState, Player};
