//! Core Stonehenge game logic: board geometry, leylines, player types, and the
//! game state machine with immutable transitions.

mod geometry;
mod leyline;
mod player;
mod render;
mod rules;
mod state;

pub use geometry::{cell_count, default_labels, leyline_count, Geometry};
pub use leyline::{Family, Leyline, Owner};
pub use player::Player;
pub use render::render;
pub use rules::Game;
pub use state::{win_threshold, GameState, Scores};
