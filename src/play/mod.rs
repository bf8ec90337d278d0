//! Play driver: runs games and matches between two strategies and tallies
//! their results.

mod game_loop;
mod results;

pub use game_loop::{play_game, GameRecord};
pub use results::{play_match, MatchResults};
