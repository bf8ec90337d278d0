use std::sync::Arc;

use crate::error::{GeometryError, MoveError};

use super::geometry::Geometry;
use super::player::Player;
use super::state::{win_threshold, GameState};

/// Driver-side view of a Stonehenge game: the current position plus the
/// terminal and winner queries the strategies rely on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// A fresh game on a standard board
    pub fn new(board_size: usize, first: Player) -> Result<Self, GeometryError> {
        Ok(Game::from_state(GameState::initial(board_size, first)?))
    }

    /// A fresh game on a standard board with custom cell labels
    pub fn with_labels(
        board_size: usize,
        labels: Vec<String>,
        first: Player,
    ) -> Result<Self, GeometryError> {
        let geometry = Geometry::with_labels(board_size, labels)?;
        Ok(Game::from_state(GameState::from_geometry(Arc::new(geometry), first)))
    }

    /// A game positioned at an arbitrary state
    pub fn from_state(state: GameState) -> Self {
        Game { state }
    }

    pub fn current_state(&self) -> &GameState {
        &self.state
    }

    pub fn into_state(self) -> GameState {
        self.state
    }

    pub fn win_threshold(&self) -> usize {
        win_threshold(self.state.board_size())
    }

    /// Whether `state` is terminal: either score has reached the win threshold
    pub fn is_over(&self, state: &GameState) -> bool {
        self.winner_of(state).is_some()
    }

    /// Player whose score in `state` has reached the win threshold
    pub fn winner_of(&self, state: &GameState) -> Option<Player> {
        let threshold = win_threshold(state.board_size());
        let scores = state.scores();
        if scores.p1 >= threshold {
            Some(Player::One)
        } else if scores.p2 >= threshold {
            Some(Player::Two)
        } else {
            None
        }
    }

    /// Whether `player` has won in the current state
    pub fn is_winner(&self, player: Player) -> bool {
        self.state.scores().get(player) >= self.win_threshold()
    }

    /// Advance the current state by one move
    pub fn apply_move(&mut self, label: &str) -> Result<(), MoveError> {
        self.state = self.state.apply(label)?;
        Ok(())
    }

    /// Normalise user input into a cell label, if it names a cell on this board
    pub fn parse_move(&self, input: &str) -> Option<String> {
        let label = input.trim().to_uppercase();
        let geometry = self.state.geometry();
        if geometry.cell_id(&label).is_some() {
            return Some(label);
        }
        // Boards configured with lower-case labels
        let raw = input.trim();
        geometry.cell_id(raw).map(|_| raw.to_string())
    }

    pub fn instructions() -> &'static str {
        "In Stonehenge, players take turns claiming cells that have not been \
         claimed yet. A player who holds at least half of the cells in a leyline \
         captures that leyline. The first player to capture at least half of \
         all leylines wins."
    }
}
