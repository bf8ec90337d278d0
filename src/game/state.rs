use std::sync::Arc;

use crate::error::{GeometryError, MoveError};

use super::geometry::Geometry;
use super::leyline::{Leyline, Owner};
use super::player::Player;

/// Leylines a player must capture to win on a board of the given size.
pub fn win_threshold(board_size: usize) -> usize {
    (3 * (board_size + 1)).div_ceil(2)
}

/// Captured-leyline counts for both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    pub p1: usize,
    pub p2: usize,
}

impl Scores {
    pub fn get(&self, player: Player) -> usize {
        match player {
            Player::One => self.p1,
            Player::Two => self.p2,
        }
    }

    fn credit(&mut self, player: Player) {
        match player {
            Player::One => self.p1 += 1,
            Player::Two => self.p2 += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.p1 + self.p2
    }
}

/// An immutable Stonehenge position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    geometry: Arc<Geometry>,
    to_move: Player,
    cells: Vec<Owner>,
    leylines: Vec<Owner>,
    scores: Scores,
    legal: Vec<usize>,
}

impl GameState {
    /// Create the initial state of a standard board
    pub fn initial(board_size: usize, first: Player) -> Result<Self, GeometryError> {
        Ok(Self::from_geometry(Arc::new(Geometry::new(board_size)?), first))
    }

    /// Create the initial state over an existing geometry
    pub fn from_geometry(geometry: Arc<Geometry>, first: Player) -> Self {
        let cell_count = geometry.cell_count();
        let leyline_count = geometry.leylines().len();
        GameState {
            geometry,
            to_move: first,
            cells: vec![Owner::Unclaimed; cell_count],
            leylines: vec![Owner::Unclaimed; leyline_count],
            scores: Scores::default(),
            legal: (0..cell_count).collect(),
        }
    }

    /// Get the player about to move
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    pub fn board_size(&self) -> usize {
        self.geometry.board_size()
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn win_threshold(&self) -> usize {
        win_threshold(self.board_size())
    }

    /// Whether either player has captured enough leylines to win
    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    /// Player whose score reached the win threshold, if any
    pub fn winner(&self) -> Option<Player> {
        let threshold = self.win_threshold();
        [Player::One, Player::Two]
            .into_iter()
            .find(|&p| self.scores.get(p) >= threshold)
    }

    /// Labels of the unclaimed cells, in board order. Empty once the game is over.
    pub fn legal_moves(&self) -> Vec<&str> {
        self.legal.iter().map(|&cell| self.geometry.label(cell)).collect()
    }

    /// Cell ids behind [`legal_moves`](Self::legal_moves)
    pub fn legal_cells(&self) -> &[usize] {
        &self.legal
    }

    pub fn is_legal(&self, label: &str) -> bool {
        self.geometry
            .cell_id(label)
            .is_some_and(|cell| self.legal.contains(&cell))
    }

    pub fn cell_owner(&self, cell: usize) -> Owner {
        self.cells[cell]
    }

    pub fn owner_of(&self, label: &str) -> Option<Owner> {
        self.geometry.cell_id(label).map(|cell| self.cells[cell])
    }

    pub fn leyline_owner(&self, id: usize) -> Owner {
        self.leylines[id]
    }

    /// Every leyline paired with its current owner
    pub fn leylines(&self) -> impl Iterator<Item = (&Leyline, Owner)> + '_ {
        self.geometry
            .leylines()
            .iter()
            .zip(self.leylines.iter().copied())
    }

    pub fn claimed_cells(&self) -> usize {
        self.cells.iter().filter(|owner| owner.is_claimed()).count()
    }

    pub fn captured_leylines(&self) -> usize {
        self.leylines.iter().filter(|owner| owner.is_claimed()).count()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply(&self, label: &str) -> Result<GameState, MoveError> {
        let cell = self
            .geometry
            .cell_id(label)
            .ok_or_else(|| MoveError::UnknownCell(label.to_string()))?;
        if !self.legal.contains(&cell) {
            return Err(MoveError::IllegalMove {
                label: label.to_string(),
                legal: self.legal_moves().into_iter().map(String::from).collect(),
            });
        }
        Ok(self.claim(cell))
    }

    /// Every legal move paired with the state it leads to, in board order
    pub fn successors(&self) -> impl Iterator<Item = (usize, GameState)> + '_ {
        self.legal.iter().map(move |&cell| (cell, self.claim(cell)))
    }

    // Callers guarantee `cell` is drawn from `self.legal`.
    fn claim(&self, cell: usize) -> GameState {
        let mover = self.to_move;
        let mut cells = self.cells.clone();
        cells[cell] = mover.to_owner();

        let mut leylines = self.leylines.clone();
        let mut scores = self.scores;
        for &id in self.geometry.leylines_through(cell) {
            if leylines[id].is_claimed() {
                continue;
            }
            if let Some(capturer) = self.geometry.leyline(id).capturer(&cells) {
                leylines[id] = capturer.to_owner();
                scores.credit(capturer);
            }
        }

        let threshold = self.win_threshold();
        let legal = if scores.p1 >= threshold || scores.p2 >= threshold {
            Vec::new()
        } else {
            self.legal.iter().copied().filter(|&c| c != cell).collect()
        };

        GameState {
            geometry: Arc::clone(&self.geometry),
            to_move: mover.other(),
            cells,
            leylines,
            scores,
            legal,
        }
    }
}
