use std::fmt;

use super::player::Player;

/// Ownership tag shared by cells and leylines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Owner {
    #[default]
    Unclaimed,
    P1,
    P2,
}

impl Owner {
    /// The owning player, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Owner::Unclaimed => None,
            Owner::P1 => Some(Player::One),
            Owner::P2 => Some(Player::Two),
        }
    }

    pub fn is_claimed(self) -> bool {
        self != Owner::Unclaimed
    }

    /// Leyline marker: `@` while unclaimed, otherwise the owner's number
    pub fn marker(self) -> char {
        self.player().map_or('@', Player::marker)
    }
}

/// The three leyline directions of a triangular board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Row,
    RightDiagonal,
    LeftDiagonal,
}

impl Family {
    pub const ALL: [Family; 3] = [Family::Row, Family::RightDiagonal, Family::LeftDiagonal];
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Family::Row => "row",
            Family::RightDiagonal => "right diagonal",
            Family::LeftDiagonal => "left diagonal",
        };
        f.write_str(name)
    }
}

/// A fixed line of cells. Ownership lives in the game state, indexed by the
/// leyline's position in the geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leyline {
    family: Family,
    index: usize,
    cells: Vec<usize>,
}

impl Leyline {
    pub fn new(family: Family, index: usize, cells: Vec<usize>) -> Self {
        Leyline {
            family,
            index,
            cells,
        }
    }

    pub fn family(&self) -> Family {
        self.family
    }

    /// Position of this leyline within its family
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell ids spanned by this leyline, in drawing order
    pub fn cells(&self) -> &[usize] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cells a single player must hold to capture this leyline
    pub fn capture_threshold(&self) -> usize {
        self.cells.len().div_ceil(2)
    }

    /// Player who holds enough cells to capture this leyline, given the
    /// owners of every board cell. P1 is checked first.
    pub fn capturer(&self, cell_owners: &[Owner]) -> Option<Player> {
        let threshold = self.capture_threshold();
        let count = |owner: Owner| {
            self.cells
                .iter()
                .filter(|&&cell| cell_owners[cell] == owner)
                .count()
        };
        if count(Owner::P1) >= threshold {
            Some(Player::One)
        } else if count(Owner::P2) >= threshold {
            Some(Player::Two)
        } else {
            None
        }
    }
}
