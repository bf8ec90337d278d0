//! Board geometry: the cells of a triangular Stonehenge board and the three
//! leyline families that run through them.
//!
//! Cells are numbered row-major. For a board of size `n`, rows `0..n` hold
//! `i + 2` cells and the bottom row holds `n` cells, so the board has
//! `(n² + 5n) / 2` cells and `3(n + 1)` leylines. Every generated cell lies on
//! exactly one leyline of each family.

use std::collections::{HashMap, HashSet};

use crate::error::GeometryError;

use super::leyline::{Family, Leyline};

/// Number of cells on a board of the given size.
pub fn cell_count(board_size: usize) -> usize {
    (board_size * board_size + 5 * board_size) / 2
}

/// Number of leylines on a board of the given size.
pub fn leyline_count(board_size: usize) -> usize {
    3 * (board_size + 1)
}

/// Default cell labels: `A..Z`, then `AA, AB, ...`.
pub fn default_labels(count: usize) -> Vec<String> {
    (0..count).map(spreadsheet_label).collect()
}

fn spreadsheet_label(mut index: usize) -> String {
    let mut label = Vec::new();
    loop {
        label.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label.reverse();
    String::from_utf8_lossy(&label).into_owned()
}

/// Immutable cell and leyline layout shared by every state of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Geometry {
    board_size: usize,
    labels: Vec<String>,
    index: HashMap<String, usize>,
    leylines: Vec<Leyline>,
    // Leyline ids through each cell, at most one per family
    memberships: Vec<Vec<usize>>,
}

impl Geometry {
    /// Standard board with the default label alphabet.
    pub fn new(board_size: usize) -> Result<Self, GeometryError> {
        Self::with_labels(board_size, default_labels(cell_count(board_size)))
    }

    /// Standard board labelled from `labels`; extra labels are ignored.
    pub fn with_labels(board_size: usize, mut labels: Vec<String>) -> Result<Self, GeometryError> {
        if board_size == 0 {
            return Err(GeometryError::ZeroBoardSize);
        }
        let needed = cell_count(board_size);
        if labels.len() < needed {
            return Err(GeometryError::NotEnoughLabels {
                needed,
                got: labels.len(),
            });
        }
        labels.truncate(needed);

        let rows = row_spans(board_size);
        let right = right_diagonal_spans(&rows, board_size);
        let left = left_diagonal_spans(&rows, board_size);
        Self::assemble(
            board_size,
            labels,
            [
                (Family::Row, rows),
                (Family::RightDiagonal, right),
                (Family::LeftDiagonal, left),
            ],
        )
    }

    /// Hand-specified geometry. Each family is a list of leylines given as
    /// cell labels; cells may be left out of a family entirely.
    pub fn from_families(
        board_size: usize,
        labels: &[&str],
        rows: &[&[&str]],
        right: &[&[&str]],
        left: &[&[&str]],
    ) -> Result<Self, GeometryError> {
        if board_size == 0 {
            return Err(GeometryError::ZeroBoardSize);
        }
        let labels: Vec<String> = labels.iter().map(|l| l.to_string()).collect();
        let lookup: HashMap<&str, usize> = labels
            .iter()
            .enumerate()
            .map(|(id, label)| (label.as_str(), id))
            .collect();
        let resolve = |family: &[&[&str]]| -> Result<Vec<Vec<usize>>, GeometryError> {
            family
                .iter()
                .map(|line| {
                    line.iter()
                        .map(|label| {
                            lookup
                                .get(label)
                                .copied()
                                .ok_or_else(|| GeometryError::UnknownLabel(label.to_string()))
                        })
                        .collect()
                })
                .collect()
        };
        let families = [
            (Family::Row, resolve(rows)?),
            (Family::RightDiagonal, resolve(right)?),
            (Family::LeftDiagonal, resolve(left)?),
        ];
        Self::assemble(board_size, labels, families)
    }

    fn assemble(
        board_size: usize,
        labels: Vec<String>,
        families: [(Family, Vec<Vec<usize>>); 3],
    ) -> Result<Self, GeometryError> {
        let mut index = HashMap::with_capacity(labels.len());
        for (id, label) in labels.iter().enumerate() {
            if label.is_empty() {
                return Err(GeometryError::EmptyLabel);
            }
            if index.insert(label.clone(), id).is_some() {
                return Err(GeometryError::DuplicateLabel(label.clone()));
            }
        }

        let mut leylines = Vec::new();
        let mut memberships = vec![Vec::new(); labels.len()];
        for (family, spans) in families {
            let mut seen = HashSet::new();
            for (position, cells) in spans.into_iter().enumerate() {
                for &cell in &cells {
                    if !seen.insert(cell) {
                        return Err(GeometryError::RepeatedInFamily(labels[cell].clone()));
                    }
                    memberships[cell].push(leylines.len());
                }
                leylines.push(Leyline::new(family, position, cells));
            }
        }

        Ok(Geometry {
            board_size,
            labels,
            index,
            leylines,
            memberships,
        })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn cell_count(&self) -> usize {
        self.labels.len()
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn label(&self, cell: usize) -> &str {
        &self.labels[cell]
    }

    pub fn cell_id(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// All leylines: rows first, then right and left diagonals
    pub fn leylines(&self) -> &[Leyline] {
        &self.leylines
    }

    pub fn leyline(&self, id: usize) -> &Leyline {
        &self.leylines[id]
    }

    /// Leylines of one family with their global ids, in family order
    pub fn family(&self, family: Family) -> impl Iterator<Item = (usize, &Leyline)> + '_ {
        self.leylines
            .iter()
            .enumerate()
            .filter(move |(_, line)| line.family() == family)
    }

    /// Ids of the leylines passing through a cell
    pub fn leylines_through(&self, cell: usize) -> &[usize] {
        &self.memberships[cell]
    }

    /// Whether the layout has the shape generated for its board size, which
    /// the board renderer relies on.
    pub fn is_triangular(&self) -> bool {
        let n = self.board_size;
        let rows: Vec<usize> = self.family(Family::Row).map(|(_, l)| l.len()).collect();
        let expected: Vec<usize> = (0..n).map(|i| i + 2).chain(std::iter::once(n)).collect();
        rows == expected
            && self.family(Family::RightDiagonal).count() == n + 1
            && self.family(Family::LeftDiagonal).count() == n + 1
            && self.cell_count() == cell_count(n)
    }
}

fn row_spans(n: usize) -> Vec<Vec<usize>> {
    let mut next = 0;
    (0..=n)
        .map(|i| {
            let len = if i < n { i + 2 } else { n };
            let row = (next..next + len).collect();
            next += len;
            row
        })
        .collect()
}

fn right_diagonal_spans(rows: &[Vec<usize>], n: usize) -> Vec<Vec<usize>> {
    let mut lines = vec![(0..n).map(|j| rows[j][0]).collect::<Vec<_>>()];
    for d in 1..=n {
        let mut line: Vec<usize> = (d - 1..n).map(|j| rows[j][d]).collect();
        line.push(rows[n][d - 1]);
        lines.push(line);
    }
    lines
}

fn left_diagonal_spans(rows: &[Vec<usize>], n: usize) -> Vec<Vec<usize>> {
    let mut lines = vec![(0..n).rev().map(|j| rows[j][j + 1]).collect::<Vec<_>>()];
    for d in 1..=n {
        let mut line = vec![rows[n][n - d]];
        line.extend((d - 1..n).rev().map(|j| rows[j][j + 1 - d]));
        lines.push(line);
    }
    lines
}
