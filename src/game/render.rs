//! Text rendering of a board position.
//!
//! The board is drawn as a triangle of cells joined by `-`, `/` and `\`, with
//! a marker at one end of every leyline: `@` while unclaimed, `1` or `2` once
//! captured. Claimed cells show their owner's number instead of their label.
//! Alignment assumes single-character labels.

use std::fmt;

use super::leyline::Family;
use super::state::GameState;

struct Canvas {
    lines: Vec<Vec<char>>,
}

impl Canvas {
    fn new() -> Self {
        Canvas { lines: Vec::new() }
    }

    fn line(&mut self) -> usize {
        self.lines.push(Vec::new());
        self.lines.len() - 1
    }

    fn put(&mut self, y: usize, x: usize, text: &str) {
        let line = &mut self.lines[y];
        for (offset, ch) in text.chars().enumerate() {
            let at = x + offset;
            if line.len() <= at {
                line.resize(at + 1, ' ');
            }
            line[at] = ch;
        }
    }

    fn put_char(&mut self, y: usize, x: usize, ch: char) {
        self.put(y, x, ch.encode_utf8(&mut [0; 4]));
    }

    fn finish(self) -> String {
        self.lines
            .into_iter()
            .map(|line| line.into_iter().collect::<String>().trim_end().to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Draw the board of `state`.
pub fn render(state: &GameState) -> String {
    let geometry = state.geometry();
    // The triangle picture has room for one character per cell
    let narrow = geometry.labels().iter().all(|label| label.chars().count() == 1);
    if !geometry.is_triangular() || !narrow {
        return render_rows(state);
    }

    let n = state.board_size();
    let markers = |family: Family| -> Vec<char> {
        geometry
            .family(family)
            .map(|(id, _)| state.leyline_owner(id).marker())
            .collect()
    };
    let rows: Vec<Vec<usize>> = geometry
        .family(Family::Row)
        .map(|(_, line)| line.cells().to_vec())
        .collect();
    let row_marks = markers(Family::Row);
    let right_marks = markers(Family::RightDiagonal);
    let left_marks = markers(Family::LeftDiagonal);

    let cell_text = |cell: usize| -> String {
        match state.cell_owner(cell).player() {
            Some(player) => player.marker().to_string(),
            None => geometry.label(cell).to_string(),
        }
    };
    // Column of each row's leyline marker; cells follow every four columns
    let marker_x = |row: usize| if row < n { 2 * (n - 1 - row) } else { 2 };
    let cell_xs = |row: usize| -> Vec<usize> {
        (0..rows[row].len()).map(|k| marker_x(row) + 4 * (k + 1)).collect()
    };

    let mut canvas = Canvas::new();

    let top_xs = cell_xs(0);
    let markers_line = canvas.line();
    let slashes_line = canvas.line();
    for (k, &x) in top_xs.iter().enumerate() {
        canvas.put_char(markers_line, x + 2, right_marks[k]);
        canvas.put_char(slashes_line, x + 1, '/');
    }

    for row in 0..=n {
        let xs = cell_xs(row);
        let y = canvas.line();
        canvas.put_char(y, marker_x(row), row_marks[row]);
        for (k, &x) in xs.iter().enumerate() {
            canvas.put_char(y, x - 2, '-');
            canvas.put(y, x, &cell_text(rows[row][k]));
        }
        let last = xs[xs.len() - 1];
        if row + 1 < n {
            canvas.put_char(y, last + 4, right_marks[row + 2]);
        } else if row == n {
            canvas.put_char(y, last + 4, left_marks[0]);
        }

        if row + 1 < n {
            let y = canvas.line();
            for &x in &xs {
                canvas.put_char(y, x - 1, '/');
                canvas.put_char(y, x + 1, '\\');
            }
            canvas.put_char(y, last + 3, '/');
        } else if row + 1 == n {
            let below = cell_xs(n);
            let y = canvas.line();
            for &x in &below {
                canvas.put_char(y, x - 1, '\\');
                canvas.put_char(y, x + 1, '/');
            }
            canvas.put_char(y, below[below.len() - 1] + 3, '\\');
        }
    }

    let bottom_xs = cell_xs(n);
    let slashes_line = canvas.line();
    let markers_line = canvas.line();
    for (k, &x) in bottom_xs.iter().enumerate() {
        canvas.put_char(slashes_line, x + 1, '\\');
        canvas.put_char(markers_line, x + 2, left_marks[n - k]);
    }

    canvas.finish()
}

// Fallback for hand-built layouts and labels wider than one character.
fn render_rows(state: &GameState) -> String {
    let geometry = state.geometry();
    state
        .leylines()
        .map(|(line, owner)| {
            let cells: Vec<String> = line
                .cells()
                .iter()
                .map(|&cell| match state.cell_owner(cell).player() {
                    Some(player) => player.marker().to_string(),
                    None => geometry.label(cell).to_string(),
                })
                .collect();
            format!(
                "{} {} {}: {}",
                owner.marker(),
                line.family(),
                line.index(),
                cells.join(" - ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl GameState {
    /// Score line and player to move
    pub fn summary(&self) -> String {
        let scores = self.scores();
        format!(
            "p1 {} - {} p2\nThe current player is {}",
            scores.p1,
            scores.p2,
            self.to_move()
        )
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::game::{Geometry, Player};

    #[test]
    fn test_render_size_one() {
        let state = GameState::initial(1, Player::One).unwrap();
        let expected = [
            "      @   @",
            "     /   /",
            "@ - A - B",
            "     \\ / \\",
            "  @ - C   @",
            "       \\",
            "        @",
        ]
        .join("\n");
        assert_eq!(state.to_string(), expected);
    }

    #[test]
    fn test_render_marks_captures() {
        let state = GameState::initial(1, Player::One).unwrap();
        let next = state.apply("A").unwrap();
        let expected = [
            "      1   @",
            "     /   /",
            "1 - 1 - B",
            "     \\ / \\",
            "  @ - C   @",
            "       \\",
            "        1",
        ]
        .join("\n");
        assert_eq!(next.to_string(), expected);
    }

    #[test]
    fn test_render_size_two() {
        let state = GameState::initial(2, Player::One).unwrap();
        let expected = [
            "        @   @",
            "       /   /",
            "  @ - A - B   @",
            "     / \\ / \\ /",
            "@ - C - D - E",
            "     \\ / \\ / \\",
            "  @ - F - G   @",
            "       \\   \\",
            "        @   @",
        ]
        .join("\n");
        assert_eq!(state.to_string(), expected);
    }

    #[test]
    fn test_render_shows_every_label() {
        for n in 1..=5 {
            let state = GameState::initial(n, Player::One).unwrap();
            let text = state.to_string();
            for label in state.legal_moves() {
                assert!(text.contains(label), "label {label} missing for n={n}");
            }
            let markers = text.chars().filter(|&c| c == '@').count();
            assert_eq!(markers, 3 * (n + 1), "leyline markers for n={n}");
        }
    }

    #[test]
    fn test_render_hand_built_board() {
        let geometry = Geometry::from_families(1, &["A", "B"], &[&["A", "B"]], &[], &[]).unwrap();
        let state = GameState::from_geometry(Arc::new(geometry), Player::One);
        assert_eq!(state.to_string(), "@ row 0: A - B");
    }

    #[test]
    fn test_wide_labels_render_as_rows() {
        // Size six runs past Z into two-letter labels
        let state = GameState::initial(6, Player::One).unwrap();
        assert!(state.legal_moves().contains(&"AB"));
        let text = state.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 21);
        assert_eq!(lines[0], "@ row 0: A - B");
        assert!(lines.contains(&"@ row 5: U - V - W - X - Y - Z - AA"));
        assert!(lines.contains(&"@ row 6: AB - AC - AD - AE - AF - AG"));
    }

    #[test]
    fn test_summary() {
        let state = GameState::initial(2, Player::One).unwrap();
        let next = state.apply("A").unwrap();
        assert_eq!(next.summary(), "p1 2 - 0 p2\nThe current player is p2");
    }
}
