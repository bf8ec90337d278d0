use std::io::{self, BufRead, Cursor, Stdin, Stdout, Write};

use crate::error::StrategyError;
use crate::game::Game;

use super::strategy::Strategy;

/// Where an interactive player's answers come from, one line at a time.
pub trait LineSource {
    /// Append the next line to `buf`, returning the bytes read (0 at EOF).
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

// Locks only for the duration of each read, so several players can share
// the process's standard input.
impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// A strategy that asks a person for each move, re-prompting until the
/// answer names a legal cell.
pub struct InteractiveStrategy<R, W> {
    input: R,
    output: W,
}

impl InteractiveStrategy<Stdin, Stdout> {
    /// Read moves from standard input and prompt on standard output
    pub fn stdin() -> Self {
        InteractiveStrategy::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> InteractiveStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        InteractiveStrategy { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: LineSource, W: Write> Strategy for InteractiveStrategy<R, W> {
    fn select_move(&mut self, game: &Game) -> Result<String, StrategyError> {
        let state = game.current_state();
        loop {
            write!(self.output, "Enter a move: ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(StrategyError::InputClosed);
            }
            match game.parse_move(&line) {
                Some(mv) if state.is_legal(&mv) => return Ok(mv),
                _ => writeln!(
                    self.output,
                    "'{}' is not a legal move. Choose one of: {}",
                    line.trim(),
                    state.legal_moves().join(", ")
                )?,
            }
        }
    }

    fn name(&self) -> &str {
        "Interactive"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_reads_legal_move() {
        let game = Game::new(2, Player::One).unwrap();
        let mut strategy = InteractiveStrategy::new(Cursor::new("e\n"), Vec::new());
        assert_eq!(strategy.select_move(&game).unwrap(), "E");
    }

    #[test]
    fn test_reprompts_on_bad_input() {
        let mut game = Game::new(2, Player::One).unwrap();
        game.apply_move("A").unwrap();
        let mut strategy = InteractiveStrategy::new(Cursor::new("zz\nA\nb\n"), Vec::new());

        assert_eq!(strategy.select_move(&game).unwrap(), "B");
        let output = String::from_utf8(strategy.into_output()).unwrap();
        assert_eq!(output.matches("Enter a move: ").count(), 3);
        assert!(output.contains("'zz' is not a legal move"));
        assert!(output.contains("'A' is not a legal move. Choose one of: B, C, D, E, F, G"));
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let game = Game::new(1, Player::One).unwrap();
        let mut strategy = InteractiveStrategy::new(Cursor::new(""), Vec::new());
        assert!(matches!(
            strategy.select_move(&game),
            Err(StrategyError::InputClosed)
        ));
    }
}
