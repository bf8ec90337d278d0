use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{StrategyError, UnknownStrategy};
use crate::game::Game;

use super::interactive::InteractiveStrategy;
use super::minimax::{IterativeMinimax, RecursiveMinimax};
use super::random::RandomStrategy;
use super::rough::RoughOutcome;

/// Universal interface for anything that picks Stonehenge moves.
pub trait Strategy {
    /// Select a move (cell label) for the player to move in `game`.
    fn select_move(&mut self, game: &Game) -> Result<String, StrategyError>;

    /// Return the strategy's display name.
    fn name(&self) -> &str;
}

/// Named strategies selectable from configuration and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    Interactive,
    Random,
    Recursive,
    Iterative,
    Rough,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 5] = [
        StrategyKind::Interactive,
        StrategyKind::Random,
        StrategyKind::Recursive,
        StrategyKind::Iterative,
        StrategyKind::Rough,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::Interactive => "interactive",
            StrategyKind::Random => "random",
            StrategyKind::Recursive => "recursive",
            StrategyKind::Iterative => "iterative",
            StrategyKind::Rough => "rough",
        }
    }

    /// Whether the strategy explores the whole game tree
    pub fn is_exhaustive(self) -> bool {
        matches!(self, StrategyKind::Recursive | StrategyKind::Iterative)
    }

    /// Build a boxed strategy. `seed` only affects the random strategy.
    pub fn build(self, seed: Option<u64>) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Interactive => Box::new(InteractiveStrategy::stdin()),
            StrategyKind::Random => Box::new(match seed {
                Some(seed) => RandomStrategy::with_seed(seed),
                None => RandomStrategy::new(),
            }),
            StrategyKind::Recursive => Box::new(RecursiveMinimax),
            StrategyKind::Iterative => Box::new(IterativeMinimax),
            StrategyKind::Rough => Box::new(RoughOutcome),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKind {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        StrategyKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_parse_strategy_kind() {
        assert_eq!("iterative".parse::<StrategyKind>().unwrap(), StrategyKind::Iterative);
        assert_eq!(" Rough ".parse::<StrategyKind>().unwrap(), StrategyKind::Rough);
        let err = "alphabeta".parse::<StrategyKind>().unwrap_err();
        assert!(err.to_string().contains("alphabeta"));
    }

    #[test]
    fn test_display_roundtrips() {
        for kind in StrategyKind::ALL {
            assert_eq!(kind.to_string().parse::<StrategyKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_built_names() {
        assert_eq!(StrategyKind::Interactive.build(None).name(), "Interactive");
        assert_eq!(StrategyKind::Recursive.build(None).name(), "Recursive minimax");
        assert_eq!(StrategyKind::Iterative.build(None).name(), "Iterative minimax");
        assert_eq!(StrategyKind::Rough.build(None).name(), "Rough outcome");
        assert_eq!(StrategyKind::Random.build(Some(7)).name(), "Random");
    }

    #[test]
    fn test_two_interactive_players_share_stdin() {
        let (done_tx, done_rx) = mpsc::channel();
        thread::spawn(move || {
            let p1 = StrategyKind::Interactive.build(None);
            let p2 = StrategyKind::Interactive.build(None);
            let _ = done_tx.send((p1.name().to_string(), p2.name().to_string()));
        });
        let names = done_rx
            .recv_timeout(Duration::from_secs(5))
            .expect("building two interactive players blocked");
        assert_eq!(names, ("Interactive".to_string(), "Interactive".to_string()));
    }

    #[test]
    fn test_exhaustive_kinds() {
        assert!(StrategyKind::Recursive.is_exhaustive());
        assert!(StrategyKind::Iterative.is_exhaustive());
        assert!(!StrategyKind::Rough.is_exhaustive());
    }
}
