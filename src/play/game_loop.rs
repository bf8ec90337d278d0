use tracing::{debug, info};

use crate::ai::Strategy;
use crate::error::PlayError;
use crate::game::{Game, GameState, Player};

/// Outcome of a single game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: Option<Player>,
    pub moves: Vec<String>,
    pub final_state: GameState,
}

impl GameRecord {
    pub fn game_length(&self) -> usize {
        self.moves.len()
    }
}

/// Play `game` to the end, asking `p1` and `p2` for moves in turn.
///
/// `observer` sees the game after every applied move. Play also stops if a
/// position without a winner runs out of cells.
pub fn play_game(
    mut game: Game,
    p1: &mut dyn Strategy,
    p2: &mut dyn Strategy,
    mut observer: impl FnMut(&Game),
) -> Result<GameRecord, PlayError> {
    let mut moves = Vec::new();

    while !game.is_over(game.current_state()) && !game.current_state().legal_cells().is_empty() {
        let player = game.current_state().to_move();
        let strategy: &mut dyn Strategy = match player {
            Player::One => &mut *p1,
            Player::Two => &mut *p2,
        };
        let mv = strategy.select_move(&game)?;
        debug!(%player, strategy = strategy.name(), mv = %mv, "move selected");
        game.apply_move(&mv).map_err(|source| PlayError::IllegalMove {
            strategy: strategy.name().to_string(),
            source,
        })?;
        moves.push(mv);
        observer(&game);
    }

    let winner = game.winner_of(game.current_state());
    info!(
        winner = winner.map_or("none", |p| p.name()),
        moves = moves.len(),
        "game finished"
    );

    Ok(GameRecord {
        winner,
        moves,
        final_state: game.into_state(),
    })
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ai::{IterativeMinimax, RandomStrategy, RoughOutcome};
    use crate::error::StrategyError;
    use crate::game::Geometry;

    // Always answers with the same cell.
    struct Stubborn(&'static str);

    impl Strategy for Stubborn {
        fn select_move(&mut self, _game: &Game) -> Result<String, StrategyError> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &str {
            "Stubborn"
        }
    }

    #[test]
    fn test_random_game_terminates_with_winner() {
        let game = Game::new(3, Player::One).unwrap();
        let mut p1 = RandomStrategy::with_seed(1);
        let mut p2 = RandomStrategy::with_seed(2);
        let mut observed = 0;

        let record = play_game(game, &mut p1, &mut p2, |_| observed += 1).unwrap();

        assert!(record.winner.is_some());
        assert!(record.final_state.is_over());
        assert_eq!(observed, record.game_length());
        assert_eq!(record.final_state.claimed_cells(), record.game_length());
    }

    #[test]
    fn test_first_mover_wins_size_one() {
        let game = Game::new(1, Player::Two).unwrap();
        let record = play_game(game, &mut RoughOutcome, &mut IterativeMinimax, |_| {}).unwrap();
        assert_eq!(record.winner, Some(Player::Two));
        assert_eq!(record.moves, vec!["A".to_string()]);
    }

    #[test]
    fn test_illegal_move_aborts() {
        let game = Game::new(2, Player::One).unwrap();
        let err = play_game(game, &mut Stubborn("A"), &mut Stubborn("A"), |_| {}).unwrap_err();
        match err {
            PlayError::IllegalMove { strategy, .. } => assert_eq!(strategy, "Stubborn"),
            other => panic!("unexpected error {other}"),
        }
    }

    #[test]
    fn test_stops_when_cells_run_out() {
        // Neither player can reach the threshold on this board
        let geometry = Geometry::from_families(1, &["A", "B"], &[&["A"]], &[&["B"]], &[]).unwrap();
        let game = Game::from_state(GameState::from_geometry(Arc::new(geometry), Player::One));
        let mut p1 = RandomStrategy::with_seed(3);
        let mut p2 = RandomStrategy::with_seed(4);

        let record = play_game(game, &mut p1, &mut p2, |_| {}).unwrap();
        assert_eq!(record.winner, None);
        assert_eq!(record.game_length(), 2);
    }
}
