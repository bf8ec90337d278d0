use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::{SearchError, StrategyError};
use crate::game::Game;

use super::strategy::Strategy;

/// A strategy that selects uniformly at random from legal moves.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible move sequence for a given seed
    pub fn with_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn select_move(&mut self, game: &Game) -> Result<String, StrategyError> {
        let state = game.current_state();
        if game.is_over(state) {
            return Err(SearchError::GameOver.into());
        }
        let moves = state.legal_moves();
        if moves.is_empty() {
            return Err(SearchError::GameOver.into());
        }
        let idx = self.rng.random_range(0..moves.len());
        Ok(moves[idx].to_string())
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;

    #[test]
    fn test_random_strategy_selects_legal_move() {
        let mut strategy = RandomStrategy::new();
        let game = Game::new(3, Player::One).unwrap();

        for _ in 0..100 {
            let mv = strategy.select_move(&game).unwrap();
            assert!(game.current_state().is_legal(&mv), "Move {mv} is not legal");
        }
    }

    #[test]
    fn test_random_strategy_plays_full_game() {
        let mut p1 = RandomStrategy::new();
        let mut p2 = RandomStrategy::new();
        let mut game = Game::new(4, Player::One).unwrap();

        while !game.is_over(game.current_state()) {
            let mv = match game.current_state().to_move() {
                Player::One => p1.select_move(&game).unwrap(),
                Player::Two => p2.select_move(&game).unwrap(),
            };
            game.apply_move(&mv).unwrap();
        }

        assert!(game.is_winner(Player::One) || game.is_winner(Player::Two));
    }

    #[test]
    fn test_seeded_strategies_repeat() {
        let game = Game::new(5, Player::One).unwrap();
        let mut a = RandomStrategy::with_seed(42);
        let mut b = RandomStrategy::with_seed(42);
        for _ in 0..10 {
            assert_eq!(a.select_move(&game).unwrap(), b.select_move(&game).unwrap());
        }
    }

    #[test]
    fn test_random_strategy_name() {
        let strategy = RandomStrategy::new();
        assert_eq!(strategy.name(), "Random");
    }
}
