//! Rough-outcome heuristic: a two-ply lookahead that is much cheaper than
//! minimax but not optimal. It only notices wins that happen on the very next
//! move or that the opponent is forced to allow.

use tracing::debug;

use crate::error::{SearchError, StrategyError};
use crate::game::{Game, GameState};

use super::minimax::{first_best, terminal_value, to_outcome, SearchOutcome, DRAW, LOSS, WIN};
use super::strategy::Strategy;

// Whether the player to move in `state` has a move that ends the game.
fn has_immediate_win(game: &Game, state: &GameState) -> bool {
    state.successors().any(|(_, child)| game.is_over(&child))
}

/// Estimated outcome of `state` for its player to move:
///
/// * the score of a finished game (`-1` with a winner, `0` without),
/// * `1` if some move wins immediately,
/// * `-1` if every move hands the opponent an immediate win,
/// * `0` otherwise.
pub fn rough_outcome(game: &Game, state: &GameState) -> i32 {
    if let Some(score) = terminal_value(game, state) {
        return score;
    }
    if has_immediate_win(game, state) {
        return WIN;
    }
    let mut replies = state.successors().peekable();
    if replies.peek().is_none() {
        return DRAW;
    }
    if replies.all(|(_, child)| has_immediate_win(game, &child)) {
        LOSS
    } else {
        DRAW
    }
}

/// Move leaving the opponent the lowest rough outcome, with its negated score.
pub fn rough_outcome_search(game: &Game) -> Result<SearchOutcome, SearchError> {
    let root = game.current_state();
    if game.is_over(root) {
        return Err(SearchError::GameOver);
    }
    let best = first_best(
        root.successors()
            .map(|(cell, child)| (cell, -rough_outcome(game, &child))),
    );
    let outcome = to_outcome(root, best)?;
    debug!(best_move = %outcome.best_move, estimate = outcome.value, "rough outcome chosen");
    Ok(outcome)
}

/// Heuristic move choice for the current state of `game`.
pub fn rough_outcome_strategy(game: &Game) -> Result<String, SearchError> {
    rough_outcome_search(game).map(|outcome| outcome.best_move)
}

/// Strategy wrapper around [`rough_outcome_strategy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RoughOutcome;

impl Strategy for RoughOutcome {
    fn select_move(&mut self, game: &Game) -> Result<String, StrategyError> {
        Ok(rough_outcome_strategy(game)?)
    }

    fn name(&self) -> &str {
        "Rough outcome"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::ai::minimax::recursive_value;
    use crate::game::{Geometry, Player};

    #[test]
    fn finished_game_scores_loss() {
        let game = Game::new(1, Player::One).unwrap();
        let over = game.current_state().apply("C").unwrap();
        assert_eq!(rough_outcome(&game, &over), LOSS);
    }

    #[test]
    fn immediate_win_scores_win() {
        let game = Game::new(1, Player::One).unwrap();
        assert_eq!(rough_outcome(&game, game.current_state()), WIN);
        assert_eq!(rough_outcome_strategy(&game).unwrap(), "A");
    }

    #[test]
    fn takes_immediate_win_when_available() {
        // p1 holds A and C; p2 holds B. p1 to move on a size-two board
        let mut game = Game::new(2, Player::One).unwrap();
        for mv in ["A", "B", "C", "G"] {
            game.apply_move(mv).unwrap();
        }
        let outcome = rough_outcome_search(&game).unwrap();
        assert_eq!(outcome.value, WIN);
        let after = game.current_state().apply(&outcome.best_move).unwrap();
        let child_rough = rough_outcome(&game, &after);
        assert_eq!(-child_rough, WIN);
    }

    #[test]
    fn matches_minimax_on_decided_positions() {
        // Positions one move from the end are fully seen by two-ply lookahead
        let game = Game::new(2, Player::One).unwrap();
        let mut pending = vec![game.current_state().clone()];
        while let Some(state) = pending.pop() {
            if state.is_over() {
                continue;
            }
            let rough = rough_outcome(&game, &state);
            if rough == WIN {
                assert_eq!(recursive_value(&game, &state), WIN);
            }
            pending.extend(state.successors().map(|(_, child)| child));
        }
    }

    #[test]
    fn forced_loss_scores_loss() {
        // X and Y lie on no leyline; p2 takes A and B for two captures, then
        // whichever of C and D p1 takes, p2 completes its third with the other
        let geometry = Geometry::from_families(
            1,
            &["X", "Y", "A", "B", "C", "D"],
            &[&["A"], &["B"]],
            &[&["C"]],
            &[&["D"]],
        )
        .unwrap();
        let mut game = Game::from_state(GameState::from_geometry(Arc::new(geometry), Player::One));
        for mv in ["X", "A", "Y", "B"] {
            game.apply_move(mv).unwrap();
        }
        let state = game.current_state();
        assert_eq!(state.to_move(), Player::One);
        assert_eq!(state.scores().p2, 2);

        assert_eq!(rough_outcome(&game, state), LOSS);
        assert_eq!(recursive_value(&game, state), LOSS);
    }

    #[test]
    fn no_information_scores_draw() {
        let geometry = Geometry::from_families(
            1,
            &["X", "Y", "A", "B", "C", "D"],
            &[&["A"], &["B"]],
            &[&["C"]],
            &[&["D"]],
        )
        .unwrap();
        let game = Game::from_state(GameState::from_geometry(Arc::new(geometry), Player::One));
        assert_eq!(rough_outcome(&game, game.current_state()), DRAW);
        // All replies score the same, so the first cell is chosen
        assert_eq!(rough_outcome_strategy(&game).unwrap(), "X");
    }

    #[test]
    fn rejects_finished_game() {
        // Every leyline captured by p1 with a cell still unclaimed
        let geometry =
            Geometry::from_families(1, &["A", "B"], &[&["A"]], &[&["A"]], &[&["A"]]).unwrap();
        let mut game = Game::from_state(GameState::from_geometry(Arc::new(geometry), Player::One));
        game.apply_move("A").unwrap();

        let state = game.current_state();
        assert!(state.leylines().all(|(_, owner)| owner.is_claimed()));
        assert!(game.is_over(state));
        assert_eq!(rough_outcome_strategy(&game), Err(SearchError::GameOver));
        assert!(RoughOutcome.select_move(&game).is_err());
    }
}
