//! Exact minimax search in negamax form.
//!
//! Every position is scored from the point of view of the player about to
//! move: `-1` once the game has been won (by the previous mover), `0` for a
//! terminal position without a winner, and otherwise the best negated score
//! among its children. The root move is the first legal move, in board order,
//! achieving the best score.
//!
//! Two searches compute the same values: [`recursive_minimax`] recurses on the
//! native call stack and serves as the reference, while [`iterative_minimax`]
//! walks an explicit game tree and is the one to use on deeper boards. Neither
//! prunes or limits depth, so both explore the whole game tree.

use indextree::{Arena, NodeId};
use tracing::debug;

use crate::error::{SearchError, StrategyError};
use crate::game::{Game, GameState};

use super::strategy::Strategy;

/// Score of a position the player to move has already lost.
pub const LOSS: i32 = -1;
/// Score of a position without a winner.
pub const DRAW: i32 = 0;
/// Score of a position the player to move can force a win from.
pub const WIN: i32 = 1;

/// The chosen root move and the root's value for the player to move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: String,
    pub value: i32,
}

/// Score of a terminal position for the player to move, `None` if play goes on.
pub(crate) fn terminal_value(game: &Game, state: &GameState) -> Option<i32> {
    if !game.is_over(state) {
        return None;
    }
    Some(match game.winner_of(state) {
        Some(_) => LOSS,
        None => DRAW,
    })
}

/// First entry with the highest score.
pub(crate) fn first_best(scored: impl IntoIterator<Item = (usize, i32)>) -> Option<(usize, i32)> {
    let mut best: Option<(usize, i32)> = None;
    for (cell, score) in scored {
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((cell, score)),
        }
    }
    best
}

pub(crate) fn to_outcome(root: &GameState, best: Option<(usize, i32)>) -> Result<SearchOutcome, SearchError> {
    let (cell, value) = best.ok_or(SearchError::GameOver)?;
    Ok(SearchOutcome {
        best_move: root.geometry().label(cell).to_string(),
        value,
    })
}

/// Minimax value of `state` for its player to move, by plain recursion.
pub fn recursive_value(game: &Game, state: &GameState) -> i32 {
    if let Some(score) = terminal_value(game, state) {
        return score;
    }
    state
        .successors()
        .map(|(_, child)| -recursive_value(game, &child))
        .max()
        .unwrap_or(DRAW)
}

/// Best move and value for the current state of `game`, by plain recursion.
pub fn recursive_search(game: &Game) -> Result<SearchOutcome, SearchError> {
    let root = game.current_state();
    if game.is_over(root) {
        return Err(SearchError::GameOver);
    }
    let best = first_best(
        root.successors()
            .map(|(cell, child)| (cell, -recursive_value(game, &child))),
    );
    let outcome = to_outcome(root, best)?;
    debug!(best_move = %outcome.best_move, value = outcome.value, "recursive minimax finished");
    Ok(outcome)
}

/// Best move for the current state of `game`, by plain recursion.
pub fn recursive_minimax(game: &Game) -> Result<String, SearchError> {
    recursive_search(game).map(|outcome| outcome.best_move)
}

// A position in the explicit game tree.
struct TreeNode {
    state: GameState,
    expanded: bool,
    score: Option<i32>,
}

impl TreeNode {
    fn new(state: GameState) -> Self {
        TreeNode {
            state,
            expanded: false,
            score: None,
        }
    }
}

/// Minimax value of `state` for its player to move, computed with an explicit
/// stack over an arena-allocated game tree.
pub fn iterative_value(game: &Game, state: &GameState) -> i32 {
    evaluate_tree(game, state).0
}

// Returns the value and the number of tree nodes created.
fn evaluate_tree(game: &Game, state: &GameState) -> (i32, usize) {
    let mut arena: Arena<TreeNode> = Arena::new();
    let root = arena.new_node(TreeNode::new(state.clone()));
    let mut stack: Vec<NodeId> = vec![root];
    let mut created = 1;

    while let Some(&top) = stack.last() {
        let node = arena[top].get();
        if let Some(score) = terminal_value(game, &node.state) {
            arena[top].get_mut().score = Some(score);
            stack.pop();
        } else if !node.expanded {
            // Children go above the parent, so the parent is revisited once
            // all of them are scored.
            let children: Vec<GameState> = node.state.successors().map(|(_, child)| child).collect();
            arena[top].get_mut().expanded = true;
            for child in children {
                let id = arena.new_node(TreeNode::new(child));
                top.append(id, &mut arena);
                stack.push(id);
                created += 1;
            }
        } else {
            let children: Vec<NodeId> = top.children(&arena).collect();
            debug_assert!(children.iter().all(|&id| arena[id].get().score.is_some()));
            let score = children
                .iter()
                .filter_map(|&id| arena[id].get().score)
                .map(|score| -score)
                .max()
                .unwrap_or(DRAW);
            // Scored subtrees are never read again
            for id in children {
                id.remove_subtree(&mut arena);
            }
            arena[top].get_mut().score = Some(score);
            stack.pop();
        }
    }

    (arena[root].get().score.unwrap_or(DRAW), created)
}

/// Best move and value for the current state of `game`, without native recursion.
pub fn iterative_search(game: &Game) -> Result<SearchOutcome, SearchError> {
    let root = game.current_state();
    if game.is_over(root) {
        return Err(SearchError::GameOver);
    }
    let mut nodes = 0;
    let best = first_best(root.successors().map(|(cell, child)| {
        let (value, created) = evaluate_tree(game, &child);
        nodes += created;
        (cell, -value)
    }));
    let outcome = to_outcome(root, best)?;
    debug!(
        best_move = %outcome.best_move,
        value = outcome.value,
        nodes,
        "iterative minimax finished"
    );
    Ok(outcome)
}

/// Best move for the current state of `game`, without native recursion.
pub fn iterative_minimax(game: &Game) -> Result<String, SearchError> {
    iterative_search(game).map(|outcome| outcome.best_move)
}

/// Strategy wrapper around [`recursive_minimax`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursiveMinimax;

impl Strategy for RecursiveMinimax {
    fn select_move(&mut self, game: &Game) -> Result<String, StrategyError> {
        Ok(recursive_minimax(game)?)
    }

    fn name(&self) -> &str {
        "Recursive minimax"
    }
}

/// Strategy wrapper around [`iterative_minimax`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeMinimax;

impl Strategy for IterativeMinimax {
    fn select_move(&mut self, game: &Game) -> Result<String, StrategyError> {
        Ok(iterative_minimax(game)?)
    }

    fn name(&self) -> &str {
        "Iterative minimax"
    }
}
