mod interactive;
pub mod minimax;
mod random;
pub mod rough;
mod strategy;

pub use interactive::{InteractiveStrategy, LineSource};
pub use minimax::{
    iterative_minimax, recursive_minimax, IterativeMinimax, RecursiveMinimax, SearchOutcome,
};
pub use random::RandomStrategy;
pub use rough::{rough_outcome, rough_outcome_strategy, RoughOutcome};
pub use strategy::{Strategy, StrategyKind};
