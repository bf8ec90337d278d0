use tracing::info;

use crate::ai::Strategy;
use crate::error::PlayError;
use crate::game::{Game, Player};

use super::game_loop::{play_game, GameRecord};

/// Win and draw tally over a series of games.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResults {
    pub p1_wins: usize,
    pub p2_wins: usize,
    pub draws: usize,
    total_moves: usize,
}

impl MatchResults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: &GameRecord) {
        match record.winner {
            Some(Player::One) => self.p1_wins += 1,
            Some(Player::Two) => self.p2_wins += 1,
            None => self.draws += 1,
        }
        self.total_moves += record.game_length();
    }

    pub fn games(&self) -> usize {
        self.p1_wins + self.p2_wins + self.draws
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::One => self.p1_wins,
            Player::Two => self.p2_wins,
        }
    }

    /// Fraction of games won by `player`, 0 before any game is recorded.
    pub fn win_rate(&self, player: Player) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.wins(player) as f32 / games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        let games = self.games();
        if games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / games as f32
    }
}

/// Play `games` games from the starting position of `game`.
pub fn play_match(
    game: &Game,
    games: usize,
    p1: &mut dyn Strategy,
    p2: &mut dyn Strategy,
) -> Result<MatchResults, PlayError> {
    let mut results = MatchResults::new();
    for index in 0..games {
        let record = play_game(game.clone(), p1, p2, |_| {})?;
        results.record(&record);
        info!(game = index + 1, of = games, "match game recorded");
    }
    Ok(results)
}
