use serde::{Deserialize, Serialize};

use crate::config::{Serializer, Validate, YamlSerializer};
use crate::games::tictactoe::{Board, DecisionRecord, Mark};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    EngineWin,
    OpponentWin,
    Draw,
}

impl GameOutcome {
    /// Outcome of a finished board from the engine's side, or `None` while the game is on.
    pub fn from_board(board: &Board, engine_mark: Mark) -> Option<GameOutcome> {
        match board.winner() {
            Some(winner) if winner == engine_mark => Some(GameOutcome::EngineWin),
            Some(_) => Some(GameOutcome::OpponentWin),
            None if board.is_full() => Some(GameOutcome::Draw),
            None => None,
        }
    }
}

/// Running totals across every game played against the engine.
///
/// Serialized as a flat YAML mapping; every key is required.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionStats {
    pub games: u64,
    pub engine_wins: u64,
    pub opponent_wins: u64,
    pub draws: u64,
    pub total_states_visited: u64,
    pub total_elapsed_ms: f64,
    pub decisions: u64,
}

impl SessionStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_decision(&mut self, record: &DecisionRecord) {
        self.total_states_visited += record.states_visited;
        self.total_elapsed_ms += record.elapsed_ms();
        self.decisions += 1;
    }

    pub fn record_outcome(&mut self, outcome: GameOutcome) {
        self.games += 1;
        match outcome {
            GameOutcome::EngineWin => self.engine_wins += 1,
            GameOutcome::OpponentWin => self.opponent_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    /// Engine wins as a percentage of games played.
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.engine_wins as f64 / self.games as f64 * 100.0
    }

    /// Whole states per decision, rounded down.
    pub fn average_states_per_decision(&self) -> u64 {
        if self.decisions == 0 {
            return 0;
        }
        self.total_states_visited / self.decisions
    }

    /// Milliseconds per decision.
    pub fn average_time_per_decision(&self) -> f64 {
        if self.decisions == 0 {
            return 0.0;
        }
        self.total_elapsed_ms / self.decisions as f64
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn to_yaml(&self) -> Result<String, String> {
        YamlSerializer.serialize(self)
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        let stats: SessionStats = YamlSerializer.deserialize(content)?;
        stats.validate()?;
        Ok(stats)
    }
}

impl Validate for SessionStats {
    fn validate(&self) -> Result<(), String> {
        let outcomes = self
            .engine_wins
            .checked_add(self.opponent_wins)
            .and_then(|sum| sum.checked_add(self.draws))
            .ok_or_else(|| "Outcome counters overflow".to_string())?;
        if outcomes != self.games {
            return Err(format!(
                "Outcome counters sum to {} but games is {}",
                outcomes, self.games
            ));
        }
        if !self.total_elapsed_ms.is_finite() || self.total_elapsed_ms < 0.0 {
            return Err(format!(
                "Total elapsed time must be a non-negative number, got {}",
                self.total_elapsed_ms
            ));
        }
        Ok(())
    }
}
