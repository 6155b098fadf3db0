use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    BotInput, BotType, DecisionRecord, Mark, MoveError, SearchOptions, TicTacToeGameState,
    calculate_move, find_best_move,
};
use tictactoe_common::stats::GameOutcome;
use tictactoe_common::{log, log_debug};

use crate::stats_recorder::StatsRecorder;

pub struct GameRunner {
    pub engine_mark: Mark,
    pub options: SearchOptions,
}

impl GameRunner {
    pub fn new(engine_mark: Mark, options: SearchOptions) -> Self {
        Self {
            engine_mark,
            options,
        }
    }

    pub fn is_engine_turn(&self, state: &TicTacToeGameState) -> bool {
        !state.is_over() && state.current_mark == self.engine_mark
    }

    /// Searches for the engine's move, records the decision and plays it.
    pub fn engine_turn(
        &self,
        state: &mut TicTacToeGameState,
        recorder: &mut StatsRecorder,
    ) -> Result<DecisionRecord, MoveError> {
        let record = find_best_move(&state.board, self.engine_mark, self.options.pruning);
        log_decision(&record);
        recorder.record_decision(&record);

        let position = record.position.ok_or(MoveError::GameOver)?;
        state.place_mark(position)?;
        Ok(record)
    }

    /// Records the outcome once the game is over; `None` while it is still running.
    pub fn finish_game(
        &self,
        state: &TicTacToeGameState,
        recorder: &mut StatsRecorder,
    ) -> Option<GameOutcome> {
        let outcome = GameOutcome::from_board(&state.board, self.engine_mark)?;
        recorder.record_outcome(outcome);
        log!(
            "Game over: {}",
            match outcome {
                GameOutcome::EngineWin => "engine wins",
                GameOutcome::OpponentWin => "opponent wins",
                GameOutcome::Draw => "draw",
            }
        );
        Some(outcome)
    }

    /// Plays one game without a human. The opponent's searches are not recorded.
    pub fn play_unattended(
        &self,
        opponent: BotType,
        rng: &mut SessionRng,
        recorder: &mut StatsRecorder,
    ) -> Result<GameOutcome, MoveError> {
        let mut state = TicTacToeGameState::new();

        loop {
            if let Some(outcome) = self.finish_game(&state, recorder) {
                return Ok(outcome);
            }

            if self.is_engine_turn(&state) {
                self.engine_turn(&mut state, recorder)?;
            } else {
                let input = BotInput::from_game_state(&state, self.options);
                let bot_move = calculate_move(opponent, &input, rng).ok_or(MoveError::GameOver)?;
                log_debug!("Opponent plays {}", bot_move.position);
                state.place_mark(bot_move.position)?;
            }
        }
    }
}

pub fn format_decision(record: &DecisionRecord) -> String {
    let position = record
        .position
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    format!(
        "MOVE[{}] SCORE[{}] STATES[{}] TIME[{:.1}ms]",
        position,
        record.score,
        record.states_visited,
        record.elapsed_ms()
    )
}

pub fn log_decision(record: &DecisionRecord) {
    log!("{}", format_decision(record));
    log_debug!("Cutoffs: {}", record.cutoffs);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_runner_{}.yaml", random_number))
    }

    #[test]
    fn test_engine_vs_engine_is_a_draw() {
        let path = get_temp_file_path();
        let mut recorder = StatsRecorder::open(path.clone());
        let runner = GameRunner::new(Mark::O, SearchOptions::default());
        let mut rng = SessionRng::new(5);

        let outcome = runner
            .play_unattended(BotType::Minimax, &mut rng, &mut recorder)
            .unwrap();
        assert_eq!(outcome, GameOutcome::Draw);
        assert_eq!(recorder.stats().games, 1);
        assert_eq!(recorder.stats().draws, 1);
        assert_eq!(recorder.stats().decisions, 4);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_engine_never_loses_to_random_opponent() {
        let path = get_temp_file_path();
        let mut recorder = StatsRecorder::open(path.clone());
        let mut rng = SessionRng::new(2024);

        for engine_mark in [Mark::X, Mark::O] {
            let runner = GameRunner::new(engine_mark, SearchOptions::default());
            for _ in 0..10 {
                let outcome = runner
                    .play_unattended(BotType::Random, &mut rng, &mut recorder)
                    .unwrap();
                assert_ne!(outcome, GameOutcome::OpponentWin);
            }
        }
        assert_eq!(recorder.stats().games, 20);
        assert_eq!(recorder.stats().opponent_wins, 0);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_engine_turn_plays_and_records() {
        let path = get_temp_file_path();
        let mut recorder = StatsRecorder::open(path.clone());
        let runner = GameRunner::new(Mark::O, SearchOptions { pruning: false });
        let mut state = TicTacToeGameState::new();
        state.place_mark(0).unwrap();

        assert!(runner.is_engine_turn(&state));
        let record = runner.engine_turn(&mut state, &mut recorder).unwrap();
        assert_eq!(state.last_move, record.position);
        assert_eq!(state.current_mark, Mark::X);
        assert_eq!(recorder.stats().decisions, 1);
        assert_eq!(recorder.stats().total_states_visited, record.states_visited);
        assert!(runner.finish_game(&state, &mut recorder).is_none());
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_format_decision() {
        let record = DecisionRecord {
            position: Some(4),
            score: -2,
            states_visited: 1234,
            cutoffs: 7,
            elapsed: Duration::from_micros(2500),
        };
        assert_eq!(
            format_decision(&record),
            "MOVE[4] SCORE[-2] STATES[1234] TIME[2.5ms]"
        );
    }

    #[test]
    fn test_format_decision_without_move() {
        let record = DecisionRecord {
            position: None,
            score: 0,
            states_visited: 1,
            cutoffs: 0,
            elapsed: Duration::ZERO,
        };
        assert_eq!(
            format_decision(&record),
            "MOVE[-] SCORE[0] STATES[1] TIME[0.0ms]"
        );
    }
}
