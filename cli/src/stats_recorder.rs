use std::path::PathBuf;

use tictactoe_common::games::tictactoe::DecisionRecord;
use tictactoe_common::log;
use tictactoe_common::stats::{GameOutcome, SessionStats, StatsStore};

/// Owns the session statistics and writes them back after every change.
pub struct StatsRecorder {
    store: StatsStore,
    stats: SessionStats,
}

impl StatsRecorder {
    pub fn open(file_path: impl Into<PathBuf>) -> Self {
        let store = StatsStore::from_yaml_file(file_path);
        let loaded = store.load();
        if let Some(notice) = loaded.notice {
            log!("{}", notice);
        } else if loaded.stats.games > 0 {
            log!("Previous statistics restored ({} games)", loaded.stats.games);
        }

        Self {
            store,
            stats: loaded.stats,
        }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    pub fn record_decision(&mut self, record: &DecisionRecord) {
        self.stats.record_decision(record);
        self.persist();
    }

    pub fn record_outcome(&mut self, outcome: GameOutcome) {
        self.stats.record_outcome(outcome);
        self.persist();
    }

    pub fn reset(&mut self) {
        self.stats.reset();
        self.persist();
    }

    pub fn persist(&self) -> bool {
        match self.store.save(&self.stats) {
            Ok(()) => true,
            Err(e) => {
                log!("Could not save statistics: {}", e);
                false
            }
        }
    }
}
