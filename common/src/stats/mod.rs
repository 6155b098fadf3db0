mod session_stats;
mod store;

pub use session_stats::{GameOutcome, SessionStats};
pub use store::{DEFAULT_STATS_FILE, LoadedStats, PersistenceError, StatsStore};
