use std::path::PathBuf;

use crate::config::{ContentProvider, FileContentProvider, Serializer, Validate, YamlSerializer};
use super::SessionStats;

pub const DEFAULT_STATS_FILE: &str = "tictactoe_stats.yaml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    Io(String),
    Serialize(String),
    Deserialize(String),
    Validation(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::Io(e) => write!(f, "IO error: {}", e),
            PersistenceError::Serialize(e) => write!(f, "Serialize error: {}", e),
            PersistenceError::Deserialize(e) => write!(f, "Corrupt statistics record: {}", e),
            PersistenceError::Validation(e) => write!(f, "Invalid statistics record: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {}

/// Statistics read at startup. `notice` is set when a stored record existed but could not
/// be used and the counters were reset to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedStats {
    pub stats: SessionStats,
    pub notice: Option<String>,
}

pub struct StatsStore<TContentProvider = FileContentProvider, TSerializer = YamlSerializer>
where
    TContentProvider: ContentProvider,
    TSerializer: Serializer<SessionStats>,
{
    content_provider: TContentProvider,
    serializer: TSerializer,
}

impl StatsStore<FileContentProvider, YamlSerializer> {
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentProvider::new(file_path), YamlSerializer)
    }
}

impl<TContentProvider, TSerializer> StatsStore<TContentProvider, TSerializer>
where
    TContentProvider: ContentProvider,
    TSerializer: Serializer<SessionStats>,
{
    pub fn new(content_provider: TContentProvider, serializer: TSerializer) -> Self {
        Self {
            content_provider,
            serializer,
        }
    }

    /// Reads the stored record; `Ok(None)` when nothing has been saved yet.
    pub fn try_load(&self) -> Result<Option<SessionStats>, PersistenceError> {
        let Some(content) = self
            .content_provider
            .get_content()
            .map_err(PersistenceError::Io)?
        else {
            return Ok(None);
        };

        let stats = self
            .serializer
            .deserialize(&content)
            .map_err(PersistenceError::Deserialize)?;
        stats.validate().map_err(PersistenceError::Validation)?;
        Ok(Some(stats))
    }

    /// Never fails: an unreadable record falls back to zeroed statistics plus a notice.
    pub fn load(&self) -> LoadedStats {
        match self.try_load() {
            Ok(Some(stats)) => LoadedStats {
                stats,
                notice: None,
            },
            Ok(None) => LoadedStats {
                stats: SessionStats::default(),
                notice: None,
            },
            Err(err) => LoadedStats {
                stats: SessionStats::default(),
                notice: Some(format!("{}; starting from empty statistics", err)),
            },
        }
    }

    pub fn save(&self, stats: &SessionStats) -> Result<(), PersistenceError> {
        stats.validate().map_err(PersistenceError::Validation)?;
        let serialized = self
            .serializer
            .serialize(stats)
            .map_err(PersistenceError::Serialize)?;
        self.content_provider
            .set_content(&serialized)
            .map_err(PersistenceError::Io)
    }
}
