use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tictactoe_common::config::{ConfigManager, FileContentProvider, Validate, YamlSerializer};
use tictactoe_common::games::tictactoe::Mark;
use tictactoe_common::stats::DEFAULT_STATS_FILE;

const CONFIG_FILE_NAME: &str = "tictactoe_cli_config.yaml";

pub fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: Option<PathBuf>,
) -> ConfigManager<FileContentProvider, CliConfig, YamlSerializer> {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PlayerMark {
    X,
    O,
}

impl PlayerMark {
    pub fn to_mark(self) -> Mark {
        match self {
            PlayerMark::X => Mark::X,
            PlayerMark::O => Mark::O,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct CliConfig {
    pub pruning_enabled: bool,
    pub engine_mark: PlayerMark,
    pub stats_file: String,
    #[serde(default)]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<(), String> {
        if self.stats_file.trim().is_empty() {
            return Err("stats_file must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            pruning_enabled: true,
            engine_mark: PlayerMark::O,
            stats_file: DEFAULT_STATS_FILE.to_string(),
            verbose: false,
        }
    }
}
