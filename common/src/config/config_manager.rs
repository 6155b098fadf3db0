use std::cell::RefCell;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{ContentProvider, FileContentProvider, Serializer, Validate, YamlSerializer};

/// Loads, validates and caches a settings document. A missing document yields `TConfig::default()`.
pub struct ConfigManager<TContentProvider, TConfig, TSerializer = YamlSerializer>
where
    TContentProvider: ContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: Serializer<TConfig>,
{
    serializer: TSerializer,
    content_provider: TContentProvider,
    config: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentProvider, TConfig, YamlSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(file_path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentProvider::new(file_path), YamlSerializer)
    }
}

impl<TContentProvider, TConfig, TSerializer> ConfigManager<TContentProvider, TConfig, TSerializer>
where
    TContentProvider: ContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TSerializer: Serializer<TConfig>,
{
    pub fn new(content_provider: TContentProvider, serializer: TSerializer) -> Self {
        Self {
            serializer,
            content_provider,
            config: RefCell::new(None),
        }
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        if let Some(config) = self.config.borrow().as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.content_provider.get_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized = self.serializer.serialize(config)?;
        self.content_provider.set_content(&serialized)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct Sample {
        name: String,
        level: u32,
    }

    impl Validate for Sample {
        fn validate(&self) -> Result<(), String> {
            if self.level > 10 {
                return Err("level must be at most 10".to_string());
            }
            Ok(())
        }
    }

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_file_returns_default() {
        let manager: ConfigManager<_, Sample, _> =
            ConfigManager::from_yaml_file(get_temp_file_path());
        assert_eq!(manager.get_config(), Ok(Sample::default()));
    }

    #[test]
    fn test_set_then_get() {
        let path = get_temp_file_path();
        let manager = ConfigManager::from_yaml_file(path.clone());
        let sample = Sample {
            name: "easy".to_string(),
            level: 3,
        };
        assert!(manager.set_config(&sample).is_ok());
        assert_eq!(manager.get_config(), Ok(sample.clone()));

        let fresh: ConfigManager<_, Sample, _> = ConfigManager::from_yaml_file(path.clone());
        assert_eq!(fresh.get_config(), Ok(sample));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let manager = ConfigManager::from_yaml_file(get_temp_file_path());
        let sample = Sample {
            name: "hard".to_string(),
            level: 11,
        };
        assert!(manager.set_config(&sample).is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let path = get_temp_file_path();
        FileContentProvider::new(path.clone())
            .set_content("name: [unterminated")
            .unwrap();
        let manager: ConfigManager<_, Sample, _> = ConfigManager::from_yaml_file(path.clone());
        assert!(manager.get_config().is_err());
        let _ = std::fs::remove_file(path);
    }
}
