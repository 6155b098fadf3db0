mod config_manager;
mod content_provider;
mod serializer;
mod validate;

pub use config_manager::ConfigManager;
pub use content_provider::{ContentProvider, FileContentProvider};
pub use serializer::{Serializer, YamlSerializer};
pub use validate::Validate;
