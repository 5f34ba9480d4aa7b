mod config_content_provider;
mod config_manager;
mod config_serializer;
mod session_config;
mod validate;

pub use config_content_provider::{ConfigContentProvider, FileContentConfigProvider};
pub use config_manager::ConfigManager;
pub use config_serializer::{ConfigSerializer, YamlConfigSerializer};
pub use session_config::{Opponent, SessionConfig};
pub use validate::Validate;
