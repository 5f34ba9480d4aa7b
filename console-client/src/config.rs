use std::path::PathBuf;
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Opponent, SessionConfig, YamlConfigSerializer,
};
use tictactoe_engine::games::tictactoe::{Difficulty, Player};

const CONFIG_FILE_NAME: &str = "tictactoe_console.yaml";

pub type SessionConfigManager =
    ConfigManager<FileContentConfigProvider, SessionConfig, YamlConfigSerializer>;

fn get_default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(path: Option<PathBuf>) -> SessionConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_default_config_path))
}

/// Command line values win over the file.
#[derive(Debug, Default)]
pub struct ConfigOverrides {
    pub opponent: Option<Opponent>,
    pub computer_plays: Option<Player>,
    pub difficulty: Option<Difficulty>,
    pub seed: Option<u64>,
}

impl ConfigOverrides {
    pub fn apply(&self, mut config: SessionConfig) -> SessionConfig {
        if let Some(opponent) = self.opponent {
            config.opponent = opponent;
        }
        if let Some(computer_plays) = self.computer_plays {
            config.computer_plays = computer_plays;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::games::tictactoe::Mode;

    #[test]
    fn test_no_overrides_keep_file_values() {
        let config = SessionConfig {
            difficulty: Difficulty::Easy,
            seed: Some(9),
            ..SessionConfig::default()
        };
        assert_eq!(ConfigOverrides::default().apply(config.clone()), config);
    }

    #[test]
    fn test_overrides_replace_file_values() {
        let overrides = ConfigOverrides {
            opponent: Some(Opponent::Computer),
            computer_plays: Some(Player::X),
            difficulty: Some(Difficulty::Hard),
            seed: Some(5),
        };
        let config = overrides.apply(SessionConfig {
            opponent: Opponent::Human,
            ..SessionConfig::default()
        });
        assert_eq!(config.mode(), Mode::VsComputer(Player::X));
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.seed, Some(5));
    }
}
