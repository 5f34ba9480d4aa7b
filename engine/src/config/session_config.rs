use serde::{Deserialize, Serialize};

use crate::games::tictactoe::{Difficulty, Mode, Player};
use super::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Opponent {
    Human,
    #[default]
    Computer,
}

/// Settings a session is created from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub opponent: Opponent,
    pub computer_plays: Player,
    pub difficulty: Difficulty,
    pub seed: Option<u64>,
    pub log_prefix: Option<String>,
}

impl SessionConfig {
    pub fn mode(&self) -> Mode {
        match self.opponent {
            Opponent::Human => Mode::TwoPlayer,
            Opponent::Computer => Mode::VsComputer(self.computer_plays),
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            opponent: Opponent::Computer,
            computer_plays: Player::O,
            difficulty: Difficulty::Medium,
            seed: None,
            log_prefix: None,
        }
    }
}

impl Validate for SessionConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.log_prefix
            && prefix.trim().is_empty()
        {
            return Err("log_prefix must not be blank".to_string());
        }
        Ok(())
    }
}
