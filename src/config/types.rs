use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub duelists: DuelistsConfig,
    /// Flavor-text toggles keyed by `SettingId::as_str()`.
    #[serde(default)]
    pub settings: HashMap<String, bool>,
}

/// Names shown for each seat when the app starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DuelistsConfig {
    #[serde(default = "default_player_one")]
    pub player_one: String,
    #[serde(default = "default_player_two")]
    pub player_two: String,
}

fn default_player_one() -> String {
    "Player 1".to_string()
}

fn default_player_two() -> String {
    "Player 2".to_string()
}

impl Default for DuelistsConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}
