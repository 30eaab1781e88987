use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, SettingId};

#[derive(Debug, Parser)]
#[command(name = "duel-companion", version, about = "Track life points for a two-player duel")]
pub struct Cli {
    /// Config file (default: <config dir>/duel-companion/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Name for the left-hand duelist
    #[arg(long, value_name = "NAME")]
    pub player_one: Option<String>,

    /// Name for the right-hand duelist
    #[arg(long, value_name = "NAME")]
    pub player_two: Option<String>,

    /// Shame the first ugly life-point change of each duel
    #[arg(long)]
    pub snark: bool,

    /// Taunt the loser when a duel ends
    #[arg(long)]
    pub mock: bool,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    /// CLI flags win over the file. Flags only ever enable a setting.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(name) = &self.player_one {
            config.duelists.player_one = name.clone();
        }
        if let Some(name) = &self.player_two {
            config.duelists.player_two = name.clone();
        }
        for (id, enabled) in [(SettingId::Snark, self.snark), (SettingId::Mock, self.mock)] {
            if enabled {
                config.settings.insert(id.as_str().to_string(), true);
            }
        }
    }
}
