mod loader;
mod settings;
mod store;
mod types;

pub use loader::{ConfigError, MAX_NAME_LEN};
pub use settings::{DuelSettingsManager, SettingDef, SettingId, SettingsFieldSnapshot};
pub use store::ConfigStore;
pub use types::{Config, DuelistsConfig};
