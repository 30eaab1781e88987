use crate::config::SettingsFieldSnapshot;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SettingsIntent {
    Load { fields: Vec<SettingsFieldSnapshot> },
    Close,
    /// Escape. Dirty dialogs ask for confirmation once before closing.
    RequestClose,
    MoveUp,
    MoveDown,
    Toggle,
}

impl Intent for SettingsIntent {}
