use crate::config::SettingsFieldSnapshot;
use crate::ui::mvi::UiState;

/// Open settings dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsDialog {
    pub fields: Vec<SettingsFieldSnapshot>,
    pub focused: usize,
    pub dirty: bool,
    /// When true, next Escape will discard changes. Set on first Escape when dirty.
    pub confirm_discard: bool,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum SettingsDialogState {
    #[default]
    Hidden,
    Visible(SettingsDialog),
}

impl UiState for SettingsDialogState {}

impl SettingsDialogState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn dialog(&self) -> Option<&SettingsDialog> {
        match self {
            Self::Visible(dialog) => Some(dialog),
            Self::Hidden => None,
        }
    }
}
