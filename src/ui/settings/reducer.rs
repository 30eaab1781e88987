use crate::ui::mvi::Reducer;
use crate::ui::settings::intent::SettingsIntent;
use crate::ui::settings::state::{SettingsDialog, SettingsDialogState};

pub struct SettingsReducer;

impl Reducer for SettingsReducer {
    type State = SettingsDialogState;
    type Intent = SettingsIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let (mut dialog, intent) = match (state, intent) {
            (_, SettingsIntent::Load { fields }) => {
                return SettingsDialogState::Visible(SettingsDialog {
                    fields,
                    focused: 0,
                    dirty: false,
                    confirm_discard: false,
                });
            }
            (_, SettingsIntent::Close) | (SettingsDialogState::Hidden, _) => {
                return SettingsDialogState::Hidden;
            }
            (SettingsDialogState::Visible(dialog), intent) => (dialog, intent),
        };

        match intent {
            SettingsIntent::RequestClose => {
                if dialog.dirty && !dialog.confirm_discard {
                    SettingsDialogState::Visible(SettingsDialog {
                        confirm_discard: true,
                        ..dialog
                    })
                } else {
                    SettingsDialogState::Hidden
                }
            }
            SettingsIntent::MoveUp => {
                let focused = if dialog.focused == 0 {
                    dialog.fields.len().saturating_sub(1)
                } else {
                    dialog.focused - 1
                };
                refocus(dialog, focused)
            }
            SettingsIntent::MoveDown => {
                let focused = if dialog.focused + 1 >= dialog.fields.len() {
                    0
                } else {
                    dialog.focused + 1
                };
                refocus(dialog, focused)
            }
            SettingsIntent::Toggle => {
                if let Some(field) = dialog.fields.get_mut(dialog.focused) {
                    field.value = !field.value;
                }
                SettingsDialogState::Visible(SettingsDialog {
                    dirty: true,
                    confirm_discard: false,
                    ..dialog
                })
            }
            SettingsIntent::Load { .. } | SettingsIntent::Close => {
                SettingsDialogState::Visible(dialog)
            }
        }
    }
}

fn refocus(dialog: SettingsDialog, focused: usize) -> SettingsDialogState {
    SettingsDialogState::Visible(SettingsDialog {
        focused,
        confirm_discard: false,
        ..dialog
    })
}
