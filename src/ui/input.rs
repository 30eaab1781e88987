use crate::duel::{DuelIntent, LifePointChange, Multiplier, PlayerSlot};
use crate::ui::app::App;
use crate::ui::settings::SettingsIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

/// What a key means on the duel screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuelKey {
    Duel(DuelIntent),
    OpenSettings,
    ReloadConfig,
    Quit,
}

/// What a key means while the settings dialog is open.
#[derive(Debug, Clone)]
pub enum SettingsKey {
    Dialog(SettingsIntent),
    Save,
}

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if app.settings_dialog().is_visible() {
        match settings_key(key) {
            Some(SettingsKey::Dialog(intent)) => app.on_settings_intent(intent),
            Some(SettingsKey::Save) => app.save_settings(),
            None => {}
        }
        return;
    }

    match duel_key(key) {
        Some(DuelKey::Duel(intent)) => app.dispatch(intent),
        Some(DuelKey::OpenSettings) => app.open_settings(),
        Some(DuelKey::ReloadConfig) => app.reload_config(),
        Some(DuelKey::Quit) => app.request_quit(),
        None => {}
    }
}

pub fn duel_key(key: KeyEvent) -> Option<DuelKey> {
    let modify = |slot, change| DuelKey::Duel(DuelIntent::ModifyLifePoints { slot, change });

    let action = match key.code {
        KeyCode::Char(ch @ '0'..='9') => {
            DuelKey::Duel(DuelIntent::AppendDigit(ch as u8 - b'0'))
        }
        KeyCode::Char('t') => DuelKey::Duel(DuelIntent::ApplyMultiplier(Multiplier::Ten)),
        KeyCode::Char('h') => DuelKey::Duel(DuelIntent::ApplyMultiplier(Multiplier::Hundred)),
        KeyCode::Char('k') => DuelKey::Duel(DuelIntent::ApplyMultiplier(Multiplier::Thousand)),
        KeyCode::Char('c') | KeyCode::Backspace => DuelKey::Duel(DuelIntent::ClearPendingEntry),
        KeyCode::Char('a') => modify(PlayerSlot::PlayerOne, LifePointChange::Add),
        KeyCode::Char('z') => modify(PlayerSlot::PlayerOne, LifePointChange::Subtract),
        KeyCode::Char('l') => modify(PlayerSlot::PlayerTwo, LifePointChange::Add),
        KeyCode::Char('m') => modify(PlayerSlot::PlayerTwo, LifePointChange::Subtract),
        KeyCode::Char('r') => DuelKey::Duel(DuelIntent::Reset),
        KeyCode::Char('d') => DuelKey::Duel(DuelIntent::RollDice),
        KeyCode::Char('f') => DuelKey::Duel(DuelIntent::FlipCoin),
        KeyCode::Char('s') => DuelKey::OpenSettings,
        KeyCode::F(5) => DuelKey::ReloadConfig,
        KeyCode::Char('q') | KeyCode::Esc => DuelKey::Quit,
        _ => return None,
    };
    Some(action)
}

pub fn settings_key(key: KeyEvent) -> Option<SettingsKey> {
    let action = match key.code {
        KeyCode::Up | KeyCode::Char('k') => SettingsKey::Dialog(SettingsIntent::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => SettingsKey::Dialog(SettingsIntent::MoveDown),
        KeyCode::Char(' ') => SettingsKey::Dialog(SettingsIntent::Toggle),
        KeyCode::Esc => SettingsKey::Dialog(SettingsIntent::RequestClose),
        KeyCode::Enter => SettingsKey::Save,
        _ => return None,
    };
    Some(action)
}
