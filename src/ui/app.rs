use crate::config::{ConfigStore, DuelSettingsManager};
use crate::duel::{
    toast_channel, DuelIntent, DuelSession, DuelStateMachine, PlayerSlot, Toast, ToastReceiver,
};
use crate::ui::mvi::Reducer;
use crate::ui::settings::{SettingsDialogState, SettingsIntent, SettingsReducer};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// How long a toast stays on screen before the next one replaces it.
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    machine: DuelStateMachine,
    toasts: ToastReceiver,
    /// Toasts received but not shown yet, oldest first.
    queued_toasts: VecDeque<Toast>,
    active_toast: Option<(Toast, Instant)>,
    settings: DuelSettingsManager,
    settings_dialog: SettingsDialogState,
    config: ConfigStore,
    /// One-line status for config reload results.
    status: Option<String>,
}

impl App {
    /// Build the app from the current config and start the first duel.
    pub fn new(config: ConfigStore) -> Self {
        let (tx, rx) = toast_channel();
        let mut app = Self {
            should_quit: false,
            machine: DuelStateMachine::new(tx),
            toasts: rx,
            queued_toasts: VecDeque::new(),
            active_toast: None,
            settings: DuelSettingsManager::new(),
            settings_dialog: SettingsDialogState::default(),
            config,
            status: None,
        };
        app.apply_config();
        app.machine.reset();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn session(&self) -> &DuelSession {
        self.machine.session()
    }

    pub fn settings_dialog(&self) -> &SettingsDialogState {
        &self.settings_dialog
    }

    pub fn settings(&self) -> &DuelSettingsManager {
        &self.settings
    }

    pub fn active_toast(&self) -> Option<&Toast> {
        self.active_toast.as_ref().map(|(toast, _)| toast)
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn dispatch(&mut self, intent: DuelIntent) {
        self.machine.dispatch(intent);
        self.advance_toasts(Instant::now());
    }

    pub fn on_tick(&mut self) {
        self.advance_toasts(Instant::now());
    }

    /// Expire the visible toast if its time is up, then show the next one.
    pub fn advance_toasts(&mut self, now: Instant) {
        if let Some((_, shown_at)) = &self.active_toast {
            if now.saturating_duration_since(*shown_at) >= TOAST_DURATION {
                self.active_toast = None;
            }
        }
        self.queued_toasts.extend(self.toasts.drain());
        if self.active_toast.is_none() {
            if let Some(toast) = self.queued_toasts.pop_front() {
                self.active_toast = Some((toast, now));
            }
        }
    }

    pub fn open_settings(&mut self) {
        let fields = self.settings.to_snapshots();
        dispatch_mvi!(self, settings_dialog, SettingsReducer, SettingsIntent::Load { fields });
    }

    pub fn on_settings_intent(&mut self, intent: SettingsIntent) {
        dispatch_mvi!(self, settings_dialog, SettingsReducer, intent);
    }

    /// Commit the dialog's values and push them into the duel.
    pub fn save_settings(&mut self) {
        if let Some(dialog) = self.settings_dialog.dialog() {
            self.settings.apply_snapshots(&dialog.fields);
            for intent in self.settings.to_intents() {
                self.machine.dispatch(intent);
            }
            tracing::info!("Settings saved: {:?}", self.settings.to_toml_map());
        }
        dispatch_mvi!(self, settings_dialog, SettingsReducer, SettingsIntent::Close);
    }

    /// Re-read the config file and apply names and settings.
    ///
    /// A failed reload keeps the previous config.
    pub fn reload_config(&mut self) {
        match self.config.reload() {
            Ok(()) => {
                self.apply_config();
                self.status = Some(format!("Reloaded {}", self.config.path().display()));
            }
            Err(err) => {
                tracing::warn!("Config reload failed: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    fn apply_config(&mut self) {
        let config = self.config.get();
        self.settings.load_from_toml(&config.settings);
        for (slot, name) in [
            (PlayerSlot::PlayerOne, config.duelists.player_one),
            (PlayerSlot::PlayerTwo, config.duelists.player_two),
        ] {
            self.machine.dispatch(DuelIntent::RenameDuelist { slot, name });
        }
        for intent in self.settings.to_intents() {
            self.machine.dispatch(intent);
        }
    }
}
