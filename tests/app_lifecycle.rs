use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use duel_companion::config::{Config, ConfigStore, SettingId};
use duel_companion::duel::{PlayerSlot, STARTING_LIFE_POINTS};
use duel_companion::ui::app::{App, TOAST_DURATION};
use duel_companion::ui::input::handle_key;
use std::fs;
use std::time::Instant;
use tempfile::TempDir;

fn app_with(content: Option<&str>) -> (TempDir, App) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("config.toml");
    if let Some(content) = content {
        fs::write(&path, content).expect("Failed to write config");
    }
    let config = Config::load_from(&path).expect("valid config");
    (temp_dir, App::new(ConfigStore::new(config, path)))
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_keys(app: &mut App, keys: &str) {
    for ch in keys.chars() {
        press(app, KeyCode::Char(ch));
    }
}

#[test]
fn app_starts_a_duel_with_configured_names() {
    let (_dir, app) = app_with(Some(
        "[duelists]\nplayer_one = \"Yugi\"\nplayer_two = \"Kaiba\"\n[settings]\nmock = true\n",
    ));
    let session = app.session();
    assert_eq!(session.duelist(PlayerSlot::PlayerOne).name, "Yugi");
    assert_eq!(session.duelist(PlayerSlot::PlayerTwo).name, "Kaiba");
    assert_eq!(session.duelist(PlayerSlot::PlayerOne).life_points, STARTING_LIFE_POINTS);
    assert!(session.mock_enabled);
    assert!(!session.snark_enabled);
}

#[test]
fn keypad_keys_drive_the_duel() {
    let (_dir, mut app) = app_with(None);
    type_keys(&mut app, "15h");
    assert_eq!(app.session().pending_entry, 1500);
    type_keys(&mut app, "z");
    assert_eq!(app.session().duelist(PlayerSlot::PlayerOne).life_points, 6500);
    assert_eq!(app.session().pending_entry, 0);

    type_keys(&mut app, "3k");
    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.session().pending_entry, 0);
}

#[test]
fn key_release_is_ignored() {
    let (_dir, mut app) = app_with(None);
    let mut key = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::NONE);
    key.kind = KeyEventKind::Release;
    handle_key(&mut app, key);
    assert_eq!(app.session().pending_entry, 0);
}

#[test]
fn loss_toast_is_shown_then_expires() {
    let (_dir, mut app) = app_with(Some("[settings]\nmock = true\n"));
    type_keys(&mut app, "9k");
    type_keys(&mut app, "m");

    assert!(app.session().is_locked);
    let toast = app.active_toast().expect("loss toast");
    assert_eq!(
        toast.message,
        "Womp, womp! Better luck next time, Player 2. Congrats Player 1!"
    );

    app.advance_toasts(Instant::now() + TOAST_DURATION);
    assert!(app.active_toast().is_none());
}

#[test]
fn toasts_are_shown_one_at_a_time_in_order() {
    let (_dir, mut app) = app_with(None);
    type_keys(&mut app, "df");

    let first = app.active_toast().expect("dice toast").message.clone();
    assert!(first.starts_with("Dice Roll: "));

    app.advance_toasts(Instant::now() + TOAST_DURATION);
    let second = app.active_toast().expect("coin toast").message.clone();
    assert!(second.starts_with("Coin Flip: "));
}

#[test]
fn saved_settings_reach_the_duel() {
    let (_dir, mut app) = app_with(None);
    press(&mut app, KeyCode::Char('s'));
    assert!(app.settings_dialog().is_visible());

    // Digits are not keypad input while the dialog is open
    type_keys(&mut app, "5");
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Enter);

    assert!(!app.settings_dialog().is_visible());
    assert_eq!(app.session().pending_entry, 0);
    assert!(app.session().snark_enabled);
    assert!(app.session().mock_enabled);
}

#[test]
fn discarded_settings_do_not_reach_the_duel() {
    let (_dir, mut app) = app_with(None);
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char(' '));
    press(&mut app, KeyCode::Esc);
    assert!(app.settings_dialog().is_visible());
    press(&mut app, KeyCode::Esc);

    assert!(!app.settings_dialog().is_visible());
    assert!(!app.session().snark_enabled);
    assert!(!app.should_quit());
}

#[test]
fn reload_applies_new_names_and_reports_errors() {
    let (dir, mut app) = app_with(Some("[duelists]\nplayer_one = \"Yugi\"\n"));
    let path = dir.path().join("config.toml");

    fs::write(&path, "[duelists]\nplayer_one = \"Mai\"\n").unwrap();
    press(&mut app, KeyCode::F(5));
    assert_eq!(app.session().duelist(PlayerSlot::PlayerOne).name, "Mai");
    assert!(app.status().expect("status").starts_with("Reloaded"));

    fs::write(&path, "[duelists]\nplayer_one = \"\"\n").unwrap();
    press(&mut app, KeyCode::F(5));
    assert_eq!(app.session().duelist(PlayerSlot::PlayerOne).name, "Mai");
    assert!(app.status().expect("status").contains("validation"));
}

#[test]
fn reload_restores_defaults_for_removed_settings() {
    let (dir, mut app) = app_with(Some("[settings]\nmock = true\nsnark = true\n"));
    let path = dir.path().join("config.toml");
    assert!(app.session().mock_enabled);

    fs::write(&path, "[settings]\nsnark = true\n").unwrap();
    press(&mut app, KeyCode::F(5));
    assert!(!app.session().mock_enabled);
    assert!(app.session().snark_enabled);
    assert!(!app.settings().get(SettingId::Mock));
}

#[test]
fn quit_keys_request_quit() {
    let (_dir, mut app) = app_with(None);
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
