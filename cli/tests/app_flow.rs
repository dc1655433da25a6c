//! Drives the App with key events against a mocked soundbar
//!
//! Verifies that key presses reach the device, that the store follows the
//! device snapshot and that a failed client build leaves the app on the
//! error view.

use std::sync::Arc;
use std::time::Duration;

use cli::app::App;
use cli::state::reducers::AppAction;
use cli::state::store::Store;
use cli::views::ViewType;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use mockall::predicate::eq;
use ratatui::{backend::TestBackend, Terminal};
use soundbar::mock::{MockSoundbar, MockSoundbarBuilder};
use soundbar::{DeviceClient, DeviceSnapshot, PowerState};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn app_with(device: MockSoundbar) -> (App, Arc<Store>) {
    let store = Arc::new(Store::new());
    store.dispatch(AppAction::SetDevice {
        name: "Den".to_string(),
        endpoint: "10.0.0.7:56001".to_string(),
    });
    let device: Arc<dyn DeviceClient> = Arc::new(device);
    let app = App::new(store.clone(), Some(device), Duration::from_secs(10));
    (app, store)
}

fn screen(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 16)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_first_poll_switches_to_control_view() {
    let snapshot = DeviceSnapshot {
        power: PowerState::On,
        volume: Some(0.25),
        muted: Some(false),
        source: Some("hdmi1".to_string()),
        ..DeviceSnapshot::default()
    };
    let (mut app, store) = app_with(MockSoundbarBuilder::new().snapshot(snapshot.clone()).build());

    assert!(screen(&mut app).contains("Connecting to 10.0.0.7:56001..."));

    app.refresh();
    app.settle().await;

    assert_eq!(store.with_state(|state| state.view), ViewType::Control);
    assert_eq!(store.with_state(|state| state.snapshot.clone()), snapshot);
    let rendered = screen(&mut app);
    assert!(rendered.contains("25%"));
    assert!(rendered.contains("hdmi1 (active)"));
}

#[tokio::test]
async fn test_mute_key_reaches_device() {
    let mut device = MockSoundbarBuilder::new().build();
    device.expect_set_mute().with(eq(true)).times(1).return_const(());
    let (mut app, store) = app_with(device);
    app.refresh();
    app.settle().await;

    app.handle_key(key(KeyCode::Char('m')));
    // The call runs in the background; nothing is reported until it finishes
    assert_eq!(store.with_state(|state| state.status_message.clone()), "");

    app.settle().await;

    assert_eq!(store.with_state(|state| state.status_message.clone()), "Muted");
}

#[tokio::test]
async fn test_enter_selects_highlighted_source() {
    let mut device = MockSoundbarBuilder::new().build();
    device
        .expect_select_source()
        .withf(|source| source.to_string() == "hdmi2")
        .times(1)
        .return_const(());
    let (mut app, store) = app_with(device);
    app.refresh();
    app.settle().await;

    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Enter));
    app.settle().await;

    assert_eq!(store.with_state(|state| state.status_message.clone()), "Source: hdmi2");
}

#[tokio::test]
async fn test_volume_keys_step_the_device() {
    let mut device = MockSoundbarBuilder::new().build();
    device.expect_volume_up().times(2).return_const(());
    device.expect_volume_down().times(1).return_const(());
    let (mut app, _store) = app_with(device);
    app.refresh();
    app.settle().await;

    app.handle_key(key(KeyCode::Right));
    app.handle_key(key(KeyCode::Right));
    app.handle_key(key(KeyCode::Left));
    app.settle().await;
}

#[tokio::test]
async fn test_keys_are_ignored_before_first_poll() {
    let mut device = MockSoundbarBuilder::new().build();
    device.expect_set_mute().times(0);
    let (mut app, _store) = app_with(device);

    app.handle_key(key(KeyCode::Char('m')));
    app.settle().await;

    assert!(!app.should_exit());
}

#[tokio::test]
async fn test_q_quits() {
    let (mut app, _store) = app_with(MockSoundbarBuilder::new().build());

    app.handle_key(key(KeyCode::Char('q')));

    assert!(app.should_exit());
}

#[tokio::test]
async fn test_missing_device_shows_error() {
    let store = Arc::new(Store::new());
    store.dispatch(AppAction::SetError("Invalid configuration: host is empty".to_string()));
    let mut app = App::new(store.clone(), None, Duration::from_secs(10));

    app.refresh();
    app.settle().await;
    app.handle_key(key(KeyCode::Char('r')));
    app.settle().await;

    assert_eq!(store.with_state(|state| state.view), ViewType::Error);
    assert!(screen(&mut app).contains("Invalid configuration: host is empty"));
}

#[tokio::test]
async fn test_refresh_does_not_overlap_a_running_poll() {
    let mut device = MockSoundbarBuilder::new().build();
    device.checkpoint();
    device.expect_source_list().returning(|| soundbar::Source::ALL.to_vec());
    device.expect_poll().times(1).return_const(DeviceSnapshot::default());
    let (mut app, store) = app_with(device);

    app.refresh();
    app.refresh();
    app.settle().await;

    assert_eq!(store.with_state(|state| state.view), ViewType::Control);
}

#[tokio::test]
async fn test_refresh_runs_again_after_poll_finishes() {
    let mut device = MockSoundbarBuilder::new().build();
    device.checkpoint();
    device.expect_source_list().returning(|| soundbar::Source::ALL.to_vec());
    device.expect_poll().times(2).return_const(DeviceSnapshot::default());
    let (mut app, _store) = app_with(device);

    app.refresh();
    app.settle().await;
    app.refresh();
    app.settle().await;
}
