// Integration test for App::new restoring persisted preferences
use status_board::app::{App, Mode};
use status_board::state::State;
use std::env;

#[test]
fn test_app_opens_help_when_pinned() {
    let tmp = tempfile::tempdir().expect("tempdir");
    env::set_var("XDG_CONFIG_HOME", tmp.path());

    assert_eq!(App::new().mode, Mode::Normal);

    State {
        show_help_on_start: true,
        ..State::default()
    }
    .save();
    let app = App::new();
    assert_eq!(app.mode, Mode::Help);
    assert!(!app.show_backend);
}
