// Integration test for State::load and State::save
// Uses a temporary directory to avoid polluting the user's config.
use status_board::state::{self, State};
use std::env;
use std::fs;

#[test]
fn test_state_load_save_integration() {
    let tmp = tempfile::tempdir().expect("tempdir");
    env::set_var("XDG_CONFIG_HOME", tmp.path());

    // Nothing saved yet
    assert_eq!(State::load(), State::default());

    let s = State {
        show_backend: true,
        show_help_on_start: true,
    };
    s.save();
    assert_eq!(State::load(), s);

    let mut state_path = tmp.path().to_path_buf();
    state_path.push("status-board");
    state_path.push("state.json");
    assert_eq!(state::state_path(), state_path);
    assert!(state_path.exists());

    // Corrupt file falls back to defaults
    fs::write(&state_path, b"not json").unwrap();
    assert_eq!(State::load(), State::default());
}
