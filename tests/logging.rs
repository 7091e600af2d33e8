// Tests for logging setup helpers
use status_board::logging;

#[test]
fn test_explicit_level_filter() {
    let f = logging::build_filter(Some("debug"));
    assert!(f.to_string().contains("debug"));
}

#[test]
fn test_init_to_file_creates_log() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let path = tmp.path().join("nested").join("status-board.log");
    logging::init(logging::LogTarget::File(path.clone()), Some("info")).unwrap();
    tracing::info!("hello from test");
    assert!(path.exists());
}
