// Tests for theme colors and styles
use ratatui::{backend::TestBackend, style::{Color, Modifier}, Terminal};
use status_board::theme::{Theme, THEME};

#[test]
fn test_theme_default_matches_static() {
    let t = Theme::default();
    assert_eq!(t.accent, THEME.accent);
    assert_eq!(t.warn, Color::Yellow);
}

#[test]
fn test_status_style_running_uses_accent() {
    let s = THEME.status_style("RUNNING");
    assert_eq!(s.fg, Some(THEME.accent));
    assert!(s.add_modifier.contains(Modifier::BOLD));
}

#[test]
fn test_status_style_other_uses_warn() {
    assert_eq!(THEME.status_style("DOWN").fg, Some(THEME.warn));
}

#[test]
fn test_heading_style_bold() {
    assert!(THEME.heading_style().add_modifier.contains(Modifier::BOLD));
}

#[test]
fn test_card_block_is_rounded_with_accent_border() {
    let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
    terminal
        .draw(|f| f.render_widget(THEME.card_block("Card"), f.area()))
        .unwrap();
    let buffer = terminal.backend().buffer();
    let corner = &buffer.content()[0];
    assert_eq!(corner.symbol(), "╭");
    assert_eq!(corner.fg, THEME.accent);
}
