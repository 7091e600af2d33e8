use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Clear, Paragraph, Row, Table},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode};
use crate::info::AppInfo;
use crate::service::ROUTES;
use crate::theme::THEME;

pub const CARD_WIDTH: u16 = 48;
// borders + vertical padding + heading + blank + four fields
pub const CARD_HEIGHT: u16 = 10;
const BACKEND_HEIGHT: u16 = 7;
const PATH_COL: u16 = 9;
const MIN_WIDTH: u16 = 40;

pub fn draw(frame: &mut Frame, app: &App) {
    // Layout: [main][status]
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(frame.area());

    draw_main(frame, chunks[0], app);
    draw_status_bar(frame, chunks[1], app);

    match app.mode {
        Mode::Normal => {}
        Mode::Help => draw_help_modal(frame),
    }
}

/// Text of the card's heading line.
pub fn heading_text(info: &AppInfo) -> String {
    info.title().to_string()
}

pub fn card_lines(info: &AppInfo) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(heading_text(info), THEME.heading_style())).centered(),
        Line::from(""),
    ];
    for (label, value) in info.fields() {
        let style = if label == "Status" {
            THEME.status_style(value)
        } else {
            Style::default().fg(THEME.fg)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{label}: "), THEME.label_style()),
            Span::styled(value.to_string(), style),
        ]));
    }
    lines
}

fn draw_main(frame: &mut Frame, area: Rect, app: &App) {
    let needed = CARD_HEIGHT + if app.show_backend { BACKEND_HEIGHT } else { 0 };
    // Minimal size guard: if area too small, show a hint
    if area.width < MIN_WIDTH || area.height < needed {
        let hint = Paragraph::new(format!("Terminal too small. Need at least {}x{}", MIN_WIDTH, needed + 1))
            .style(THEME.warn_style())
            .block(THEME.block("Resize terminal"));
        frame.render_widget(hint, area);
        return;
    }

    let width = if app.show_backend { CARD_WIDTH.max(backend_width()) } else { CARD_WIDTH };
    let stack = centered_rect_fixed(area, width, needed);
    let mut constraints = vec![Constraint::Length(CARD_HEIGHT)];
    if app.show_backend {
        constraints.push(Constraint::Length(BACKEND_HEIGHT));
    }
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(stack);

    let card = Paragraph::new(card_lines(&app.info)).block(THEME.card_block(" Status "));
    frame.render_widget(card, centered_rect_fixed(parts[0], CARD_WIDTH, CARD_HEIGHT));

    if app.show_backend {
        draw_backend(frame, parts[1]);
    }
}

/// Width that fits every route reply on one row: path column, spacing, longest body, borders.
pub fn backend_width() -> u16 {
    let longest = ROUTES
        .iter()
        .map(|(_, body)| UnicodeWidthStr::width(*body))
        .max()
        .unwrap_or(0) as u16;
    PATH_COL + 1 + longest + 2
}

fn draw_backend(frame: &mut Frame, area: Rect) {
    let rows: Vec<Row> = ROUTES
        .iter()
        .map(|(path, body)| Row::new(vec![Cell::from(*path), Cell::from(*body)]))
        .collect();
    let table = Table::new(rows, [Constraint::Length(PATH_COL), Constraint::Min(10)])
        .header(
            Row::new(vec![Cell::from("Path"), Cell::from("Reply")])
                .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(THEME.block("Backend (GET)"));
    frame.render_widget(table, area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let right = "q quit · ? help · b backend";
    let left_w = area.width.saturating_sub(UnicodeWidthStr::width(right) as u16 + 2) as usize;
    let mut left = app.status.clone();
    while UnicodeWidthStr::width(left.as_str()) > left_w {
        left.pop();
    }
    let pad = left_w.saturating_sub(UnicodeWidthStr::width(left.as_str()));
    let line = Line::from(vec![
        Span::raw(left),
        Span::raw(" ".repeat(pad + 2)),
        Span::styled(right, Style::default().add_modifier(Modifier::DIM)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_help_modal(frame: &mut Frame) {
    let area = centered_rect_fixed(frame.area(), 40, 9);
    frame.render_widget(Clear, area);
    let keys = [("q / Esc", "quit"), ("?", "toggle this help"), ("b", "toggle backend panel")];
    let lines: Vec<Line> = keys
        .iter()
        .map(|(k, what)| {
            Line::from(vec![
                Span::styled(format!("{k:<9}"), THEME.label_style()),
                Span::styled(*what, THEME.muted_style()),
            ])
        })
        .collect();
    let help = Paragraph::new(lines)
        .alignment(Alignment::Left)
        .block(THEME.modal_block("Help"));
    frame.render_widget(help, area);
}

// Center a rectangle of fixed width/height (in cells) within r.
pub fn centered_rect_fixed(r: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(r.width);
    let h = height.min(r.height);
    let x = r.x + (r.width.saturating_sub(w)) / 2;
    let y = r.y + (r.height.saturating_sub(h)) / 2;
    Rect {
        x,
        y,
        width: w,
        height: h,
    }
}
