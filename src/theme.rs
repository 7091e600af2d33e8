use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{
        block::{BorderType, Padding},
        Block, Borders,
    },
};

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub warn: Color,
    pub heading: Color,
    pub border: Color,
}

impl Default for Theme {
    fn default() -> Self { THEME }
}

impl Theme {
    pub fn block<'a>(&self, title: impl Into<String>) -> Block<'a> {
        Block::default()
            .title(title.into())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.border))
    }

    pub fn modal_block<'a>(&self, title: impl Into<String>) -> Block<'a> {
        Block::bordered()
            .title(title.into())
            .title_alignment(Alignment::Center)
            .border_type(BorderType::Rounded)
            .padding(Padding::new(2, 2, 1, 1))
            .border_style(Style::default().fg(self.border))
    }

    // The status card: a modal-style block in the accent color
    pub fn card_block<'a>(&self, title: impl Into<String>) -> Block<'a> {
        self.modal_block(title)
            .border_style(Style::default().fg(self.accent))
    }

    pub fn heading_style(&self) -> Style { Style::default().fg(self.heading).add_modifier(Modifier::BOLD) }
    pub fn label_style(&self) -> Style { Style::default().fg(self.fg).add_modifier(Modifier::BOLD) }
    pub fn muted_style(&self) -> Style { Style::default().fg(self.muted) }
    pub fn warn_style(&self) -> Style { Style::default().fg(self.warn) }

    /// RUNNING reads as healthy, anything else as a warning.
    pub fn status_style(&self, status: &str) -> Style {
        if status == crate::info::STATUS {
            Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
        } else {
            self.warn_style().add_modifier(Modifier::BOLD)
        }
    }
}

pub static THEME: Theme = Theme {
    fg: Color::Gray,
    muted: Color::DarkGray,
    accent: Color::Green,
    warn: Color::Yellow,
    heading: Color::White,
    border: Color::Gray,
};
