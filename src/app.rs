use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use crate::info::AppInfo;
use crate::state::State as PersistedState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Help,
}

#[derive(Debug, Clone)]
pub struct App {
    pub info: AppInfo,
    pub mode: Mode,
    pub status: String,
    pub show_backend: bool,
    pub should_quit: bool,
    pub tick: u64,
}

impl Default for App {
    fn default() -> Self { Self::with_info(AppInfo::new()) }
}

impl App {
    /// Builds the app and restores persisted preferences.
    pub fn new() -> Self {
        let persisted = PersistedState::load();
        let mut s = Self::with_info(AppInfo::new());
        s.show_backend = persisted.show_backend;
        if persisted.show_help_on_start {
            s.mode = Mode::Help;
        }
        info!(build_date = s.info.build_date(), "status card ready");
        s
    }

    pub fn with_info(info: AppInfo) -> Self {
        Self {
            info,
            mode: Mode::Normal,
            status: String::from("Ready"),
            show_backend: false,
            should_quit: false,
            tick: 0,
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match self.mode {
            Mode::Help => match key.code {
                KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => self.set_mode(Mode::Normal),
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            },
            Mode::Normal => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('?') => self.set_mode(Mode::Help),
                KeyCode::Char('b') => self.toggle_backend(),
                _ => {}
            },
        }
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    fn set_mode(&mut self, mode: Mode) {
        debug!(?mode, "mode change");
        self.mode = mode;
    }

    fn toggle_backend(&mut self) {
        self.show_backend = !self.show_backend;
        self.status = format!("backend panel: {}", if self.show_backend { "on" } else { "off" });
        self.persist_state();
    }

    fn persist_state(&self) {
        let mut s = PersistedState::load();
        s.show_backend = self.show_backend;
        s.save();
    }
}
