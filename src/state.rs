use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, warn};

/// UI preferences persisted between runs. The card's values are never stored.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct State {
    pub show_backend: bool,
    pub show_help_on_start: bool,
}

pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let mut p = PathBuf::from(xdg);
        p.push("status-board");
        return p;
    }
    if let Ok(home) = std::env::var("HOME") {
        let mut p = PathBuf::from(home);
        p.push(".config");
        p.push("status-board");
        return p;
    }
    // fallback: current directory
    PathBuf::from(".status-board")
}

pub fn state_path() -> PathBuf {
    let mut p = config_dir();
    p.push("state.json");
    p
}

impl State {
    pub fn load() -> Self {
        let path = state_path();
        match fs::read(&path) {
            Ok(data) => match serde_json::from_slice::<State>(&data) {
                Ok(s) => return s,
                Err(e) => warn!(path = %path.display(), error = %e, "ignoring unreadable state file"),
            },
            Err(_) => debug!(path = %path.display(), "no state file, using defaults"),
        }
        State::default()
    }

    /// Best effort: a failed write is logged, never returned.
    pub fn save(&self) {
        let dir = config_dir();
        let _ = fs::create_dir_all(&dir);
        let path = state_path();
        let written = serde_json::to_vec_pretty(self)
            .map_err(anyhow::Error::from)
            .and_then(|json| {
                let mut f = fs::File::create(&path)?;
                f.write_all(&json)?;
                Ok(())
            });
        match written {
            Ok(()) => debug!(path = %path.display(), "saved state"),
            Err(e) => warn!(path = %path.display(), error = %e, "failed to save state"),
        }
    }
}
