use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "status-board", version, about = "Status card for the terminal, with a tiny HTTP backend")]
pub struct Cli {
    #[arg(long, global = true, value_parser = parse_log_filter, help = "Log filter, e.g. debug or status_board=trace (defaults to RUST_LOG, then info)")]
    pub log_level: Option<String>,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Interactive status card (default)
    Tui,
    /// Print the card once and exit
    Render {
        #[arg(long, value_enum, default_value_t = RenderFormat::Text)]
        format: RenderFormat,
        #[arg(long, help = "Build date to show instead of today (YYYY-MM-DD)")]
        date: Option<NaiveDate>,
    },
    /// Serve the fixed backend routes over HTTP
    Serve {
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        #[arg(short, long, default_value_t = 8080)]
        port: u16,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    Text,
    Html,
    Json,
}

impl Cli {
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Tui)
    }
}


/// Rejects filters `EnvFilter` cannot parse instead of silently logging at the default level.
pub fn parse_log_filter(s: &str) -> Result<String, String> {
    EnvFilter::try_new(s)
        .map(|_| s.to_string())
        .map_err(|e| format!("invalid log filter `{s}`: {e}"))
}
