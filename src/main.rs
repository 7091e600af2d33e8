use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use tracing::info;

use status_board::cli::{Cli, Commands, RenderFormat};
use status_board::info::AppInfo;
use status_board::logging::{self, LogTarget};
use status_board::{app, markup, service, ui};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = cli.log_level.as_deref();

    match cli.command() {
        Commands::Tui => {
            logging::init(LogTarget::File(logging::log_file_path()), level)?;
            run_tui()
        }
        Commands::Render { format, date } => {
            logging::init(LogTarget::Stderr, level)?;
            let info = date.map(AppInfo::with_build_date).unwrap_or_default();
            let out = match format {
                RenderFormat::Text => markup::render_text(&info),
                RenderFormat::Html => markup::render_html(&info),
                RenderFormat::Json => serde_json::to_string_pretty(&info)? + "\n",
            };
            print!("{out}");
            Ok(())
        }
        Commands::Serve { host, port } => {
            logging::init(LogTarget::Stderr, level)?;
            service::serve(&format!("{host}:{port}"))
        }
    }
}

fn run_tui() -> Result<()> {
    // Ensure terminal is restored even on panic
    let prev_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        prev_hook(info);
    }));

    // setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal);

    // restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }
    info!("status card closed");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let mut app = app::App::new();
    terminal.draw(|f| ui::draw(f, &app))?;

    while !app.should_quit {
        // poll input with a short timeout to generate UI ticks
        if event::poll(std::time::Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.on_key(key),
                Event::Resize(_, _) => { /* will redraw immediately below */ }
                _ => {}
            }
        } else {
            // no input -> tick
            app.on_tick();
        }

        // draw after handling input/resize for immediate visual update
        terminal.draw(|f| ui::draw(f, &app))?;
    }

    Ok(())
}
