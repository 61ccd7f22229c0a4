//! cpuscope — a terminal CPU information viewer, written in Rust.
//!
//! Features:
//!   - CPU model, brand, core counts, frequency, L3 cache size
//!   - Live per-core usage bars + aggregate meter
//!   - Manual refresh and a 5s auto-refresh toggle
//!   - Plain-text report export
//!   - cpubenchmark.net multithread-rating lookup
//!
//! Keybindings: Press F1 or '?' for help.

use std::io;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use cpuscope::app::App;
use cpuscope::config::Config;
use cpuscope::input;
use cpuscope::refresh::RefreshController;
use cpuscope::system::sampler::{read_static_info, SysinfoProbe};
use cpuscope::ui;

fn main() -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Run the app
    let result = run_app(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Main application loop
fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    let config = Config::load();
    let cpu = read_static_info();

    let (tx, rx) = mpsc::channel();
    let mut ctrl = RefreshController::new(
        Arc::new(SysinfoProbe::new()),
        tx,
        Duration::from_millis(config.sample_interval_ms),
        Duration::from_millis(config.auto_interval_ms),
    );

    let mut app = App::new(cpu, config);

    // First refresh, plus the auto toggle if configured on
    ctrl.refresh_once();
    if app.config.auto_refresh_on_start {
        ctrl.start();
        app.auto_refresh = true;
    }

    loop {
        // Drain completed samples / rating results onto the UI state.
        // Publishes never mutate display state from their own threads.
        while let Ok(ev) = rx.try_recv() {
            app.apply_event(ev);
        }

        // Draw
        terminal.draw(|f| ui::draw(f, &app))?;

        if app.should_quit {
            break;
        }

        // Handle events with short timeout for responsiveness
        let timeout = Duration::from_millis(50);
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle Press; Windows crossterm also fires Release
                    if key.kind == KeyEventKind::Press {
                        input::handle_input(&mut app, &mut ctrl, key);
                        if app.should_quit {
                            break;
                        }
                    }
                }
                Event::Resize(_, _) => {
                    // Handled on next draw
                }
                _ => {}
            }
        }
    }

    ctrl.stop();
    let _ = app.config.save();
    Ok(())
}
