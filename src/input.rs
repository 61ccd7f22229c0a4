use std::time::Duration;

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppMode, StatusLevel};
use crate::refresh::{AppEvent, RefreshController};
use crate::report;
use crate::system::rating;

/// Blocking window for the quick sample taken when saving a report
const REPORT_SAMPLE: Duration = Duration::from_millis(100);

/// Handle a single key input event.
pub fn handle_input(app: &mut App, ctrl: &mut RefreshController, key: KeyEvent) {
    match app.mode {
        AppMode::Normal => handle_normal_mode(app, ctrl, key),
        AppMode::Help => handle_popup_mode(app, key),
        AppMode::Message => handle_popup_mode(app, key),
    }
}

// ── Normal mode ─────────────────────────────────────────────────────────

fn handle_normal_mode(app: &mut App, ctrl: &mut RefreshController, key: KeyEvent) {
    match key.code {
        // ── Quit ──
        KeyCode::F(10) | KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }

        // ── Help ──
        KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('h') => {
            app.mode = AppMode::Help;
        }

        // ── F5 / r — manual refresh, one sample regardless of auto state ──
        KeyCode::F(5) | KeyCode::Char('r') => {
            app.set_status(StatusLevel::Busy, "Updating CPU information...");
            ctrl.refresh_once();
        }

        // ── F6 / a — toggle auto-refresh ──
        KeyCode::F(6) | KeyCode::Char('a') => toggle_auto_refresh(app, ctrl),

        // ── F7 / s — save text report ──
        KeyCode::F(7) | KeyCode::Char('s') => save_report(app, ctrl),

        // ── F8 / b — fetch benchmark rating ──
        KeyCode::F(8) | KeyCode::Char('b') => fetch_rating(app, ctrl),

        // ── About ──
        KeyCode::Char('i') => app.open_about(),

        // ── Cycle color scheme ──
        KeyCode::Char('c') => app.cycle_color_scheme(),

        _ => {}
    }
}

// ── Popup modes (Help, Message) ─────────────────────────────────────────

fn handle_popup_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::F(1) | KeyCode::Char('q') => {
            app.mode = AppMode::Normal;
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        _ => {}
    }
}

// ── Actions ─────────────────────────────────────────────────────────────

fn toggle_auto_refresh(app: &mut App, ctrl: &mut RefreshController) {
    if ctrl.is_running() {
        ctrl.stop();
        app.auto_refresh = false;
        app.set_status(StatusLevel::Error, "Auto-refresh stopped.");
    } else {
        ctrl.start();
        app.auto_refresh = true;
        app.set_status(StatusLevel::Info, "Auto-refresh enabled.");
    }
}

/// Quick sample, render, write. Blocks the render thread for ~100 ms,
/// same as the original's save path.
fn save_report(app: &mut App, ctrl: &RefreshController) {
    let sample = ctrl.probe().sample(REPORT_SAMPLE);
    let content = report::build_report(&app.cpu, &sample);
    let path = app.config.report_path.clone();

    match report::save_report(&path, &content) {
        Ok(()) => app.set_status(
            StatusLevel::Ok,
            format!(
                "Report saved to {} at {}",
                path.display(),
                Local::now().format("%H:%M:%S")
            ),
        ),
        Err(e) => app.set_status(StatusLevel::Error, e),
    }
}

/// Rating lookup runs on its own thread and publishes over the same
/// channel as samples; a second request while one is on the wire is a
/// no-op.
fn fetch_rating(app: &mut App, ctrl: &RefreshController) {
    if app.rating_in_flight {
        return;
    }
    app.rating_in_flight = true;
    app.set_status(StatusLevel::Busy, "Fetching benchmark rating...");

    let model = app.cpu.model.clone();
    let tx = ctrl.sender();
    std::thread::spawn(move || {
        let result = rating::fetch_multithread_rating(&model);
        let _ = tx.send(AppEvent::Rating(result));
    });
}
