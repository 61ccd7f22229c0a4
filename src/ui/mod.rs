pub mod core_grid;
pub mod footer;
pub mod header;
pub mod help;
pub mod popup;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, AppMode};

/// Title + two info lines + overall meter + status line
pub const HEADER_HEIGHT: u16 = 5;

/// Render the complete UI
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // CPU facts + meter + status
            Constraint::Min(3),                // per-core bars
            Constraint::Length(1),             // footer (F-key bar)
        ])
        .split(size);

    header::draw_header(f, app, chunks[0]);
    core_grid::draw_core_grid(f, app, chunks[1]);
    footer::draw_footer(f, app, chunks[2]);

    // Overlay popups
    match app.mode {
        AppMode::Help => help::draw_help(f, app),
        AppMode::Message => popup::draw_message(f, app),
        AppMode::Normal => {}
    }
}

/// Create a centered rectangle with percentage width/height
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
