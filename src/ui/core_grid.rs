use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::App;
use crate::color_scheme::ColorScheme;

/// Draw the per-core usage grid, htop-style, two columns:
///
/// LEFT COLUMN (50%):            RIGHT COLUMN (50%):
///    0 [||||     25.3%]            4 [||||||     42.1%]
///    1 [||||||   43.2%]            5 [||||       30.0%]
///    2 [|||      18.0%]            6 [|||||      35.2%]
///    3 [|||||    33.0%]            7 [|||        22.1%]
pub fn draw_core_grid(f: &mut Frame, app: &App, area: Rect) {
    let sample = app.display_sample();
    let core_count = sample.per_core.len();
    if core_count == 0 {
        return;
    }

    let cs = &app.color_scheme;
    let half = (core_count + 1) / 2;

    // Split into left and right panels (50/50)
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_column(f, &sample.per_core[..half], 0, panels[0], cs);
    draw_column(f, &sample.per_core[half..], half, panels[1], cs);
}

fn draw_column(f: &mut Frame, usages: &[f32], first_id: usize, panel: Rect, cs: &ColorScheme) {
    if usages.is_empty() {
        return;
    }
    let row_constraints: Vec<Constraint> =
        (0..usages.len()).map(|_| Constraint::Length(1)).collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(row_constraints)
        .split(panel);

    for (i, &usage) in usages.iter().enumerate() {
        if i >= rows.len() {
            break;
        }
        draw_core_bar(f, first_id + i, usage, rows[i], cs);
    }
}

/// Draw a single core usage bar: `  0 [||||||        42.0%]`
fn draw_core_bar(f: &mut Frame, id: usize, usage: f32, area: Rect, cs: &ColorScheme) {
    let label = format!("{:>3}", id);
    let pct_label = format!("{:>5.1}%", usage);

    let bar_width = area.width as usize;
    let prefix_len = label.len() + 1;
    let suffix_len = pct_label.len();
    let bracket_len = 2;
    let available = bar_width.saturating_sub(prefix_len + suffix_len + bracket_len);

    let filled = ((usage as f64 / 100.0) * available as f64) as usize;
    let filled = filled.min(available);
    let empty = available.saturating_sub(filled);

    let fill_color = if usage >= 80.0 { cs.bar_high } else { cs.bar_normal };

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", label),
            Style::default().fg(cs.label).add_modifier(Modifier::BOLD),
        ),
        Span::styled("[", Style::default().fg(cs.label)),
        Span::styled("|".repeat(filled), Style::default().fg(fill_color)),
        Span::styled(" ".repeat(empty), Style::default().fg(cs.bar_bg)),
        Span::styled("]", Style::default().fg(cs.label)),
        Span::styled(pct_label, Style::default().fg(cs.label)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
