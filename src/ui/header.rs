use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::app::{App, StatusLevel};

/// Draw the header block:
///
///   CPU: AMD Ryzen 7 5800X 8-Core Processor
///   Brand: AMD    Cores: 8 physical / 16 logical
///   Frequency: 3800 MHz (3.80 GHz)    L3 Cache: 32 MB
///   CPU[|||||||||                            34.2%]
///   CPU information updated!
pub fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let cs = &app.color_scheme;

    // Title line, truncated to the panel width
    let title = truncate_to_width(
        &format!("CPU: {}", app.cpu.model),
        area.width.saturating_sub(1) as usize,
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            title,
            Style::default().fg(cs.title).add_modifier(Modifier::BOLD),
        ))),
        rows[0],
    );

    // Info lines
    let info_style = Style::default().fg(cs.info);
    let line1 = format!(
        "Brand: {}    Cores: {} physical / {} logical",
        app.cpu.brand.name(),
        app.cpu.physical_cores,
        app.cpu.logical_cores
    );
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(line1, info_style))),
        rows[1],
    );

    let line2 = format!("{}    {}", app.cpu.frequency_line(), app.cpu.cache_line());
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(line2, info_style))),
        rows[2],
    );

    draw_overall_bar(f, app, rows[3]);
    draw_status_line(f, app, rows[4]);
}

/// Aggregate usage meter: CPU[|||||      34.2%]
fn draw_overall_bar(f: &mut Frame, app: &App, area: Rect) {
    let cs = &app.color_scheme;
    let usage = app.display_sample().aggregate;

    let label = "CPU";
    let pct_label = format!("{:>5.1}%", usage);
    let bar_width = area.width as usize;
    let bracket_len = 2;
    let available = bar_width.saturating_sub(label.len() + pct_label.len() + bracket_len);

    let filled = ((usage as f64 / 100.0) * available as f64) as usize;
    let filled = filled.min(available);
    let empty = available.saturating_sub(filled);

    let fill_color = if usage >= 80.0 { cs.bar_high } else { cs.bar_normal };

    let line = Line::from(vec![
        Span::styled(
            label,
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

fn draw_status_line(f: &mut Frame, app: &App, area: Rect) {
    let cs = &app.color_scheme;
    let color = match app.status_level {
        StatusLevel::Info => cs.status_info,
        StatusLevel::Busy => cs.status_busy,
        StatusLevel::Ok => cs.status_ok,
        StatusLevel::Error => cs.status_error,
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            app.status.clone(),
            Style::default().fg(color),
        ))),
        area,
    );
}

/// Cut a string to at most `max` display columns
fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}
