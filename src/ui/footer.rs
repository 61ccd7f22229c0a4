use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, AppMode};

/// F-key definitions: (key_label, description)
const FKEYS_NORMAL: &[(&str, &str)] = &[
    ("F1", "Help   "),
    ("F5", "Refresh"),
    ("F6", "Auto   "),
    ("F7", "Report "),
    ("F8", "Rating "),
    ("F10", "Quit  "),
];

const FKEYS_POPUP: &[(&str, &str)] = &[
    ("Esc", "Close    "),
    ("", ""),
    ("", ""),
    ("", ""),
    ("", ""),
    ("F10", "Quit  "),
];

/// Draw the bottom F-key bar (htop styling: key in black-on-cyan,
/// description in light-on-dark). The Auto cell reflects the toggle.
pub fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    // Full-width dark background first
    let bg_fill = " ".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(bg_fill).style(Style::default().bg(Color::Indexed(234))),
        area,
    );

    let fkeys = match app.mode {
        AppMode::Normal => FKEYS_NORMAL,
        _ => FKEYS_POPUP,
    };

    let mut spans: Vec<Span> = Vec::new();

    for (key, desc) in fkeys {
        if key.is_empty() {
            continue;
        }
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        let desc = if *key == "F6" && app.auto_refresh {
            "Auto * ".to_string()
        } else {
            desc.to_string()
        };
        spans.push(Span::styled(
            desc,
            Style::default()
                .fg(Color::Indexed(252))
                .bg(Color::Indexed(234)),
        ));
    }

    let line = Line::from(spans);
    f.render_widget(Paragraph::new(line), area);
}
