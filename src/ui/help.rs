use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::centered_rect;

/// Draw the Help popup (F1)
pub fn draw_help(f: &mut Frame, app: &App) {
    let cs = &app.color_scheme;
    let area = centered_rect(60, 60, f.area());
    f.render_widget(Clear, area);

    let heading = Style::default().add_modifier(Modifier::BOLD).fg(cs.label);
    let help_text = vec![
        Line::from(Span::styled(
            " cpuscope - terminal CPU information viewer ",
            Style::default().fg(cs.label).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(" Refresh ", heading)),
        Line::from("  F5/r        Refresh CPU usage once"),
        Line::from("  F6/a        Toggle auto-refresh (5s)"),
        Line::from(""),
        Line::from(Span::styled(" Actions ", heading)),
        Line::from("  F7/s        Save text report"),
        Line::from("  F8/b        Fetch cpubenchmark.net rating"),
        Line::from("  c           Cycle color scheme"),
        Line::from("  i           About"),
        Line::from(""),
        Line::from(Span::styled(" General ", heading)),
        Line::from("  F1/h/?      Show this help"),
        Line::from("  F10/q       Quit cpuscope"),
        Line::from("  Ctrl+C      Quit"),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc or F1 to close ",
            Style::default().fg(cs.info),
        )),
    ];

    let paragraph = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(cs.popup_border)),
        )
        .style(Style::default().fg(cs.popup_text))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
