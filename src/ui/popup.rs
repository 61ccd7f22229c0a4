use ratatui::layout::Alignment;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::ui::centered_rect;

/// Modal text popup: About box and the benchmark-rating result
pub fn draw_message(f: &mut Frame, app: &App) {
    let cs = &app.color_scheme;
    let area = centered_rect(55, 40, f.area());
    f.render_widget(Clear, area);

    let mut lines: Vec<Line> = app.message_body.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Press Esc or Enter to close ",
        Style::default().fg(cs.info),
    )));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(app.message_title.clone())
                .title_alignment(Alignment::Center)
                .border_style(Style::default().fg(cs.popup_border)),
        )
        .style(Style::default().fg(cs.popup_text))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}
