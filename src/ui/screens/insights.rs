use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::models::Tone;
use crate::ui::app::App;
use crate::ui::theme;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " ⚠ Smart Alerts ",
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            " AI-powered spending insights and warnings ",
            theme::dim_style(),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.data.insights.is_empty() {
        f.render_widget(
            Paragraph::new(Line::from(Span::styled("Nothing to report", theme::dim_style())))
                .centered(),
            inner,
        );
        return;
    }

    let mut constraints: Vec<Constraint> =
        app.data.insights.iter().map(|_| Constraint::Length(4)).collect();
    constraints.push(Constraint::Min(0));
    let cards = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (insight, card) in app.data.insights.iter().zip(cards.iter()) {
        let color = theme::color(insight.tone.token());
        let icon = match insight.tone {
            Tone::Warning => "!",
            Tone::Success => "▲",
            Tone::Info => "i",
        };
        let body = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(format!("{icon} "), Style::default().fg(color)),
                Span::styled(
                    insight.title.as_str(),
                    theme::normal_style().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(insight.detail.as_str(), theme::dim_style())),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
        f.render_widget(body, *card);
    }
}
