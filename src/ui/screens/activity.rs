use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table},
    Frame,
};

use crate::metrics;
use crate::models::Goal;
use crate::ui::app::App;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_signed_amount, goal_caption, truncate};

/// Lines per goal: header, gauge, caption, spacer.
const GOAL_HEIGHT: u16 = 4;

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_goals(f, chunks[0], app);
    render_transactions(f, chunks[1], app);
}

fn section_block(title: &'static str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn render_goals(f: &mut Frame, area: Rect, app: &App) {
    let block = section_block("Financial Goals").title_bottom(Span::styled(
        " Track your savings progress ",
        theme::dim_style(),
    ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.data.goals.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled("No goals yet", theme::dim_style())))
            .centered();
        f.render_widget(msg, inner);
        return;
    }

    let visible = (inner.height / GOAL_HEIGHT).max(1) as usize;
    let mut constraints: Vec<Constraint> = app
        .data
        .goals
        .iter()
        .take(visible)
        .map(|_| Constraint::Length(GOAL_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (goal, row) in app.data.goals.iter().zip(rows.iter()) {
        render_goal(f, *row, goal);
    }
}

fn render_goal(f: &mut Frame, area: Rect, goal: &Goal) {
    let color = theme::color(goal.tone.token());

    let lines = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let amounts = format!(
        "{} / {}",
        format_amount(goal.current),
        format_amount(goal.target)
    );
    let name_width = (lines[0].width as usize).saturating_sub(amounts.chars().count() + 1);
    let name = truncate(&goal.name, name_width);
    let pad = name_width.saturating_sub(name.chars().count());

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(name, theme::normal_style().add_modifier(Modifier::BOLD)),
            Span::raw(" ".repeat(pad + 1)),
            Span::styled(amounts, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        ])),
        lines[0],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(theme::SURFACE))
        .ratio(metrics::gauge_ratio(goal.progress_ratio()))
        .label("");
    f.render_widget(gauge, lines[1]);

    let caption = goal_caption(goal);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(caption, theme::dim_style()))),
        lines[2],
    );
}

fn render_transactions(f: &mut Frame, area: Rect, app: &App) {
    let block = section_block("Recent Transactions").title_bottom(Span::styled(
        " Latest spending activity ",
        theme::dim_style(),
    ));

    if app.data.transactions.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No transactions",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let rows: Vec<Row> = app
        .data
        .transactions
        .iter()
        .enumerate()
        .map(|(i, txn)| {
            let amount_style = theme::token_style(txn.amount_tone()).add_modifier(Modifier::BOLD);
            let category_style = theme::token_style(txn.category_color());

            let style = if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };

            Row::new(vec![
                Cell::from(Span::styled("●", category_style)),
                Cell::from(Text::from(vec![
                    Line::from(Span::styled(
                        truncate(&txn.description, 28),
                        theme::normal_style().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(txn.date.as_str(), theme::dim_style())),
                ])),
                Cell::from(Span::styled(
                    format!("[{}]", truncate(&txn.category, 13)),
                    category_style,
                )),
                Cell::from(
                    Line::from(Span::styled(format_signed_amount(txn.amount), amount_style))
                        .right_aligned(),
                ),
            ])
            .height(2)
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(1),
        Constraint::Min(14),
        Constraint::Length(15),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).column_spacing(1).block(block);
    f.render_widget(table, area);
}
