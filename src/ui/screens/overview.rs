use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Bar, BarChart, BarGroup, Block, Borders, Gauge, Paragraph,
    },
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::metrics;
use crate::models::CategorySlice;
use crate::palette::ColorToken;
use crate::ui::app::App;
use crate::ui::ring;
use crate::ui::theme;
use crate::ui::util::{format_amount, format_percent, truncate};

pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Summary cards
            Constraint::Min(12),   // Charts
        ])
        .split(area);

    render_summary_cards(f, chunks[0], app);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_spending_trends(f, charts[0], app);
    render_categories(f, charts[1], app);
}

fn card_block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()))
}

fn render_summary_cards(f: &mut Frame, area: Rect, app: &App) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    let summary = &app.data.summary;

    render_card(
        f,
        cards[0],
        "Total Balance",
        format_amount(summary.total_balance),
        theme::GREEN,
        Line::from(vec![
            Span::styled("▲ ", theme::income_style()),
            Span::styled(summary.balance_note.as_str(), theme::dim_style()),
        ]),
    );
    render_card(
        f,
        cards[1],
        "Monthly Spent",
        format_amount(summary.current_spending),
        theme::TEXT,
        Line::from(vec![
            Span::styled("▼ ", theme::expense_style()),
            Span::styled(summary.spending_note.as_str(), theme::dim_style()),
        ]),
    );
    render_remaining_card(f, cards[2], app);
}

fn render_card(f: &mut Frame, area: Rect, title: &str, display: String, color: Color, note: Line) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            display,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        note,
    ])
    .centered()
    .block(card_block(title));

    f.render_widget(text, area);
}

/// Remaining budget with a gauge showing how much of the month's budget is
/// left. The label carries the real figure even when the fill is clamped.
fn render_remaining_card(f: &mut Frame, area: Rect, app: &App) {
    let summary = &app.data.summary;
    let remaining = summary.remaining_budget();
    let ratio = summary.remaining_ratio();
    let color = if remaining < Decimal::ZERO {
        theme::RED
    } else {
        theme::YELLOW
    };

    let block = card_block("Budget Remaining");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format_amount(remaining),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .centered(),
        rows[1],
    );

    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(color).bg(theme::SURFACE))
        .ratio(metrics::gauge_ratio(ratio))
        .label(Span::styled(
            format!("{} left", format_percent(summary.remaining_percent())),
            Style::default().fg(theme::TEXT).add_modifier(Modifier::BOLD),
        ));
    f.render_widget(gauge, rows[2]);
}

fn render_spending_trends(f: &mut Frame, area: Rect, app: &App) {
    let block = card_block("Spending Trends").title_bottom(Line::from(vec![
        Span::styled(" ■ ", theme::token_style(ColorToken::Muted)),
        Span::styled("Budget ", theme::dim_style()),
        Span::styled("■ ", theme::token_style(ColorToken::Primary)),
        Span::styled("Spending ", theme::dim_style()),
    ]));

    if app.data.monthly.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No monthly figures",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let groups: Vec<BarGroup> = app
        .data
        .monthly
        .iter()
        .map(|record| {
            let budget = record.budget.to_u64().unwrap_or(0);
            let spending = record.spending.to_u64().unwrap_or(0);
            let spending_color = if record.is_over_budget() {
                theme::color(ColorToken::Destructive)
            } else {
                theme::color(ColorToken::Primary)
            };
            BarGroup::default()
                .label(Line::from(record.month.as_str()).centered())
                .bars(&[
                    Bar::default()
                        .value(budget)
                        .text_value(String::new())
                        .style(theme::token_style(ColorToken::Muted)),
                    Bar::default()
                        .value(spending)
                        .text_value(String::new())
                        .style(Style::default().fg(spending_color)),
                ])
        })
        .collect();

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2);
    for group in groups {
        chart = chart.data(group);
    }

    f.render_widget(chart, area);
}

fn render_categories(f: &mut Frame, area: Rect, app: &App) {
    let block = card_block("Expense Categories");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let slices = &app.data.categories;
    let legend_rows = slices.len().div_ceil(2) as u16;

    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(legend_rows)])
        .split(inner);

    if !parts[0].is_empty() {
        render_ring(f, parts[0], slices);
    }

    let total = metrics::category_total(slices);
    let col_width = (parts[1].width as usize / 2).max(1);
    let legend: Vec<Line> = slices
        .chunks(2)
        .map(|pair| {
            let mut spans = Vec::new();
            for slice in pair {
                let share = metrics::category_share_percent(slice.value, total);
                let entry = format!(
                    "{} {} ({})",
                    truncate(&slice.name, 13),
                    format_amount(slice.value),
                    format_percent(share)
                );
                spans.push(Span::styled("● ", theme::token_style(slice.color)));
                let width = col_width.saturating_sub(2);
                spans.push(Span::styled(
                    format!("{:<width$}", truncate(&entry, width)),
                    theme::dim_style(),
                ));
            }
            Line::from(spans)
        })
        .collect();
    f.render_widget(Paragraph::new(legend), parts[1]);
}

fn render_ring(f: &mut Frame, area: Rect, slices: &[CategorySlice]) {
    let weighted: Vec<(ColorToken, f64)> = slices
        .iter()
        .map(|s| (s.color, s.value.to_f64().unwrap_or(0.0)))
        .collect();
    let segments = ring::segments(&weighted);
    let (x_bounds, y_bounds) = ring::bounds(area.width, area.height);

    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds(x_bounds)
        .y_bounds(y_bounds)
        .paint(|ctx| {
            for segment in &segments {
                ctx.draw(&Points {
                    coords: &segment.points,
                    color: theme::color(segment.token),
                });
            }
        });
    f.render_widget(canvas, area);
}
