use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};

use super::app::{App, InputMode, Screen};
use super::commands;
use super::theme;

const ADD_EXPENSE_LABEL: &str = " + Add Expense ";
const STATUS_HINTS: &str = " 1-3/Tab switch | a add expense | ? help ";
const HELP_WIDTH: u16 = 72;

/// Key bindings shown in the help overlay, grouped by heading.
const KEY_BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("1-3", "Switch tabs"),
            ("Tab/Shift-Tab", "Cycle tabs"),
            ("q / Ctrl-q", "Quit"),
            ("Esc", "Clear status"),
        ],
    ),
    ("Actions", &[(":", "Command mode"), ("a", "Add expense")]),
];

pub(crate) fn render(f: &mut Frame, app: &App) {
    let [tabs, header, body, status, command] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(f.area());

    render_tab_bar(f, tabs, app);
    render_header(f, header);
    match app.screen {
        Screen::Overview => super::screens::overview::render(f, body, app),
        Screen::Activity => super::screens::activity::render(f, body, app),
        Screen::Insights => super::screens::insights::render(f, body, app),
    }
    render_status_bar(f, status, app);
    render_command_bar(f, command, app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn bold(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn render_tab_bar(f: &mut Frame, area: Rect, app: &App) {
    let screens = Screen::all();
    let selected = screens.iter().position(|s| *s == app.screen).unwrap_or(0);
    let titles = screens
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{}:{s}", i + 1));

    let tabs = Tabs::new(titles)
        .select(selected)
        .padding("", "")
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)))
        .style(Style::default().fg(theme::TEXT_DIM).bg(theme::HEADER_BG))
        .highlight_style(bold(theme::ACCENT));

    f.render_widget(tabs, area);
}

/// Title, subtitle and the "Add Expense" button. The button is drawn only;
/// `a` reports that it does nothing.
fn render_header(f: &mut Frame, area: Rect) {
    let [title_area, button_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(ADD_EXPENSE_LABEL.chars().count() as u16),
        ])
        .areas(area);

    f.render_widget(
        Paragraph::new(vec![
            Line::styled(" Finance Dashboard", bold(theme::ACCENT)),
            Line::styled(
                " Manage your student finances with AI insights",
                theme::dim_style(),
            ),
        ]),
        title_area,
    );
    f.render_widget(
        Paragraph::new(Line::styled(
            ADD_EXPENSE_LABEL,
            bold(theme::HEADER_BG).bg(theme::ACCENT),
        )),
        button_area,
    );
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode = format!(" {} ", app.input_mode);
    let mode_bg = match app.input_mode {
        InputMode::Normal => theme::ACCENT,
        InputMode::Command => theme::GREEN,
    };
    let info = format!(
        " {} | {} goals | {} txns",
        app.screen,
        app.data.goals.len(),
        app.data.transactions.len()
    );

    f.render_widget(Block::default().style(theme::status_bar_style()), area);

    let [mode_area, info_area, hints_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(mode.chars().count() as u16),
            Constraint::Min(0),
            Constraint::Length(STATUS_HINTS.chars().count() as u16),
        ])
        .areas(area);

    f.render_widget(
        Paragraph::new(Span::styled(mode, bold(theme::HEADER_BG).bg(mode_bg))),
        mode_area,
    );
    f.render_widget(Paragraph::new(info).style(theme::status_bar_style()), info_area);
    f.render_widget(
        Paragraph::new(STATUS_HINTS).style(theme::status_bar_style()),
        hints_area,
    );
}

fn render_command_bar(f: &mut Frame, area: Rect, app: &App) {
    let line = match app.input_mode {
        InputMode::Command => Line::from(vec![
            Span::styled(":", Style::default().fg(theme::ACCENT)),
            Span::styled(app.command_input.as_str(), theme::command_bar_style()),
        ]),
        InputMode::Normal if app.status_message.is_empty() => Line::styled(
            " Press : for commands, ? for help, q to quit",
            theme::dim_style(),
        ),
        InputMode::Normal => {
            Line::styled(app.status_message.as_str(), theme::command_bar_style())
        }
    };

    f.render_widget(
        Paragraph::new(line).style(Style::default().bg(theme::COMMAND_BG)),
        area,
    );

    if app.input_mode == InputMode::Command {
        let offset = 1 + app.command_input.chars().count() as u16;
        f.set_cursor_position((area.x + offset, area.y));
    }
}

fn help_heading(text: &str) -> Line<'static> {
    Line::styled(format!(" {text}"), bold(theme::YELLOW))
}

fn help_entry(keys: &str, action: &str) -> Line<'static> {
    Line::styled(format!("  {keys:<16} {action}"), theme::normal_style())
}

fn help_lines() -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(" findash Help ", bold(theme::ACCENT)),
        Line::from(""),
    ];

    for (heading, bindings) in KEY_BINDINGS {
        lines.push(help_heading(heading));
        lines.extend(bindings.iter().map(|(keys, action)| help_entry(keys, action)));
        lines.push(Line::from(""));
    }

    // Single-letter names are aliases of a longer command.
    let mut named: Vec<(&str, &str)> = commands::COMMANDS
        .iter()
        .filter(|(name, _)| name.len() > 1)
        .map(|(name, cmd)| (*name, cmd.description))
        .collect();
    named.sort_unstable();

    lines.push(help_heading("Commands"));
    lines.extend(
        named
            .into_iter()
            .map(|(name, desc)| help_entry(&format!(":{name}"), desc)),
    );
    lines.push(Line::from(""));
    lines.push(Line::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    ));
    lines
}

/// A `width` x `height` rect centered in `area`, shrunk to leave a margin.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width.saturating_sub(4));
    let height = height.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let lines = help_lines();
    let popup = centered(area, HELP_WIDTH, lines.len() as u16 + 2);

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme::ACCENT))
                .style(Style::default().bg(theme::HEADER_BG)),
        ),
        popup,
    );
}
