use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Screen};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit findash", cmd_quit, r);
    register_command!("quit", "Quit findash", cmd_quit, r);
    register_command!("o", "Go to Overview", cmd_overview, r);
    register_command!("overview", "Go to Overview", cmd_overview, r);
    register_command!("a", "Go to Goals & Activity", cmd_activity, r);
    register_command!("activity", "Go to Goals & Activity", cmd_activity, r);
    register_command!("i", "Go to Smart Alerts", cmd_insights, r);
    register_command!("insights", "Go to Smart Alerts", cmd_insights, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("add-expense", "Add an expense (not available)", cmd_add_expense, r);

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::info!(command = cmd_name, "run command");
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        tracing::debug!(command = cmd_name, %suggestion, "unknown command");
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_overview(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.switch_screen(Screen::Overview);
    Ok(())
}

fn cmd_activity(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.switch_screen(Screen::Activity);
    Ok(())
}

fn cmd_insights(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.switch_screen(Screen::Insights);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

/// The dashboard shows an "Add Expense" button but the data is fixed, so the
/// only effect is a status message.
pub(crate) fn cmd_add_expense(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.set_status("Adding expenses is not available: the dashboard shows a fixed dataset");
    Ok(())
}
