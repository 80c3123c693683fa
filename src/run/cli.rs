use anyhow::Result;
use rust_decimal::Decimal;
use std::io::Write;
use std::path::Path;

use crate::data::Dataset;
use crate::metrics;
use crate::ui::util::{
    format_amount, format_percent, format_signed_amount, goal_caption, progress_bar,
};

pub(crate) fn as_cli(args: &[String], data: &Dataset) -> Result<()> {
    let mut out = std::io::stdout().lock();
    run_command(args, data, &mut out)
}

pub(crate) fn run_command<W: Write>(args: &[String], data: &Dataset, out: &mut W) -> Result<()> {
    let command = args.get(1).map(String::as_str).unwrap_or("--help");
    tracing::debug!(command, "cli");
    match command {
        "summary" | "s" => cli_summary(data, out),
        "goals" | "g" => cli_goals(data, out),
        "transactions" | "t" => cli_transactions(data, out),
        "categories" | "c" => cli_categories(data, out),
        "export" => cli_export(args.get(2..).unwrap_or_default(), data, out),
        "--help" | "-h" | "help" => print_usage(out),
        "--version" | "-V" | "version" => {
            writeln!(out, "findash {}", env!("CARGO_PKG_VERSION"))?;
            Ok(())
        }
        other => {
            print_usage(out)?;
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "findash — student finance dashboard")?;
    writeln!(out)?;
    writeln!(out, "Usage: findash [command]")?;
    writeln!(out)?;
    writeln!(out, "Commands:")?;
    writeln!(out, "  (none)                        Launch interactive TUI")?;
    writeln!(out, "  summary                       Balance, monthly spend and budget left")?;
    writeln!(out, "  goals                         Savings goal progress")?;
    writeln!(out, "  transactions                  Recent transactions")?;
    writeln!(out, "  categories                    Spending by category")?;
    writeln!(out, "  export [path]                 Write transactions as CSV (stdout if no path)")?;
    writeln!(out, "  --help, -h                    Show this help")?;
    writeln!(out, "  --version, -V                 Show version")?;
    writeln!(out)?;
    writeln!(out, "Set FINDASH_LOG=debug for verbose logs in the data directory.")?;
    Ok(())
}

fn cli_summary<W: Write>(data: &Dataset, out: &mut W) -> Result<()> {
    let summary = &data.summary;
    writeln!(out, "Finance Dashboard")?;
    writeln!(out, "{}", "─".repeat(40))?;
    writeln!(
        out,
        "  Total Balance:    {:>12}  ({})",
        format_amount(summary.total_balance),
        summary.balance_note
    )?;
    writeln!(
        out,
        "  Monthly Spent:    {:>12}  ({})",
        format_amount(summary.current_spending),
        summary.spending_note
    )?;
    writeln!(
        out,
        "  Budget Remaining: {:>12}  {} {}",
        format_amount(summary.remaining_budget()),
        progress_bar(summary.remaining_ratio(), 20),
        format_percent(summary.remaining_percent())
    )?;
    writeln!(out, "  Monthly Budget:   {:>12}", format_amount(summary.monthly_budget))?;

    if !data.monthly.is_empty() {
        writeln!(out)?;
        writeln!(out, "Spending Trends:")?;
        for record in &data.monthly {
            let marker = if record.is_over_budget() { "  over" } else { "" };
            writeln!(
                out,
                "  {:<4} {:>12} / {:>12}{marker}",
                record.month,
                format_amount(record.spending),
                format_amount(record.budget)
            )?;
        }
    }
    Ok(())
}

fn cli_goals<W: Write>(data: &Dataset, out: &mut W) -> Result<()> {
    if data.goals.is_empty() {
        writeln!(out, "No goals")?;
        return Ok(());
    }
    writeln!(out, "Financial Goals")?;
    writeln!(out, "{}", "─".repeat(40))?;
    for goal in &data.goals {
        let reached = if goal.is_reached() { "  reached" } else { "" };
        writeln!(
            out,
            "  {}. {:<20} {} / {}{reached}",
            goal.id,
            goal.name,
            format_amount(goal.current),
            format_amount(goal.target)
        )?;
        writeln!(
            out,
            "  {} {}",
            progress_bar(goal.progress_ratio(), 20),
            goal_caption(goal)
        )?;
    }
    Ok(())
}

fn cli_transactions<W: Write>(data: &Dataset, out: &mut W) -> Result<()> {
    if data.transactions.is_empty() {
        writeln!(out, "No transactions")?;
        return Ok(());
    }
    writeln!(
        out,
        "{:<4} {:<12} {:<20} {:<15} {:>10}",
        "ID", "Date", "Description", "Category", "Amount"
    )?;
    writeln!(out, "{}", "─".repeat(65))?;
    for txn in &data.transactions {
        writeln!(
            out,
            "{:<4} {:<12} {:<20} {:<15} {:>10}",
            txn.id,
            txn.date,
            txn.description,
            txn.category,
            format_signed_amount(txn.amount)
        )?;
    }

    let inflow: Decimal = data
        .transactions
        .iter()
        .filter(|t| t.is_income())
        .map(|t| t.amount)
        .sum();
    let outflow: Decimal = data
        .transactions
        .iter()
        .filter(|t| t.is_expense())
        .map(|t| t.abs_amount())
        .sum();
    writeln!(out, "{}", "─".repeat(65))?;
    writeln!(
        out,
        "In: {}  Out: {}  Net: {}",
        format_amount(inflow),
        format_amount(outflow),
        format_amount(inflow - outflow)
    )?;
    Ok(())
}

fn cli_categories<W: Write>(data: &Dataset, out: &mut W) -> Result<()> {
    let total = metrics::category_total(&data.categories);
    writeln!(out, "Expense Categories ({})", format_amount(total))?;
    writeln!(out, "{}", "─".repeat(50))?;
    for slice in &data.categories {
        writeln!(
            out,
            "  {:<16} {:>10} {:>7}  {}",
            slice.name,
            format_amount(slice.value),
            format_percent(metrics::category_share_percent(slice.value, total)),
            slice.color
        )?;
    }
    Ok(())
}

fn cli_export<W: Write>(args: &[String], data: &Dataset, out: &mut W) -> Result<()> {
    match args.first().filter(|a| !a.starts_with('-')) {
        Some(path) => {
            let path = shellexpand(path);
            let count = crate::export::export_to_path(Path::new(&path), &data.transactions)?;
            tracing::info!(count, path = %path, "exported transactions");
            writeln!(out, "Exported {count} transactions to {path}")?;
        }
        None => {
            crate::export::write_transactions(out, &data.transactions)?;
        }
    }
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
