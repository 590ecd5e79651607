//! Report formatting for terminal output

use crate::config::Settings;
use crate::models::Money;
use crate::reports::{BudgetReport, CategoryStatus, MonthlyTotals, MonthlyTrend, OverviewReport};

use super::transaction::{format_expense_list, format_income_list};

const BAR_WIDTH: usize = 20;

/// Format a percentage with precision that suits its size
pub fn format_percentage(pct: f64) -> String {
    if pct > 0.0 && pct < 0.1 {
        format!("{:.2}%", pct)
    } else if pct.abs() < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Signed percentage change, e.g. `+29.2%`
pub fn format_trend(pct: f64) -> String {
    if pct > 0.0 {
        format!("+{:.1}%", pct)
    } else {
        format!("{:.1}%", pct)
    }
}

/// Progress bar for a utilization percentage, capped at full
pub fn format_bar(pct: f64, width: usize) -> String {
    if pct <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((pct / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

fn status_marker(status: CategoryStatus) -> &'static str {
    match status {
        CategoryStatus::Untracked => " ",
        CategoryStatus::OnTrack => " ",
        CategoryStatus::Warning => "!",
        CategoryStatus::Over => "✗",
    }
}

/// Format the monthly budget page
pub fn format_budget_report(report: &BudgetReport, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();
    let money = |m: Money| m.format_with_symbol(symbol);

    output.push_str(&format!("Budget for {}\n", report.period.label()));
    output.push_str(&separator(88));
    output.push('\n');
    output.push_str(&format!(
        "  {:20} {:>11} {:>11} {:>11} {:>6}  {}\n",
        "Category", "Limit", "Spent", "Remaining", "Used", "Progress"
    ));
    output.push_str(&separator(88));
    output.push('\n');

    for row in &report.categories {
        let status = row.status();
        let (used, bar) = if status == CategoryStatus::Untracked {
            ("-".to_string(), String::new())
        } else {
            (format_percentage(row.percentage), format_bar(row.percentage, BAR_WIDTH))
        };
        output.push_str(&format!(
            "{} {:20} {:>11} {:>11} {:>11} {:>6}  {}\n",
            status_marker(status),
            truncate(&row.category, 20),
            money(row.limit),
            money(row.spent),
            money(row.remaining),
            used,
            bar
        ));
    }

    let totals = &report.totals;
    output.push_str(&separator(88));
    output.push('\n');
    output.push_str(&format!(
        "  {:20} {:>11} {:>11} {:>11}\n",
        "Total",
        money(totals.total_budget),
        money(totals.total_spent),
        money(totals.remaining())
    ));

    let near_limit = report.near_limit();
    if !near_limit.is_empty() || totals.over_budget_count > 0 || totals.is_under_half() {
        output.push('\n');
    }
    for row in near_limit {
        output.push_str(&format!(
            "! {} is at {} of its limit\n",
            row.category,
            format_percentage(row.percentage)
        ));
    }
    match totals.over_budget_count {
        0 => {}
        1 => output.push_str("✗ 1 category is over budget\n"),
        n => output.push_str(&format!("✗ {} categories are over budget\n", n)),
    }
    if totals.is_under_half() {
        output.push_str("Less than half of this month's budget has been used\n");
    }

    output
}

fn format_totals(totals: &MonthlyTotals, symbol: &str) -> String {
    format!(
        "  Income:   {:>12}\n  Expenses: {:>12}\n  Balance:  {:>12}\n",
        totals.income.format_with_symbol(symbol),
        totals.expense.format_with_symbol(symbol),
        totals.balance.format_with_symbol(symbol)
    )
}

/// Format a month compared with the one before it
pub fn format_monthly_trend(trend: &MonthlyTrend, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();
    let money = |m: Money| m.format_with_symbol(symbol);

    output.push_str(&format!(
        "{} vs {}\n",
        trend.period.label(),
        trend.previous_period().label()
    ));
    output.push_str(&separator(52));
    output.push('\n');
    output.push_str(&format!(
        "  {:10} {:>12} {:>12} {:>10}\n",
        "", "This month", "Last month", "Change"
    ));
    output.push_str(&format!(
        "  {:10} {:>12} {:>12} {:>10}\n",
        "Income",
        money(trend.current.income),
        money(trend.previous.income),
        format_trend(trend.income_trend)
    ));
    output.push_str(&format!(
        "  {:10} {:>12} {:>12} {:>10}\n",
        "Expenses",
        money(trend.current.expense),
        money(trend.previous.expense),
        format_trend(trend.expense_trend)
    ));
    output.push_str(&format!(
        "  {:10} {:>12} {:>12}\n",
        "Balance",
        money(trend.current.balance),
        money(trend.previous.balance)
    ));

    output
}

/// Format the dashboard overview
pub fn format_overview(report: &OverviewReport, settings: &Settings) -> String {
    let symbol = settings.currency_symbol.as_str();
    let mut output = String::new();

    output.push_str(&format!("Overview for {}\n", report.period.label()));
    output.push_str(&separator(40));
    output.push('\n');
    output.push_str(&format_totals(report.month(), symbol));
    output.push_str(&format!(
        "  Income trend:  {}\n  Expense trend: {}\n",
        format_trend(report.trend.income_trend),
        format_trend(report.trend.expense_trend)
    ));

    output.push_str("\nAll time\n");
    output.push_str(&format_totals(&report.all_time, symbol));

    output.push_str("\nRecent income\n");
    output.push_str(&format_income_list(&report.recent_incomes, settings));
    output.push_str("\nRecent expenses\n");
    output.push_str(&format_expense_list(&report.recent_expenses, settings));

    output
}
