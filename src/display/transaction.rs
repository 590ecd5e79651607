//! Income and expense display formatting

use crate::config::Settings;
use crate::models::{Expense, Income, Money};

use super::report::truncate;
use super::format_date;

/// Format a list of incomes as a table
pub fn format_income_list(incomes: &[Income], settings: &Settings) -> String {
    if incomes.is_empty() {
        return "No income found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:12} {:10}  {:20} {:>12}\n",
        "ID", "Date", "Source", "Amount"
    ));

    for income in incomes {
        output.push_str(&format!(
            "  {:12} {:10}  {:20} {:>12}\n",
            income.id.to_string(),
            format_date(income.date, settings),
            truncate(&income.source, 20),
            income.amount.format_with_symbol(&settings.currency_symbol)
        ));
    }

    output
}

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "  {:12} {:10}  {:18} {:>12}  {}\n",
        "ID", "Date", "Category", "Amount", "Note"
    ));

    for expense in expenses {
        output.push_str(&format!(
            "  {:12} {:10}  {:18} {:>12}  {}\n",
            expense.id.to_string(),
            format_date(expense.date, settings),
            truncate(&expense.category, 18),
            expense.amount.format_with_symbol(&settings.currency_symbol),
            expense.note.as_deref().unwrap_or("")
        ));
    }

    output
}

/// Format the total of a filtered expense list and its per-category subtotals
pub fn format_expense_summary(
    total: Money,
    breakdown: &[(String, Money)],
    settings: &Settings,
) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = format!("  {:32} {:>12}\n", "Total", total.format_with_symbol(symbol));

    if !breakdown.is_empty() {
        output.push_str("  By category:\n");
        for (category, subtotal) in breakdown {
            output.push_str(&format!(
                "    {:30} {:>12}\n",
                truncate(category, 30),
                subtotal.format_with_symbol(symbol)
            ));
        }
    }

    output
}

/// Format a single income after it was recorded or removed
pub fn format_income_details(income: &Income, settings: &Settings) -> String {
    format!(
        "{} {} from {} on {}",
        income.id,
        income.amount.format_with_symbol(&settings.currency_symbol),
        income.source,
        format_date(income.date, settings)
    )
}

/// Format a single expense after it was recorded or removed
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = format!(
        "{} {} for {} on {}",
        expense.id,
        expense.amount.format_with_symbol(&settings.currency_symbol),
        expense.category,
        format_date(expense.date, settings)
    );
    if let Some(note) = &expense.note {
        output.push_str(&format!(" ({})", note));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn settings(symbol: &str) -> Settings {
        Settings {
            currency_symbol: symbol.to_string(),
            ..Settings::default()
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 10).unwrap()
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_income_list(&[], &settings("$")), "No income found.\n");
        assert_eq!(format_expense_list(&[], &settings("$")), "No expenses found.\n");
    }

    #[test]
    fn test_expense_list_rows() {
        let mut expense = Expense::new(Money::from_units(450), "Food & Dining", date());
        expense.note = Some("Groceries".to_string());

        let text = format_expense_list(&[expense.clone()], &settings("$"));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains(&expense.id.to_string()));
        assert!(lines[1].contains("2026-01-10"));
        assert!(lines[1].contains("$450.00"));
        assert!(lines[1].ends_with("Groceries"));
    }

    #[test]
    fn test_details_use_symbol() {
        let income = Income::new(Money::from_units(5000), "Salary", date());
        let text = format_income_details(&income, &settings("£"));
        assert!(text.contains("£5000.00 from Salary on 2026-01-10"));

        let expense = Expense::new(Money::from_cents(1999), "Other", date());
        assert!(format_expense_details(&expense, &settings("$")).ends_with("on 2026-01-10"));
    }

    #[test]
    fn test_expense_summary() {
        let breakdown = vec![
            ("Housing".to_string(), Money::from_units(1500)),
            ("Pets".to_string(), Money::from_cents(4550)),
        ];
        let text = format_expense_summary(Money::from_cents(154550), &breakdown, &settings("$"));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("  Total") && lines[0].ends_with("$1545.50"));
        assert_eq!(lines[1], "  By category:");
        assert!(lines[3].contains("Pets") && lines[3].ends_with("$45.50"));

        let text = format_expense_summary(Money::zero(), &[], &settings("$"));
        assert_eq!(text.lines().count(), 1);
    }
}
