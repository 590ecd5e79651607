//! CSV export of transaction lists and the budget report
//!
//! Amounts are written as plain decimals (`450.00`) without a currency
//! symbol so spreadsheets read them as numbers.

use std::io::Write;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, Income};
use crate::reports::BudgetReport;

/// Write incomes as `ID,Date,Source,Amount`
pub fn export_incomes_csv<W: Write>(incomes: &[Income], writer: W) -> LedgerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Source", "Amount"])?;

    for income in incomes {
        csv.write_record([
            income.id.as_uuid().to_string(),
            income.date.format("%Y-%m-%d").to_string(),
            income.source.clone(),
            income.amount.to_decimal_string(),
        ])?;
    }

    finish(csv)
}

/// Write expenses as `ID,Date,Category,Note,Amount`
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> LedgerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["ID", "Date", "Category", "Note", "Amount"])?;

    for expense in expenses {
        csv.write_record([
            expense.id.as_uuid().to_string(),
            expense.date.format("%Y-%m-%d").to_string(),
            expense.category.clone(),
            expense.note.clone().unwrap_or_default(),
            expense.amount.to_decimal_string(),
        ])?;
    }

    finish(csv)
}

/// Write one row per category of a budget report
pub fn export_budget_report_csv<W: Write>(report: &BudgetReport, writer: W) -> LedgerResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record([
        "Period",
        "Category",
        "Limit",
        "Spent",
        "Remaining",
        "Percentage",
        "Over Budget",
    ])?;

    let period = report.period.key();
    for row in &report.categories {
        csv.write_record([
            period.clone(),
            row.category.clone(),
            row.limit.to_decimal_string(),
            row.spent.to_decimal_string(),
            row.remaining.to_decimal_string(),
            format!("{:.1}", row.percentage),
            row.is_over_budget.to_string(),
        ])?;
    }

    finish(csv)
}

fn finish<W: Write>(mut csv: csv::Writer<W>) -> LedgerResult<()> {
    csv.flush()
        .map_err(|e| LedgerError::Export(format!("Failed to flush CSV output: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, NewExpense, Period};
    use crate::store::LedgerStore;
    use chrono::NaiveDate;

    fn to_string(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_export_incomes() {
        let income = Income::new(
            Money::from_units(5000),
            "Salary",
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
        );

        let mut out = Vec::new();
        export_incomes_csv(std::slice::from_ref(&income), &mut out).unwrap();
        let text = to_string(out);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "ID,Date,Source,Amount");
        assert_eq!(
            lines[1],
            format!("{},2026-01-15,Salary,5000.00", income.id.as_uuid())
        );
    }

    #[test]
    fn test_export_expenses_quotes_fields() {
        let mut expense = Expense::new(
            Money::from_cents(4550),
            "Food & Dining",
            NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
        );
        expense.note = Some("milk, eggs".to_string());

        let mut out = Vec::new();
        export_expenses_csv(&[expense], &mut out).unwrap();
        let text = to_string(out);

        assert!(text.contains("Food & Dining,\"milk, eggs\",45.50"));
    }

    #[test]
    fn test_export_budget_report() {
        let january = Period::new(2026, 1).unwrap();
        let mut store = LedgerStore::new();
        store.add_expense(&NewExpense::new("450", "Food", "2026-01-10")).unwrap();
        store.add_expense(&NewExpense::new("300", "Food", "2026-01-22")).unwrap();
        store.set_budget("Food", january, "600").unwrap();

        let report = BudgetReport::for_categories(&store, january, &["Food"]);
        let mut out = Vec::new();
        export_budget_report_csv(&report, &mut out).unwrap();
        let text = to_string(out);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "2026-01,Food,600.00,750.00,-150.00,125.0,true");
    }
}
