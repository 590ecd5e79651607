//! Expense CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list, format_expense_summary};
use crate::error::LedgerResult;
use crate::export::export_expenses_csv;
use crate::models::NewExpense;
use crate::reports::{
    filter_transactions, sort_by_date_descending, summarize_by_category, TransactionFilter,
};
use crate::services::PeriodService;
use crate::storage::Storage;

use super::{today, write_csv};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record an expense
    Add {
        /// Amount (e.g., "45.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Spending category (any name; new ones are added to the list)
        #[arg(short, long)]
        category: String,

        /// Date spent (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Free-text note
        #[arg(short, long)]
        note: Option<String>,
    },

    /// List expenses, newest first
    List {
        /// Only show one category ("All" shows every category)
        #[arg(short, long)]
        category: Option<String>,

        /// Only show one month (e.g., "2026-01", "jan", "last")
        #[arg(short, long)]
        period: Option<String>,

        /// Maximum number of rows
        #[arg(short, long)]
        limit: Option<usize>,

        /// Write the list to a CSV file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID (full UUID or the short "exp-" form)
        id: String,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> LedgerResult<()> {
    match cmd {
        ExpenseCommands::Add {
            amount,
            category,
            date,
            note,
        } => {
            let mut input = NewExpense::new(amount, category, date.unwrap_or_else(today));
            if let Some(note) = note {
                input = input.with_note(note);
            }
            let expense = storage.add_expense(&input)?;
            println!("Recorded expense {}", format_expense_details(&expense, settings));
        }

        ExpenseCommands::List {
            category,
            period,
            limit,
            output,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(category) = category {
                filter = filter.with_category(category);
            }
            if let Some(period) = period {
                filter = filter.with_period(PeriodService::new().parse(&period)?);
            }

            let mut expenses =
                sort_by_date_descending(&filter_transactions(storage.store().expenses(), &filter));
            if let Some(limit) = limit {
                expenses.truncate(limit);
            }

            match output {
                Some(path) => {
                    write_csv(&path, |file| export_expenses_csv(&expenses, file))?;
                    println!("Exported {} expenses to {}", expenses.len(), path.display());
                }
                None => {
                    print!("{}", format_expense_list(&expenses, settings));
                    if !expenses.is_empty() {
                        let (total, breakdown) = summarize_by_category(&expenses);
                        println!();
                        print!("{}", format_expense_summary(total, &breakdown, settings));
                    }
                }
            }
        }

        ExpenseCommands::Delete { id } => {
            let id = match storage.store().resolve_expense(&id) {
                Ok(id) => id,
                Err(e) if e.is_not_found() => {
                    println!("No expense matches {}; nothing to delete", id);
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            if let Some(expense) = storage.delete_expense(id)? {
                println!("Deleted expense {}", format_expense_details(&expense, settings));
            }
        }
    }

    Ok(())
}
