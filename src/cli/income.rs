//! Income CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_income_details, format_income_list};
use crate::error::LedgerResult;
use crate::export::export_incomes_csv;
use crate::models::NewIncome;
use crate::reports::{filter_transactions, sort_by_date_descending, TransactionFilter};
use crate::services::PeriodService;
use crate::storage::Storage;

use super::{today, write_csv};

/// Income subcommands
#[derive(Subcommand)]
pub enum IncomeCommands {
    /// Record an income
    Add {
        /// Amount (e.g., "5000" or "5,000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,

        /// Where the money came from (e.g., "Salary")
        #[arg(short, long)]
        source: String,

        /// Date received (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// List incomes, newest first
    List {
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

    /// Delete an income
    Delete {
        /// Income ID (full UUID or the short "inc-" form)
        id: String,
    },
}

/// Handle an income command
pub fn handle_income_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: IncomeCommands,
) -> LedgerResult<()> {
    match cmd {
        IncomeCommands::Add {
            amount,
            source,
            date,
        } => {
            let date = date.unwrap_or_else(today);
            let income = storage.add_income(&NewIncome::new(amount, source, date))?;
            println!("Recorded income {}", format_income_details(&income, settings));
        }

        IncomeCommands::List {
            period,
            limit,
            output,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(period) = period {
                filter = filter.with_period(PeriodService::new().parse(&period)?);
            }

            let mut incomes =
                sort_by_date_descending(&filter_transactions(storage.store().incomes(), &filter));
            if let Some(limit) = limit {
                incomes.truncate(limit);
            }

            match output {
                Some(path) => {
                    write_csv(&path, |file| export_incomes_csv(&incomes, file))?;
                    println!("Exported {} incomes to {}", incomes.len(), path.display());
                }
                None => print!("{}", format_income_list(&incomes, settings)),
            }
        }

        IncomeCommands::Delete { id } => {
            let id = match storage.store().resolve_income(&id) {
                Ok(id) => id,
                Err(e) if e.is_not_found() => {
                    println!("No income matches {}; nothing to delete", id);
                    return Ok(());
                }
                Err(e) => return Err(e),
            };
            if let Some(income) = storage.delete_income(id)? {
                println!("Deleted income {}", format_income_details(&income, settings));
            }
        }
    }

    Ok(())
}

