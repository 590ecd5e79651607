//! Budget CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_budget_report;
use crate::error::LedgerResult;
use crate::export::export_budget_report_csv;
use crate::reports::BudgetReport;
use crate::services::PeriodService;
use crate::storage::Storage;

use super::write_csv;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly limit for a category
    Set {
        /// Category name
        category: String,

        /// Monthly limit (e.g., "600" or "600.00")
        #[arg(allow_hyphen_values = true)]
        limit: String,

        /// Month the limit applies to (e.g., "2026-01", "January", "next")
        #[arg(short, long)]
        period: Option<String>,
    },

    /// Show spending against limits for a month
    Show {
        /// Month to show (defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,

        /// Write the report to a CSV file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle a budget command
pub fn handle_budget_command(
    storage: &mut Storage,
    settings: &Settings,
    cmd: BudgetCommands,
) -> LedgerResult<()> {
    let period_service = PeriodService::new();

    match cmd {
        BudgetCommands::Set {
            category,
            limit,
            period,
        } => {
            let period = period_service.parse_or_current(period.as_deref())?;
            let budget = storage.set_budget(&category, period, &limit)?;
            println!(
                "Set {} limit for {} to {}",
                budget.category,
                period.label(),
                budget.monthly_limit.format_with_symbol(&settings.currency_symbol)
            );
        }

        BudgetCommands::Show { period, output } => {
            let period = period_service.parse_or_current(period.as_deref())?;
            let report = BudgetReport::generate(storage.store(), period);

            match output {
                Some(path) => {
                    write_csv(&path, |file| export_budget_report_csv(&report, file))?;
                    println!(
                        "Exported {} budget for {} categories to {}",
                        period,
                        report.categories.len(),
                        path.display()
                    );
                }
                None => print!("{}", format_budget_report(&report, settings)),
            }
        }
    }

    Ok(())
}
