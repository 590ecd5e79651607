//! Report CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_monthly_trend, format_overview};
use crate::error::LedgerResult;
use crate::reports::{MonthlyTrend, OverviewReport};
use crate::services::PeriodService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Monthly totals, trend, all-time totals and recent transactions
    Overview {
        /// Month to report on (defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,

        /// How many recent incomes and expenses to list
        #[arg(short, long)]
        recent: Option<usize>,
    },

    /// Compare a month's totals with the month before
    Trend {
        /// Month to report on (defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> LedgerResult<()> {
    let period_service = PeriodService::new();

    match cmd {
        ReportCommands::Overview { period, recent } => {
            let period = period_service.parse_or_current(period.as_deref())?;
            let recent = recent.unwrap_or(settings.recent_count);
            let report = OverviewReport::generate(storage.store(), period, recent);
            print!("{}", format_overview(&report, settings));
        }

        ReportCommands::Trend { period } => {
            let period = period_service.parse_or_current(period.as_deref())?;
            let trend = MonthlyTrend::compute(storage.store(), period);
            print!("{}", format_monthly_trend(&trend, settings));
        }
    }

    Ok(())
}
