//! Category CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::format_category_list;
use crate::error::LedgerResult;
use crate::models::INCOME_SOURCES;
use crate::services::PeriodService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List known categories with their limits
    List {
        /// Month whose limits are shown (defaults to the current month)
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CategoryCommands,
) -> LedgerResult<()> {
    match cmd {
        CategoryCommands::List { period } => {
            let period = PeriodService::new().parse_or_current(period.as_deref())?;
            print!("{}", format_category_list(storage.store(), period, settings));
            println!();
            println!("  Income sources: {}", INCOME_SOURCES.join(", "));
        }
    }

    Ok(())
}
