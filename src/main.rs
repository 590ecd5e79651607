use anyhow::Result;
use clap::{Parser, Subcommand};

use finance_ledger::cli::{
    handle_audit_command, handle_budget_command, handle_category_command, handle_expense_command,
    handle_income_command, handle_report_command, BudgetCommands, CategoryCommands,
    ExpenseCommands, IncomeCommands, ReportCommands,
};
use finance_ledger::config::{LedgerPaths, Settings};
use finance_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "ledger",
    version,
    about = "Personal finance ledger with monthly budgets",
    long_about = "Track income and expenses, set monthly limits per spending \
                  category, and see where each month's money went."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Monthly budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Category commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Overview and trend reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show recent changes from the audit log
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Create the data directory, settings file and ledger
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = LedgerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("ledger - personal finance ledger");
        println!();
        println!("Run 'ledger --help' for usage information.");
        return Ok(());
    };

    match command {
        Commands::Config => print_config(&paths, &settings),
        command => run(command, paths, &settings)?,
    }

    Ok(())
}

fn run(command: Commands, paths: LedgerPaths, settings: &Settings) -> Result<()> {
    let was_initialized = paths.is_initialized();
    let mut storage = Storage::open(paths, settings)?;

    match command {
        Commands::Income(cmd) => handle_income_command(&mut storage, settings, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&mut storage, settings, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&mut storage, settings, cmd)?,
        Commands::Category(cmd) => handle_category_command(&storage, settings, cmd)?,
        Commands::Report(cmd) => handle_report_command(&storage, settings, cmd)?,
        Commands::Audit { limit } => handle_audit_command(&storage, limit)?,
        Commands::Init => {
            let paths = storage.paths();
            if !paths.settings_file().exists() {
                settings.save(paths)?;
            }
            if was_initialized {
                println!("Ledger already initialized at {}", paths.base_dir().display());
            } else {
                let store = storage.store();
                println!("Initialized ledger at {}", paths.base_dir().display());
                println!(
                    "  {} incomes, {} expenses, {} budgets",
                    store.incomes().len(),
                    store.expenses().len(),
                    store.budgets().len()
                );
            }
        }
        Commands::Config => print_config(storage.paths(), settings),
    }

    Ok(())
}

fn print_config(paths: &LedgerPaths, settings: &Settings) {
    println!("Ledger Configuration");
    println!("====================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Ledger file:    {}", paths.ledger_file().display());
    println!("Settings file:  {}", paths.settings_file().display());
    println!("Audit log:      {}", paths.audit_log().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol:   {}", settings.currency_symbol);
    println!("  Date format:       {}", settings.date_format);
    println!("  Recent count:      {}", settings.recent_count);
    println!("  Seed on first run: {}", settings.seed_on_first_run);
}
