use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_easy::cli::{
    handle_category_command, handle_expense_command, handle_goal_command, handle_report_command,
    CategoryCommands, ExpenseCommands, GoalCommands, ReportCommands,
};
use budget_easy::config::{BudgetPaths, Settings};
use budget_easy::logging::init_tracing;
use budget_easy::models::BudgetMonth;
use budget_easy::storage::{seed_demo_data, Storage};

#[derive(Parser)]
#[command(
    name = "budget-easy",
    version,
    about = "Track spending by category against budget limits",
    long_about = "budget-easy keeps spending categories, expenses and per-category \
                  budget limits, and summarizes spending as tables, progress bars \
                  and a chart breakdown in the terminal."
)]
struct Cli {
    /// Log operations to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory holding settings, data and the audit log
    #[arg(long, global = true, env = "BUDGET_EASY_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Category management commands
    #[command(subcommand, alias = "cat")]
    Category(CategoryCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Budget goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Spending reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Initialize the data directory
    Init {
        /// Load the demo dataset
        #[arg(long)]
        demo: bool,
        /// Month for the demo expenses (YYYY-MM), defaults to the current month
        #[arg(long, requires = "demo")]
        month: Option<String>,
    },

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short = 'n', long, default_value = "20")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match cli.data_dir {
        Some(dir) => BudgetPaths::with_base_dir(dir),
        None => BudgetPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    let Some(command) = cli.command else {
        println!("budget-easy - track spending against budget limits");
        println!();
        println!("Run 'budget-easy init' to get started, or 'budget-easy --help' for usage.");
        return Ok(());
    };

    match command {
        Commands::Category(cmd) => {
            let storage = Storage::open(&paths, &settings)?;
            handle_category_command(&storage, cmd)?;
        }
        Commands::Expense(cmd) => {
            let storage = Storage::open(&paths, &settings)?;
            handle_expense_command(&storage, &settings, cmd)?;
        }
        Commands::Goal(cmd) => {
            let storage = Storage::open(&paths, &settings)?;
            handle_goal_command(&storage, cmd)?;
        }
        Commands::Report(cmd) => {
            let storage = Storage::open(&paths, &settings)?;
            handle_report_command(&storage, cmd)?;
        }
        Commands::Init { demo, month } => {
            println!("Initializing budget-easy at: {}", paths.base_dir().display());
            if !paths.is_initialized() {
                settings.save(&paths)?;
            }
            let storage = Storage::open(&paths, &settings)?;
            storage.save()?;

            if demo {
                let month = match month {
                    Some(month) => BudgetMonth::parse(&month)?,
                    None => BudgetMonth::current(),
                };
                let summary = seed_demo_data(&storage, month)?;
                println!(
                    "Loaded demo data for {}: {} categories, {} expenses, {} budget goals",
                    month, summary.categories, summary.expenses, summary.budget_goals
                );
            }

            println!("Initialization complete!");
            println!();
            println!("Run 'budget-easy category list' to see your categories.");
        }
        Commands::History { limit } => {
            let storage = Storage::open(&paths, &settings)?;
            match storage.audit_logger() {
                Some(logger) => {
                    let entries = logger.read_recent(limit)?;
                    if entries.is_empty() {
                        println!("No changes recorded yet.");
                    }
                    for entry in entries {
                        println!("{}", entry.format_human_readable());
                    }
                }
                None => println!("Audit logging is disabled in settings."),
            }
        }
        Commands::Config => {
            println!("budget-easy Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Store file:      {}", paths.store_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!(
                "  Latency (ms):    read {}, write {}, aggregate {}",
                settings.latency.read_ms, settings.latency.write_ms, settings.latency.aggregate_ms
            );
        }
    }

    Ok(())
}
