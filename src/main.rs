use anyhow::Result;
use clap::{Parser, Subcommand};

use budget_tracker::cli::{handle_log_command, handle_summary_command};
use budget_tracker::config::{Settings, TrackerPaths};

#[derive(Parser)]
#[command(
    name = "budget-tracker",
    version,
    about = "Terminal budget tracker for recurring payments",
    long_about = "Budget Tracker keeps recurring bills, subscriptions and savings \
                  transfers in named budgets. Skip an item for the period or mark \
                  it paid, and see how much of what you earned is left over."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Print budgets, items and totals
    Summary {
        /// Only show items of budgets with this name
        #[arg(short, long)]
        budget: Option<String>,
    },

    /// Show recent activity
    Log {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        count: usize,
    },

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        None | Some(Commands::Tui) => {
            budget_tracker::tui::run_tui(&settings, &paths)?;
        }
        Some(Commands::Summary { budget }) => {
            handle_summary_command(&settings, budget)?;
        }
        Some(Commands::Log { count }) => {
            handle_log_command(&paths, count)?;
        }
        Some(Commands::Init) => {
            println!("Initializing Budget Tracker at: {}", paths.base_dir().display());
            if paths.is_initialized() {
                println!("Settings file already exists, leaving it unchanged.");
            } else {
                settings.save(&paths)?;
                println!("Wrote {}", paths.settings_file().display());
            }
            println!();
            println!("Edit the settings file to change the starting budgets and items.");
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Activity log:   {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!(
                "  Total earned:    {}",
                settings.total_earned.format_with_symbol(&settings.currency_symbol)
            );
            println!("  Activity log:    {}", if settings.audit_enabled { "on" } else { "off" });
            println!("  Budgets:");
            for budget in &settings.budgets {
                println!("    - {} ({} items)", budget.name, budget.items.len());
            }
        }
    }

    Ok(())
}
