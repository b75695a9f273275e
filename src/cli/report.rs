//! Report CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{BudgetError, BudgetResult};
use crate::reports::{ProgressReport, SpendingChart, SpendingReport};
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Spending and budget per category
    Spending {
        /// Show the top N categories by spending only
        #[arg(long)]
        top: Option<usize>,
    },

    /// Progress of each category against its budget limit
    Progress,

    /// Spending breakdown as pie chart segments
    Chart,

    /// Export spending by category to a CSV file
    Export {
        /// Output file path
        output: PathBuf,
    },
}

/// Handle a report command
pub fn handle_report_command(storage: &Storage, cmd: ReportCommands) -> BudgetResult<()> {
    match cmd {
        ReportCommands::Spending { top } => {
            let report = SpendingReport::generate(storage)?;

            match top {
                Some(n) => {
                    println!("Top {} categories by spending:", n);
                    for (rank, row) in report.top_categories(n).into_iter().enumerate() {
                        println!(
                            "{:>3}. {:<30} {:>12}",
                            rank + 1,
                            row.name,
                            row.total_spending.to_string()
                        );
                    }
                }
                None => print!("{}", report.format_terminal()),
            }
        }

        ReportCommands::Progress => {
            let report = ProgressReport::generate(storage)?;
            print!("{}", report.format_terminal());
        }

        ReportCommands::Chart => {
            let chart = SpendingChart::generate(storage)?;
            print!("{}", chart.format_terminal());
        }

        ReportCommands::Export { output } => {
            let report = SpendingReport::generate(storage)?;

            let file = File::create(&output).map_err(|e| {
                BudgetError::Export(format!(
                    "Failed to create {}: {}",
                    output.display(),
                    e
                ))
            })?;
            report.export_csv(BufWriter::new(file))?;

            println!(
                "Exported {} categories to {}",
                report.rows.len(),
                output.display()
            );
        }
    }

    Ok(())
}
