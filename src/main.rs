use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{Datelike, Utc};
use clap::{Parser, Subcommand};

mod errors;
mod input;
mod leaderboard;
mod logging;
mod models;
mod report;
mod sample;
mod stars;

use models::{PointEvent, SavingsRecord};

#[derive(Parser)]
#[command(name = "bp-portal-benchmark")]
#[command(about = "Benchmark leaderboard and savings stars for the Best Practices Portal", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank plants by benchmark points
    Leaderboard {
        /// Events CSV; the built-in sample data is used when omitted
        #[arg(long)]
        events: Option<PathBuf>,
        #[arg(long)]
        since_days: Option<i64>,
        #[arg(long, default_value_t = 10)]
        limit: usize,
        #[arg(long)]
        json: bool,
    },
    /// Show the origin and copier breakdown for one plant
    Plant {
        #[arg(long)]
        name: String,
        #[arg(long)]
        events: Option<PathBuf>,
        #[arg(long)]
        since_days: Option<i64>,
        #[arg(long)]
        json: bool,
    },
    /// Rate monthly savings with stars
    Stars {
        /// Savings CSV; the built-in sample data is used when omitted
        #[arg(long)]
        savings: Option<PathBuf>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        through_month: Option<u32>,
        #[arg(long)]
        json: bool,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        events: Option<PathBuf>,
        #[arg(long)]
        savings: Option<PathBuf>,
        #[arg(long)]
        since_days: Option<i64>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        through_month: Option<u32>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Write the built-in sample data as CSV files
    Sample {
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
    },
}

fn events_for(path: Option<&Path>, since_days: Option<i64>) -> anyhow::Result<Vec<PointEvent>> {
    let events = match path {
        Some(path) => input::load_events(path)?,
        None => {
            tracing::info!("no events file given, using sample data");
            sample::point_events()
        }
    };

    Ok(match since_days {
        Some(days) => leaderboard::events_since(&events, leaderboard::cutoff_date(days)),
        None => events,
    })
}

fn savings_for(path: Option<&Path>) -> anyhow::Result<Vec<SavingsRecord>> {
    match path {
        Some(path) => input::load_savings(path),
        None => {
            tracing::info!("no savings file given, using sample data");
            Ok(sample::savings_records())
        }
    }
}

fn window_label(since_days: Option<i64>) -> String {
    match since_days {
        Some(days) => format!(
            "benchmark points since {}",
            leaderboard::cutoff_date(days)
        ),
        None => "all recorded benchmark points".to_string(),
    }
}

fn main() -> anyhow::Result<()> {
    logging::setup_logging();
    let cli = Cli::parse();
    let current_month = Utc::now().month();

    match cli.command {
        Commands::Leaderboard {
            events,
            since_days,
            limit,
            json,
        } => {
            let events = events_for(events.as_deref(), since_days)?;
            let rows = leaderboard::aggregate(&events);

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                print!("{}", report::render_leaderboard(&rows, limit));
            }
        }
        Commands::Plant {
            name,
            events,
            since_days,
            json,
        } => {
            let events = events_for(events.as_deref(), since_days)?;
            let rows = leaderboard::aggregate(&events);
            let row = leaderboard::find_plant(&rows, &name)?;
            let summary = leaderboard::summarize_plant(row);

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print!("{}", report::render_plant(row, &summary));
            }
        }
        Commands::Stars {
            savings,
            through_month,
            json,
        } => {
            let records = savings_for(savings.as_deref())?;
            let plants = stars::plant_stars(&records, through_month.unwrap_or(current_month))?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plants)?);
            } else {
                print!("{}", report::render_stars(&plants));
            }
        }
        Commands::Report {
            events,
            savings,
            since_days,
            through_month,
            out,
        } => {
            let events = events_for(events.as_deref(), since_days)?;
            let records = savings_for(savings.as_deref())?;
            let report = report::build_report(
                &window_label(since_days),
                &events,
                &records,
                through_month.unwrap_or(current_month),
            )?;
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write report to {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Sample { out_dir } => {
            std::fs::create_dir_all(&out_dir)
                .with_context(|| format!("failed to create {}", out_dir.display()))?;

            let events_path = out_dir.join("events.csv");
            let events_file = std::fs::File::create(&events_path)
                .with_context(|| format!("failed to create {}", events_path.display()))?;
            input::write_events(events_file, &sample::point_events())?;

            let savings_path = out_dir.join("savings.csv");
            let savings_file = std::fs::File::create(&savings_path)
                .with_context(|| format!("failed to create {}", savings_path.display()))?;
            input::write_savings(savings_file, &sample::savings_records())?;

            println!(
                "Sample data written to {} and {}.",
                events_path.display(),
                savings_path.display()
            );
        }
    }

    Ok(())
}
