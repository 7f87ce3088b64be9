mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use schedule_core::EventStore;
use schedule_core::config::ScheduleConfig;
use schedule_core::days::parse_date;
use schedule_core::view::ViewMode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "schedule")]
#[command(about = "Day, week and month views of your schedule")]
struct Cli {
    /// Config file (defaults to ~/.config/schedule/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show debug logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Events of a single day with their grid positions
    Day {
        /// Day to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// The Sunday-to-Saturday week containing a date
    Week {
        /// Any day in the week (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// The 6-week month grid containing a date
    Month {
        /// Any day in the month (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// The configured default view
    View {
        #[arg(short, long)]
        date: Option<String>,
    },
    /// The 24 hour rows of the day and week grids
    Slots,
    /// Add an event to this session and show its day
    New {
        title: String,

        /// Start date/time (e.g., "2025-01-20T09:00")
        #[arg(short, long)]
        start: String,

        /// End date/time (e.g., "2025-01-20T10:00")
        #[arg(short, long, conflicts_with = "duration")]
        end: Option<String>,

        /// Length instead of an end (e.g., "30m", "1h 30m")
        #[arg(long)]
        duration: Option<String>,

        /// Category name or id (Work, Personal, Health, Social, Important)
        #[arg(short, long)]
        category: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        all_day: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    let config = match &cli.config {
        Some(path) => ScheduleConfig::load_from(path),
        None => ScheduleConfig::load(),
    }
    .context("Failed to load configuration")?;

    let mut store = if config.seed {
        EventStore::with_seed_events()
    } else {
        EventStore::new()
    };

    match cli.command {
        Some(Commands::Day { date, json }) => {
            commands::view::run(&store, &config, ViewMode::Day, resolve_date(date)?, json)
        }
        Some(Commands::Week { date, json }) => {
            commands::view::run(&store, &config, ViewMode::Week, resolve_date(date)?, json)
        }
        Some(Commands::Month { date, json }) => {
            commands::view::run(&store, &config, ViewMode::Month, resolve_date(date)?, json)
        }
        Some(Commands::View { date }) => {
            commands::view::run(&store, &config, config.default_view, resolve_date(date)?, false)
        }
        None => commands::view::run(&store, &config, config.default_view, today(), false),
        Some(Commands::Slots) => commands::slots::run(&config),
        Some(Commands::New {
            title,
            start,
            end,
            duration,
            category,
            description,
            all_day,
        }) => {
            let args = commands::new::NewArgs {
                title,
                start,
                end,
                duration,
                category,
                description,
                all_day,
            };
            commands::new::run(&mut store, &config, args)
        }
    }
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).context("Failed to set up logging")?;
    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn resolve_date(date: Option<String>) -> Result<NaiveDate> {
    match date {
        Some(s) => Ok(parse_date(&s)?),
        None => Ok(today()),
    }
}
