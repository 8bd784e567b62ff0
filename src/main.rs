mod commands;
mod notify;
mod render;

use std::path::PathBuf;

use agenda_core::config::AgendaConfig;
use agenda_core::{App, Category, SearchField};
use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Record, search and get reminded about your events")]
struct Cli {
    /// Events file to save to and load from (defaults to data_file in config.toml)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session with background reminders (the default)
    Session,
    /// Add an event to the events file
    Add {
        title: String,

        /// Date as dd-MM-yyyy (e.g. "15-03-2024")
        #[arg(short, long)]
        date: String,

        /// Time as HH:mm (e.g. "09:30")
        #[arg(short, long)]
        time: String,

        #[arg(short, long)]
        location: String,

        /// Meeting, Personal, Work or Other
        #[arg(short, long, default_value_t = Category::Meeting)]
        category: Category,
    },
    /// Show every saved event
    List,
    /// Search saved events by title, date or category
    Search {
        /// title, date or category
        field: SearchField,

        keyword: String,
    },
    /// Watch saved events and raise reminders until interrupted
    Watch,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging()?;

    let cli = Cli::parse();
    let config = AgendaConfig::load()?;
    let app = App::new(cli.file.unwrap_or_else(|| config.data_path()));

    match cli.command.unwrap_or(Commands::Session) {
        Commands::Session => commands::session::run(&app, &config).await,
        Commands::Add {
            title,
            date,
            time,
            location,
            category,
        } => commands::add::run(&app, title, date, time, location, category).await,
        Commands::List => commands::list::run(&app).await,
        Commands::Search { field, keyword } => commands::search::run(&app, field, &keyword).await,
        Commands::Watch => commands::watch::run(&app, &config).await,
    }
}

/// Log to stderr, filtered by RUST_LOG (warnings only by default).
fn init_logging() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to set up logging: {}", e))?;

    Ok(())
}
