//! Kitep CLI - browse, search and download books from the university library

mod commands;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use kitep_client::HttpLibraryClient;
use kitep_core::Locale;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Backend used when neither --api-url nor KITEP_API_URL is given.
const DEFAULT_API_URL: &str = "https://su-library-back-d2d8d21af2e4.herokuapp.com/api";

/// Parse and validate the language argument
fn parse_locale(s: &str) -> Result<Locale, String> {
    Locale::from_code(s)
        .ok_or_else(|| format!("'{}' is not a supported language (ru, kg, en)", s))
}

#[derive(Parser)]
#[command(name = "kitep")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// API base URL (default: $KITEP_API_URL, then the university backend)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Interface language
    #[arg(short, long, global = true, default_value = "ru", value_parser = parse_locale)]
    lang: Locale,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List books, optionally searched and filtered by category
    Books {
        /// Free-text search over titles, authors and descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Category id to filter by; repeat for several categories
        #[arg(short, long = "category")]
        categories: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the available categories
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Display one book in detail
    Show {
        /// Book identifier
        id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Download a book's file
    Download {
        /// Book identifier
        id: String,

        /// Target path (default: derived from the localized title)
        #[arg(short, long)]
        output: Option<std::path::PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "kitep_cli=debug,kitep_client=debug,kitep_core=debug"
    } else {
        "kitep_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_url = cli
        .api_url
        .or_else(|| std::env::var("KITEP_API_URL").ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let client = HttpLibraryClient::new(&api_url)
        .with_context(|| format!("invalid API base URL: {}", api_url))?;

    match cli.command {
        Commands::Books {
            search,
            categories,
            json,
        } => commands::books(&client, cli.lang, search, categories, json).await,

        Commands::Categories { json } => commands::categories(&client, cli.lang, json).await,

        Commands::Show { id, json } => commands::show(&client, cli.lang, &id, json).await,

        Commands::Download { id, output } => {
            commands::download(&client, cli.lang, &id, output).await
        }
    }
}
