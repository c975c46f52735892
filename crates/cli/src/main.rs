//! Verdant CLI - browse the plant catalog and manage your collection.
//!
//! # Usage
//!
//! ```bash
//! # Create an account (logs you in)
//! verdant auth register -n "Flora" -e flora@example.com -p Gr0wing
//!
//! # Browse the catalog
//! verdant catalog list
//! verdant catalog featured
//!
//! # Manage your collection (requires login)
//! verdant plants add --name "Aloe Vera" --category succulent \
//!     --image-url https://example.com/aloe.jpg --watering-frequency "Every two weeks"
//! verdant plants list
//! verdant plants remove 1721049600000
//!
//! # Look up any plant, yours or the catalog's
//! verdant show 5
//! ```
//!
//! # Environment Variables
//!
//! - `VERDANT_PROFILE_DIR` - Profile directory (default: `~/.verdant`)
//! - `VERDANT_CATALOG_PATH` - JSON file replacing the built-in catalog
//! - `VERDANT_LOG` - Log filter directive (default: `warn`)

#![cfg_attr(not(test), forbid(unsafe_code))]
// User-visible output goes to stdout/stderr by design.
#![allow(clippy::print_stdout, clippy::print_stderr)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use verdant_tracker::AppError;

mod commands;

#[derive(Parser)]
#[command(name = "verdant")]
#[command(author, version, about = "Plant catalog and personal collection tracker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register, log in and out, show the current session
    Auth {
        #[command(subcommand)]
        action: commands::auth::AuthAction,
    },
    /// Browse the plant catalog
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogAction,
    },
    /// Manage your personal collection (requires login)
    Plants {
        #[command(subcommand)]
        action: commands::plants::PlantsAction,
    },
    /// Show details for a plant, yours or the catalog's
    Show {
        /// Plant id
        id: String,
    },
}

fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("VERDANT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::debug!(error = %e, "Command failed");
        eprintln!("{}", e.user_message());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Auth { action } => commands::auth::run(action),
        Commands::Catalog { action } => commands::catalog::run(action),
        Commands::Plants { action } => commands::plants::run(action),
        Commands::Show { id } => commands::show::run(&id),
    }
}
