//! CLI administration tool for snaplink.
//!
//! Performs database operations and one-off link operations without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply migrations
//! cargo run --bin admin -- db migrate
//!
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/a
//!
//! # Look up a code
//! cargo run --bin admin -- resolve Xyz12_abC-9q
//! ```
//!
//! Reads the same environment variables as the server (see [`snaplink::config`]).

use snaplink::api::dto::shorten::EXPIRES_FORMAT;
use snaplink::application::services::{RedirectResolver, ShortenService};
use snaplink::config::{self, StorageBackend};
use snaplink::server::{self, MIGRATOR};
use snaplink::utils::code_generator::RandomCodeGenerator;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing snaplink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Create a short link for a URL
    Shorten {
        /// The long URL to shorten
        url: String,
    },

    /// Print the target URL of a short code
    Resolve {
        /// The short code to look up
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &config).await?,
        Commands::Shorten { url } => shorten(&config, &url).await?,
        Commands::Resolve { code } => resolve(&config, &code).await?,
    }

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, config: &config::Config) -> Result<()> {
    if config.storage_backend != StorageBackend::Postgres {
        anyhow::bail!("Database commands require STORAGE_BACKEND=postgres");
    }

    let pool = server::connect_pool(config).await?;

    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").execute(&pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Migrate => {
            println!("{}", "Applying migrations...".bright_blue());

            MIGRATOR
                .run(&pool)
                .await
                .context("Failed to run migrations")?;

            let mappings: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM url_mappings")
                .fetch_one(&pool)
                .await?;

            println!("{}", "Migrations applied".green().bold());
            println!(
                "  Stored mappings: {}",
                mappings.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

/// Creates a mapping through the shortening service and prints it.
async fn shorten(config: &config::Config, url: &str) -> Result<()> {
    let store = server::build_store(config).await?;
    let service = ShortenService::new(store, Arc::new(RandomCodeGenerator), &config.base_url);

    let mapping = service
        .shorten(url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to shorten URL: {}", e))?;

    println!("{}", "Short link created".green().bold());
    println!("  Short URL: {}", mapping.short_url.bright_yellow().bold());
    println!("  Code:      {}", mapping.code.cyan());
    println!("  ID:        {}", mapping.id.to_string().bright_black());
    println!(
        "  Expires:   {}",
        mapping
            .expires_at
            .format(EXPIRES_FORMAT)
            .to_string()
            .bright_black()
    );

    Ok(())
}

/// Resolves a code and prints its target URL.
async fn resolve(config: &config::Config, code: &str) -> Result<()> {
    let store = server::build_store(config).await?;
    let resolver = RedirectResolver::new(store);

    let long_url = resolver
        .resolve(code)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    println!("{} -> {}", code.cyan(), long_url.bright_white());

    Ok(())
}
