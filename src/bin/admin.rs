//! CLI administration tool for quicklink.
//!
//! Manages links and inspects the database directly, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Create a link with a custom code
//! cargo run --bin admin -- links create https://example.com --code promo24
//!
//! # Delete a link
//! cargo run --bin admin -- links delete promo24
//!
//! # View analytics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` parts): PostgreSQL connection string, required

use quicklink::application::services::LinkService;
use quicklink::config::{self, Config};
use quicklink::infrastructure::persistence::PgLinkRepository;
use quicklink::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing quicklink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show click analytics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum LinkAction {
    /// List all links, newest first
    List,

    /// Create a short link
    Create {
        /// Target URL (prompted for when omitted)
        url: Option<String>,

        /// Custom code, 6-8 alphanumeric characters
        #[arg(short, long)]
        code: Option<String>,
    },

    /// Delete a link by code
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = open_pool(&config).await?;

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn open_pool(config: &Config) -> Result<PgPool> {
    let database_url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = connect_pool(config, database_url).await?;
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;

    Ok(pool)
}

fn link_service(pool: &PgPool) -> LinkService {
    LinkService::new(Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))))
}

async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    let service = link_service(pool);

    match action {
        LinkAction::List => list_links(&service).await?,
        LinkAction::Create { url, code } => create_link(&service, url, code).await?,
        LinkAction::Delete { code, yes } => delete_link(&service, &code, yes).await?,
    }

    Ok(())
}

/// Prints every link as a table.
///
/// ```text
/// 📋 Links
///
///   Code      Clicks  Created           URL
///   ──────────────────────────────────────────────────────────────
///   promo24   12      2026-01-15 10:30  https://example.com
/// ```
async fn list_links(service: &LinkService) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = service
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<9} {:<7} {:<17} {}",
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<9} {:<7} {:<17} {}",
            link.code.cyan(),
            link.clicks.to_string().bright_green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn create_link(
    service: &LinkService,
    url: Option<String>,
    code: Option<String>,
) -> Result<()> {
    println!("{}", "🔗 Create Link".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("Target URL").interact_text()?,
    };

    let link = service
        .create(&url, code.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    println!("  Code: {}", link.code.bright_yellow().bold());
    println!("  URL:  {}", link.url.cyan());
    println!();

    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &LinkService, code: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete Link".bright_blue().bold());
    println!();

    let link = service
        .get(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to look up link: {}", e))?;

    println!("  Code:   {}", link.code.cyan());
    println!("  URL:    {}", link.url);
    println!("  Clicks: {}", link.clicks.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete(code)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete link: {}", e))?;

    println!("{}", "✅ Link deleted".green().bold());
    println!();

    Ok(())
}

/// Displays totals plus the most clicked and newest links.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Analytics".bright_blue().bold());
    println!();

    let analytics = link_service(pool)
        .analytics()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load analytics: {}", e))?;

    println!(
        "  Links:  {}",
        analytics.total_links.to_string().bright_green().bold()
    );
    println!(
        "  Clicks: {}",
        analytics.total_clicks.to_string().bright_green().bold()
    );
    println!();

    if !analytics.top_links.is_empty() {
        println!("{}", "  Top links".bright_white().bold());
        for top in &analytics.top_links {
            println!(
                "    {:<9} {:>6}  {}",
                top.code.cyan(),
                top.clicks.to_string().bright_green(),
                top.url
            );
        }
        println!();
    }

    if !analytics.recent_links.is_empty() {
        println!("{}", "  Recent links".bright_white().bold());
        for recent in &analytics.recent_links {
            println!(
                "    {:<9} {}  {}",
                recent.code.cyan(),
                recent
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black(),
                recent.url
            );
        }
        println!();
    }

    Ok(())
}

async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let links: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Links:      {}", links.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
