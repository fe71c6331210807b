//! CLI administration tool for user-registry.
//!
//! Provides commands for managing API tokens and performing database
//! checks without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new API token
//! cargo run --bin admin -- token create
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke "Production API"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required): HMAC key; must match the server's
//!
//! # Features
//!
//! - **Token Management**: Create, list, and revoke API tokens
//! - **Database Tools**: Connection checks and info queries
//! - **Interactive Prompts**: Confirmation dialogs via `dialoguer`
//! - **Colored Output**: Terminal-friendly formatting using `colored` crate

use user_registry::application::services::auth_service::hash_token;
use user_registry::domain::repositories::TokenRepository;
use user_registry::infrastructure::persistence::PgTokenRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing user-registry.
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
    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token
    Create {
        /// Token name (e.g., "Production API", "Mobile App")
        #[arg(short, long)]
        name: Option<String>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Name of the token to revoke
        name: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgTokenRepository::new(Arc::new(pool.clone())));

    match action {
        TokenAction::Create { name, token, yes } => {
            create_token(repo, name, token, yes).await?;
        }
        TokenAction::List => {
            list_tokens(repo).await?;
        }
        TokenAction::Revoke { name } => {
            revoke_token(repo, name).await?;
        }
    }

    Ok(())
}

/// Creates a new API token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for token name (or use provided)
/// 2. Generate random token or use provided value
/// 3. Display token details with warning
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Hash token with HMAC-SHA256 under `TOKEN_SIGNING_SECRET`
/// 6. Store in database
/// 7. Display usage instructions
///
/// # Security
///
/// - Only the HMAC hash is stored in the database
/// - Raw token is displayed once and cannot be retrieved later
/// - Tokens are 48 characters (alphanumeric) for high entropy
async fn create_token(
    repo: Arc<PgTokenRepository>,
    name: Option<String>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    let signing_secret =
        std::env::var("TOKEN_SIGNING_SECRET").context("TOKEN_SIGNING_SECRET must be set")?;

    println!("{}", "🔑 Create API Token".bright_blue().bold());
    println!();

    // Get token name
    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text("Production API")
            .interact_text()?,
    };

    // Generate or use provided token
    let token_value = match token {
        Some(t) => {
            println!("{}", "⚠️  Using provided token value".yellow());
            t
        }
        None => {
            let generated = generate_token();
            println!("{}", "✨ Generated new token".green());
            generated
        }
    };

    // Show token details
    println!();
    println!("{}", "Token details:".bright_white().bold());
    println!("  Name:  {}", token_name.cyan());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    // Confirm
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let token_hash = hash_token(&signing_secret, &token_value);

    repo.create_token(&token_name, &token_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    println!("{}", "Add this to your requests:".bright_white());
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        token_value.bright_yellow()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/users",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all API tokens with status indicators.
///
/// # Output Format
///
/// ```text
/// 📋 API Tokens
///
///   ID  Name                           Created              Status
///   ───────────────────────────────────────────────────────────────
///   1   Production API                 2026-01-15 10:30     ACTIVE
///   2   Mobile App                     2026-01-16 14:20     REVOKED
/// ```
async fn list_tokens(repo: Arc<PgTokenRepository>) -> Result<()> {
    println!("{}", "📋 API Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for token in &tokens {
        let status = if token.revoked_at.is_some() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<3} {:<30} {:<20} {}",
            token.id.to_string().bright_black(),
            token.name.cyan(),
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a token by name with confirmation prompt.
///
/// # Safety
///
/// - Requires confirmation (default: No)
/// - Prevents double-revocation
async fn revoke_token(repo: Arc<PgTokenRepository>, name: String) -> Result<()> {
    println!("{}", "🔒 Revoke API Token".bright_blue().bold());
    println!();

    let token = repo
        .find_by_name(&name)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    let token = token.context("Token not found")?;

    if token.revoked_at.is_some() {
        println!("{}", "⚠️  This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "✅ Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
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

            let users_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!(
                "  Users:      {}",
                users_count.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Generates a cryptographically random token.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
/// - Entropy: ~286 bits
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
