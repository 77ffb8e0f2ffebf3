//! CLI administration tool for medical-records.
//!
//! Provides commands for bootstrapping and managing users, viewing table
//! statistics, and performing database checks without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create the first user (password is prompted)
//! cargo run --bin admin -- user create admin
//!
//! # List all users
//! cargo run --bin admin -- user list
//!
//! # Block or re-enable login
//! cargo run --bin admin -- user deactivate admin
//! cargo run --bin admin -- user activate admin
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`: PostgreSQL connection string
//! - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`: used when
//!   `DATABASE_URL` is not set, same as the server

use medical_records::api::dto::user::CreateUserRequest;
use medical_records::application::services::UserService;
use medical_records::config::Config;
use medical_records::domain::entities::User;
use medical_records::domain::repositories::UserRepository;
use medical_records::infrastructure::persistence::PgUserRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Password};
use sqlx::PgPool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing medical-records.
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
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show row counts per table
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a new user
    Create {
        username: String,

        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all users
    List,

    /// Block a user from logging in
    Deactivate {
        /// Username or ID
        name_or_id: String,
    },

    /// Allow a deactivated user to log in again
    Activate {
        /// Username or ID
        name_or_id: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info and applied migrations
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgUserRepository::new(Arc::new(pool.clone())));

    match action {
        UserAction::Create {
            username,
            password,
            yes,
        } => create_user(repo, username, password, yes).await?,
        UserAction::List => list_users(repo).await?,
        UserAction::Deactivate { name_or_id } => set_active(repo, &name_or_id, false).await?,
        UserAction::Activate { name_or_id } => set_active(repo, &name_or_id, true).await?,
    }

    Ok(())
}

/// Creates a user, hashing the password with the same routine the API uses.
async fn create_user(
    repo: Arc<PgUserRepository>,
    username: String,
    password: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "👤 Create User".bright_blue().bold());
    println!();

    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    let request = new_user_request(username, password)?;
    let username = request.username;

    println!("  Username: {}", username.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this user?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let service = UserService::new(repo);
    let user = service
        .create_user(username, &request.password)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ User created successfully!".green().bold(),
        user.id.to_string().bright_white()
    );
    println!();
    println!("{}", "Log in with:".bright_white());
    println!(
        "  curl -X POST http://localhost:3000/login -H 'Content-Type: application/json' -d '{{\"user\":\"{}\",\"password\":\"...\"}}'",
        user.username.bright_yellow()
    );
    println!();

    Ok(())
}

/// Applies the same rules as `POST /users` before touching the database.
fn new_user_request(username: String, password: String) -> Result<CreateUserRequest> {
    let request = CreateUserRequest { username, password };

    request
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid user: {}", e))?;

    Ok(request)
}

/// Lists all users with status indicators.
///
/// ```text
///   ID  Username                       Created              Status
///   ───────────────────────────────────────────────────────────────────────────
///   1   admin                          2024-01-15 10:30     ACTIVE
/// ```
async fn list_users(repo: Arc<PgUserRepository>) -> Result<()> {
    println!("{}", "📋 Users".bright_blue().bold());
    println!();

    let users = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        println!();
        println!(
            "  Create one with: {} admin user create <username>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<3} {:<30} {:<20} {:<10}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for user in &users {
        let status = if user.is_active {
            "ACTIVE".green()
        } else {
            "INACTIVE".red()
        };

        println!(
            "  {:<3} {:<30} {:<20} {}",
            user.id.to_string().bright_black(),
            user.username.cyan(),
            user.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Looks a user up by numeric ID first, then by exact username.
async fn find_user(repo: &PgUserRepository, name_or_id: &str) -> Result<User> {
    let user = match name_or_id.parse::<i64>() {
        Ok(id) => repo
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => repo
            .find_by_username(name_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    user.context("User not found")
}

/// Toggles the `is_active` flag. Deactivation asks for confirmation.
async fn set_active(repo: Arc<PgUserRepository>, name_or_id: &str, active: bool) -> Result<()> {
    let user = find_user(&repo, name_or_id).await?;

    if user.is_active == active {
        let state = if active { "active" } else { "inactive" };
        println!("{}", format!("⚠️  User is already {state}").yellow());
        return Ok(());
    }

    println!("  User: {}", user.username.cyan());
    println!("  ID:   {}", user.id.to_string().bright_black());
    println!();

    if !active {
        let confirmed = Confirm::new()
            .with_prompt("Deactivate this user?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    UserService::new(repo)
        .set_active(user.id, active)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to update user: {}", e))?;

    let done = if active {
        "✅ User activated"
    } else {
        "✅ User deactivated"
    };
    println!("{}", done.green().bold());
    println!();

    Ok(())
}

/// Displays row counts for every table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let tables = [
        ("Users", "users"),
        ("Patients", "patients"),
        ("Records", "records"),
        ("Obstetric", "records_obst"),
        ("Payments", "pays"),
    ];

    for (label, table) in tables {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .with_context(|| format!("Failed to count {table}"))?;

        println!(
            "  {:<12} {}",
            format!("{label}:"),
            count.to_string().bright_green().bold()
        );
    }

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

            println!("  PostgreSQL: {}", version.bright_white());

            let migrations: Vec<(i64, String)> = sqlx::query_as(
                "SELECT version, description FROM _sqlx_migrations ORDER BY version",
            )
            .fetch_all(pool)
            .await
            .unwrap_or_default();

            if migrations.is_empty() {
                println!("  Migrations: {}", "none applied".yellow());
            } else {
                println!("  Migrations:");
                for (version, description) in migrations {
                    println!(
                        "    {} {}",
                        version.to_string().bright_black(),
                        description.cyan()
                    );
                }
            }
            println!();
        }
    }

    Ok(())
}
