//! CLI administration tool for warehouse-loader.
//!
//! Registers trucks and packages, runs assignments and checks the database
//! without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Register a truck (prompts for missing dimensions)
//! cargo run --bin admin -- truck add --length 10 --width 2 --height 2
//!
//! # List trucks that can still be loaded
//! cargo run --bin admin -- truck list --available
//!
//! # Register a package
//! cargo run --bin admin -- package add -l 4 -w 1 -H 1
//!
//! # Assign packages with the volume best-fit strategy
//! cargo run --bin admin -- assign <id> <id> --strategy volume-best-fit
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `ASSIGNMENT_STRATEGY`, `BEST_FIT_MIN_UTILIZATION`: engine defaults, as for the server

use warehouse_loader::AppState;
use warehouse_loader::domain::assignment::{
    AssignmentEngine, AssignmentPlan, DEFAULT_MIN_UTILIZATION, Strategy,
};
use warehouse_loader::domain::dimensions::Dimensions;
use warehouse_loader::infrastructure::persistence::{
    PgAssignmentRepository, PgPackageRepository, PgTruckRepository,
};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing warehouse-loader.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage trucks
    Truck {
        #[command(subcommand)]
        action: TruckAction,
    },

    /// Manage packages
    Package {
        #[command(subcommand)]
        action: PackageAction,
    },

    /// Assign packages to available trucks
    Assign {
        /// Package ids to assign
        #[arg(required = true)]
        package_ids: Vec<String>,

        /// Strategy for this run (defaults to ASSIGNMENT_STRATEGY)
        #[arg(short, long)]
        strategy: Option<Strategy>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum TruckAction {
    /// Register a new truck
    Add(DimensionArgs),

    /// List trucks
    List {
        /// Only trucks that can still be loaded
        #[arg(short, long)]
        available: bool,
    },
}

#[derive(Subcommand)]
enum PackageAction {
    /// Register a new package
    Add(DimensionArgs),
}

/// Dimensions given on the command line; missing ones are prompted for.
#[derive(Args)]
struct DimensionArgs {
    #[arg(short, long)]
    length: Option<f64>,

    #[arg(short, long)]
    width: Option<f64>,

    #[arg(short = 'H', long)]
    height: Option<f64>,
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Truck { action } => handle_truck_action(action, &build_state(pool)?).await?,
        Commands::Package { action } => {
            handle_package_action(action, &build_state(pool)?).await?
        }
        Commands::Assign {
            package_ids,
            strategy,
            yes,
        } => assign(&build_state(pool)?, package_ids, strategy, yes).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Wires the services over PostgreSQL with the engine defaults from env.
fn build_state(pool: PgPool) -> Result<AppState> {
    let strategy = match std::env::var("ASSIGNMENT_STRATEGY") {
        Ok(v) => v.parse().context("Invalid ASSIGNMENT_STRATEGY")?,
        Err(_) => Strategy::LengthFirstFitDecreasing,
    };
    let min_utilization = match std::env::var("BEST_FIT_MIN_UTILIZATION") {
        Ok(v) => v.parse().context("Invalid BEST_FIT_MIN_UTILIZATION")?,
        Err(_) => DEFAULT_MIN_UTILIZATION,
    };

    let pool = Arc::new(pool);
    Ok(AppState::new(
        Arc::new(PgTruckRepository::new(pool.clone())),
        Arc::new(PgPackageRepository::new(pool.clone())),
        Arc::new(PgAssignmentRepository::new(pool)),
        AssignmentEngine::new(strategy).with_min_utilization(min_utilization),
        "postgres",
    ))
}

async fn handle_truck_action(action: TruckAction, state: &AppState) -> Result<()> {
    match action {
        TruckAction::Add(args) => {
            println!("{}", "🚚 Register Truck".bright_blue().bold());
            println!();

            let dimensions = prompt_dimensions(args)?;
            let truck = state
                .truck_service
                .create_truck(dimensions)
                .await
                .context("Failed to create truck")?;

            println!();
            println!("{}", "✅ Truck registered".green().bold());
            println!("  ID:     {}", truck.id.bright_yellow());
            println!("  Volume: {}", truck.volume.to_string().cyan());
            println!();
        }
        TruckAction::List { available } => list_trucks(state, available).await?,
    }

    Ok(())
}

async fn handle_package_action(action: PackageAction, state: &AppState) -> Result<()> {
    match action {
        PackageAction::Add(args) => {
            println!("{}", "📦 Register Package".bright_blue().bold());
            println!();

            let dimensions = prompt_dimensions(args)?;
            let package = state
                .package_service
                .create_package(dimensions)
                .await
                .context("Failed to create package")?;

            println!();
            println!("{}", "✅ Package registered".green().bold());
            println!("  ID:     {}", package.id.bright_yellow());
            println!("  Volume: {}", package.volume.to_string().cyan());
            println!();
        }
    }

    Ok(())
}

/// Fills in missing dimensions interactively and validates all three.
fn prompt_dimensions(args: DimensionArgs) -> Result<Dimensions> {
    let length = match args.length {
        Some(v) => v,
        None => Input::new().with_prompt("Length").interact_text()?,
    };
    let width = match args.width {
        Some(v) => v,
        None => Input::new().with_prompt("Width").interact_text()?,
    };
    let height = match args.height {
        Some(v) => v,
        None => Input::new().with_prompt("Height").interact_text()?,
    };

    Ok(Dimensions::new(length, width, height)?)
}

/// Lists trucks in retrieval order.
///
/// # Output Format
///
/// ```text
/// 📋 Trucks
///
///   ID                                     Length  Width   Height  Volume    Status
///   ─────────────────────────────────────────────────────────────────────────────────
///   0b5c9a7e-5b8f-4f8e-9f51-2a1c0f3d9e11   10      2       2       40        AVAILABLE
/// ```
async fn list_trucks(state: &AppState, only_available: bool) -> Result<()> {
    println!("{}", "📋 Trucks".bright_blue().bold());
    println!();

    let trucks = state
        .truck_service
        .list_trucks(only_available)
        .await
        .context("Failed to list trucks")?;

    if trucks.is_empty() {
        println!("{}", "  No trucks found".yellow());
        println!();
        println!(
            "  Register one with: {} admin truck add",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<38} {:<7} {:<7} {:<7} {:<9} {}",
        "ID".bright_white().bold(),
        "Length".bright_white().bold(),
        "Width".bright_white().bold(),
        "Height".bright_white().bold(),
        "Volume".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(83).bright_black());

    for truck in &trucks {
        let status = if truck.available {
            "AVAILABLE".green()
        } else {
            "LOADED".red()
        };

        println!(
            "  {:<38} {:<7} {:<7} {:<7} {:<9} {}",
            truck.id.cyan(),
            truck.length,
            truck.width,
            truck.height,
            truck.volume,
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        trucks.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Runs one assignment after confirmation and prints the plan.
async fn assign(
    state: &AppState,
    package_ids: Vec<String>,
    strategy: Option<Strategy>,
    skip_confirm: bool,
) -> Result<()> {
    let strategy = strategy.unwrap_or_else(|| state.assignment_service.default_strategy());

    println!("{}", "🧮 Assign Packages".bright_blue().bold());
    println!();
    println!("  Packages: {}", package_ids.len().to_string().cyan());
    println!("  Strategy: {}", strategy.to_string().cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Run this assignment?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let plan = state
        .assignment_service
        .assign(&package_ids, Some(strategy))
        .await
        .context("Assignment failed")?;

    print_plan(&plan);
    Ok(())
}

fn print_plan(plan: &AssignmentPlan) {
    println!();
    if plan.placed.is_empty() {
        println!("{}", "⚠️  Nothing placed, all packages deferred".yellow().bold());
    } else {
        println!("{}", "✅ Packages assigned".green().bold());
        println!();
        for placement in &plan.placed {
            println!(
                "  {} → {}",
                placement.package_id.cyan(),
                placement.truck_id.bright_yellow()
            );
        }
    }

    if !plan.deferred.is_empty() {
        println!();
        println!("{}", "Deferred:".bright_white().bold());
        for id in &plan.deferred {
            println!("  {}", id.bright_black());
        }
    }

    println!();
    println!(
        "  Trucks used: {}",
        plan.used_trucks.len().to_string().bright_white().bold()
    );
    println!();
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            let trucks: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM trucks WHERE available = TRUE")
                    .fetch_one(pool)
                    .await
                    .context("Schema missing, start the server once to run migrations")?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!(
                "  Available trucks: {}",
                trucks.to_string().bright_green().bold()
            );
        }
    }

    Ok(())
}
