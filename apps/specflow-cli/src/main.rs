//! Specflow CLI - Document-driven feature workflow
//!
//! Command-line interface for Specflow, managing feature requirements,
//! design, and task documents through a staged confirmation workflow.

use anyhow::{Context, Result};
use async_trait::async_trait;
use clap::{Parser, Subcommand};
use specflow_core::{ProgressReporter, WorkflowConfig, WorkflowRuntime};
use std::path::PathBuf;
use tracing::{error, info};

/// Specflow - Document-driven feature workflow
///
/// Manages feature development documents through the requirements, design,
/// and tasks stages.
#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Project root directory (defaults to the current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available Specflow commands
#[derive(Subcommand)]
enum Commands {
    /// Initialize the workflow for a feature
    ///
    /// Creates the feature directory, generates the requirements document,
    /// and marks all stages as unconfirmed.
    Init {
        /// Feature name (e.g., "add-caching")
        feature_name: String,

        /// Introduction text for the requirements document
        #[arg(short, long, default_value = "")]
        introduction: String,
    },

    /// Show the current stage and progress of a feature
    Status {
        /// Feature name to inspect
        feature_name: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing subscriber
    init_tracing(cli.verbose);

    // Execute command
    if let Err(e) = run_command(cli.command, cli.path).await {
        // Log with tracing
        error!("Command failed: {:#}", e);
        // Also print to stderr for CLI users
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Initialize tracing subscriber for structured logging
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = if verbose {
        EnvFilter::new("specflow=debug,specflow_core=debug,specflow_doc=debug")
    } else {
        EnvFilter::new("specflow=info,specflow_core=info,specflow_doc=info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true)
        .init();
}

/// Progress reporter that prints checkpoints to the terminal.
struct ConsoleReporter;

#[async_trait]
impl ProgressReporter for ConsoleReporter {
    async fn report(&self, progress: u64, total: u64, message: &str) -> Result<()> {
        println!("[{progress:>3}/{total}] {message}");
        Ok(())
    }
}

/// Execute the specified command
async fn run_command(command: Commands, path: Option<PathBuf>) -> Result<()> {
    let root = project_root(path)?;

    match command {
        Commands::Init {
            feature_name,
            introduction,
        } => {
            info!("Initializing workflow for feature: {}", feature_name);
            run_init(&root, &feature_name, &introduction).await
        }
        Commands::Status { feature_name } => run_status(&root, &feature_name),
    }
}

/// Run the init command
async fn run_init(root: &std::path::Path, feature_name: &str, introduction: &str) -> Result<()> {
    let config = WorkflowConfig::load(root).context("Failed to load configuration")?;
    let runtime = WorkflowRuntime::new(config).context("Failed to create workflow runtime")?;

    let reporter = ConsoleReporter;
    let result = runtime
        .init_feature(feature_name, introduction, Some(&reporter))
        .await;

    if !result.is_success() {
        anyhow::bail!("{}", result.display_text);
    }

    println!("✔ {}", result.display_text.replace('\n', "\n✔ "));
    println!("\nNext steps:");
    println!("  specflow status {feature_name}    Show workflow progress");

    Ok(())
}

/// Run the status command
fn run_status(root: &std::path::Path, feature_name: &str) -> Result<()> {
    let config = WorkflowConfig::load(root).context("Failed to load configuration")?;
    let runtime = WorkflowRuntime::new(config).context("Failed to create workflow runtime")?;

    let (stage, progress) = runtime
        .feature_status(feature_name)
        .context("Failed to read feature status")?;

    println!("Feature:  {feature_name}");
    println!("Stage:    {stage}");
    println!(
        "Progress: {}/{} stages ({}%)",
        progress.completed_stages, progress.total_stages, progress.percent
    );

    Ok(())
}

/// Resolve the project root from the `--path` flag or the current directory
fn project_root(path: Option<PathBuf>) -> Result<PathBuf> {
    match path {
        Some(path) => Ok(path),
        None => std::env::current_dir().context("Failed to get current directory"),
    }
}
