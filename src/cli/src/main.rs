//! Apptrack CLI - command-line interface for the job application tracker.
//!
//! Provides commands for managing job applications, viewing stats, editing
//! the profile, and checking server health.

mod client;
mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{config, health, job, profile, stats};
use output::OutputFormat;

/// Apptrack - Job Application Tracker CLI
#[derive(Parser)]
#[command(
    name = "apptrack",
    version = "0.1.0",
    about = "Apptrack - Job Application Tracker",
    long_about = "CLI tool for tracking job applications: create, filter, and analyze them.",
    propagate_version = true
)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, default_value = "table")]
    output: OutputFormat,

    /// API server URL
    #[arg(long, global = true, env = "APPTRACK_API_URL")]
    api_url: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Job application management
    #[command(subcommand)]
    Job(job::JobCommands),

    /// Application statistics
    #[command(subcommand)]
    Stats(stats::StatsCommands),

    /// Profile management
    #[command(subcommand)]
    Profile(profile::ProfileCommands),

    /// Check server health
    Health(health::HealthArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let api_url = cli
        .api_url
        .clone()
        .or_else(config::load_api_url)
        .unwrap_or_else(|| "http://localhost:8080".to_string());

    let client = client::ApiClient::new(&api_url)?;
    let format = cli.output;

    let result = match cli.command {
        Commands::Job(cmd) => job::execute(cmd, &client, format).await,
        Commands::Stats(cmd) => stats::execute(cmd, &client, format).await,
        Commands::Profile(cmd) => profile::execute(cmd, &client, format).await,
        Commands::Health(args) => health::execute(args, &client, format).await,
        Commands::Config(cmd) => config::execute(cmd, format),
    };

    if let Err(e) = result {
        output::print_error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
