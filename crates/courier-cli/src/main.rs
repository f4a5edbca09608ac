//! Courier CLI - Preview and replay service hook events
//!
//! Format captured Azure DevOps events locally, or post them to a deployed
//! relay to check credentials and delivery end to end.

mod api;
mod config;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{Input, Password};
use std::fs;
use tracing_subscriber::EnvFilter;

use api::RelayClient;
use config::Config;
use courier::{Credentials, EventFormatter, InboundEvent, RelayConfig};

#[derive(Parser)]
#[command(name = "courier")]
#[command(about = "Courier CLI - preview and replay Azure DevOps service hooks", long_about = None)]
#[command(version)]
struct Cli {
    /// Show formatter and client logs
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format an event file locally and print the chat card
    Preview {
        /// Path to a service hook JSON payload
        file: String,
        /// Mention that gates comment notifications (defaults to ADO_MENTION_TAG)
        #[arg(short, long)]
        mention: Option<String>,
    },

    /// Post an event file to a relay
    Send {
        /// Path to a service hook JSON payload
        file: String,
        /// Relay base URL (defaults to the stored one)
        #[arg(long)]
        url: Option<String>,
        /// Basic auth username (defaults to the stored one)
        #[arg(short, long)]
        user: Option<String>,
        /// Basic auth password (will prompt if not provided)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// Store relay URL and username
    Login {
        /// Relay base URL (will prompt if not provided)
        #[arg(long)]
        url: Option<String>,
        /// Basic auth username (will prompt if not provided)
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Preview { file, mention } => cmd_preview(file, mention),
        Commands::Send { file, url, user, password } => cmd_send(file, url, user, password).await,
        Commands::Login { url, user } => cmd_login(url, user).await,
        Commands::Config => cmd_config(),
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

// ============================================
// Command Implementations
// ============================================

fn cmd_preview(file: String, mention: Option<String>) -> Result<()> {
    dotenvy::dotenv().ok();

    let body = fs::read(&file).with_context(|| format!("Failed to read file: {}", file))?;
    let event = InboundEvent::from_slice(&body)
        .with_context(|| format!("{} is not valid JSON", file))?;

    let mut relay_config = RelayConfig::from_env();
    if let Some(tag) = mention {
        relay_config = relay_config.with_mention_tag(tag);
    }
    let formatter = EventFormatter::from_config(&relay_config);

    eprintln!(
        "{} {} {}",
        "Event:".dimmed(),
        event.event_type().cyan(),
        if event.kind().is_recognized() { "(recognized)".green() } else { "(ignored)".yellow() }
    );

    match formatter.format(&event) {
        Some(message) => {
            let json = serde_json::to_string_pretty(&message).context("Failed to serialize card")?;
            println!("{}", json);
        }
        None => {
            eprintln!(
                "{} No notification required (mention: {})",
                "-".yellow(),
                formatter.mention_tag().cyan()
            );
        }
    }

    Ok(())
}

async fn cmd_send(
    file: String,
    url: Option<String>,
    user: Option<String>,
    password: Option<String>,
) -> Result<()> {
    let config = Config::load()?;
    let base_url = config.resolve_url(url);
    let username = config
        .resolve_username(user)
        .context("No username given. Use --user or run 'courier login' first.")?;

    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt(format!("Password for {}", username))
            .interact()
            .context("Failed to read password")?,
    };

    let body = fs::read_to_string(&file).with_context(|| format!("Failed to read file: {}", file))?;

    tracing::debug!(url = %base_url, user = %username, file = %file, "Posting event to relay");

    let client = RelayClient::new(&base_url);
    let (status, reply) = client
        .send_event(&Credentials::new(username, password), body)
        .await?;

    let code = status.as_u16().to_string();
    let code = if status.is_success() { code.green() } else { code.red() };
    println!("[{}] {} {}", code, reply.status.bold(), reply.message);

    if !status.is_success() {
        bail!("Relay returned {}", status);
    }

    Ok(())
}

async fn cmd_login(url: Option<String>, user: Option<String>) -> Result<()> {
    let mut config = Config::load()?;

    let base_url = match url {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Relay URL")
            .default(config.base_url.clone())
            .interact_text()
            .context("Failed to read relay URL")?,
    };

    let username = match user {
        Some(u) => u,
        None => Input::new()
            .with_prompt("Username")
            .interact_text()
            .context("Failed to read username")?,
    };

    let client = RelayClient::new(&base_url);
    print!("Testing connection... ");

    match client.health().await {
        Ok(true) => println!("{}", "OK".green()),
        _ => {
            println!("{}", "Failed".red());
            bail!("Could not reach relay at {}", base_url);
        }
    }

    config.base_url = base_url;
    config.username = Some(username);
    config.save()?;

    println!("{} Saved to {:?}", "✓".green(), Config::config_path()?);

    Ok(())
}

fn cmd_config() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    let relay = RelayConfig::from_env();

    println!("{}", "Configuration:".bold());
    println!("  Path: {:?}", Config::config_path()?);
    println!("  Relay URL: {}", config.base_url);
    println!("  Username: {}", config.username.as_deref().unwrap_or("Not set").cyan());
    println!("{}", "Local formatter:".bold());
    println!("  Mention: {}", relay.mention_tag.cyan());
    println!(
        "  Chat webhook: {}",
        if relay.chat_webhook_url.is_some() { "Set".green() } else { "Not set".red() }
    );

    Ok(())
}
