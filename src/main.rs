// file: src/main.rs
// description: commandline application entry point and server bootstrap
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use claim_desk::utils::logging::{format_info, format_success, format_warning};
use claim_desk::{AppState, ClaimAnalyzer, Config, PolicyLibrary, Validator, load_policies};
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "claim_desk")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Insurance claim analyzer backed by PDF policy documents", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Address to bind, overrides the config file
    #[arg(long)]
    host: Option<String>,

    /// Port to bind, overrides the config file
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory scanned for policy PDFs, overrides the config file
    #[arg(long, value_name = "DIR")]
    policy_dir: Option<PathBuf>,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    claim_desk::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Claim Desk");
    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::default_config()
    };

    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        Validator::validate_port(port).context("Invalid --port")?;
        config.server.port = port;
    }
    if let Some(dir) = cli.policy_dir {
        config.policies.directory = dir;
    }
    config.validate().context("Invalid configuration")?;

    let policies = load_startup_policies(&config, cli.color)?;
    let state = AppState::new(&config, policies, ClaimAnalyzer::default());

    let bind_addr = config.server.bind_addr();
    let listener = TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;

    claim_desk::serve(listener, state)
        .await
        .context("Server terminated with an error")?;

    info!("Server stopped");
    Ok(())
}

fn load_startup_policies(config: &Config, show_progress: bool) -> Result<PolicyLibrary> {
    let directory = config.policies.directory.display().to_string();
    info!("Loading policy documents from {}", directory);

    let (policies, stats) =
        load_policies(&config.policies, show_progress).context("Failed to load policy documents")?;

    if policies.is_empty() {
        warn!(
            "{}",
            format_warning(&format!("No policy documents found in {}", directory))
        );
    } else {
        info!(
            "{}",
            format_success(&format!(
                "Loaded {} policies ({} failed, {:.0}% success)",
                stats.loaded,
                stats.failed,
                stats.success_rate()
            ))
        );
        for (name, policy) in &policies {
            info!(
                "{}",
                format_info(&format!("{} <- {} ({} chars)", name, policy.filename, policy.length))
            );
        }
    }

    Ok(PolicyLibrary::from_policies(policies))
}
