use anyhow::{Context, Result};
use clap::Parser;
use ltr_client::{opensearch, LtrClientConfig, LtrExt};
use tracing::{debug, error};

mod cli;
mod commands;
mod logging;

use cli::Cli;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose, cli.json_logs);

    if let Err(e) = run(cli).await {
        error!("Command failed: {}", e);
        eprintln!("Error: {}", e);

        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {}", cause);
        }

        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = LtrClientConfig::from_env().context("Invalid configuration")?;
    if let Some(url) = cli.url {
        config.url = url;
    }
    debug!(url = %config.url, store = ?cli.store, "Resolved configuration");

    let client = opensearch::connect(&config)
        .with_context(|| format!("Failed to create client for {}", config.url))?;

    let response = commands::execute(client.ltr(), cli.store.as_deref(), cli.command).await?;

    if let Some(response) = response {
        println!("{}", serde_json::to_string_pretty(&response)?);
    }
    Ok(())
}
