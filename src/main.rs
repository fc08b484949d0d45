mod auth;
mod cli;
mod error;
mod providers;
mod render;
mod stats;
mod streak;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting streakcard - contribution streak cards");
    cli.execute().await?;

    Ok(())
}
