//! linkpost CLI binary.
//!
//! This binary provides command-line access to linkpost:
//! - Serve the HTTP API with scheduled posting
//! - Generate, post and run single cycles by hand
//! - Print engagement analytics for recorded posts

use clap::Parser;
use linkpost::{LinkpostConfig, init_logging};
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cli::{
        Cli, Commands, handle_analytics, handle_generate, handle_post, handle_run_once,
        handle_serve,
    };

    // Variables from .env, if present, before the environment is read
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let _logging = init_logging(cli.verbose, cli.json_logs).map_err(|e| e as Box<dyn std::error::Error>)?;

    let config = LinkpostConfig::load(cli.config.as_deref())?;

    let succeeded = match cli.command {
        Commands::Serve { bind, no_scheduler } => {
            handle_serve(&config, bind, no_scheduler).await?;
            true
        }
        Commands::Generate => handle_generate(&config).await?,
        Commands::Post { content } => handle_post(&config, &content).await?,
        Commands::RunOnce => handle_run_once(&config).await?,
        Commands::Analytics => handle_analytics(&config).await?,
    };

    Ok(if succeeded {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
