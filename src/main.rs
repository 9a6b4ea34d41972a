use anyhow::Result;
use clap::Parser;
use tictac::cli::{App, Cli, Commands};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let app = App::new()?;

    // Initialize tracing, RUST_LOG wins over the configured filter
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&app.config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::New => {
            let status = app.handle_new()?;
            info!("Created game {}", status.id());
        }
        Commands::Play { moves, json } => match app.handle_play(&moves, json).await {
            Ok(summary) => {
                info!(
                    "Game {}: {} move(s) accepted, {} refused",
                    summary.game_id,
                    summary.pushed.len(),
                    summary.rejected.len()
                );
            }
            Err(e) => {
                error!("Replay failed: {:#}", e);
                return Err(e);
            }
        },
        Commands::Config => app.handle_config()?,
    }

    Ok(())
}
