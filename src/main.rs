mod server;

use clap::{Parser, Subcommand};
use std::sync::Arc;
use waproxy_core::config;
use waproxy_gateway::GreenApiClient;

#[derive(Parser)]
#[command(
    name = "waproxy",
    version,
    about = "Web front-end for the Green API WhatsApp gateway"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server.
    Start,
    /// Print the effective configuration.
    Config,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cfg = config::load(&cli.config)?;

    match cli.command {
        Commands::Start => {
            let gateway = GreenApiClient::new(&cfg.gateway);
            tracing::info!("Relaying to {}", cfg.gateway.base_url);

            let state = server::AppState::new(Arc::new(gateway));
            server::serve(&cfg.server, state).await?;
        }
        Commands::Config => {
            print!("{}", cfg.to_toml()?);
        }
    }

    Ok(())
}
