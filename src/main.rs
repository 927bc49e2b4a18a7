use anyhow::Result;
use clap::Parser;
use cv_editor::cli::{handle_command, Cli};
use cv_editor::core::ConfigManager;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

#[tokio::main]
async fn main() -> Result<()> {
    Registry::default()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("cv_editor=info,rocket::server=off")),
        )
        .init();

    let cli = Cli::parse();
    let config = ConfigManager::load()?;

    info!("Environment: {}", config.environment);
    info!("Database: {}", config.paths.database_path.display());

    handle_command(cli, config).await
}
