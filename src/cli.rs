// src/cli.rs
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

use crate::core::{ConfigManager, DocumentStore, FsOps, SqliteStore};
use crate::state::AppState;
use crate::utils::json_export_file_name;
use crate::web::start_web_server;

#[derive(Parser)]
#[command(name = "cv-editor")]
#[command(about = "Browser-based résumé editor with live preview and PDF export")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the editor web server (default)
    Serve,
    /// Write the stored document as JSON
    ExportJson {
        /// Destination file; defaults to cv_data_<millis>.json in the output directory
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Replace the stored document with a JSON file
    ImportJson { file: PathBuf },
    /// Replace the stored document with the placeholder template
    Reset,
}

async fn open_session(config: &ConfigManager) -> Result<AppState> {
    config.ensure_directories().await?;
    let store = SqliteStore::new(&config.paths.database_path).await?;
    Ok(AppState::bootstrap(DocumentStore::new(Arc::new(store))).await)
}

pub async fn handle_command(cli: Cli, config: ConfigManager) -> Result<()> {
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => start_web_server(config).await,

        Command::ExportJson { output } => {
            let state = open_session(&config).await?;
            let path = output.unwrap_or_else(|| {
                config
                    .paths
                    .output_path
                    .join(json_export_file_name(chrono::Utc::now()))
            });
            FsOps::write_file_safe(&path, state.export_json().as_bytes()).await?;
            info!("Exported CV data to {}", path.display());
            Ok(())
        }

        Command::ImportJson { file } => {
            let text = FsOps::read_file_safe(&file).await?;
            let mut state = open_session(&config).await?;
            state
                .import_json(&text)
                .await
                .with_context(|| format!("Failed to import {}", file.display()))?;
            info!("Imported CV data from {}", file.display());
            Ok(())
        }

        Command::Reset => {
            let mut state = open_session(&config).await?;
            state.reset_to_template().await;
            info!("Stored CV data reset to template");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::try_parse_from(["cv-editor"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_subcommands_parse() {
        let cli = Cli::try_parse_from(["cv-editor", "export-json", "--output", "cv.json"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::ExportJson { output: Some(ref p) }) if p == &PathBuf::from("cv.json")
        ));

        let cli = Cli::try_parse_from(["cv-editor", "import-json", "in.json"]).unwrap();
        assert!(matches!(cli.command, Some(Command::ImportJson { .. })));

        assert!(Cli::try_parse_from(["cv-editor", "import-json"]).is_err());
    }
}
