// src/core/config_manager.rs
//! Configuration: environment selection, optional config.yaml, env overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::FsOps;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_RENDER_COMMAND: &str = "wkhtmltopdf";
const DEFAULT_RENDER_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub struct ConfigManager {
    pub environment: String,
    pub paths: PathsConfig,
    pub port: u16,
    pub renderer: RendererConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
    pub database_path: PathBuf,
    pub output_path: PathBuf,
    pub static_path: PathBuf,
}

/// Which PDF backend the export adapter talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RendererConfig {
    Service { url: String, timeout_seconds: u64 },
    Command { program: String },
}

/// One environment section of config.yaml; every key is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EnvironmentSection {
    pub database_path: Option<PathBuf>,
    pub output_path: Option<PathBuf>,
    pub static_path: Option<PathBuf>,
    pub port: Option<u16>,
    pub render_service_url: Option<String>,
    pub render_timeout_seconds: Option<u64>,
    pub render_command: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: EnvironmentSection,
    #[serde(default)]
    production: EnvironmentSection,
}

/// Values read from the process environment, applied last
#[derive(Debug, Clone, Default)]
pub struct EnvOverrides {
    pub port: Option<u16>,
    pub render_service_url: Option<String>,
    pub render_command: Option<String>,
}

impl EnvOverrides {
    fn from_env() -> Self {
        Self {
            port: std::env::var("ROCKET_PORT").ok().and_then(|p| p.parse().ok()),
            render_service_url: std::env::var("CV_RENDER_SERVICE_URL").ok(),
            render_command: std::env::var("CV_RENDER_COMMAND").ok(),
        }
    }
}

impl ConfigManager {
    /// Load configuration for the current environment
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let base_dir = if environment == "production" {
            PathBuf::from("/app")
        } else {
            std::env::current_dir().context("Failed to get current directory")?
        };

        let section = Self::load_file_section(&base_dir.join("config.yaml"), &environment)?;
        Ok(Self::resolve(
            environment,
            &base_dir,
            section,
            EnvOverrides::from_env(),
        ))
    }

    fn get_environment() -> String {
        std::env::var("CV_EDITOR_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    /// Missing file is fine, a malformed one is not
    fn load_file_section(path: &Path, environment: &str) -> Result<EnvironmentSection> {
        if !path.exists() {
            return Ok(EnvironmentSection::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let file: ConfigFile = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        info!("Loaded {}", path.display());
        Ok(match environment {
            "production" => file.production,
            _ => file.local,
        })
    }

    /// Merge defaults, the file section and env overrides, in that order
    pub fn resolve(
        environment: String,
        base_dir: &Path,
        section: EnvironmentSection,
        overrides: EnvOverrides,
    ) -> Self {
        let path = |value: Option<PathBuf>, default: &str| {
            FsOps::normalize_path(base_dir, &value.unwrap_or_else(|| PathBuf::from(default)))
        };

        let paths = PathsConfig {
            database_path: path(section.database_path, "cv_editor.db"),
            output_path: path(section.output_path, "out"),
            static_path: path(section.static_path, "static"),
        };

        let service_url = overrides.render_service_url.or(section.render_service_url);
        let command = overrides.render_command.or(section.render_command);
        let renderer = match (service_url, command) {
            (Some(url), _) => RendererConfig::Service {
                url,
                timeout_seconds: section
                    .render_timeout_seconds
                    .unwrap_or(DEFAULT_RENDER_TIMEOUT_SECS),
            },
            (None, program) => RendererConfig::Command {
                program: program.unwrap_or_else(|| DEFAULT_RENDER_COMMAND.to_string()),
            },
        };

        Self {
            environment,
            paths,
            port: overrides.port.or(section.port).unwrap_or(DEFAULT_PORT),
            renderer,
        }
    }

    /// Ensure all required directories exist
    pub async fn ensure_directories(&self) -> Result<()> {
        FsOps::ensure_dir_exists(&self.paths.output_path).await?;

        if let Some(db_parent) = self.paths.database_path.parent() {
            FsOps::ensure_dir_exists(db_parent).await?;
        }

        Ok(())
    }
}
