// src/export/renderer.rs
//! HTML-to-PDF backends

use anyhow::{Context, Result};
use rocket::async_trait;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::process::Command;
use tracing::{debug, error, info};

use crate::core::{FsOps, RendererConfig};
use crate::types::PaperSize;

const RENDER_ENDPOINT: &str = "/render";

#[async_trait]
pub trait DocumentRenderer: Send + Sync {
    /// Turn a standalone HTML document into PDF bytes for one paper size
    async fn render(&self, html: &str, paper: PaperSize) -> Result<Vec<u8>>;
}

/// Build the backend selected in configuration
pub fn from_config(config: &RendererConfig, output_dir: PathBuf) -> Result<Box<dyn DocumentRenderer>> {
    Ok(match config {
        RendererConfig::Service {
            url,
            timeout_seconds,
        } => Box::new(ServiceRenderer::new(url.clone(), *timeout_seconds)?),
        RendererConfig::Command { program } => {
            Box::new(CommandRenderer::new(program.clone(), output_dir))
        }
    })
}

// ===== Remote service =====

#[derive(Debug, Serialize)]
struct PageSpec<'a> {
    format: &'a str,
    width: f32,
    height: f32,
    unit: &'a str,
}

#[derive(Debug, Serialize)]
struct RenderRequest<'a> {
    html: &'a str,
    page: PageSpec<'a>,
}

pub struct ServiceRenderer {
    client: reqwest::Client,
    base_url: String,
}

impl ServiceRenderer {
    pub fn new(base_url: String, timeout_seconds: u64) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl DocumentRenderer for ServiceRenderer {
    async fn render(&self, html: &str, paper: PaperSize) -> Result<Vec<u8>> {
        let url = format!("{}{}", self.base_url, RENDER_ENDPOINT);
        let geometry = paper.geometry();
        let payload = RenderRequest {
            html,
            page: PageSpec {
                format: paper.code(),
                width: geometry.width,
                height: geometry.height,
                unit: geometry.unit,
            },
        };

        info!("Calling PDF render service: {}", url);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .context("Failed to call PDF render service")?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Render service error response: {}", error_text);
            anyhow::bail!("Service returned error status {}: {}", status, error_text);
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read PDF from render service")?;
        Ok(bytes.to_vec())
    }
}

// ===== Local command =====

static SCRATCH_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Runs an HTML-to-PDF program (wkhtmltopdf-compatible arguments) on a scratch file
pub struct CommandRenderer {
    program: String,
    work_dir: PathBuf,
}

impl CommandRenderer {
    pub fn new(program: String, work_dir: PathBuf) -> Self {
        Self { program, work_dir }
    }

    fn scratch_paths(&self) -> (PathBuf, PathBuf) {
        let stem = format!(
            "export_{}_{}",
            std::process::id(),
            SCRATCH_COUNTER.fetch_add(1, Ordering::Relaxed)
        );
        (
            self.work_dir.join(format!("{}.html", stem)),
            self.work_dir.join(format!("{}.pdf", stem)),
        )
    }
}

#[async_trait]
impl DocumentRenderer for CommandRenderer {
    async fn render(&self, html: &str, paper: PaperSize) -> Result<Vec<u8>> {
        let (html_path, pdf_path) = self.scratch_paths();
        FsOps::write_file_safe(&html_path, html.as_bytes()).await?;

        let mut cmd = Command::new(&self.program);
        cmd.arg("--quiet")
            .arg("--page-size")
            .arg(paper.page_size_name())
            .args(["--margin-top", "0", "--margin-bottom", "0"])
            .args(["--margin-left", "0", "--margin-right", "0"])
            .arg(&html_path)
            .arg(&pdf_path);

        debug!("Running {:?}", cmd);
        let output = cmd.output().await;
        FsOps::remove_file_quiet(&html_path).await;

        let pdf = match output {
            Ok(output) if output.status.success() => FsOps::read_bytes(&pdf_path).await,
            Ok(output) => Err(anyhow::anyhow!(
                "{} failed: stderr={}, stdout={}",
                self.program,
                String::from_utf8_lossy(&output.stderr),
                String::from_utf8_lossy(&output.stdout)
            )),
            Err(e) => Err(anyhow::Error::new(e)
                .context(format!("Failed to execute {} command", self.program))),
        };

        // A failed run can still leave a partial PDF behind
        FsOps::remove_file_quiet(&pdf_path).await;
        pdf
    }
}
