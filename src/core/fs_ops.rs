// src/core/fs_ops.rs
//! File system helpers shared by config, CLI and the command renderer

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

pub struct FsOps;

impl FsOps {
    pub async fn ensure_dir_exists(path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path)
                .await
                .with_context(|| format!("Failed to create directory: {}", path.display()))?;
            info!("Created directory: {}", path.display());
        }
        Ok(())
    }

    pub async fn read_file_safe(path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    pub async fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        fs::read(path)
            .await
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Write a file, creating its parent directory first
    pub async fn write_file_safe(path: &Path, content: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            Self::ensure_dir_exists(parent).await?;
        }

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write file: {}", path.display()))?;

        info!("Written file: {}", path.display());
        Ok(())
    }

    /// Best effort; a leftover scratch file is not worth failing over
    pub async fn remove_file_quiet(path: &Path) {
        if let Err(e) = fs::remove_file(path).await {
            tracing::debug!("Could not remove {}: {}", path.display(), e);
        }
    }

    pub fn normalize_path(base: &Path, relative: &Path) -> PathBuf {
        if relative.is_absolute() {
            relative.to_path_buf()
        } else {
            base.join(relative)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_path() {
        let base = Path::new("/base");
        assert_eq!(FsOps::normalize_path(base, Path::new("out")), PathBuf::from("/base/out"));
        assert_eq!(FsOps::normalize_path(base, Path::new("/abs")), PathBuf::from("/abs"));
    }

    #[tokio::test]
    async fn test_write_then_read() {
        let dir = std::env::temp_dir().join(format!("cv-editor-fs-{}", std::process::id()));
        let file = dir.join("nested").join("note.txt");

        FsOps::write_file_safe(&file, b"hola").await.unwrap();
        assert_eq!(FsOps::read_file_safe(&file).await.unwrap(), "hola");

        FsOps::remove_file_quiet(&file).await;
        assert!(!file.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
