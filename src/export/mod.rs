// src/export/mod.rs
//! Export adapter: PDF through an external renderer, one export at a time

pub mod icons;
pub mod renderer;

use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{error, info};

use crate::error::EditorError;
use crate::types::PaperSize;
use crate::view::Node;

pub use icons::IconSuppression;
pub use renderer::{CommandRenderer, DocumentRenderer, ServiceRenderer};

/// Styles of the formatted page, shared with the on-screen preview
pub const PREVIEW_CSS: &str = include_str!("../../static/preview.css");

/// Standalone document handed to the renderer
pub fn html_document(preview: &Node, paper: PaperSize) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>CV</title>\n\
         <style>@page {{ size: {}; margin: 0; }}\n{}</style>\n</head>\n<body class=\"export\">{}</body>\n</html>\n",
        paper.code(),
        PREVIEW_CSS,
        preview.to_html()
    )
}

pub struct ExportAdapter {
    renderer: Box<dyn DocumentRenderer>,
    in_progress: AtomicBool,
}

/// Held for the whole export; releases the in-progress flag on drop
pub struct ExportPermit<'a> {
    adapter: &'a ExportAdapter,
}

impl ExportAdapter {
    pub fn new(renderer: Box<dyn DocumentRenderer>) -> Self {
        Self {
            renderer,
            in_progress: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_progress.load(Ordering::Acquire)
    }

    /// Claim the single export slot, failing at once if it is taken
    pub fn begin(&self) -> Result<ExportPermit<'_>, EditorError> {
        self.in_progress
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| EditorError::ExportInProgress)?;
        Ok(ExportPermit { adapter: self })
    }

    /// Claim the slot and export in one go
    pub async fn export_pdf(
        &self,
        preview: &mut Node,
        paper: PaperSize,
    ) -> Result<Vec<u8>, EditorError> {
        self.begin()?.export_pdf(preview, paper).await
    }
}

impl ExportPermit<'_> {
    /// Snapshot the preview as a standalone document with its icons hidden.
    /// The icons are back in `preview` once this returns.
    pub fn prepare(&self, preview: &mut Node, paper: PaperSize) -> String {
        let hidden = IconSuppression::new(preview);
        html_document(&hidden, paper)
    }

    /// Hand a prepared document to the renderer. Needs no access to the session.
    pub async fn render(&self, html: &str, paper: PaperSize) -> Result<Vec<u8>, EditorError> {
        match self.adapter.renderer.render(html, paper).await {
            Ok(pdf) => {
                info!("Exported PDF ({}, {} bytes)", paper, pdf.len());
                Ok(pdf)
            }
            Err(e) => {
                error!("Error exportando PDF: {:#}", e);
                Err(EditorError::RenderFailed(e))
            }
        }
    }

    pub async fn export_pdf(
        &self,
        preview: &mut Node,
        paper: PaperSize,
    ) -> Result<Vec<u8>, EditorError> {
        let html = self.prepare(preview, paper);
        self.render(&html, paper).await
    }
}

impl Drop for ExportPermit<'_> {
    fn drop(&mut self) {
        self.adapter.in_progress.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::render_preview;
    use crate::types::{Document, Language};
    use anyhow::Result;
    use rocket::async_trait;
    use std::sync::Mutex;

    /// Records what it was asked to render
    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
        fail: bool,
    }

    #[async_trait]
    impl DocumentRenderer for Recorder {
        async fn render(&self, html: &str, _paper: PaperSize) -> Result<Vec<u8>> {
            self.seen.lock().unwrap().push(html.to_string());
            if self.fail {
                anyhow::bail!("renderer down");
            }
            Ok(b"%PDF-1.4".to_vec())
        }
    }

    fn template_preview() -> Node {
        render_preview(&Document::template(), Language::Es, PaperSize::A4).into()
    }

    #[tokio::test]
    async fn test_icons_hidden_during_render_only() {
        let adapter = ExportAdapter::new(Box::new(Recorder::default()));
        let mut preview = template_preview();

        let pdf = adapter.export_pdf(&mut preview, PaperSize::A4).await.unwrap();
        assert_eq!(pdf, b"%PDF-1.4");
        assert_eq!(preview, template_preview());
        assert!(!adapter.is_busy());
    }

    #[tokio::test]
    async fn test_icons_restored_after_failed_render() {
        let recorder = Recorder {
            fail: true,
            ..Default::default()
        };
        let adapter = ExportAdapter::new(Box::new(recorder));
        let mut preview = template_preview();

        let err = adapter
            .export_pdf(&mut preview, PaperSize::Letter)
            .await
            .unwrap_err();
        assert!(matches!(err, EditorError::RenderFailed(_)));
        assert_eq!(preview, template_preview());
        assert!(!adapter.is_busy());
    }

    #[tokio::test]
    async fn test_second_export_rejected_while_first_holds_slot() {
        let adapter = ExportAdapter::new(Box::new(Recorder::default()));
        let permit = adapter.begin().unwrap();

        let mut preview = template_preview();
        let err = adapter
            .export_pdf(&mut preview, PaperSize::A4)
            .await
            .unwrap_err();
        assert!(matches!(err, EditorError::ExportInProgress));

        drop(permit);
        assert!(adapter.export_pdf(&mut preview, PaperSize::A4).await.is_ok());
    }

    #[tokio::test]
    async fn test_prepared_document_outlives_preview_changes() {
        let adapter = ExportAdapter::new(Box::new(Recorder::default()));
        let permit = adapter.begin().unwrap();
        let mut preview = template_preview();

        let html = permit.prepare(&mut preview, PaperSize::A4);
        assert_eq!(preview, template_preview());
        assert!(html.contains("style=\"display:none\""));

        // Edits landing while the render runs do not reach the snapshot
        preview = render_preview(&Document::default(), Language::En, PaperSize::A4).into();
        assert!(!preview.to_html().contains("Nombre"));
        assert!(html.contains("Nombre"));

        assert_eq!(permit.render(&html, PaperSize::A4).await.unwrap(), b"%PDF-1.4");
        assert!(adapter.is_busy());
        drop(permit);
        assert!(!adapter.is_busy());
    }

    #[test]
    fn test_html_document_hides_icons_and_sets_page() {
        let mut preview = template_preview();
        let hidden = IconSuppression::new(&mut preview);
        let html = html_document(&hidden, PaperSize::A4);
        assert!(html.contains("@page { size: a4; margin: 0; }"));
        assert!(html.contains("class=\"icon\" src=\"/static/img/location.svg\" alt=\"\" style=\"display:none\""));
    }
}
