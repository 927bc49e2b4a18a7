// src/error.rs
use crate::form::Section;
use thiserror::Error;

/// Failures an editor operation reports back to the user.
/// Storage failures are deliberately absent: those are logged and swallowed.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error("Failed to parse CV data: {0}")]
    ParseFailed(#[from] serde_json::Error),

    #[error("No {section} entry at index {index}")]
    IndexOutOfRange { section: Section, index: usize },

    #[error("No item {item} in {section} entry {index}")]
    ItemOutOfRange {
        section: Section,
        index: usize,
        item: usize,
    },

    #[error("Section {0} has no nested items")]
    NoNestedItems(Section),

    #[error("A PDF export is already in progress")]
    ExportInProgress,

    #[error("PDF rendering failed: {0}")]
    RenderFailed(#[source] anyhow::Error),
}

impl EditorError {
    /// Stable machine-readable code, used in HTTP error bodies
    pub fn code(&self) -> &'static str {
        match self {
            EditorError::ParseFailed(_) => "PARSE_FAILED",
            EditorError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            EditorError::ItemOutOfRange { .. } => "ITEM_OUT_OF_RANGE",
            EditorError::NoNestedItems(_) => "NO_NESTED_ITEMS",
            EditorError::ExportInProgress => "EXPORT_IN_PROGRESS",
            EditorError::RenderFailed(_) => "RENDER_FAILED",
        }
    }
}
