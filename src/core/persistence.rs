// src/core/persistence.rs
//! Persistence adapter: the whole document under one storage key, as JSON

use std::sync::Arc;
use tracing::{error, warn};

use crate::core::storage::KeyValueStore;
use crate::error::EditorError;
use crate::types::Document;

pub const STORAGE_KEY: &str = "cvData";

/// Interchange text: pretty JSON, 2-space indentation
pub fn serialize(document: &Document) -> String {
    // Plain structs of strings and vecs cannot fail to serialize
    serde_json::to_string_pretty(document).unwrap_or_default()
}

/// Parse interchange text; never yields a partial document
pub fn deserialize(text: &str) -> Result<Document, EditorError> {
    Ok(serde_json::from_str(text)?)
}

#[derive(Clone)]
pub struct DocumentStore {
    store: Arc<dyn KeyValueStore>,
}

impl DocumentStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Storage failures are logged, never returned
    pub async fn save(&self, document: &Document) {
        if let Err(e) = self.store.set(STORAGE_KEY, &serialize(document)).await {
            error!("Error saving CV data: {:#}", e);
        }
    }

    /// `None` when nothing is stored, the store fails, or the stored text is corrupt
    pub async fn load(&self) -> Option<Document> {
        let text = match self.store.get(STORAGE_KEY).await {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                error!("Error loading CV data: {:#}", e);
                return None;
            }
        };

        match deserialize(&text) {
            Ok(document) => Some(document),
            Err(e) => {
                warn!("Stored CV data is corrupt, ignoring it: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use anyhow::Result;
    use rocket::async_trait;

    struct BrokenStore;

    #[async_trait]
    impl KeyValueStore for BrokenStore {
        async fn get(&self, _key: &str) -> Result<Option<String>> {
            anyhow::bail!("disk unplugged")
        }
        async fn set(&self, _key: &str, _value: &str) -> Result<()> {
            anyhow::bail!("disk unplugged")
        }
    }

    #[test]
    fn test_round_trip() {
        let doc = Document::template();
        assert_eq!(deserialize(&serialize(&doc)).unwrap(), doc);
    }

    #[test]
    fn test_two_space_indent() {
        let text = serialize(&Document::default());
        assert!(text.starts_with("{\n  \"personalInfo\": {\n    \"firstName\""));
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        assert!(matches!(deserialize("{not json"), Err(EditorError::ParseFailed(_))));
        assert!(matches!(
            deserialize(r#"{"experience": 3}"#),
            Err(EditorError::ParseFailed(_))
        ));
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = DocumentStore::new(Arc::new(MemoryStore::new()));
        assert!(store.load().await.is_none());

        store.save(&Document::template()).await;
        assert_eq!(store.load().await, Some(Document::template()));

        store.save(&Document::default()).await;
        assert_eq!(store.load().await, Some(Document::default()));
    }

    #[tokio::test]
    async fn test_corrupt_value_loads_as_none() {
        let store = DocumentStore::new(Arc::new(MemoryStore::with_value(STORAGE_KEY, "][")));
        assert!(store.load().await.is_none());
    }

    #[tokio::test]
    async fn test_storage_errors_are_swallowed() {
        let store = DocumentStore::new(Arc::new(BrokenStore));
        store.save(&Document::template()).await;
        assert!(store.load().await.is_none());
    }
}
