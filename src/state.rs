// src/state.rs
//! The single live editor session: document, view settings, last preview

use tracing::info;

use crate::core::{deserialize, serialize, DocumentStore};
use crate::error::EditorError;
use crate::form::{self, FormFields, Section};
use crate::preview::render_preview;
use crate::types::{Document, Language, PaperSize};
use crate::view::{Element, Node};

pub struct AppState {
    document: Document,
    language: Language,
    paper: PaperSize,
    store: DocumentStore,
    preview: Node,
}

impl AppState {
    /// Load the stored document, or seed storage with the template
    pub async fn bootstrap(store: DocumentStore) -> Self {
        let document = match store.load().await {
            Some(document) => {
                info!("Loaded CV data from storage");
                document
            }
            None => {
                info!("No usable CV data in storage, starting from template");
                let template = Document::template();
                store.save(&template).await;
                template
            }
        };

        let mut state = Self {
            document,
            language: Language::default(),
            paper: PaperSize::default(),
            store,
            preview: Node::empty(),
        };
        state.refresh_preview();
        state
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn paper_size(&self) -> PaperSize {
        self.paper
    }

    fn refresh_preview(&mut self) {
        self.preview = render_preview(&self.document, self.language, self.paper).into();
    }

    /// Swap in a fully built replacement, persist it, re-derive the preview
    async fn commit(&mut self, document: Document) {
        self.document = document;
        self.store.save(&self.document).await;
        self.refresh_preview();
    }

    // ===== Form operations =====

    pub async fn apply_form(&mut self, fields: &FormFields) {
        let document = form::collect(fields);
        self.commit(document).await;
    }

    pub async fn add_entry(&mut self, section: Section) {
        let mut document = self.document.clone();
        form::add_entry(&mut document, section);
        self.commit(document).await;
    }

    pub async fn remove_entry(&mut self, section: Section, index: usize) -> Result<(), EditorError> {
        let mut document = self.document.clone();
        form::remove_entry(&mut document, section, index)?;
        self.commit(document).await;
        Ok(())
    }

    pub async fn add_item(
        &mut self,
        section: Section,
        index: usize,
        fields: &FormFields,
    ) -> Result<(), EditorError> {
        let document = form::add_item(fields, section, index)?;
        self.commit(document).await;
        Ok(())
    }

    pub async fn remove_item(
        &mut self,
        section: Section,
        index: usize,
        item: usize,
        fields: &FormFields,
    ) -> Result<(), EditorError> {
        let document = form::remove_item(fields, section, index, item)?;
        self.commit(document).await;
        Ok(())
    }

    // ===== View settings =====

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
        self.refresh_preview();
    }

    pub fn set_paper_size(&mut self, paper: PaperSize) {
        self.paper = paper;
        self.refresh_preview();
    }

    // ===== Import / export =====

    /// Replace the whole document; a parse failure leaves it untouched
    pub async fn import_json(&mut self, text: &str) -> Result<(), EditorError> {
        let document = deserialize(text)?;
        self.commit(document).await;
        info!("Imported CV data");
        Ok(())
    }

    pub fn export_json(&self) -> String {
        serialize(&self.document)
    }

    pub async fn reset_to_template(&mut self) {
        self.commit(Document::template()).await;
    }

    // ===== Views =====

    pub fn form_view(&self) -> Element {
        form::render_form(&self.document)
    }

    pub fn section_view(&self, section: Section) -> Element {
        form::render_section(&self.document, section)
    }

    pub fn preview(&self) -> &Node {
        &self.preview
    }

    pub fn preview_mut(&mut self) -> &mut Node {
        &mut self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MemoryStore, STORAGE_KEY};
    use std::sync::Arc;

    async fn fresh() -> (AppState, DocumentStore) {
        let store = DocumentStore::new(Arc::new(MemoryStore::new()));
        (AppState::bootstrap(store.clone()).await, store)
    }

    #[tokio::test]
    async fn test_empty_storage_seeds_template() {
        let (state, store) = fresh().await;
        assert_eq!(state.document(), &Document::template());
        assert_eq!(store.load().await, Some(Document::template()));
    }

    #[tokio::test]
    async fn test_corrupt_storage_falls_back_to_template() {
        let store = DocumentStore::new(Arc::new(MemoryStore::with_value(STORAGE_KEY, "{broken")));
        let state = AppState::bootstrap(store.clone()).await;
        assert_eq!(state.document(), &Document::template());
        assert_eq!(store.load().await, Some(Document::template()));
    }

    #[tokio::test]
    async fn test_stored_document_wins() {
        let mut doc = Document::default();
        doc.personal_info.first_name = "Lucía".to_string();
        let store = DocumentStore::new(Arc::new(MemoryStore::with_value(
            STORAGE_KEY,
            &serialize(&doc),
        )));
        let state = AppState::bootstrap(store).await;
        assert_eq!(state.document(), &doc);
    }

    #[tokio::test]
    async fn test_failed_import_keeps_document() {
        let (mut state, store) = fresh().await;
        let err = state.import_json("not json").await.unwrap_err();
        assert!(matches!(err, EditorError::ParseFailed(_)));
        assert_eq!(state.document(), &Document::template());
        assert_eq!(store.load().await, Some(Document::template()));
    }

    #[tokio::test]
    async fn test_import_saves_and_rerenders() {
        let (mut state, store) = fresh().await;
        state
            .import_json(r#"{"personalInfo":{"firstName":"Ana"}}"#)
            .await
            .unwrap();
        assert_eq!(state.document().personal_info.first_name, "Ana");
        assert!(state.document().experience.is_empty());
        assert_eq!(store.load().await.as_ref(), Some(state.document()));
        assert!(state.preview().elements_with_tag("section").is_empty());
    }

    #[tokio::test]
    async fn test_apply_form_updates_preview() {
        let (mut state, _) = fresh().await;
        let fields: FormFields = [("firstName", "Pedro"), ("exp-position-0", "CTO")]
            .into_iter()
            .collect();
        state.apply_form(&fields).await;

        assert_eq!(state.document().experience.len(), 1);
        assert!(state.preview().text_content().contains("Pedro"));
        assert!(state.preview().text_content().contains("CTO"));
    }

    #[tokio::test]
    async fn test_rejected_mutation_leaves_state() {
        let (mut state, _) = fresh().await;
        assert!(state.remove_entry(Section::Education, 3).await.is_err());
        assert_eq!(state.document(), &Document::template());
    }

    #[tokio::test]
    async fn test_settings_rerender_preview() {
        let (mut state, _) = fresh().await;
        state.set_language(Language::En);
        state.set_paper_size(PaperSize::A4);
        let root = state.preview().as_element().unwrap();
        assert_eq!(root.get_attr("lang"), Some("en"));
        assert!(root.has_class("paper-a4"));
        assert!(state.preview().text_content().contains("PROFESSIONAL EXPERIENCE"));
    }

    #[tokio::test]
    async fn test_reset_to_template() {
        let (mut state, _) = fresh().await;
        state.remove_entry(Section::Experience, 0).await.unwrap();
        state.reset_to_template().await;
        assert_eq!(state.document(), &Document::template());
    }
}
