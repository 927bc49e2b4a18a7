// src/web/page.rs
//! The editor page: toolbar, form pane, preview pane

use super::types::{FORM_PANE_ID, PREVIEW_PANE_ID};
use crate::state::AppState;
use crate::types::{Language, PaperSize};
use crate::view::Element;

fn toolbar_button(label: &str, action: &str) -> Element {
    Element::new("button")
        .attr("type", "button")
        .class("btn btn-toolbar")
        .attr("data-action", action)
        .text(label)
}

fn choice_button(label: &str, action: &str, value: &str, active: bool) -> Element {
    let class = if active { "btn btn-choice active" } else { "btn btn-choice" };
    toolbar_button(label, action)
        .class(class)
        .attr("data-value", value)
}

fn toolbar(state: &AppState) -> Element {
    let papers = [PaperSize::Letter, PaperSize::A4].map(|paper| {
        choice_button(
            &paper.code().to_uppercase(),
            "set-paper",
            paper.code(),
            paper == state.paper_size(),
        )
    });
    let languages = [Language::Es, Language::En].map(|language| {
        choice_button(
            language.display_name(),
            "set-language",
            language.code(),
            language == state.language(),
        )
    });

    Element::new("div")
        .class("toolbar")
        .child(Element::new("h1").class("toolbar-title").text("Editor de CV"))
        .child(Element::new("div").class("toolbar-group").children(papers))
        .child(Element::new("div").class("toolbar-group").children(languages))
        .child(
            Element::new("div")
                .class("toolbar-group")
                .child(toolbar_button("Exportar PDF", "export-pdf"))
                .child(toolbar_button("Exportar JSON", "export-json"))
                .child(toolbar_button("Importar JSON", "import-json"))
                .child(
                    Element::new("input")
                        .attr("type", "file")
                        .id("json-import-input")
                        .attr("accept", "application/json,.json")
                        .attr("hidden", "hidden"),
                ),
        )
}

/// Whole page with the current form and preview already in place
pub fn editor_page(state: &AppState) -> String {
    let head = Element::new("head")
        .child(Element::new("meta").attr("charset", "utf-8"))
        .child(
            Element::new("meta")
                .attr("name", "viewport")
                .attr("content", "width=device-width, initial-scale=1"),
        )
        .child(Element::new("title").text("Editor de CV"))
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", "/static/styles.css"),
        )
        .child(
            Element::new("link")
                .attr("rel", "stylesheet")
                .attr("href", "/static/preview.css"),
        );

    let body = Element::new("body")
        .child(toolbar(state))
        .child(
            Element::new("div")
                .class("workspace")
                .child(
                    Element::new("div")
                        .id(FORM_PANE_ID)
                        .class("form-pane")
                        .child(state.form_view()),
                )
                .child(
                    Element::new("div")
                        .id(PREVIEW_PANE_ID)
                        .class("preview-pane")
                        .child(state.preview().clone()),
                ),
        )
        .child(Element::new("div").id("toast-container"))
        .child(Element::new("script").attr("src", "/static/app.js"));

    let html = Element::new("html")
        .attr("lang", "es")
        .child(head)
        .child(body);

    format!("<!DOCTYPE html>\n{}", html.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DocumentStore, MemoryStore};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_page_embeds_form_and_preview() {
        let store = DocumentStore::new(Arc::new(MemoryStore::new()));
        let state = AppState::bootstrap(store).await;
        let page = editor_page(&state);

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("id=\"cv-form\""));
        assert!(page.contains("id=\"cv-preview\""));
        assert!(page.contains("data-value=\"letter\">LETTER</button>"));
        assert!(page.contains("<script src=\"/static/app.js\"></script>"));
    }
}
