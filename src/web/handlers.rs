// src/web/handlers.rs
//! Route bodies: lock the session, run one operation, answer with view patches

use chrono::Utc;
use rocket::serde::json::Json;
use rocket::State;
use tracing::{info, warn};

use super::types::{ApiError, EditorResponse, FileDownload, ViewPatch};
use super::SharedState;
use crate::export::ExportAdapter;
use crate::form::{entry_count, section_len, FormFields, Section};
use crate::notification::Notification;
use crate::state::AppState;
use crate::types::{Language, PaperSize};
use crate::utils::{json_export_file_name, pdf_file_name};

type ApiResult = Result<Json<EditorResponse>, ApiError>;

fn full_view(state: &AppState) -> Vec<ViewPatch> {
    vec![
        ViewPatch::form(&state.form_view()),
        ViewPatch::preview(state.preview()),
    ]
}

fn section_and_preview(state: &AppState, section: Section) -> Vec<ViewPatch> {
    vec![
        ViewPatch::children_of(&state.section_view(section)),
        ViewPatch::preview(state.preview()),
    ]
}

fn parse_section(slug: Result<Section, &str>) -> Result<Section, ApiError> {
    slug.map_err(ApiError::unknown_section)
}

pub async fn view_handler(state: &State<SharedState>) -> Json<EditorResponse> {
    let state = state.lock().await;
    Json(EditorResponse::new(full_view(&state)))
}

pub async fn form_handler(
    fields: Json<FormFields>,
    state: &State<SharedState>,
) -> Json<EditorResponse> {
    let mut state = state.lock().await;
    state.apply_form(&fields).await;

    // Blank skill categories are dropped on collect; re-render the group so
    // the positional indices on screen match the document again
    let mut patches: Vec<ViewPatch> = [Section::SoftSkills, Section::TechnicalSkills]
        .into_iter()
        .filter(|&section| section_len(state.document(), section) != entry_count(&fields, section))
        .map(|section| ViewPatch::children_of(&state.section_view(section)))
        .collect();
    patches.push(ViewPatch::preview(state.preview()));
    Json(EditorResponse::new(patches))
}

pub async fn add_entry_handler(
    section: Result<Section, &str>,
    state: &State<SharedState>,
) -> ApiResult {
    let section = parse_section(section)?;
    let mut state = state.lock().await;
    state.add_entry(section).await;
    info!("Added {} entry", section);
    Ok(Json(EditorResponse::new(section_and_preview(&state, section))))
}

pub async fn remove_entry_handler(
    section: Result<Section, &str>,
    index: usize,
    state: &State<SharedState>,
) -> ApiResult {
    let section = parse_section(section)?;
    let mut state = state.lock().await;
    state.remove_entry(section, index).await?;
    info!("Removed {} entry {}", section, index);
    Ok(Json(EditorResponse::new(full_view(&state))))
}

pub async fn add_item_handler(
    section: Result<Section, &str>,
    index: usize,
    fields: Json<FormFields>,
    state: &State<SharedState>,
) -> ApiResult {
    let section = parse_section(section)?;
    let mut state = state.lock().await;
    state.add_item(section, index, &fields).await?;
    Ok(Json(EditorResponse::new(section_and_preview(&state, section))))
}

pub async fn remove_item_handler(
    section: Result<Section, &str>,
    index: usize,
    item: usize,
    fields: Json<FormFields>,
    state: &State<SharedState>,
) -> ApiResult {
    let section = parse_section(section)?;
    let mut state = state.lock().await;
    state.remove_item(section, index, item, &fields).await?;
    Ok(Json(EditorResponse::new(section_and_preview(&state, section))))
}

pub async fn paper_handler(
    paper: Result<PaperSize, &str>,
    state: &State<SharedState>,
) -> ApiResult {
    let paper = paper.map_err(|value| ApiError::unsupported_value("paper size", value, "letter or a4"))?;
    let mut state = state.lock().await;
    state.set_paper_size(paper);
    Ok(Json(
        EditorResponse::new(vec![ViewPatch::preview(state.preview())])
            .with_toast(Notification::paper_size(paper)),
    ))
}

pub async fn language_handler(
    language: Result<Language, &str>,
    state: &State<SharedState>,
) -> ApiResult {
    let language =
        language.map_err(|value| ApiError::unsupported_value("language", value, "es or en"))?;
    let mut state = state.lock().await;
    state.set_language(language);
    Ok(Json(
        EditorResponse::new(vec![ViewPatch::preview(state.preview())])
            .with_toast(Notification::language(language)),
    ))
}

pub async fn import_handler(text: String, state: &State<SharedState>) -> ApiResult {
    let mut state = state.lock().await;
    if let Err(e) = state.import_json(&text).await {
        warn!("Error cargando la información: {}", e);
        return Err(e.into());
    }
    Ok(Json(
        EditorResponse::new(full_view(&state)).with_toast(Notification::imported()),
    ))
}

pub async fn export_json_handler(state: &State<SharedState>) -> FileDownload {
    let state = state.lock().await;
    let filename = json_export_file_name(Utc::now());
    info!("Exporting JSON as {}", filename);
    FileDownload::json(state.export_json(), filename).with_toast(Notification::json_exported())
}

/// The export slot is claimed before waiting on the session lock, so a
/// second click fails fast instead of queueing behind the first render.
/// The lock is only held while the page is snapshotted.
pub async fn export_pdf_handler(
    state: &State<SharedState>,
    exporter: &State<ExportAdapter>,
) -> Result<FileDownload, ApiError> {
    let permit = exporter.begin()?;

    let (html, paper, filename) = {
        let mut state = state.lock().await;
        let paper = state.paper_size();
        let filename = pdf_file_name(&state.document().personal_info);
        (permit.prepare(state.preview_mut(), paper), paper, filename)
    };
    info!("Exporting PDF as {} ({})", filename, paper);

    let pdf = permit.render(&html, paper).await?;
    Ok(FileDownload::pdf(pdf, filename).with_toast(Notification::pdf_exported(paper)))
}
