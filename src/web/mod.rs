// src/web/mod.rs

pub mod handlers;
pub mod page;
pub mod types;

pub use types::*;

use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::fs::FileServer;
use rocket::response::content::RawHtml;
use rocket::serde::json::Json;
use rocket::{catchers, get, post, routes, Build, Rocket, State};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::core::{ConfigManager, DocumentStore, SqliteStore};
use crate::export::{renderer, ExportAdapter};
use crate::form::{FormFields, Section};
use crate::state::AppState;
use crate::types::{Language, PaperSize};

/// The editor session as managed by Rocket
pub type SharedState = Mutex<AppState>;

#[get("/")]
pub async fn home(state: &State<SharedState>) -> RawHtml<String> {
    let state = state.lock().await;
    RawHtml(page::editor_page(&state))
}

#[get("/health")]
pub async fn health() -> Json<&'static str> {
    Json("OK")
}

#[get("/view")]
pub async fn view(state: &State<SharedState>) -> Json<EditorResponse> {
    handlers::view_handler(state).await
}

#[post("/form", data = "<fields>")]
pub async fn apply_form(fields: Json<FormFields>, state: &State<SharedState>) -> Json<EditorResponse> {
    handlers::form_handler(fields, state).await
}

#[post("/sections/<section>/add")]
pub async fn add_entry(
    section: Result<Section, &str>,
    state: &State<SharedState>,
) -> Result<Json<EditorResponse>, ApiError> {
    handlers::add_entry_handler(section, state).await
}

#[post("/sections/<section>/<index>/remove")]
pub async fn remove_entry(
    section: Result<Section, &str>,
    index: usize,
    state: &State<SharedState>,
) -> Result<Json<EditorResponse>, ApiError> {
    handlers::remove_entry_handler(section, index, state).await
}

#[post("/sections/<section>/<index>/items/add", data = "<fields>")]
pub async fn add_item(
    section: Result<Section, &str>,
    index: usize,
    fields: Json<FormFields>,
    state: &State<SharedState>,
) -> Result<Json<EditorResponse>, ApiError> {
    handlers::add_item_handler(section, index, fields, state).await
}

#[post("/sections/<section>/<index>/items/<item>/remove", data = "<fields>")]
pub async fn remove_item(
    section: Result<Section, &str>,
    index: usize,
    item: usize,
    fields: Json<FormFields>,
    state: &State<SharedState>,
) -> Result<Json<EditorResponse>, ApiError> {
    handlers::remove_item_handler(section, index, item, fields, state).await
}

#[post("/settings/paper/<paper>")]
pub async fn set_paper(
    paper: Result<PaperSize, &str>,
    state: &State<SharedState>,
) -> Result<Json<EditorResponse>, ApiError> {
    handlers::paper_handler(paper, state).await
}

#[post("/settings/language/<language>")]
pub async fn set_language(
    language: Result<Language, &str>,
    state: &State<SharedState>,
) -> Result<Json<EditorResponse>, ApiError> {
    handlers::language_handler(language, state).await
}

#[post("/import", data = "<text>")]
pub async fn import_json(
    text: String,
    state: &State<SharedState>,
) -> Result<Json<EditorResponse>, ApiError> {
    handlers::import_handler(text, state).await
}

#[get("/export/json")]
pub async fn export_json(state: &State<SharedState>) -> FileDownload {
    handlers::export_json_handler(state).await
}

#[get("/export/pdf")]
pub async fn export_pdf(
    state: &State<SharedState>,
    exporter: &State<ExportAdapter>,
) -> Result<FileDownload, ApiError> {
    handlers::export_pdf_handler(state, exporter).await
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Invalid request format".to_string(),
        "BAD_REQUEST".to_string(),
        vec!["Check your request body".to_string()],
    ))
}

#[rocket::catch(404)]
pub fn not_found() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Not found".to_string(),
        "NOT_FOUND".to_string(),
        vec!["Check the endpoint path".to_string()],
    ))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Request could not be processed".to_string(),
        "UNPROCESSABLE".to_string(),
        vec![
            "Send form fields as a JSON object of strings".to_string(),
            "Indices must be non-negative integers".to_string(),
        ],
    ))
}

#[rocket::catch(500)]
pub fn internal_error() -> Json<StandardErrorResponse> {
    Json(StandardErrorResponse::new(
        "Internal server error".to_string(),
        "INTERNAL_ERROR".to_string(),
        vec!["Try again in a few moments".to_string()],
    ))
}

/// Assemble the application around an already bootstrapped session
pub fn build_rocket(
    rocket: Rocket<Build>,
    state: AppState,
    exporter: ExportAdapter,
    static_dir: &Path,
) -> Rocket<Build> {
    let rocket = rocket
        .manage(Mutex::new(state))
        .manage(exporter)
        .register("/", catchers![bad_request, not_found, unprocessable, internal_error])
        .mount("/", routes![home, health])
        .mount(
            "/api",
            routes![
                view,
                apply_form,
                add_entry,
                remove_entry,
                add_item,
                remove_item,
                set_paper,
                set_language,
                import_json,
                export_json,
                export_pdf,
            ],
        );

    if static_dir.is_dir() {
        rocket.mount("/static", FileServer::from(static_dir))
    } else {
        warn!("Static directory {} not found, assets will not be served", static_dir.display());
        rocket
    }
}

// Main server start function
pub async fn start_web_server(config: ConfigManager) -> Result<()> {
    config.ensure_directories().await?;

    let store = SqliteStore::new(&config.paths.database_path).await?;
    let state = AppState::bootstrap(DocumentStore::new(Arc::new(store))).await;

    let renderer = renderer::from_config(&config.renderer, config.paths.output_path.clone())?;
    let exporter = ExportAdapter::new(renderer);

    info!("Starting CV editor on port {}", config.port);
    info!("Database: {}", config.paths.database_path.display());
    info!("PDF renderer: {:?}", config.renderer);

    let limits = Limits::default().limit("string", 2.mebibytes());
    let figment = rocket::Config::figment()
        .merge(("port", config.port))
        .merge(("limits", limits));
    build_rocket(rocket::custom(figment), state, exporter, &config.paths.static_path)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Rocket failed: {}", e))?;

    Ok(())
}
