pub mod cli;
pub mod core;
pub mod error;
pub mod export;
pub mod form;
pub mod i18n;
pub mod notification;
pub mod preview;
pub mod state;
pub mod types;
pub mod utils;
pub mod view;
pub mod web;

pub use error::EditorError;
pub use state::AppState;
pub use web::{build_rocket, start_web_server};
