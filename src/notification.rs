// src/notification.rs
//! Transient toasts shown by the browser after an operation

use crate::types::{Language, PaperSize};
use serde::{Deserialize, Serialize};

pub const TOAST_DURATION_MS: u64 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    pub severity: Severity,
    pub duration_ms: u64,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
            duration_ms: TOAST_DURATION_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            duration_ms: TOAST_DURATION_MS,
        }
    }

    pub fn imported() -> Self {
        Self::success("Información cargada correctamente!")
    }

    pub fn import_failed() -> Self {
        Self::error("Error cargando la información.")
    }

    pub fn paper_size(paper: PaperSize) -> Self {
        Self::success(format!("Tamaño: {}", paper.code().to_uppercase()))
    }

    pub fn language(language: Language) -> Self {
        Self::success(format!("Idioma del CV: {}", language.display_name()))
    }

    pub fn pdf_exported(paper: PaperSize) -> Self {
        Self::success(format!("PDF exportado ({})!", paper.code().to_uppercase()))
    }

    pub fn pdf_failed() -> Self {
        Self::error("Error generando PDF. Intenta nuevamente.")
    }

    pub fn pdf_busy() -> Self {
        Self::error("Ya se está generando un PDF.")
    }

    pub fn json_exported() -> Self {
        Self::success("Data exported successfully!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(Notification::paper_size(PaperSize::A4).message, "Tamaño: A4");
        assert_eq!(
            Notification::language(Language::En).message,
            "Idioma del CV: English"
        );
        assert_eq!(
            Notification::pdf_exported(PaperSize::Letter).message,
            "PDF exportado (LETTER)!"
        );
        assert_eq!(Notification::import_failed().severity, Severity::Error);
        assert_eq!(Notification::imported().duration_ms, 3000);
    }

    #[test]
    fn test_wire_format() {
        let json = serde_json::to_value(Notification::pdf_failed()).unwrap();
        assert_eq!(json["severity"], "error");
        assert_eq!(json["duration_ms"], 3000);
    }
}
