// src/types/settings.rs
//! View settings that live beside the document but are never persisted with it

use rocket::request::FromParam;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Es,
    En,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Es => "es",
            Language::En => "en",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Es => "Español",
            Language::En => "English",
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "es" => Ok(Language::Es),
            "en" => Ok(Language::En),
            other => anyhow::bail!("Unsupported language: {}. Use es or en", other),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl<'a> FromParam<'a> for Language {
    type Error = &'a str;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param.parse().map_err(|_| param)
    }
}

/// Physical page size used for the preview geometry and the PDF export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    pub unit: &'static str,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
}

impl PaperSize {
    pub fn code(&self) -> &'static str {
        match self {
            PaperSize::Letter => "letter",
            PaperSize::A4 => "a4",
        }
    }

    /// Page size in the paper's native unit
    pub fn geometry(&self) -> PageGeometry {
        match self {
            PaperSize::Letter => PageGeometry {
                width: 8.5,
                height: 11.0,
                unit: "in",
            },
            PaperSize::A4 => PageGeometry {
                width: 210.0,
                height: 297.0,
                unit: "mm",
            },
        }
    }

    /// On-screen preview size in CSS pixels at 96 dpi, as (width, min height)
    pub fn preview_pixels(&self) -> (u32, u32) {
        match self {
            PaperSize::Letter => (816, 1056),
            PaperSize::A4 => (794, 1123),
        }
    }

    /// Page size name understood by HTML-to-PDF tools
    pub fn page_size_name(&self) -> &'static str {
        match self {
            PaperSize::Letter => "Letter",
            PaperSize::A4 => "A4",
        }
    }
}

impl FromStr for PaperSize {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "letter" => Ok(PaperSize::Letter),
            "a4" => Ok(PaperSize::A4),
            other => anyhow::bail!("Unsupported paper size: {}. Use letter or a4", other),
        }
    }
}

impl fmt::Display for PaperSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl<'a> FromParam<'a> for PaperSize {
    type Error = &'a str;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        param.parse().map_err(|_| param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_is_constrained() {
        assert_eq!("es".parse::<Language>().unwrap(), Language::Es);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::default(), Language::Es);
    }

    #[test]
    fn test_paper_geometry() {
        let a4 = PaperSize::A4.geometry();
        assert_eq!((a4.width, a4.height, a4.unit), (210.0, 297.0, "mm"));
        let letter = PaperSize::Letter.geometry();
        assert_eq!((letter.width, letter.height, letter.unit), (8.5, 11.0, "in"));
        assert_eq!(PaperSize::A4.preview_pixels(), (794, 1123));
        assert_eq!(PaperSize::Letter.preview_pixels(), (816, 1056));
    }

    #[test]
    fn test_paper_size_parse() {
        assert_eq!("a4".parse::<PaperSize>().unwrap(), PaperSize::A4);
        assert_eq!(" Letter ".parse::<PaperSize>().unwrap(), PaperSize::Letter);
        assert!("legal".parse::<PaperSize>().is_err());
    }
}
