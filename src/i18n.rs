// src/i18n.rs
//! Preview section headings for the two supported languages

use crate::types::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionLabels {
    pub experience: &'static str,
    pub education: &'static str,
    pub soft_skills: &'static str,
    pub hard_skills: &'static str,
    pub certifications: &'static str,
}

const ES: SectionLabels = SectionLabels {
    experience: "EXPERIENCIA PROFESIONAL",
    education: "EDUCACIÓN",
    soft_skills: "HABILIDADES BLANDAS",
    hard_skills: "HABILIDADES TÉCNICAS",
    certifications: "CERTIFICACIONES",
};

const EN: SectionLabels = SectionLabels {
    experience: "PROFESSIONAL EXPERIENCE",
    education: "EDUCATION",
    soft_skills: "SOFT SKILLS",
    hard_skills: "HARD SKILLS",
    certifications: "CERTIFICATIONS",
};

pub fn labels(language: Language) -> &'static SectionLabels {
    match language {
        Language::Es => &ES,
        Language::En => &EN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_per_language() {
        assert_eq!(labels(Language::Es).experience, "EXPERIENCIA PROFESIONAL");
        assert_eq!(labels(Language::En).hard_skills, "HARD SKILLS");
        assert_ne!(labels(Language::Es), labels(Language::En));
    }
}
