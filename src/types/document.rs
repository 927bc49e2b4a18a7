// src/types/document.rs
//! Résumé document model, exactly as it is persisted and exchanged

use serde::{Deserialize, Serialize};

// ===== Document Structure =====

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    pub personal_info: PersonalInfo,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub soft_skills: Vec<SkillCategory>,
    pub technical_skills: Vec<SkillCategory>,
    pub certifications: Vec<Certification>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub phone: String,
    pub email: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExperienceEntry {
    pub position: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub location: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
}

impl ExperienceEntry {
    /// Fresh entry as offered by the "add" control: one empty responsibility line
    pub fn blank() -> Self {
        Self {
            responsibilities: vec![String::new()],
            ..Self::default()
        }
    }
}

impl SkillCategory {
    pub fn blank() -> Self {
        Self {
            category: String::new(),
            items: vec![String::new()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_empty() && self.items.is_empty()
    }
}

impl PersonalInfo {
    /// Field names paired with their values, in form order
    pub fn fields(&self) -> [(&'static str, &str); 8] {
        [
            ("firstName", self.first_name.as_str()),
            ("lastName", self.last_name.as_str()),
            ("title", self.title.as_str()),
            ("subtitle", self.subtitle.as_str()),
            ("location", self.location.as_str()),
            ("phone", self.phone.as_str()),
            ("email", self.email.as_str()),
            ("linkedin", self.linkedin.as_str()),
        ]
    }
}

// ===== Placeholder Template =====

fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Document {
    /// Placeholder résumé shown on first run, so the form is never blank
    pub fn template() -> Self {
        Self {
            personal_info: PersonalInfo {
                first_name: "Nombre".to_string(),
                last_name: "Apellido".to_string(),
                title: "Título Profesional".to_string(),
                subtitle: "Subtítulo Profesional".to_string(),
                location: "Ciudad, País".to_string(),
                phone: "+1 234 567 8900".to_string(),
                email: "correo@ejemplo.com".to_string(),
                linkedin: "linkedin.com/in/usuario".to_string(),
            },
            experience: vec![
                ExperienceEntry {
                    position: "PUESTO DE TRABAJO".to_string(),
                    company: "Nombre de la Empresa".to_string(),
                    period: "Enero 2024 - Presente".to_string(),
                    location: "Ciudad, País".to_string(),
                    responsibilities: lines(&[
                        "Descripción de la responsabilidad o logro principal en este puesto",
                        "Otra responsabilidad clave demostrando habilidades específicas",
                        "Logro cuantificable o proyecto importante realizado",
                    ]),
                },
                ExperienceEntry {
                    position: "PUESTO ANTERIOR".to_string(),
                    company: "Empresa Anterior".to_string(),
                    period: "Enero 2022 - Diciembre 2023".to_string(),
                    location: "Ciudad, País".to_string(),
                    responsibilities: lines(&[
                        "Responsabilidad principal en el cargo anterior",
                        "Colaboración con equipos multidisciplinarios",
                        "Solución de problemas y mejoras implementadas",
                    ]),
                },
            ],
            education: vec![EducationEntry {
                degree: "TITULO UNIVERSITARIO".to_string(),
                institution: "Nombre de la Universidad".to_string(),
                period: "2018 - 2022".to_string(),
                location: "Ciudad, País".to_string(),
                note: "Mención honorífica o especialidad".to_string(),
            }],
            soft_skills: vec![SkillCategory {
                category: "Personal".to_string(),
                items: lines(&["Liderazgo", "Trabajo en equipo", "Resolución de problemas"]),
            }],
            technical_skills: vec![
                SkillCategory {
                    category: "Software".to_string(),
                    items: lines(&["Herramienta 1", "Herramienta 2"]),
                },
                SkillCategory {
                    category: "Idiomas".to_string(),
                    items: lines(&["Español (Nativo)", "Inglés (Intermedio)"]),
                },
            ],
            certifications: vec![Certification {
                name: "Nombre de Certificación".to_string(),
                issuer: "Entidad Emisora".to_string(),
            }],
        }
    }
}
