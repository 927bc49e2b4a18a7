pub mod document;
pub mod settings;

pub use document::{
    Certification, Document, EducationEntry, ExperienceEntry, PersonalInfo, SkillCategory,
};
pub use settings::{Language, PageGeometry, PaperSize};
