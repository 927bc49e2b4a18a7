// src/form/fields.rs
//! Positional field addressing: every input name encodes (kind, index[, sub_index])

use rocket::request::FromParam;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Repeatable list groups of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Experience,
    Education,
    SoftSkills,
    TechnicalSkills,
    Certifications,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Experience,
        Section::Education,
        Section::SoftSkills,
        Section::TechnicalSkills,
        Section::Certifications,
    ];

    /// Name used in URLs and action attributes
    pub fn slug(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::SoftSkills => "soft-skills",
            Section::TechnicalSkills => "technical-skills",
            Section::Certifications => "certifications",
        }
    }

    /// Prefix of every input name belonging to this section
    pub fn prefix(&self) -> &'static str {
        match self {
            Section::Experience => "exp",
            Section::Education => "edu",
            Section::SoftSkills => "soft",
            Section::TechnicalSkills => "tech",
            Section::Certifications => "cert",
        }
    }

    /// Field whose presence at index `i` means entry `i` exists
    pub fn probe_field(&self) -> &'static str {
        match self {
            Section::Experience => "position",
            Section::Education => "degree",
            Section::SoftSkills | Section::TechnicalSkills => "category",
            Section::Certifications => "name",
        }
    }

    /// Field name of the nested repeatable list, if the section has one
    pub fn item_field(&self) -> Option<&'static str> {
        match self {
            Section::Experience => Some("resp"),
            Section::SoftSkills | Section::TechnicalSkills => Some("item"),
            Section::Education | Section::Certifications => None,
        }
    }

    /// Id of the container element holding the section's groups
    pub fn container_id(&self) -> &'static str {
        match self {
            Section::Experience => "experience-list",
            Section::Education => "education-list",
            Section::SoftSkills => "soft-skills-list",
            Section::TechnicalSkills => "technical-skills-list",
            Section::Certifications => "certifications-list",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.slug() == slug)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl<'a> FromParam<'a> for Section {
    type Error = &'a str;

    fn from_param(param: &'a str) -> Result<Self, Self::Error> {
        Section::from_slug(param).ok_or(param)
    }
}

/// `exp-position-0`
pub fn field_name(section: Section, field: &str, index: usize) -> String {
    format!("{}-{}-{}", section.prefix(), field, index)
}

/// `exp-resp-0-2`
pub fn item_field_name(section: Section, field: &str, index: usize, sub_index: usize) -> String {
    format!("{}-{}-{}-{}", section.prefix(), field, index, sub_index)
}

/// Submitted form values keyed by input name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Value of a field, empty when it is missing
    pub fn get(&self, name: &str) -> String {
        self.0.get(name).cloned().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, String>> for FormFields {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self(values.into_iter().collect())
    }
}

impl From<HashMap<String, String>> for FormFields {
    fn from(values: HashMap<String, String>) -> Self {
        Self(values)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
