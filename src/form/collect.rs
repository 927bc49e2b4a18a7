// src/form/collect.rs
//! Form values -> Document. Indices are probed from 0 upwards and the first
//! missing index ends the list, at both nesting levels.

use super::fields::{field_name, item_field_name, FormFields, Section};
use crate::types::{
    Certification, Document, EducationEntry, ExperienceEntry, PersonalInfo, SkillCategory,
};

/// Whether empty nested values survive collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EmptyItems {
    Drop,
    Keep,
}

/// Number of contiguous entries present for `section`
pub fn entry_count(fields: &FormFields, section: Section) -> usize {
    (0..)
        .take_while(|&i| fields.has(&field_name(section, section.probe_field(), i)))
        .count()
}

fn collect_items(
    fields: &FormFields,
    section: Section,
    index: usize,
    empty: EmptyItems,
) -> Vec<String> {
    let Some(item_field) = section.item_field() else {
        return Vec::new();
    };

    let mut items = Vec::new();
    let mut sub = 0;
    loop {
        let name = item_field_name(section, item_field, index, sub);
        if !fields.has(&name) {
            break;
        }
        let value = fields.get(&name);
        if !value.is_empty() || empty == EmptyItems::Keep {
            items.push(value);
        }
        sub += 1;
    }
    items
}

fn collect_personal_info(fields: &FormFields) -> PersonalInfo {
    PersonalInfo {
        first_name: fields.get("firstName"),
        last_name: fields.get("lastName"),
        title: fields.get("title"),
        subtitle: fields.get("subtitle"),
        location: fields.get("location"),
        phone: fields.get("phone"),
        email: fields.get("email"),
        linkedin: fields.get("linkedin"),
    }
}

fn collect_experience(fields: &FormFields, empty: EmptyItems) -> Vec<ExperienceEntry> {
    let s = Section::Experience;
    (0..entry_count(fields, s))
        .map(|i| ExperienceEntry {
            position: fields.get(&field_name(s, "position", i)),
            company: fields.get(&field_name(s, "company", i)),
            period: fields.get(&field_name(s, "period", i)),
            location: fields.get(&field_name(s, "location", i)),
            responsibilities: collect_items(fields, s, i, empty),
        })
        .collect()
}

fn collect_education(fields: &FormFields) -> Vec<EducationEntry> {
    let s = Section::Education;
    (0..entry_count(fields, s))
        .map(|i| EducationEntry {
            degree: fields.get(&field_name(s, "degree", i)),
            institution: fields.get(&field_name(s, "institution", i)),
            period: fields.get(&field_name(s, "period", i)),
            location: fields.get(&field_name(s, "location", i)),
            note: fields.get(&field_name(s, "note", i)),
        })
        .collect()
}

/// Categories with neither a name nor any item are dropped, unless empty
/// lines are being kept (then every rendered group survives, in place)
fn collect_skills(fields: &FormFields, section: Section, empty: EmptyItems) -> Vec<SkillCategory> {
    (0..entry_count(fields, section))
        .map(|i| SkillCategory {
            category: fields.get(&field_name(section, "category", i)),
            items: collect_items(fields, section, i, empty),
        })
        .filter(|category| empty == EmptyItems::Keep || !category.is_empty())
        .collect()
}

fn collect_certifications(fields: &FormFields) -> Vec<Certification> {
    let s = Section::Certifications;
    (0..entry_count(fields, s))
        .map(|i| Certification {
            name: fields.get(&field_name(s, "name", i)),
            issuer: fields.get(&field_name(s, "issuer", i)),
        })
        .collect()
}

pub(crate) fn collect_with(fields: &FormFields, empty: EmptyItems) -> Document {
    Document {
        personal_info: collect_personal_info(fields),
        experience: collect_experience(fields, empty),
        education: collect_education(fields),
        soft_skills: collect_skills(fields, Section::SoftSkills, empty),
        technical_skills: collect_skills(fields, Section::TechnicalSkills, empty),
        certifications: collect_certifications(fields),
    }
}

/// Rebuild the whole document from submitted form values.
/// Empty nested lines are skipped; missing fields read as empty strings.
pub fn collect(fields: &FormFields) -> Document {
    collect_with(fields, EmptyItems::Drop)
}
