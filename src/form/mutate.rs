// src/form/mutate.rs
//! List mutations behind the add/remove controls. Callers work on a copy of
//! the document and swap it in only when the mutation succeeded.

use super::collect::{collect_with, EmptyItems};
use super::fields::{FormFields, Section};
use crate::error::EditorError;
use crate::types::{Certification, Document, EducationEntry, ExperienceEntry, SkillCategory};

pub fn section_len(document: &Document, section: Section) -> usize {
    match section {
        Section::Experience => document.experience.len(),
        Section::Education => document.education.len(),
        Section::SoftSkills => document.soft_skills.len(),
        Section::TechnicalSkills => document.technical_skills.len(),
        Section::Certifications => document.certifications.len(),
    }
}

fn nested_items_mut(
    document: &mut Document,
    section: Section,
    index: usize,
) -> Option<&mut Vec<String>> {
    match section {
        Section::Experience => document
            .experience
            .get_mut(index)
            .map(|exp| &mut exp.responsibilities),
        Section::SoftSkills => document.soft_skills.get_mut(index).map(|cat| &mut cat.items),
        Section::TechnicalSkills => document
            .technical_skills
            .get_mut(index)
            .map(|cat| &mut cat.items),
        Section::Education | Section::Certifications => None,
    }
}

fn check_index(document: &Document, section: Section, index: usize) -> Result<(), EditorError> {
    if index < section_len(document, section) {
        Ok(())
    } else {
        Err(EditorError::IndexOutOfRange { section, index })
    }
}

fn check_nested(section: Section) -> Result<(), EditorError> {
    match section.item_field() {
        Some(_) => Ok(()),
        None => Err(EditorError::NoNestedItems(section)),
    }
}

/// Append a blank entry at the end of the section
pub fn add_entry(document: &mut Document, section: Section) {
    match section {
        Section::Experience => document.experience.push(ExperienceEntry::blank()),
        Section::Education => document.education.push(EducationEntry::default()),
        Section::SoftSkills => document.soft_skills.push(SkillCategory::blank()),
        Section::TechnicalSkills => document.technical_skills.push(SkillCategory::blank()),
        Section::Certifications => document.certifications.push(Certification::default()),
    }
}

/// Remove entry `index`; every later entry moves down by one
pub fn remove_entry(
    document: &mut Document,
    section: Section,
    index: usize,
) -> Result<(), EditorError> {
    check_index(document, section, index)?;
    match section {
        Section::Experience => {
            document.experience.remove(index);
        }
        Section::Education => {
            document.education.remove(index);
        }
        Section::SoftSkills => {
            document.soft_skills.remove(index);
        }
        Section::TechnicalSkills => {
            document.technical_skills.remove(index);
        }
        Section::Certifications => {
            document.certifications.remove(index);
        }
    }
    Ok(())
}

fn drop_empty_lines(lines: &mut Vec<String>) {
    lines.retain(|line| !line.is_empty());
}

fn tidy_skills(categories: &mut Vec<SkillCategory>, keep: Option<usize>) -> Option<usize> {
    let mut kept_at = None;
    let mut tidied = Vec::with_capacity(categories.len());
    for (i, mut category) in categories.drain(..).enumerate() {
        drop_empty_lines(&mut category.items);
        if Some(i) == keep {
            kept_at = Some(tidied.len());
            tidied.push(category);
        } else if !category.is_empty() {
            tidied.push(category);
        }
    }
    *categories = tidied;
    kept_at
}

/// Turn a raw collection (empty lines kept) into what a normal collect would
/// produce, except that the addressed entry always survives. Returns the
/// entry's index after tidying.
fn tidy(document: &mut Document, section: Section, index: usize) -> usize {
    for exp in &mut document.experience {
        drop_empty_lines(&mut exp.responsibilities);
    }
    let soft = tidy_skills(
        &mut document.soft_skills,
        (section == Section::SoftSkills).then_some(index),
    );
    let tech = tidy_skills(
        &mut document.technical_skills,
        (section == Section::TechnicalSkills).then_some(index),
    );
    match section {
        Section::SoftSkills => soft.unwrap_or(index),
        Section::TechnicalSkills => tech.unwrap_or(index),
        _ => index,
    }
}

/// Collect the current form, then append one empty nested line to entry `index`.
/// `index` addresses the entry as it was rendered.
pub fn add_item(
    fields: &FormFields,
    section: Section,
    index: usize,
) -> Result<Document, EditorError> {
    check_nested(section)?;
    let mut document = collect_with(fields, EmptyItems::Keep);
    check_index(&document, section, index)?;

    let at = tidy(&mut document, section, index);
    if let Some(items) = nested_items_mut(&mut document, section, at) {
        items.push(String::new());
    }
    Ok(document)
}

/// Collect the current form, then remove nested line `item` of entry `index`.
/// Both indices address the form as it was rendered, before empty lines drop out.
pub fn remove_item(
    fields: &FormFields,
    section: Section,
    index: usize,
    item: usize,
) -> Result<Document, EditorError> {
    check_nested(section)?;
    let mut document = collect_with(fields, EmptyItems::Keep);
    check_index(&document, section, index)?;

    match nested_items_mut(&mut document, section, index) {
        Some(items) if item < items.len() => {
            items.remove(item);
        }
        _ => {
            return Err(EditorError::ItemOutOfRange {
                section,
                index,
                item,
            })
        }
    }

    tidy(&mut document, section, index);
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::render::render_form;
    use crate::view::Node;

    fn form_of(document: &Document) -> FormFields {
        FormFields::from(Node::from(render_form(document)).input_values())
    }

    #[test]
    fn test_remove_entry_reindexes() {
        let mut doc = Document::template();
        let second = doc.experience[1].clone();
        remove_entry(&mut doc, Section::Experience, 0).unwrap();
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.experience[0], second);

        let values = Node::from(render_form(&doc)).input_values();
        assert_eq!(values["exp-position-0"], "PUESTO ANTERIOR");
        assert!(!values.contains_key("exp-position-1"));
    }

    #[test]
    fn test_remove_entry_out_of_range() {
        let mut doc = Document::template();
        let err = remove_entry(&mut doc, Section::Certifications, 5).unwrap_err();
        assert!(matches!(err, EditorError::IndexOutOfRange { index: 5, .. }));
        assert_eq!(doc, Document::template());
    }

    #[test]
    fn test_add_entry_seeds_blank_lines() {
        let mut doc = Document::default();
        add_entry(&mut doc, Section::Experience);
        add_entry(&mut doc, Section::TechnicalSkills);
        add_entry(&mut doc, Section::Education);
        assert_eq!(doc.experience[0].responsibilities, vec![String::new()]);
        assert_eq!(doc.technical_skills[0].items, vec![String::new()]);
        assert_eq!(doc.education.len(), 1);
    }

    #[test]
    fn test_add_item_keeps_unsaved_edits() {
        let doc = Document::template();
        let mut fields = form_of(&doc);
        fields.insert("exp-company-0", "Edited Corp");

        let next = add_item(&fields, Section::Experience, 0).unwrap();
        assert_eq!(next.experience[0].company, "Edited Corp");
        assert_eq!(next.experience[0].responsibilities.len(), 4);
        assert_eq!(next.experience[0].responsibilities[3], "");
    }

    #[test]
    fn test_add_item_tracks_entry_across_dropped_categories() {
        let fields: FormFields = [
            ("soft-category-0", ""),
            ("soft-category-1", "Equipo"),
            ("soft-item-1-0", "Escucha"),
        ]
        .into_iter()
        .collect();

        let next = add_item(&fields, Section::SoftSkills, 1).unwrap();
        assert_eq!(next.soft_skills.len(), 1);
        assert_eq!(next.soft_skills[0].category, "Equipo");
        assert_eq!(next.soft_skills[0].items, vec!["Escucha".to_string(), String::new()]);
    }

    #[test]
    fn test_remove_item_addresses_rendered_position() {
        let fields: FormFields = [
            ("exp-position-0", "Dev"),
            ("exp-resp-0-0", ""),
            ("exp-resp-0-1", "first"),
            ("exp-resp-0-2", "second"),
        ]
        .into_iter()
        .collect();

        let next = remove_item(&fields, Section::Experience, 0, 1).unwrap();
        assert_eq!(next.experience[0].responsibilities, vec!["second".to_string()]);
    }

    #[test]
    fn test_nested_ops_rejected_without_items() {
        let fields = form_of(&Document::template());
        assert!(matches!(
            add_item(&fields, Section::Education, 0),
            Err(EditorError::NoNestedItems(Section::Education))
        ));
        assert!(matches!(
            remove_item(&fields, Section::SoftSkills, 0, 9),
            Err(EditorError::ItemOutOfRange { item: 9, .. })
        ));
    }
}
