// src/form/render.rs
//! Document -> form view tree. Every input is seeded from the model and named
//! positionally, see [`super::fields`].

use super::fields::{field_name, item_field_name, Section};
use crate::types::{Certification, Document, EducationEntry, ExperienceEntry, SkillCategory};
use crate::view::{Element, Node};

pub const FORM_ID: &str = "cv-form";

struct SectionText {
    heading: &'static str,
    group_title: &'static str,
    add_entry: &'static str,
    add_item: &'static str,
}

fn section_text(section: Section) -> SectionText {
    match section {
        Section::Experience => SectionText {
            heading: "Experiencia Laboral",
            group_title: "Experiencia Laboral",
            add_entry: "+ Agregar Experiencia",
            add_item: "+ Agregar Responsabilidad",
        },
        Section::Education => SectionText {
            heading: "Educación",
            group_title: "Educación",
            add_entry: "+ Agregar Educación",
            add_item: "",
        },
        Section::SoftSkills => SectionText {
            heading: "Habilidades Blandas",
            group_title: "Categoría",
            add_entry: "+ Agregar Categoría",
            add_item: "+ Agregar Habilidad",
        },
        Section::TechnicalSkills => SectionText {
            heading: "Habilidades Técnicas",
            group_title: "Categoría",
            add_entry: "+ Agregar Categoría",
            add_item: "+ Agregar Habilidad",
        },
        Section::Certifications => SectionText {
            heading: "Certificaciones",
            group_title: "Certificación",
            add_entry: "+ Agregar Certificación",
            add_item: "",
        },
    }
}

const PERSONAL_LABELS: [(&str, &str); 8] = [
    ("firstName", "Nombre"),
    ("lastName", "Apellido"),
    ("title", "Título"),
    ("subtitle", "Subtítulo"),
    ("location", "Ubicación"),
    ("phone", "Teléfono"),
    ("email", "Correo electrónico"),
    ("linkedin", "LinkedIn"),
];

// ===== Building Blocks =====

fn input(name: &str, value: &str) -> Element {
    Element::new("input")
        .attr("type", "text")
        .class("form-input")
        .attr("name", name)
        .attr("value", value)
}

fn labeled_input(label: &str, name: &str, value: &str, placeholder: Option<&str>) -> Element {
    let mut field = input(name, value);
    if let Some(placeholder) = placeholder {
        field = field.attr("placeholder", placeholder);
    }
    Element::new("div")
        .class("form-group")
        .child(Element::new("label").class("form-label").text(label))
        .child(field)
}

fn action_button(class: &str, label: &str, action: &str, section: Section) -> Element {
    Element::new("button")
        .attr("type", "button")
        .class(class)
        .attr("data-action", action)
        .attr("data-section", section.slug())
        .text(label)
}

fn group(section: Section, index: usize, body: Vec<Element>) -> Node {
    let text = section_text(section);
    let header = Element::new("div")
        .class("list-item-header")
        .child(
            Element::new("span")
                .class("list-item-title")
                .text(format!("{} #{}", text.group_title, index + 1)),
        )
        .child(
            action_button("btn btn-remove", "Eliminar", "remove-entry", section)
                .attr("data-index", index.to_string()),
        );

    Element::new("div")
        .class("list-item fade-in")
        .attr("data-section", section.slug())
        .attr("data-index", index.to_string())
        .child(header)
        .children(body)
        .into()
}

/// Nested repeatable inputs plus their add control
fn nested_items(
    section: Section,
    index: usize,
    label: &str,
    placeholder: &str,
    items: &[String],
) -> Element {
    let field = section.item_field().unwrap_or("item");
    let rows = items.iter().enumerate().map(|(sub, value)| {
        Element::new("div")
            .class("skill-item")
            .child(
                input(&item_field_name(section, field, index, sub), value)
                    .class("form-input mb-1")
                    .attr("placeholder", format!("{} {}", placeholder, sub + 1)),
            )
            .child(
                action_button("btn-skill-remove", "×", "remove-item", section)
                    .attr("data-index", index.to_string())
                    .attr("data-item", sub.to_string())
                    .attr("title", "Eliminar"),
            )
    });

    Element::new("div")
        .class("form-group")
        .child(Element::new("label").class("form-label").text(label))
        .children(rows)
        .child(
            action_button("btn btn-add", section_text(section).add_item, "add-item", section)
                .attr("data-index", index.to_string()),
        )
}

// ===== Per-Section Groups =====

fn experience_group(index: usize, exp: &ExperienceEntry) -> Node {
    let s = Section::Experience;
    group(
        s,
        index,
        vec![
            labeled_input("Posición", &field_name(s, "position", index), &exp.position, None),
            Element::new("div")
                .class("form-row")
                .child(labeled_input("Empresa", &field_name(s, "company", index), &exp.company, None))
                .child(labeled_input("Periodo", &field_name(s, "period", index), &exp.period, None)),
            labeled_input("Ubicación", &field_name(s, "location", index), &exp.location, None),
            nested_items(
                s,
                index,
                "Responsabilidades (una por línea)",
                "Responsabilidad",
                &exp.responsibilities,
            ),
        ],
    )
}

fn education_group(index: usize, edu: &EducationEntry) -> Node {
    let s = Section::Education;
    group(
        s,
        index,
        vec![
            labeled_input("Grado", &field_name(s, "degree", index), &edu.degree, None),
            labeled_input("Institución", &field_name(s, "institution", index), &edu.institution, None),
            Element::new("div")
                .class("form-row")
                .child(labeled_input("Periodo", &field_name(s, "period", index), &edu.period, None))
                .child(labeled_input("Ubicación", &field_name(s, "location", index), &edu.location, None)),
            labeled_input(
                "Notas (opcional)",
                &field_name(s, "note", index),
                &edu.note,
                Some("Información adicional"),
            ),
        ],
    )
}

fn skill_group(section: Section, index: usize, category: &SkillCategory) -> Node {
    let placeholder = match section {
        Section::SoftSkills => "ej., Personal, Comunicación",
        _ => "ej., Programación, Idiomas, Herramientas",
    };
    group(
        section,
        index,
        vec![
            labeled_input(
                "Nombre de Categoría",
                &field_name(section, "category", index),
                &category.category,
                Some(placeholder),
            ),
            nested_items(
                section,
                index,
                "Habilidades en esta categoría",
                "Habilidad",
                &category.items,
            ),
        ],
    )
}

fn certification_group(index: usize, cert: &Certification) -> Node {
    let s = Section::Certifications;
    group(
        s,
        index,
        vec![
            labeled_input("Nombre de la certificación", &field_name(s, "name", index), &cert.name, None),
            labeled_input(
                "Organización que otorga la certificación",
                &field_name(s, "issuer", index),
                &cert.issuer,
                None,
            ),
        ],
    )
}

// ===== Public Rendering =====

/// The list container of one section, with one group per entry
pub fn render_section(document: &Document, section: Section) -> Element {
    let groups: Vec<Node> = match section {
        Section::Experience => document
            .experience
            .iter()
            .enumerate()
            .map(|(i, exp)| experience_group(i, exp))
            .collect(),
        Section::Education => document
            .education
            .iter()
            .enumerate()
            .map(|(i, edu)| education_group(i, edu))
            .collect(),
        Section::SoftSkills => document
            .soft_skills
            .iter()
            .enumerate()
            .map(|(i, cat)| skill_group(section, i, cat))
            .collect(),
        Section::TechnicalSkills => document
            .technical_skills
            .iter()
            .enumerate()
            .map(|(i, cat)| skill_group(section, i, cat))
            .collect(),
        Section::Certifications => document
            .certifications
            .iter()
            .enumerate()
            .map(|(i, cert)| certification_group(i, cert))
            .collect(),
    };

    Element::new("div").id(section.container_id()).children(groups)
}

pub fn render_personal_info(document: &Document) -> Element {
    let values = document.personal_info.fields();
    let inputs = PERSONAL_LABELS.iter().zip(values.iter()).map(|((name, label), (_, value))| {
        labeled_input(label, name, value, None)
    });

    Element::new("div")
        .id("personal-info")
        .class("form-section")
        .child(Element::new("h3").class("form-section-title").text("Información Personal"))
        .children(inputs)
}

/// Whole form: personal info followed by every list section
pub fn render_form(document: &Document) -> Element {
    let sections = Section::ALL.into_iter().map(|section| {
        let text = section_text(section);
        Element::new("div")
            .class("form-section")
            .child(Element::new("h3").class("form-section-title").text(text.heading))
            .child(render_section(document, section))
            .child(action_button("btn btn-add", text.add_entry, "add-entry", section))
    });

    Element::new("form")
        .id(FORM_ID)
        .attr("autocomplete", "off")
        .child(render_personal_info(document))
        .children(sections)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::fields::FormFields;

    #[test]
    fn test_experience_fields_are_positional() {
        let doc = Document::template();
        let values = Node::from(render_form(&doc)).input_values();

        assert_eq!(values["exp-position-0"], "PUESTO DE TRABAJO");
        assert_eq!(values["exp-company-1"], "Empresa Anterior");
        assert_eq!(values["exp-resp-1-2"], "Solución de problemas y mejoras implementadas");
        assert_eq!(values["tech-item-1-0"], "Español (Nativo)");
        assert_eq!(values["cert-issuer-0"], "Entidad Emisora");
        assert_eq!(values["firstName"], "Nombre");
        assert!(!values.contains_key("exp-position-2"));
    }

    #[test]
    fn test_every_group_has_a_remove_control() {
        let doc = Document::template();
        let section: Node = render_section(&doc, Section::Experience).into();
        let removes: Vec<_> = section
            .elements_with_tag("button")
            .into_iter()
            .filter(|b| b.get_attr("data-action") == Some("remove-entry"))
            .collect();
        assert_eq!(removes.len(), 2);
        assert_eq!(removes[1].get_attr("data-index"), Some("1"));
    }

    #[test]
    fn test_form_has_add_control_per_section() {
        let form: Node = render_form(&Document::default()).into();
        let adds = form
            .elements_with_tag("button")
            .into_iter()
            .filter(|b| b.get_attr("data-action") == Some("add-entry"))
            .count();
        assert_eq!(adds, Section::ALL.len());
    }

    #[test]
    fn test_section_container_uses_list_id() {
        let section = render_section(&Document::default(), Section::SoftSkills);
        assert_eq!(section.get_attr("id"), Some("soft-skills-list"));
        assert!(section.children.is_empty());
        let fields = FormFields::from(Node::from(section).input_values());
        assert!(fields.is_empty());
    }
}
