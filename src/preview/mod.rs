// src/preview/mod.rs
//! Preview renderer: a pure projection of the document into the formatted
//! résumé page. Same inputs, same tree.

use crate::i18n::{labels, SectionLabels};
use crate::types::{
    Certification, Document, EducationEntry, ExperienceEntry, Language, PaperSize, PersonalInfo,
    SkillCategory,
};
use crate::view::{Element, Node};

pub const PREVIEW_ID: &str = "cv-preview";
pub const ICON_CLASS: &str = "icon";

const LINKEDIN_PROFILE_BASE: &str = "https://www.linkedin.com/in/";

/// Full URL for the LinkedIn field; anything already starting with `http` is kept
pub fn linkedin_url(handle: &str) -> String {
    if handle.starts_with("http") {
        handle.to_string()
    } else {
        format!("{}{}", LINKEDIN_PROFILE_BASE, handle)
    }
}

fn icon(name: &str) -> Element {
    Element::new("img")
        .class(ICON_CLASS)
        .attr("src", format!("/static/img/{}.svg", name))
        .attr("alt", "")
}

fn contact_line(icon_name: &str, content: impl Into<Node>) -> Node {
    Element::new("p").child(icon(icon_name)).child(content).into()
}

// ===== Header =====

fn render_header(info: &PersonalInfo) -> Element {
    let name = Element::new("h1")
        .text(format!("{} ", info.first_name))
        .child(Element::new("span").text(info.last_name.as_str()));

    let block = Element::new("div")
        .class("personal__info")
        .child(name)
        .child_if(!info.title.is_empty(), || {
            Element::new("h2")
                .text(format!("{} ", info.title))
                .child_if(!info.subtitle.is_empty(), || {
                    Element::new("span")
                        .text(format!("| {}", info.subtitle))
                        .into()
                })
                .into()
        })
        .child_if(!info.location.is_empty(), || {
            contact_line("location", format!(" {}", info.location))
        })
        .child_if(!info.phone.is_empty(), || {
            contact_line("phone", format!(" {}", info.phone))
        })
        .child_if(!info.email.is_empty(), || {
            contact_line(
                "mail",
                Element::new("a")
                    .attr("href", format!("mailto:{}", info.email))
                    .text(format!(" {}", info.email)),
            )
        })
        .child_if(!info.linkedin.is_empty(), || {
            contact_line(
                "linkedin",
                Element::new("a")
                    .attr("href", linkedin_url(&info.linkedin))
                    .attr("target", "_blank")
                    .text(format!(" {}", info.linkedin)),
            )
        });

    Element::new("header").child(block)
}

// ===== Sections =====

fn section(heading: &str, subsections: Vec<Element>) -> Element {
    Element::new("section")
        .child(Element::new("h2").text(heading))
        .children(subsections)
}

fn subsection() -> Element {
    Element::new("div").class("subsection")
}

fn list_item(text: &str) -> Element {
    Element::new("p").class("list__item").text(text)
}

/// "period | location", the location part only when present
fn period_line(period: &str, location: &str) -> String {
    if location.is_empty() {
        period.to_string()
    } else {
        format!("{} | {}", period, location)
    }
}

fn experience_block(exp: &ExperienceEntry) -> Element {
    subsection()
        .child(Element::new("h3").text(exp.position.as_str()))
        .child(Element::new("h4").text(exp.company.as_str()))
        .child(Element::new("h5").text(period_line(&exp.period, &exp.location)))
        .children(
            exp.responsibilities
                .iter()
                .filter(|resp| !resp.is_empty())
                .map(|resp| list_item(resp)),
        )
}

fn education_block(edu: &EducationEntry) -> Element {
    subsection()
        .child(Element::new("h3").text(edu.degree.as_str()))
        .child(Element::new("h4").text(edu.institution.as_str()))
        .child(Element::new("p").text(period_line(&edu.period, &edu.location)))
        .child_if(!edu.note.is_empty(), || {
            Element::new("p")
                .class("note")
                .text(format!("({})", edu.note))
                .into()
        })
}

fn skill_block(category: &SkillCategory) -> Element {
    subsection()
        .child_if(!category.category.is_empty(), || {
            Element::new("h3")
                .text(category.category.to_uppercase())
                .into()
        })
        .children(
            category
                .items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(list_item),
        )
}

fn certification_block(cert: &Certification) -> Element {
    let line = if cert.issuer.is_empty() {
        cert.name.clone()
    } else {
        format!("{} - {}", cert.name, cert.issuer)
    };
    subsection().child(list_item(&line))
}

/// Heading plus one block per entry, or nothing at all for an empty list
fn optional_section<T>(heading: &str, entries: &[T], block: fn(&T) -> Element) -> Option<Element> {
    if entries.is_empty() {
        return None;
    }
    Some(section(heading, entries.iter().map(block).collect()))
}

fn render_columns(document: &Document, text: &SectionLabels) -> Element {
    let left = [
        optional_section(text.experience, &document.experience, experience_block),
        optional_section(text.education, &document.education, education_block),
    ];
    let right = [
        optional_section(text.soft_skills, &document.soft_skills, skill_block),
        optional_section(text.hard_skills, &document.technical_skills, skill_block),
        optional_section(text.certifications, &document.certifications, certification_block),
    ];

    Element::new("main")
        .child(
            Element::new("div")
                .class("column left__col")
                .children(left.into_iter().flatten()),
        )
        .child(
            Element::new("div")
                .class("column right__col")
                .children(right.into_iter().flatten()),
        )
}

/// Inline geometry of the preview page at 96 dpi
pub fn preview_style(paper: PaperSize) -> String {
    let (width, min_height) = paper.preview_pixels();
    format!("width: {}px; min-height: {}px;", width, min_height)
}

/// Render the formatted page. Every value lands in a text node untouched.
pub fn render_preview(document: &Document, language: Language, paper: PaperSize) -> Element {
    Element::new("div")
        .id(PREVIEW_ID)
        .class(format!("cv-preview paper-{}", paper.code()))
        .attr("lang", language.code())
        .attr("style", preview_style(paper))
        .child(render_header(&document.personal_info))
        .child(render_columns(document, labels(language)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn preview(document: &Document, language: Language) -> Node {
        render_preview(document, language, PaperSize::Letter).into()
    }

    fn headings(tree: &Node) -> Vec<String> {
        tree.elements_with_tag("section")
            .into_iter()
            .filter_map(|s| s.children.first())
            .map(Node::text_content)
            .collect()
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut doc = Document::template();
        doc.education.clear();
        doc.certifications.clear();

        let tree = preview(&doc, Language::Es);
        assert_eq!(
            headings(&tree),
            vec!["EXPERIENCIA PROFESIONAL", "HABILIDADES BLANDAS", "HABILIDADES TÉCNICAS"]
        );
    }

    #[test]
    fn test_headings_follow_language() {
        let tree = preview(&Document::template(), Language::En);
        assert_eq!(
            headings(&tree),
            vec![
                "PROFESSIONAL EXPERIENCE",
                "EDUCATION",
                "SOFT SKILLS",
                "HARD SKILLS",
                "CERTIFICATIONS"
            ]
        );
    }

    #[test]
    fn test_empty_document_has_no_sections() {
        let tree = preview(&Document::default(), Language::Es);
        assert!(tree.elements_with_tag("section").is_empty());
        assert!(tree.elements_with_class(ICON_CLASS).is_empty());
    }

    #[test]
    fn test_linkedin_expansion() {
        assert_eq!(linkedin_url("juan"), "https://www.linkedin.com/in/juan");
        assert_eq!(
            linkedin_url("https://linkedin.com/in/juan"),
            "https://linkedin.com/in/juan"
        );
        assert_eq!(linkedin_url("http://x"), "http://x");
    }

    #[test]
    fn test_contact_links() {
        let mut doc = Document::default();
        doc.personal_info.email = "a@b.c".to_string();
        doc.personal_info.linkedin = "juan".to_string();

        let tree = preview(&doc, Language::Es);
        let links: Vec<_> = tree
            .elements_with_tag("a")
            .into_iter()
            .filter_map(|a| a.get_attr("href"))
            .collect();
        assert_eq!(links, vec!["mailto:a@b.c", "https://www.linkedin.com/in/juan"]);
        assert_eq!(tree.elements_with_class(ICON_CLASS).len(), 2);
    }

    #[test]
    fn test_paper_geometry() {
        let a4 = render_preview(&Document::default(), Language::Es, PaperSize::A4);
        assert_eq!(a4.get_attr("style"), Some("width: 794px; min-height: 1123px;"));
        let letter = render_preview(&Document::default(), Language::Es, PaperSize::Letter);
        assert_eq!(letter.get_attr("style"), Some("width: 816px; min-height: 1056px;"));
    }

    #[test]
    fn test_skills_are_upper_cased_and_trimmed() {
        let mut doc = Document::default();
        doc.technical_skills.push(SkillCategory {
            category: "Software".to_string(),
            items: vec!["  Rust ".to_string(), "   ".to_string()],
        });

        let tree = preview(&doc, Language::Es);
        assert!(tree.elements_with_tag("h3")[0].text_content() == "SOFTWARE");
        let items: Vec<_> = tree
            .elements_with_class("list__item")
            .into_iter()
            .map(Element::text_content)
            .collect();
        assert_eq!(items, vec!["Rust"]);
    }

    #[test]
    fn test_text_is_inserted_verbatim() {
        let mut doc = Document::default();
        doc.personal_info.first_name = "<b>Ana</b>".to_string();
        let tree = preview(&doc, Language::Es);
        assert!(tree.text_content().contains("<b>Ana</b>"));
        assert!(tree.to_html().contains("&lt;b&gt;Ana&lt;/b&gt;"));
    }

    #[test]
    fn test_period_line() {
        assert_eq!(period_line("2020", ""), "2020");
        assert_eq!(period_line("2020", "Madrid"), "2020 | Madrid");
    }
}
