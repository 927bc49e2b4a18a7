// src/view/html.rs
//! HTML serialization of the view tree. Text and attribute values get the
//! same default escaping a DOM text node would; nothing more.

use super::node::{Element, Node};

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

pub fn escape_text(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

pub fn escape_attr(value: &str, out: &mut String) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

impl Node {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    pub fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(text) => escape_text(text, out),
            Node::Element(element) => element.write_html(out),
        }
    }
}

impl Element {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    /// Serialized children only, for swapping into an existing container
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.write_html(&mut out);
        }
        out
    }

    pub fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_attr(value, out);
            out.push('"');
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&self.tag) {
            return;
        }

        for child in &self.children {
            child.write_html(out);
        }
        out.push_str("</");
        out.push_str(self.tag);
        out.push('>');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_nested_elements() {
        let node: Node = Element::new("div")
            .class("subsection")
            .child(Element::new("h3").text("DEV"))
            .child(Element::new("input").attr("name", "exp-position-0").attr("value", "Dev"))
            .into();
        assert_eq!(
            node.to_html(),
            r#"<div class="subsection"><h3>DEV</h3><input name="exp-position-0" value="Dev"></div>"#
        );
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let node: Node = Element::new("p")
            .attr("title", "a \"quoted\" <b>")
            .text("R&D <team>")
            .into();
        assert_eq!(
            node.to_html(),
            r#"<p title="a &quot;quoted&quot; &lt;b&gt;">R&amp;D &lt;team&gt;</p>"#
        );
    }

    #[test]
    fn test_inner_html_skips_wrapper() {
        let element = Element::new("div").id("x").child(Element::new("span").text("hi"));
        assert_eq!(element.inner_html(), "<span>hi</span>");
    }
}
