// src/view/node.rs
//! Minimal view tree: the form and the preview are both projected into this
//! before anything touches HTML.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Append a child only when `cond` holds
    pub fn child_if(self, cond: bool, child: impl FnOnce() -> Node) -> Self {
        if cond {
            self.child(child())
        } else {
            self
        }
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn set_attr(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attrs.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name.to_string(), value)),
        }
    }

    pub fn remove_attr(&mut self, name: &str) -> Option<String> {
        let pos = self.attrs.iter().position(|(key, _)| key == name)?;
        Some(self.attrs.remove(pos).1)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Empty text node, renders to nothing
    pub fn empty() -> Self {
        Node::Text(String::new())
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// Depth-first, document-order visit of every element
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        if let Node::Element(element) = self {
            visit(element);
            for child in &element.children {
                child.walk(visit);
            }
        }
    }

    /// Mutable counterpart of [`Node::walk`], same visiting order
    pub fn walk_mut(&mut self, visit: &mut impl FnMut(&mut Element)) {
        if let Node::Element(element) = self {
            visit(element);
            for child in &mut element.children {
                child.walk_mut(visit);
            }
        }
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        let mut found = None;
        self.walk(&mut |element| {
            if found.is_none() && element.get_attr("id") == Some(id) {
                found = Some(element);
            }
        });
        found
    }

    pub fn elements_with_class(&self, class: &str) -> Vec<&Element> {
        let mut matches = Vec::new();
        self.walk(&mut |element| {
            if element.has_class(class) {
                matches.push(element);
            }
        });
        matches
    }

    pub fn elements_with_tag(&self, tag: &str) -> Vec<&Element> {
        let mut matches = Vec::new();
        self.walk(&mut |element| {
            if element.tag == tag {
                matches.push(element);
            }
        });
        matches
    }

    /// Concatenated text content of the subtree
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// Name/value pairs of every named input, the way a browser would submit them
    pub fn input_values(&self) -> BTreeMap<String, String> {
        let mut values = BTreeMap::new();
        self.walk(&mut |element| {
            if matches!(element.tag, "input" | "textarea") {
                if let Some(name) = element.get_attr("name") {
                    let value = element.get_attr("value").unwrap_or_default();
                    values.insert(name.to_string(), value.to_string());
                }
            }
        });
        values
    }
}

impl Element {
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Element::new("div")
            .id("root")
            .child(Element::new("p").class("a b").text("one"))
            .child(
                Element::new("section")
                    .child(Element::new("input").attr("name", "x").attr("value", "1"))
                    .child(Element::new("img").class("icon")),
            )
            .into()
    }

    #[test]
    fn test_attr_replaces_existing_value() {
        let element = Element::new("p").attr("style", "a").attr("style", "b");
        assert_eq!(element.attrs.len(), 1);
        assert_eq!(element.get_attr("style"), Some("b"));
    }

    #[test]
    fn test_queries() {
        let tree = sample();
        assert!(tree.find_by_id("root").is_some());
        assert_eq!(tree.elements_with_class("b").len(), 1);
        assert_eq!(tree.elements_with_class("icon").len(), 1);
        assert_eq!(tree.elements_with_tag("input").len(), 1);
        assert_eq!(tree.text_content(), "one");
        assert_eq!(tree.input_values().get("x").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_child_if() {
        let element = Element::new("div")
            .child_if(false, || Node::text("skipped"))
            .child_if(true, || Node::text("kept"));
        assert_eq!(element.children, vec![Node::text("kept")]);
    }
}
