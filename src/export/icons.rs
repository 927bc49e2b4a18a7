// src/export/icons.rs
//! Icon suppression around the PDF render

use std::ops::Deref;

use crate::preview::ICON_CLASS;
use crate::view::Node;

const HIDDEN: &str = "display:none";

/// Hides every `.icon` element of the preview while alive.
/// Prior inline styles come back on drop, whichever way the render ended.
pub struct IconSuppression<'a> {
    root: &'a mut Node,
    saved: Vec<Option<String>>,
}

impl<'a> IconSuppression<'a> {
    pub fn new(root: &'a mut Node) -> Self {
        let mut saved = Vec::new();
        root.walk_mut(&mut |element| {
            if element.has_class(ICON_CLASS) {
                saved.push(element.get_attr("style").map(str::to_string));
                element.set_attr("style", HIDDEN);
            }
        });
        Self { root, saved }
    }

    pub fn hidden_count(&self) -> usize {
        self.saved.len()
    }
}

impl Deref for IconSuppression<'_> {
    type Target = Node;

    fn deref(&self) -> &Node {
        &*self.root
    }
}

impl Drop for IconSuppression<'_> {
    fn drop(&mut self) {
        let mut saved = self.saved.drain(..);
        // Same walk order as in `new`, so entries line up one to one
        self.root.walk_mut(&mut |element| {
            if element.has_class(ICON_CLASS) {
                match saved.next().flatten() {
                    Some(style) => element.set_attr("style", style),
                    None => {
                        element.remove_attr("style");
                    }
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::Element;

    fn tree() -> Node {
        Element::new("div")
            .child(Element::new("img").class("icon"))
            .child(Element::new("img").class("icon").attr("style", "width: 12px"))
            .child(Element::new("p").attr("style", "color: red"))
            .into()
    }

    #[test]
    fn test_icons_hidden_then_restored() {
        let mut node = tree();
        {
            let guard = IconSuppression::new(&mut node);
            assert_eq!(guard.hidden_count(), 2);
            for icon in guard.elements_with_class("icon") {
                assert_eq!(icon.get_attr("style"), Some("display:none"));
            }
            assert!(guard.to_html().contains("<p style=\"color: red\">"));
        }
        assert_eq!(node, tree());
    }
}
