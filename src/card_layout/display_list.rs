//! Display List for card rendering
//!
//! The layout phase produces a tree of typed UI nodes; the DOM layer only
//! materializes it. Nodes carry their CSS classes, attributes, text and the
//! events the mount phase has to wire up.

use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Output of one layout pass
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DisplayList {
    /// Theme to apply to the document root, `None` for the empty state
    pub theme: Option<Theme>,

    /// The single node placed into the container
    pub root: RenderNode,
}

/// A node of the render tree
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RenderNode {
    Element(RenderElement),
    Text { text: String },
}

/// An element node
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RenderElement {
    /// HTML tag name
    pub tag: String,

    /// CSS class names, joined with spaces on mount
    #[serde(default)]
    pub classes: Vec<String>,

    #[serde(default)]
    pub attributes: BTreeMap<String, String>,

    /// Text content (set before children are appended)
    #[serde(default)]
    pub text: Option<String>,

    #[serde(default)]
    pub children: Vec<RenderNode>,

    /// Event bindings for the mount phase
    #[serde(default)]
    pub events: Vec<NodeEvent>,
}

/// Behaviour attached to an element
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NodeEvent {
    /// Report a click on the card for the row at `index`
    Click { index: usize },

    /// Swap the image source when loading fails
    ImageFallback { src: String },
}

impl RenderElement {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            classes: Vec::new(),
            attributes: BTreeMap::new(),
            text: None,
            children: Vec::new(),
            events: Vec::new(),
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, node: impl Into<RenderNode>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn on(mut self, event: NodeEvent) -> Self {
        self.events.push(event);
        self
    }

    pub fn push_child(&mut self, node: impl Into<RenderNode>) {
        self.children.push(node.into());
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Element children (text nodes skipped)
    pub fn child_elements(&self) -> impl Iterator<Item = &RenderElement> {
        self.children.iter().filter_map(RenderNode::as_element)
    }

    /// First descendant (or self) carrying `class`, depth first
    pub fn find_class(&self, class: &str) -> Option<&RenderElement> {
        if self.has_class(class) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_class(class))
    }

    /// All descendants (and self) carrying `class`, in document order
    pub fn find_all_class<'a>(&'a self, class: &str) -> Vec<&'a RenderElement> {
        let mut found = Vec::new();
        self.collect_class(class, &mut found);
        found
    }

    fn collect_class<'a>(&'a self, class: &str, found: &mut Vec<&'a RenderElement>) {
        if self.has_class(class) {
            found.push(self);
        }
        for child in self.child_elements() {
            child.collect_class(class, found);
        }
    }

    /// Concatenated text of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut out = self.text.clone().unwrap_or_default();
        for child in &self.children {
            match child {
                RenderNode::Element(element) => out.push_str(&element.text_content()),
                RenderNode::Text { text } => out.push_str(text),
            }
        }
        out
    }
}

impl RenderNode {
    pub fn text(text: impl Into<String>) -> Self {
        RenderNode::Text { text: text.into() }
    }

    pub fn as_element(&self) -> Option<&RenderElement> {
        match self {
            RenderNode::Element(element) => Some(element),
            RenderNode::Text { .. } => None,
        }
    }
}

impl From<RenderElement> for RenderNode {
    fn from(element: RenderElement) -> Self {
        RenderNode::Element(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_class_and_text_content() {
        let tree = RenderElement::new("div")
            .class("outer")
            .child(
                RenderElement::new("span")
                    .class("inner")
                    .text("icon"),
            )
            .child(RenderNode::text(" Label"));

        assert_eq!(tree.find_class("inner").map(|e| e.tag.as_str()), Some("span"));
        assert!(tree.find_class("missing").is_none());
        assert_eq!(tree.text_content(), "icon Label");
    }

    #[test]
    fn test_serializes_with_kind_tags() {
        let node: RenderNode = RenderElement::new("div")
            .on(NodeEvent::Click { index: 2 })
            .into();
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["kind"], "element");
        assert_eq!(json["events"][0]["type"], "click");
        assert_eq!(json["events"][0]["index"], 2);
    }
}
