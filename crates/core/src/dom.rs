//! Headless element model.
//!
//! The editor never touches a real DOM. It builds and mutates these values,
//! and the host mirrors them onto whatever it renders with. Only the
//! primitives the editor needs exist: classes, attributes, inline style,
//! inner HTML and children.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    tag: String,
    classes: Vec<String>,
    attributes: BTreeMap<String, String>,
    style: BTreeMap<String, String>,
    inner_html: String,
    children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    // =========================================================================
    // Classes
    // =========================================================================

    /// Add a class. Adding one that is already present is a no-op.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Add or remove `class` depending on `on`
    pub fn set_class(&mut self, class: &str, on: bool) {
        if on {
            self.add_class(class);
        } else {
            self.remove_class(class);
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    // =========================================================================
    // Attributes and style
    // =========================================================================

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) {
        self.attributes.insert(name.to_string(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_style(&mut self, property: &str, value: impl Into<String>) {
        self.style.insert(property.to_string(), value.into());
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.style.get(property).map(String::as_str)
    }

    /// True unless `display: none` is set
    pub fn is_displayed(&self) -> bool {
        self.style("display") != Some("none")
    }

    // =========================================================================
    // Content
    // =========================================================================

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    /// Replace the serialized content wholesale. No parsing, no validation.
    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }

    pub fn append_child(&mut self, child: Element) {
        self.children.push(child);
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Element] {
        &mut self.children
    }

    /// Drop every child and any inner HTML
    pub fn empty(&mut self) {
        self.children.clear();
        self.inner_html.clear();
    }
}
