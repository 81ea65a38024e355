//! The content-editable region holding the cell's HTML.

use richcell_core::{Element, Selection};

/// Editable region over the cell. Created once per editor and reused for
/// every cell it edits; show/hide only flip `display`.
#[derive(Debug, Clone)]
pub struct EditableSurface {
    element: Element,
    selection: Option<Selection>,
    focused: bool,
}

impl EditableSurface {
    pub fn new(class: &str) -> Self {
        let mut element = Element::new("div");
        element.set_attribute("contenteditable", "true");
        element.add_class(class);
        element.set_style("display", "none");
        Self {
            element,
            selection: None,
            focused: false,
        }
    }

    pub fn show(&mut self) {
        self.element.set_style("display", "block");
    }

    /// Hide and drop focus. Content and caret are kept.
    pub fn hide(&mut self) {
        self.element.set_style("display", "none");
        self.focused = false;
    }

    pub fn is_visible(&self) -> bool {
        self.element.is_displayed()
    }

    /// Focus the region. Hidden regions can't take focus, so this is a
    /// no-op until `show`.
    pub fn focus(&mut self) {
        if self.is_visible() {
            self.focused = true;
        } else {
            log::trace!("focus ignored: surface hidden");
        }
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Serialized content, exactly as last set or as the engine left it.
    pub fn content(&self) -> &str {
        self.element.inner_html()
    }

    /// Replace the content wholesale. The old caret no longer points at
    /// anything meaningful, so it is cleared.
    pub fn set_content(&mut self, html: &str) {
        self.element.set_inner_html(html);
        self.selection = None;
    }

    /// Caret/selection as last reported by the platform
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.selection = selection;
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    /// The engine's working document.
    pub(crate) fn element_mut(&mut self) -> &mut Element {
        &mut self.element
    }
}
