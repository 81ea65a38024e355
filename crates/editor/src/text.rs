//! Plain single-line cell editor.
//!
//! Owns the holder positioned over the cell and a textarea inside it. The
//! rich-text editor wraps one of these for the structural lifecycle and
//! replaces the textarea with its own elements.

use richcell_core::{CellContext, CellRect, Element, OpenEvent};

use crate::editor::{CellEditor, EditorState};

pub const DEFAULT_HOLDER_CLASS: &str = "richcellEditorHolder";

#[derive(Debug, Clone)]
pub struct TextEditor {
    /// Starts out holding the textarea
    holder: Element,
    state: EditorState,
    cell: Option<CellContext>,
    original_value: Option<String>,
    focused: bool,
    /// Class the current cell asked for, removed again on re-target
    cell_class: Option<String>,
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new(DEFAULT_HOLDER_CLASS)
    }
}

impl TextEditor {
    pub fn new(holder_class: &str) -> Self {
        let mut holder = Element::new("div");
        holder.add_class(holder_class);
        holder.set_style("display", "none");

        let mut textarea = Element::new("textarea");
        textarea.add_class("cellEditorInput");
        textarea.set_attribute("value", "");
        holder.append_child(textarea);

        Self {
            holder,
            state: EditorState::Closed,
            cell: None,
            original_value: None,
            focused: false,
            cell_class: None,
        }
    }

    /// Value the cell held when the editor was prepared
    pub fn original_value(&self) -> Option<&str> {
        self.original_value.as_deref()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// None once a decorator has emptied the holder
    pub fn textarea(&self) -> Option<&Element> {
        self.holder.children().iter().find(|el| el.tag() == "textarea")
    }

    fn textarea_mut(&mut self) -> Option<&mut Element> {
        self.holder.children_mut().iter_mut().find(|el| el.tag() == "textarea")
    }

    fn set_textarea_value(&mut self, value: &str) {
        if let Some(textarea) = self.textarea_mut() {
            textarea.set_attribute("value", value);
        }
    }

    /// Holder with whatever it currently contains, as the host attaches it
    pub fn render(&self) -> Element {
        self.holder.clone()
    }

    /// Pin the holder over the cell rectangle, never smaller than the cell.
    fn position_over(&mut self, rect: CellRect) {
        self.holder.set_style("left", format!("{}px", rect.left));
        self.holder.set_style("top", format!("{}px", rect.top));
        self.holder.set_style("min-width", format!("{}px", rect.width));
        self.holder.set_style("min-height", format!("{}px", rect.height));
    }
}

impl CellEditor for TextEditor {
    fn prepare(&mut self, cell: CellContext, original_value: &str) {
        if let Some(class) = self.cell_class.take() {
            self.holder.remove_class(&class);
        }
        if let Some(class) = cell.properties.class_name.as_deref() {
            self.holder.add_class(class);
            self.cell_class = Some(class.to_string());
        }
        self.set_textarea_value(original_value);
        self.original_value = Some(original_value.to_string());
        log::debug!("prepare ({}, {})", cell.row, cell.col);
        self.cell = Some(cell);

        if self.state != EditorState::Open {
            self.state = EditorState::Prepared;
        }
    }

    fn open(&mut self, event: Option<OpenEvent>) {
        if let Some(rect) = self.cell.as_ref().map(|c| c.rect) {
            self.position_over(rect);
        }
        self.holder.set_style("display", "block");
        self.state = EditorState::Open;
        log::debug!("open ({:?})", event.unwrap_or_default());
    }

    fn close(&mut self) {
        self.holder.set_style("display", "none");
        self.focused = false;
        self.state = EditorState::Closed;
        log::debug!("close");
    }

    fn focus(&mut self) {
        if self.state == EditorState::Open {
            self.focused = true;
        }
    }

    fn get_value(&self) -> String {
        self.textarea()
            .and_then(|t| t.attribute("value"))
            .unwrap_or_default()
            .to_string()
    }

    fn set_value(&mut self, value: &str) {
        self.set_textarea_value(value);
    }

    fn state(&self) -> EditorState {
        self.state
    }

    fn cell(&self) -> Option<&CellContext> {
        self.cell.as_ref()
    }

    fn holder(&self) -> &Element {
        &self.holder
    }

    fn holder_mut(&mut self) -> &mut Element {
        &mut self.holder
    }
}
