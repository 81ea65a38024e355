use serde::{Deserialize, Serialize};

/// Column addressing as the grid hands it over.
///
/// Array-of-arrays data sources address columns by index; array-of-objects
/// sources pass the property name instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellProp {
    Index(usize),
    Key(String),
}

impl Default for CellProp {
    fn default() -> Self {
        CellProp::Index(0)
    }
}

/// Bounding box of the target cell, in the host's pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CellRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl CellRect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }
}

/// Subset of the grid's cell metadata the editor looks at.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellProperties {
    /// Extra class the grid wants on the editor while this cell is edited
    pub class_name: Option<String>,
}

/// Everything `prepare` receives about the cell being edited.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CellContext {
    pub row: usize,
    pub col: usize,
    pub prop: CellProp,
    pub rect: CellRect,
    #[serde(default)]
    pub properties: CellProperties,
}

impl CellContext {
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            prop: CellProp::Index(col),
            ..Self::default()
        }
    }

    pub fn with_rect(mut self, rect: CellRect) -> Self {
        self.rect = rect;
        self
    }

    pub fn with_properties(mut self, properties: CellProperties) -> Self {
        self.properties = properties;
        self
    }
}
