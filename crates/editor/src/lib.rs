//! `richcell-editor` - in-place rich-text editor for a single grid cell.
//!
//! A formatting toolbar and a content-editable surface, kept in sync with
//! the platform's formatting state, behind the grid's [`CellEditor`]
//! lifecycle.

pub mod action;
pub mod editor;
pub mod rich;
pub mod surface;
pub mod sync;
pub mod text;
pub mod toolbar;

#[cfg(test)]
pub mod harness;

pub use action::{ActionRegistry, FormatAction};
pub use editor::{CellEditor, EditorOptions, EditorState};
pub use rich::RichTextEditor;
pub use surface::EditableSurface;
pub use sync::SyncController;
pub use text::TextEditor;
pub use toolbar::{Toolbar, ToolbarButton};
