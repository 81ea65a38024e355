//! `richcell-core` - framework-agnostic types shared by the cell editor.
//!
//! Nothing in here renders or formats text. The element model stands in for
//! the host's rendering backend, and [`engine::FormatEngine`] is the seam to
//! whatever platform primitive actually applies bold/italic/etc.

pub mod cell;
pub mod dom;
pub mod engine;
pub mod interaction;

pub use cell::{CellContext, CellProp, CellProperties, CellRect};
pub use dom::Element;
pub use engine::{EngineError, FormatEngine, Selection};
pub use interaction::{Interaction, OpenEvent, UnknownInteraction};
