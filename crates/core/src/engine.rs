//! Seam to the platform's text-formatting primitives.
//!
//! The editor calls these and nothing else to change or inspect formatting.
//! It never interprets the markup itself.

use std::fmt;

use crate::dom::Element;

/// Caret or selection inside the editable surface.
///
/// Offsets are whatever the platform reports; the editor only stores them
/// and hands them back to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: usize,
    pub focus: usize,
}

impl Selection {
    pub const fn caret(at: usize) -> Self {
        Self { anchor: at, focus: at }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The engine has no working document (nothing focused, not attached, etc.).
    Unavailable(String),
    /// The engine rejected or failed a command.
    CommandFailed { command: String, message: String },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "formatting engine unavailable: {msg}"),
            Self::CommandFailed { command, message } => {
                write!(f, "formatting command '{command}' failed: {message}")
            }
        }
    }
}

impl std::error::Error for EngineError {}

/// Apply/query primitives for named formatting commands.
///
/// `target` is the content-editable element whose inner HTML is the working
/// document; `selection` is the caret the platform last reported for it.
/// Implementations mutate `target` in place on apply.
pub trait FormatEngine {
    fn apply_format(
        &mut self,
        command: &str,
        target: &mut Element,
        selection: Option<Selection>,
    ) -> Result<(), EngineError>;

    fn query_format_active(
        &self,
        command: &str,
        target: &Element,
        selection: Option<Selection>,
    ) -> Result<bool, EngineError>;
}

impl<E: FormatEngine + ?Sized> FormatEngine for Box<E> {
    fn apply_format(
        &mut self,
        command: &str,
        target: &mut Element,
        selection: Option<Selection>,
    ) -> Result<(), EngineError> {
        (**self).apply_format(command, target, selection)
    }

    fn query_format_active(
        &self,
        command: &str,
        target: &Element,
        selection: Option<Selection>,
    ) -> Result<bool, EngineError> {
        (**self).query_format_active(command, target, selection)
    }
}
