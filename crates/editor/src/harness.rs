//! Test engines for the toolbar and editor.
//!
//! - `ToggleEngine`: a flag per command, flipped on apply. Records every
//!   apply and counts queries so tests can check what the editor asked.
//! - `MarkupEngine`: wraps/unwraps the whole surface content in the
//!   command's tag, so value round-trips through real markup changes.

use std::cell::Cell;
use std::collections::HashMap;

use richcell_core::{Element, EngineError, FormatEngine, Selection};

#[derive(Debug, Default)]
pub struct ToggleEngine {
    states: HashMap<String, bool>,
    applied: Vec<String>,
    queries: Cell<usize>,
    failing: Option<String>,
}

impl ToggleEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_state(&mut self, command: &str, active: bool) {
        self.states.insert(command.to_string(), active);
    }

    /// Make both apply and query fail for `command`
    pub fn fail_on(&mut self, command: &str) {
        self.failing = Some(command.to_string());
    }

    pub fn applied(&self) -> &[String] {
        &self.applied
    }

    pub fn query_count(&self) -> usize {
        self.queries.get()
    }

    fn check(&self, command: &str) -> Result<(), EngineError> {
        if self.failing.as_deref() == Some(command) {
            return Err(EngineError::CommandFailed {
                command: command.to_string(),
                message: "rejected".to_string(),
            });
        }
        Ok(())
    }
}

impl FormatEngine for ToggleEngine {
    fn apply_format(
        &mut self,
        command: &str,
        _target: &mut Element,
        _selection: Option<Selection>,
    ) -> Result<(), EngineError> {
        self.check(command)?;
        self.applied.push(command.to_string());
        let state = self.states.entry(command.to_string()).or_insert(false);
        *state = !*state;
        Ok(())
    }

    fn query_format_active(
        &self,
        command: &str,
        _target: &Element,
        _selection: Option<Selection>,
    ) -> Result<bool, EngineError> {
        self.check(command)?;
        self.queries.set(self.queries.get() + 1);
        Ok(self.states.get(command).copied().unwrap_or(false))
    }
}

/// Whole-content markup toggler. With no caret, nothing reads as active.
#[derive(Debug, Default)]
pub struct MarkupEngine;

impl MarkupEngine {
    fn tag(command: &str) -> Result<&'static str, EngineError> {
        match command {
            "bold" => Ok("b"),
            "italic" => Ok("i"),
            "underline" => Ok("u"),
            "strikeThrough" => Ok("strike"),
            other => Err(EngineError::CommandFailed {
                command: other.to_string(),
                message: "unsupported".to_string(),
            }),
        }
    }

    fn unwrap<'a>(html: &'a str, tag: &str) -> Option<&'a str> {
        html.strip_prefix(&format!("<{tag}>"))?
            .strip_suffix(&format!("</{tag}>"))
    }
}

impl FormatEngine for MarkupEngine {
    fn apply_format(
        &mut self,
        command: &str,
        target: &mut Element,
        _selection: Option<Selection>,
    ) -> Result<(), EngineError> {
        let tag = Self::tag(command)?;
        let next = match Self::unwrap(target.inner_html(), tag) {
            Some(inner) => inner.to_string(),
            None => format!("<{tag}>{}</{tag}>", target.inner_html()),
        };
        target.set_inner_html(next);
        Ok(())
    }

    fn query_format_active(
        &self,
        command: &str,
        target: &Element,
        selection: Option<Selection>,
    ) -> Result<bool, EngineError> {
        let tag = Self::tag(command)?;
        Ok(selection.is_some() && Self::unwrap(target.inner_html(), tag).is_some())
    }
}
