//! Format actions and the ordered registry the toolbar is built from.

use std::borrow::Cow;
use std::sync::Arc;

use richcell_config::ActionEntry;
use richcell_core::{EngineError, FormatEngine};

use crate::surface::EditableSurface;

/// A named formatting action: how it looks on the toolbar, which engine
/// command it runs, and (optionally) which engine command reports whether
/// it is in effect at the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatAction {
    pub name: Cow<'static, str>,
    pub icon: Cow<'static, str>,
    pub title: Cow<'static, str>,
    pub command: Cow<'static, str>,
    /// None = no toggle state; sync leaves the button alone
    pub state_query: Option<Cow<'static, str>>,
}

impl FormatAction {
    /// Toggle-style action whose state query is the same command.
    pub const fn toggle(
        name: &'static str,
        icon: &'static str,
        title: &'static str,
        command: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            icon: Cow::Borrowed(icon),
            title: Cow::Borrowed(title),
            command: Cow::Borrowed(command),
            state_query: Some(Cow::Borrowed(command)),
        }
    }

    /// Fire-and-forget action with no observable active state.
    pub fn command(
        name: impl Into<Cow<'static, str>>,
        icon: impl Into<Cow<'static, str>>,
        title: impl Into<Cow<'static, str>>,
        command: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            title: title.into(),
            command: command.into(),
            state_query: None,
        }
    }

    pub fn has_state(&self) -> bool {
        self.state_query.is_some()
    }

    /// Run the action's command against the surface's working document.
    pub fn apply<E: FormatEngine + ?Sized>(
        &self,
        engine: &mut E,
        surface: &mut EditableSurface,
    ) -> Result<(), EngineError> {
        let selection = surface.selection();
        engine.apply_format(&self.command, surface.element_mut(), selection)
    }

    /// Ask the engine whether the action is in effect at the caret.
    /// None when the action has no state query.
    pub fn query_active<E: FormatEngine + ?Sized>(
        &self,
        engine: &E,
        surface: &EditableSurface,
    ) -> Option<Result<bool, EngineError>> {
        let query = self.state_query.as_deref()?;
        Some(engine.query_format_active(query, surface.element(), surface.selection()))
    }
}

impl From<ActionEntry> for FormatAction {
    fn from(entry: ActionEntry) -> Self {
        Self {
            name: entry.name.into(),
            icon: entry.icon.into(),
            title: entry.title.into(),
            command: entry.command.into(),
            state_query: entry.state.map(Cow::Owned),
        }
    }
}

pub const BOLD: FormatAction = FormatAction::toggle("bold", "<strong>B</strong>", "Bold", "bold");
pub const ITALIC: FormatAction = FormatAction::toggle("italic", "<em>I</em>", "Italic", "italic");
pub const UNDERLINE: FormatAction =
    FormatAction::toggle("underline", "<u>U</u>", "Underline", "underline");
pub const STRIKETHROUGH: FormatAction =
    FormatAction::toggle("strikethrough", "<strike>S</strike>", "Strike-through", "strikeThrough");

/// Ordered name -> action map. Insertion order is toolbar order.
///
/// Actions are shared (`Arc`) so toolbar buttons can point at them without
/// owning them.
#[derive(Debug, Clone, Default)]
pub struct ActionRegistry {
    actions: Vec<Arc<FormatAction>>,
}

impl ActionRegistry {
    /// Build from an ordered list. A repeated name keeps the slot of its
    /// first occurrence and the definition of its last.
    pub fn new(actions: impl IntoIterator<Item = FormatAction>) -> Self {
        let mut registry = Self::default();
        for action in actions {
            registry.insert(action);
        }
        registry
    }

    /// Bold, italic, underline, strike-through
    pub fn builtin() -> Self {
        Self::new([BOLD, ITALIC, UNDERLINE, STRIKETHROUGH])
    }

    fn insert(&mut self, action: FormatAction) {
        match self.actions.iter().position(|a| a.name == action.name) {
            Some(i) => {
                log::warn!("format action '{}' defined twice; keeping the later definition", action.name);
                self.actions[i] = Arc::new(action);
            }
            None => self.actions.push(Arc::new(action)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<FormatAction>> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.actions.iter().position(|a| a.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<FormatAction>> {
        self.actions.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.iter().map(|a| &*a.name)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl FromIterator<FormatAction> for ActionRegistry {
    fn from_iter<I: IntoIterator<Item = FormatAction>>(iter: I) -> Self {
        Self::new(iter)
    }
}
