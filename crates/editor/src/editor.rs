//! The grid-facing editor contract, and options shared by implementations.

use richcell_config::Settings;
use richcell_core::{CellContext, Element, Interaction, OpenEvent};

use crate::action::{ActionRegistry, FormatAction};
use crate::sync::DEFAULT_TRIGGERS;

/// Lifecycle position of a cell editor.
///
/// `Closed` -> `Prepared` (value loaded, hidden) -> `Open` (visible,
/// interactive) -> `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Closed,
    Prepared,
    Open,
}

/// What the grid calls on an editor over a cell's edit lifecycle.
///
/// Commit, cancel and validation stay with the grid; an editor only loads,
/// shows, hides, focuses, and hands back its value.
pub trait CellEditor {
    /// Re-target the editor at `cell` and load `original_value`. Valid in
    /// any state; does not change visibility.
    fn prepare(&mut self, cell: CellContext, original_value: &str);

    fn open(&mut self, event: Option<OpenEvent>);

    fn close(&mut self);

    /// No-op unless open.
    fn focus(&mut self);

    fn get_value(&self) -> String;

    fn set_value(&mut self, value: &str);

    fn state(&self) -> EditorState;

    /// Cell from the last `prepare`
    fn cell(&self) -> Option<&CellContext>;

    /// Container the editor shows over the cell. A decorator empties it and
    /// renders its own elements in its place.
    fn holder(&self) -> &Element;

    fn holder_mut(&mut self) -> &mut Element;

    fn is_opened(&self) -> bool {
        self.state() == EditorState::Open
    }
}

/// Construction-time options for the rich-text editor.
#[derive(Debug, Clone)]
pub struct EditorOptions {
    pub actions: ActionRegistry,
    pub triggers: Vec<Interaction>,
    pub holder_class: String,
    pub surface_class: String,
    pub toolbar_class: String,
    pub active_class: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl EditorOptions {
    /// Unknown trigger names are skipped with a warning; if none survive,
    /// the default release triggers are used.
    pub fn from_settings(settings: &Settings) -> Self {
        let actions = match &settings.toolbar_actions {
            Some(entries) => entries.iter().cloned().map(FormatAction::from).collect(),
            None => ActionRegistry::builtin(),
        };

        let mut triggers: Vec<Interaction> = settings
            .sync_triggers
            .iter()
            .filter_map(|name| match name.parse::<Interaction>() {
                Ok(trigger) => Some(trigger),
                Err(e) => {
                    log::warn!("sync.triggers: {}", e);
                    None
                }
            })
            .collect();
        if triggers.is_empty() {
            triggers = DEFAULT_TRIGGERS.to_vec();
        }

        Self {
            actions,
            triggers,
            holder_class: settings.holder_class.clone(),
            surface_class: settings.surface_class.clone(),
            toolbar_class: settings.toolbar_class.clone(),
            active_class: settings.active_class.clone(),
        }
    }

    pub fn with_actions(mut self, actions: ActionRegistry) -> Self {
        self.actions = actions;
        self
    }

    pub fn with_triggers(mut self, triggers: impl IntoIterator<Item = Interaction>) -> Self {
        self.triggers = triggers.into_iter().collect();
        self
    }
}
