//! Formatting toolbar: one button per registry entry, with an "active"
//! class that mirrors the engine's state at the caret.

use std::sync::Arc;

use richcell_core::{Element, EngineError, FormatEngine};

use crate::action::{ActionRegistry, FormatAction};
use crate::surface::EditableSurface;

#[derive(Debug, Clone)]
pub struct ToolbarButton {
    action: Arc<FormatAction>,
    active: bool,
    element: Element,
}

impl ToolbarButton {
    fn new(action: Arc<FormatAction>) -> Self {
        let mut element = Element::new("button");
        element.set_inner_html(&*action.icon);
        element.set_attribute("title", &*action.title);
        element.set_attribute("type", "button");
        Self {
            action,
            active: false,
            element,
        }
    }

    pub fn action(&self) -> &FormatAction {
        &self.action
    }

    pub fn name(&self) -> &str {
        &self.action.name
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn element(&self) -> &Element {
        &self.element
    }

    fn set_active(&mut self, active: bool, active_class: &str) {
        self.active = active;
        self.element.set_class(active_class, active);
    }
}

/// Buttons plus the action bar that holds them.
#[derive(Debug, Clone)]
pub struct Toolbar {
    bar: Element,
    buttons: Vec<ToolbarButton>,
    active_class: String,
}

impl Toolbar {
    pub fn build(actions: &ActionRegistry, bar_class: &str, active_class: &str) -> Self {
        let mut bar = Element::new("div");
        bar.add_class(bar_class);
        bar.set_style("display", "none");
        Self {
            bar,
            buttons: actions.iter().cloned().map(ToolbarButton::new).collect(),
            active_class: active_class.to_string(),
        }
    }

    pub fn buttons(&self) -> &[ToolbarButton] {
        &self.buttons
    }

    pub fn button(&self, name: &str) -> Option<&ToolbarButton> {
        self.buttons.iter().find(|b| b.name() == name)
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.buttons.iter().position(|b| b.name() == name)
    }

    /// Names of the buttons currently rendered active, in toolbar order
    pub fn active_names(&self) -> Vec<&str> {
        self.buttons.iter().filter(|b| b.active).map(|b| b.name()).collect()
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_displayed()
    }

    // Visibility is owned by the editor so the bar and the surface always
    // move together.
    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.bar.set_style("display", if visible { "block" } else { "none" });
    }

    /// Click handling for the button at `index`: apply the action, re-read
    /// its state, then hand focus back to the surface so typing continues
    /// in the cell.
    ///
    /// Returns `Ok(false)` if there is no such button. Engine errors are
    /// returned as-is and leave focus where it was.
    pub fn activate<E: FormatEngine + ?Sized>(
        &mut self,
        index: usize,
        engine: &mut E,
        surface: &mut EditableSurface,
    ) -> Result<bool, EngineError> {
        let Some(button) = self.buttons.get_mut(index) else {
            log::warn!("toolbar has no button #{index}");
            return Ok(false);
        };

        button.action.apply(engine, surface)?;
        if let Some(active) = button.action.query_active(&*engine, &*surface) {
            button.set_active(active?, &self.active_class);
        }
        log::debug!("applied '{}' (active: {})", button.name(), button.active);

        surface.focus();
        Ok(true)
    }

    /// Re-read every queryable button from the engine. Buttons without a
    /// state query keep whatever they show.
    pub fn refresh_all<E: FormatEngine + ?Sized>(
        &mut self,
        engine: &E,
        surface: &EditableSurface,
    ) -> Result<(), EngineError> {
        for button in &mut self.buttons {
            if let Some(active) = button.action.query_active(engine, surface) {
                button.set_active(active?, &self.active_class);
            }
        }
        Ok(())
    }

    /// Force every button inactive without asking the engine.
    pub fn reset_all(&mut self) {
        for button in &mut self.buttons {
            button.set_active(false, &self.active_class);
        }
    }

    /// The action bar with its buttons as children
    pub fn render(&self) -> Element {
        let mut bar = self.bar.clone();
        for button in &self.buttons {
            bar.append_child(button.element.clone());
        }
        bar
    }
}
