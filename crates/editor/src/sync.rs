//! Keeps toolbar buttons in step with the formatting at the caret.
//!
//! The surface reports interactions through one entry point; the ones that
//! can move the caret (by default key and pointer release) each trigger a
//! single `Toolbar::refresh_all`.

use richcell_core::{EngineError, FormatEngine, Interaction};

use crate::surface::EditableSurface;
use crate::toolbar::Toolbar;

pub const DEFAULT_TRIGGERS: [Interaction; 2] = [Interaction::KeyUp, Interaction::PointerUp];

#[derive(Debug, Clone)]
pub struct SyncController {
    triggers: Vec<Interaction>,
    refreshes: u64,
}

impl Default for SyncController {
    fn default() -> Self {
        Self::new(DEFAULT_TRIGGERS)
    }
}

impl SyncController {
    pub fn new(triggers: impl IntoIterator<Item = Interaction>) -> Self {
        let mut deduped = Vec::new();
        for trigger in triggers {
            if !deduped.contains(&trigger) {
                deduped.push(trigger);
            }
        }
        Self {
            triggers: deduped,
            refreshes: 0,
        }
    }

    pub fn triggers(&self) -> &[Interaction] {
        &self.triggers
    }

    pub fn is_trigger(&self, interaction: Interaction) -> bool {
        self.triggers.contains(&interaction)
    }

    /// Completed refreshes since construction
    pub fn refresh_count(&self) -> u64 {
        self.refreshes
    }

    /// Resync the toolbar if `interaction` is a trigger and the surface is
    /// on screen. Returns whether a refresh ran.
    pub fn handle<E: FormatEngine + ?Sized>(
        &mut self,
        interaction: Interaction,
        toolbar: &mut Toolbar,
        engine: &E,
        surface: &EditableSurface,
    ) -> Result<bool, EngineError> {
        if !self.is_trigger(interaction) {
            return Ok(false);
        }
        if !surface.is_visible() {
            log::trace!("{interaction} ignored: surface hidden");
            return Ok(false);
        }

        toolbar.refresh_all(engine, surface)?;
        self.refreshes += 1;
        log::trace!("{interaction}: toolbar resynced ({:?} active)", toolbar.active_names());
        Ok(true)
    }
}
