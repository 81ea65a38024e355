//! Rich-text cell editor.
//!
//! Decorates a base [`CellEditor`] (by default [`TextEditor`]): the base
//! keeps the structural lifecycle (target cell, open/closed, focus, the
//! holder's position and visibility), while this layer empties the base
//! holder, puts a formatting toolbar plus a content-editable surface in its
//! place, and takes over value transfer.
//!
//! Flow:
//! - `prepare` loads the cell's HTML into the surface
//! - `open` shows toolbar + surface over the cell
//! - surface interactions resync the toolbar (see [`SyncController`])
//! - a toolbar click applies its command, re-reads that button, refocuses
//! - `close` clears every active button, then hides
//! - `get_value` is the surface's serialized HTML

use richcell_core::{
    CellContext, Element, EngineError, FormatEngine, Interaction, OpenEvent, Selection,
};

use crate::editor::{CellEditor, EditorOptions, EditorState};
use crate::surface::EditableSurface;
use crate::sync::SyncController;
use crate::text::TextEditor;
use crate::toolbar::Toolbar;

pub struct RichTextEditor<E, B = TextEditor> {
    inner: B,
    engine: E,
    toolbar: Toolbar,
    surface: EditableSurface,
    sync: SyncController,
}

impl<E: FormatEngine> RichTextEditor<E, TextEditor> {
    pub fn new(engine: E) -> Self {
        Self::with_options(engine, EditorOptions::default())
    }

    pub fn with_options(engine: E, options: EditorOptions) -> Self {
        let inner = TextEditor::new(&options.holder_class);
        Self::wrap(inner, engine, options)
    }
}

impl<E: FormatEngine, B: CellEditor> RichTextEditor<E, B> {
    /// Take over the base editor's holder and build the toolbar and surface
    /// once; they are reused for every cell.
    pub fn wrap(mut inner: B, engine: E, options: EditorOptions) -> Self {
        let holder = inner.holder_mut();
        holder.empty();
        holder.add_class(&options.holder_class);

        Self {
            inner,
            engine,
            toolbar: Toolbar::build(&options.actions, &options.toolbar_class, &options.active_class),
            surface: EditableSurface::new(&options.surface_class),
            sync: SyncController::new(options.triggers),
        }
    }

    // =========================================================================
    // Surface events
    // =========================================================================

    /// Toolbar click on the button for action `name`.
    ///
    /// Returns `Ok(false)` when there is no such button or the editor isn't
    /// showing. Engine failures come back unchanged.
    pub fn click(&mut self, name: &str) -> Result<bool, EngineError> {
        match self.toolbar.position(name) {
            Some(index) => self.click_at(index),
            None => {
                log::warn!("no toolbar button named '{name}'");
                Ok(false)
            }
        }
    }

    pub fn click_at(&mut self, index: usize) -> Result<bool, EngineError> {
        if !self.toolbar.is_visible() {
            log::trace!("click on hidden toolbar ignored");
            return Ok(false);
        }
        let hit = self.toolbar.activate(index, &mut self.engine, &mut self.surface)?;
        if hit {
            self.focus();
        }
        Ok(hit)
    }

    /// Interaction signal from the surface. Returns whether the toolbar was
    /// resynced.
    pub fn interact(&mut self, interaction: Interaction) -> Result<bool, EngineError> {
        self.sync
            .handle(interaction, &mut self.toolbar, &self.engine, &self.surface)
    }

    /// Caret/selection change reported by the platform
    pub fn set_selection(&mut self, selection: Option<Selection>) {
        self.surface.set_selection(selection);
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn surface(&self) -> &EditableSurface {
        &self.surface
    }

    pub fn sync(&self) -> &SyncController {
        &self.sync
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// True when toolbar and surface are on screen
    pub fn is_shown(&self) -> bool {
        self.surface.is_visible()
    }

    /// The base holder with the action bar then the surface inside, as the
    /// host attaches it over the cell.
    pub fn render(&self) -> Element {
        let mut holder = self.inner.holder().clone();
        holder.append_child(self.toolbar.render());
        holder.append_child(self.surface.element().clone());
        holder
    }

    fn show_rich_text(&mut self) {
        self.surface.show();
        self.toolbar.set_visible(true);
    }

    fn hide_rich_text(&mut self) {
        self.toolbar.reset_all();
        self.surface.hide();
        self.toolbar.set_visible(false);
    }
}

impl<E: FormatEngine, B: CellEditor> CellEditor for RichTextEditor<E, B> {
    fn prepare(&mut self, cell: CellContext, original_value: &str) {
        self.inner.prepare(cell, original_value);
        self.surface.set_content(original_value);
        // New content, old caret gone: nothing from the previous cell may
        // stay lit.
        self.toolbar.reset_all();
    }

    fn open(&mut self, event: Option<OpenEvent>) {
        self.inner.open(event);
        self.show_rich_text();
    }

    fn close(&mut self) {
        self.hide_rich_text();
        self.inner.close();
    }

    fn focus(&mut self) {
        self.inner.focus();
        if self.inner.is_opened() {
            self.surface.focus();
        }
    }

    fn get_value(&self) -> String {
        self.surface.content().to_string()
    }

    fn set_value(&mut self, value: &str) {
        self.surface.set_content(value);
    }

    fn state(&self) -> EditorState {
        self.inner.state()
    }

    fn cell(&self) -> Option<&CellContext> {
        self.inner.cell()
    }

    fn holder(&self) -> &Element {
        self.inner.holder()
    }

    fn holder_mut(&mut self) -> &mut Element {
        self.inner.holder_mut()
    }
}
