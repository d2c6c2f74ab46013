//! Selection state machine for the tile group.
//!
//! # Design
//! - The selected value is the only mutable state; focus is always derived
//!   from it (index of the checked tile, else 0).
//! - Every accepted change runs update, repaint, notify in that order.
//! - No borrow of controller state is held while the host callback runs, so
//!   the host may call back into the controller from the notification.

use std::cell::{Cell, RefCell};

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::TileGroupConfig;
use crate::core::catalog::{OptionCatalog, OptionValue};
use crate::core::keys::{EventDisposition, interpret_key, target_index};
use crate::core::render::{TileGroupView, ViewRenderer};
use crate::host::{ChangeNotifier, HostContext, StandardControl, TileGroupOutputs};

/// Paint target owned by a controller (the host container in a browser).
pub trait Surface {
    /// Prepare the container before the first paint.
    fn mount(&mut self) {}

    /// Replace the rendered tree. Element identity is not preserved.
    fn paint(&mut self, view: &TileGroupView);

    /// Move input focus onto the tile carrying `value`, if it is mounted.
    fn focus_tile(&mut self, value: OptionValue);

    /// Remove everything painted so far.
    fn clear(&mut self);

    /// Drop input bindings attached to the container.
    fn release_bindings(&mut self) {}
}

/// Lifecycle phase of a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, not yet initialized.
    Idle,
    /// Initialized and accepting input.
    Active,
    /// Torn down; input is ignored until the next initialization.
    TornDown,
}

/// Result of a selection attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Selection changed and the host was notified.
    Committed(OptionValue),
    /// Candidate already selected; nothing happened.
    Unchanged,
    /// Candidate invalid or controller inactive; nothing happened.
    Rejected,
}

/// Single authority over the selected value of one widget instance.
pub struct SelectionController<S> {
    surface: RefCell<S>,
    renderer: RefCell<ViewRenderer>,
    catalog: RefCell<OptionCatalog>,
    selected: Cell<Option<OptionValue>>,
    phase: Cell<Phase>,
    notifier: RefCell<Option<ChangeNotifier>>,
}

impl<S: Surface> SelectionController<S> {
    /// Controller painting onto `surface` with the default config.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self::with_config(surface, TileGroupConfig::default())
    }

    /// Controller painting onto `surface` with an explicit config.
    #[must_use]
    pub fn with_config(surface: S, config: TileGroupConfig) -> Self {
        Self {
            surface: RefCell::new(surface),
            renderer: RefCell::new(ViewRenderer::new(config)),
            catalog: RefCell::new(OptionCatalog::default()),
            selected: Cell::new(None),
            phase: Cell::new(Phase::Idle),
            notifier: RefCell::new(None),
        }
    }

    /// Register the callback fired after each committed user change.
    pub fn set_notifier(&self, notify: ChangeNotifier) {
        *self.notifier.borrow_mut() = Some(notify);
    }

    /// Replace the presentation config; takes effect on the next paint.
    pub fn configure(&self, config: TileGroupConfig) {
        *self.renderer.borrow_mut() = ViewRenderer::new(config);
    }

    /// Load the catalog and initial value, then paint. Non-numeric initial
    /// values mean "no selection".
    pub fn initialize(&self, catalog: OptionCatalog, initial_value: &Value) {
        let tiles = catalog.len();
        *self.catalog.borrow_mut() = catalog;
        self.selected.set(OptionValue::from_raw(initial_value));
        self.phase.set(Phase::Active);
        self.surface.borrow_mut().mount();
        self.repaint();
        debug!(tiles, selected = ?self.selected.get(), "tile group initialized");
    }

    /// Adopt a host-side value change. Repaints only when the value differs
    /// and never notifies the host. Returns whether the value changed.
    pub fn sync_external(&self, new_value: &Value) -> bool {
        if self.phase.get() != Phase::Active {
            return false;
        }
        let incoming = OptionValue::from_raw(new_value);
        if incoming == self.selected.get() {
            return false;
        }
        self.selected.set(incoming);
        self.repaint();
        debug!(selected = ?incoming, "selection synced from host");
        true
    }

    /// Commit a user-chosen candidate. Accepts finite integral numbers that
    /// differ from the current selection.
    pub fn select(&self, candidate: f64) -> SelectOutcome {
        if self.phase.get() != Phase::Active {
            return SelectOutcome::Rejected;
        }
        match OptionValue::from_number(candidate) {
            Some(value) => self.commit(value),
            None => {
                trace!(candidate, "ignoring non-integral selection candidate");
                SelectOutcome::Rejected
            }
        }
    }

    /// Selected value; `None` is the "no selection" sentinel.
    #[must_use]
    pub fn current_output(&self) -> Option<OptionValue> {
        self.selected.get()
    }

    /// Release bindings and clear the view. Safe to call repeatedly.
    pub fn teardown(&self) {
        if self.phase.get() == Phase::TornDown {
            return;
        }
        self.phase.set(Phase::TornDown);
        self.notifier.borrow_mut().take();
        let mut surface = self.surface.borrow_mut();
        surface.release_bindings();
        surface.clear();
        debug!("tile group torn down");
    }

    /// Handle a pointer press. `tile_value` is the `data-value` of the pressed
    /// tile, or `None` when the press landed outside every tile.
    pub fn handle_pointer(&self, tile_value: Option<&str>) -> Option<SelectOutcome> {
        let raw = tile_value?.trim();
        if let Ok(value) = raw.parse::<i64>() {
            if self.phase.get() != Phase::Active {
                return Some(SelectOutcome::Rejected);
            }
            return Some(self.commit(OptionValue::new(value)));
        }
        match raw.parse::<f64>() {
            Ok(candidate) => Some(self.select(candidate)),
            Err(_) => {
                trace!(raw, "ignoring unparsable tile value");
                Some(SelectOutcome::Rejected)
            }
        }
    }

    /// Handle a key press inside the group. Navigation selects the target
    /// tile, then focus returns to whichever tile holds the selection once
    /// the host has been notified.
    pub fn handle_key(&self, key: &str) -> EventDisposition {
        if self.phase.get() != Phase::Active {
            return EventDisposition::Ignored;
        }
        let Some(intent) = interpret_key(key) else {
            return EventDisposition::Ignored;
        };
        let target = {
            let catalog = self.catalog.borrow();
            target_index(intent, self.focus_index_in(&catalog), catalog.len())
                .and_then(|index| catalog.get(index))
                .map(|option| option.value)
        };
        let Some(value) = target else {
            return EventDisposition::Ignored;
        };
        self.commit(value);
        if self.phase.get() == Phase::Active {
            self.restore_focus();
        }
        EventDisposition::Handled
    }

    /// Index of the tile that currently holds interaction focus.
    #[must_use]
    pub fn focus_index(&self) -> usize {
        self.focus_index_in(&self.catalog.borrow())
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase.get()
    }

    /// Render the current state without painting it.
    #[must_use]
    pub fn view(&self) -> TileGroupView {
        self.renderer
            .borrow()
            .render(&self.catalog.borrow(), self.selected.get())
    }

    /// Run `f` against the owned surface.
    pub fn with_surface<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.surface.borrow_mut())
    }

    fn focus_index_in(&self, catalog: &OptionCatalog) -> usize {
        self.selected
            .get()
            .and_then(|value| catalog.position(value))
            .unwrap_or(0)
    }

    fn restore_focus(&self) {
        let focused = {
            let catalog = self.catalog.borrow();
            catalog.get(self.focus_index_in(&catalog)).map(|option| option.value)
        };
        if let Some(value) = focused {
            self.surface.borrow_mut().focus_tile(value);
        }
    }

    fn commit(&self, value: OptionValue) -> SelectOutcome {
        if self.selected.get() == Some(value) {
            return SelectOutcome::Unchanged;
        }
        self.selected.set(Some(value));
        self.repaint();
        debug!(%value, "selection committed");
        self.notify();
        SelectOutcome::Committed(value)
    }

    fn repaint(&self) {
        let view = self.view();
        self.surface.borrow_mut().paint(&view);
    }

    fn notify(&self) {
        let notifier = self.notifier.borrow().clone();
        if let Some(notify) = notifier {
            notify();
        }
    }
}

impl<S: Surface> StandardControl for SelectionController<S> {
    fn init(&self, context: &HostContext, notify: ChangeNotifier) {
        self.set_notifier(notify);
        let config = self
            .renderer
            .borrow()
            .config()
            .clone()
            .with_parameters(&context.parameters);
        self.configure(config);
        self.initialize(context.catalog(), context.raw_value());
    }

    fn update_view(&self, context: &HostContext) {
        self.sync_external(context.raw_value());
    }

    fn get_outputs(&self) -> TileGroupOutputs {
        TileGroupOutputs {
            value: self.current_output(),
        }
    }

    fn destroy(&self) {
        self.teardown();
    }
}
