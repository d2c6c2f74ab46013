//! Recording paint target standing in for the host container.

use std::cell::RefCell;
use std::rc::Rc;

use tilegroup_ui::{OptionValue, Surface, TileGroupView};

/// Everything a [`RecordingSurface`] has been asked to do.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SurfaceLog {
    /// Number of `mount` calls.
    pub mounts: usize,
    /// Every painted tree, oldest first.
    pub paints: Vec<TileGroupView>,
    /// Every focus request, oldest first.
    pub focus_requests: Vec<OptionValue>,
    /// Number of `clear` calls.
    pub clears: usize,
    /// Number of `release_bindings` calls.
    pub releases: usize,
    /// Whether painted content is currently on screen.
    pub visible: bool,
}

impl SurfaceLog {
    /// Most recent tree still on screen.
    #[must_use]
    pub fn current(&self) -> Option<&TileGroupView> {
        if self.visible {
            self.paints.last()
        } else {
            None
        }
    }
}

/// Surface that records calls into a shared [`SurfaceLog`].
#[derive(Debug, Default)]
pub struct RecordingSurface {
    log: Rc<RefCell<SurfaceLog>>,
}

impl RecordingSurface {
    /// Surface plus a handle that reads its log after the surface is moved
    /// into a controller.
    #[must_use]
    pub fn with_handle() -> (Self, SurfaceHandle) {
        let surface = Self::default();
        let screen = SurfaceHandle {
            log: Rc::clone(&surface.log),
        };
        (surface, screen)
    }
}

impl Surface for RecordingSurface {
    fn mount(&mut self) {
        self.log.borrow_mut().mounts += 1;
    }

    fn paint(&mut self, view: &TileGroupView) {
        let mut log = self.log.borrow_mut();
        log.paints.push(view.clone());
        log.visible = true;
    }

    fn focus_tile(&mut self, value: OptionValue) {
        self.log.borrow_mut().focus_requests.push(value);
    }

    fn clear(&mut self) {
        let mut log = self.log.borrow_mut();
        log.clears += 1;
        log.visible = false;
    }

    fn release_bindings(&mut self) {
        self.log.borrow_mut().releases += 1;
    }
}

/// Read handle onto a [`RecordingSurface`]'s log.
#[derive(Clone, Debug)]
pub struct SurfaceHandle {
    log: Rc<RefCell<SurfaceLog>>,
}

impl SurfaceHandle {
    /// Snapshot of the log.
    #[must_use]
    pub fn log(&self) -> SurfaceLog {
        self.log.borrow().clone()
    }

    /// Number of paints so far.
    #[must_use]
    pub fn paint_count(&self) -> usize {
        self.log.borrow().paints.len()
    }

    /// Tree currently on screen.
    #[must_use]
    pub fn current(&self) -> Option<TileGroupView> {
        self.log.borrow().current().cloned()
    }

    /// Last tile focus was moved to.
    #[must_use]
    pub fn last_focus(&self) -> Option<OptionValue> {
        self.log.borrow().focus_requests.last().copied()
    }
}
