//! Counting change notifier.

use std::cell::Cell;
use std::rc::Rc;

use tilegroup_ui::ChangeNotifier;

/// Counts change notifications emitted to the host.
#[derive(Clone, Debug, Default)]
pub struct NotificationCounter {
    count: Rc<Cell<usize>>,
}

impl NotificationCounter {
    /// Fresh counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notifier that increments this counter.
    #[must_use]
    pub fn notifier(&self) -> ChangeNotifier {
        let count = Rc::clone(&self.count);
        Rc::new(move || count.set(count.get() + 1))
    }

    /// Notifications observed so far.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.get()
    }
}
