//! Keyboard interpretation for radio-group navigation.

/// Semantic outcome of a key press inside the group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    /// Move to (and select) the next tile, wrapping at the end.
    Next,
    /// Move to (and select) the previous tile, wrapping at the start.
    Previous,
    /// Select the focused tile.
    Activate,
}

/// Whether the browser default for an event should be suppressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventDisposition {
    /// The widget consumed the event.
    Handled,
    /// The widget ignored the event; leave the default in place.
    Ignored,
}

impl EventDisposition {
    /// True when the caller should call `preventDefault`.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::Handled)
    }
}

/// Map a `KeyboardEvent.key` value to an intent.
#[must_use]
pub fn interpret_key(key: &str) -> Option<KeyIntent> {
    match key {
        "ArrowRight" | "ArrowDown" => Some(KeyIntent::Next),
        "ArrowLeft" | "ArrowUp" => Some(KeyIntent::Previous),
        " " | "Enter" => Some(KeyIntent::Activate),
        _ => None,
    }
}

/// Index the intent moves to from `current` in a group of `total` tiles.
/// Returns `None` for an empty group.
#[must_use]
pub const fn target_index(intent: KeyIntent, current: usize, total: usize) -> Option<usize> {
    if total == 0 {
        return None;
    }
    let current = current % total;
    Some(match intent {
        KeyIntent::Next => (current + 1) % total,
        KeyIntent::Previous => (current + total - 1) % total,
        KeyIntent::Activate => current,
    })
}
