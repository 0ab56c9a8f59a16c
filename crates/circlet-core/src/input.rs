//! Host-facing input events.

use crate::geometry::Point;
use crate::store::{ClickOutcome, ShapeStore};
use serde::{Deserialize, Serialize};

/// An input event, already translated into logical coordinates by the
/// host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Pointer press with the state of the toggle-selection modifier.
    Click { position: Point, toggle: bool },
    /// Request to delete the current selection.
    DeleteSelected,
}

/// Route an event to the store.
///
/// Clicks report their [`ClickOutcome`]; deletion carries none. Either
/// way the store has mutated and the host should repaint.
pub fn apply(store: &mut ShapeStore, event: InputEvent) -> Option<ClickOutcome> {
    match event {
        InputEvent::Click { position, toggle } => Some(store.resolve_click(position, toggle)),
        InputEvent::DeleteSelected => {
            store.remove_selected();
            None
        }
    }
}
