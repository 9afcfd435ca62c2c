//! Use-Case: Undo/Redo.

use crate::app::history::Snapshot;
use crate::app::{EventOutcome, GraphEditorSession};

/// Führt einen Undo-Schritt aus, falls vorhanden.
pub fn undo(state: &mut GraphEditorSession) -> EventOutcome {
    let current = Snapshot::from_state(state);
    if let Some(prev) = state.history.pop_undo_with_current(current) {
        prev.apply_to(state);
        log::info!("Undo ausgeführt");
        EventOutcome::Undone
    } else {
        log::debug!("Undo: nichts zu tun");
        EventOutcome::Ignored
    }
}

/// Führt einen Redo-Schritt aus, falls vorhanden.
pub fn redo(state: &mut GraphEditorSession) -> EventOutcome {
    let current = Snapshot::from_state(state);
    if let Some(next) = state.history.pop_redo_with_current(current) {
        next.apply_to(state);
        log::info!("Redo ausgeführt");
        EventOutcome::Redone
    } else {
        log::debug!("Redo: nichts zu tun");
        EventOutcome::Ignored
    }
}
