//! Use-Case: Klick-Verbinden über einen gemerkten Quell-Node.

use crate::app::{ActiveMode, EditMode, EventOutcome, GraphEditorSession};
use crate::core::GraphError;

/// Merkt einen Node als Quelle der nächsten Verbindung.
pub fn set_connect_source(state: &mut GraphEditorSession, node_id: u64) -> EventOutcome {
    if !state.is_active() {
        return EventOutcome::Ignored;
    }
    if !state.graph.contains(node_id) {
        return EventOutcome::Refused(GraphError::UnknownNode(node_id));
    }

    state.mode = EditMode::Active(ActiveMode::PendingConnect { source: node_id });
    log::info!("Verbinden: Startknoten {} gewählt", node_id);
    EventOutcome::ConnectSourceSet { node_id }
}

/// Schaltet die Kante zwischen Quell-Node und `target_id` um und beendet die laufende Verbindung.
///
/// Ein Klick auf die Quelle selbst bricht nur ab.
pub fn toggle_connection_from_source(state: &mut GraphEditorSession, target_id: u64) -> EventOutcome {
    let Some(source_id) = state.pending_source() else {
        log::debug!("Verbinden: kein Startknoten gesetzt");
        return EventOutcome::Refused(GraphError::InvalidOperation(
            "kein Startknoten gesetzt".into(),
        ));
    };

    if source_id == target_id {
        return cancel_pending_connect(state);
    }

    if let Some(missing) = [source_id, target_id]
        .into_iter()
        .find(|id| !state.graph.contains(*id))
    {
        state.clear_pending();
        log::warn!("Verbinden abgebrochen: Node {} existiert nicht", missing);
        return EventOutcome::Refused(GraphError::UnknownNode(missing));
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let result = state.graph_mut().toggle_connect(source_id, target_id);
    state.clear_pending();

    match result {
        Ok(connected) => {
            log::info!(
                "Verbindung {}↔{} {}",
                source_id,
                target_id,
                if connected { "erstellt" } else { "entfernt" }
            );
            EventOutcome::ConnectToggled {
                a: source_id,
                b: target_id,
                connected,
            }
        }
        Err(e) => {
            log::warn!("Verbinden fehlgeschlagen: {}", e);
            EventOutcome::Refused(e)
        }
    }
}

/// Bricht eine laufende Verbindung ab.
pub fn cancel_pending_connect(state: &mut GraphEditorSession) -> EventOutcome {
    if state.pending_source().is_none() {
        return EventOutcome::Ignored;
    }
    state.clear_pending();
    log::debug!("Verbinden abgebrochen");
    EventOutcome::PendingCancelled
}
