//! Use-Case: Node löschen (inkl. aller betroffenen Verbindungen).

use crate::app::{EventOutcome, GraphEditorSession};
use crate::core::GraphError;

/// Löscht einen Node samt aller Kanten und entfernt ihn aus Anker, Quell-Node und Selektion.
pub fn delete_node(state: &mut GraphEditorSession, node_id: u64) -> EventOutcome {
    if !state.graph.contains(node_id) {
        log::warn!("Löschen nicht möglich: Node {} existiert nicht", node_id);
        return EventOutcome::Refused(GraphError::UnknownNode(node_id));
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let removed = state.graph_mut().remove_node(node_id);
    debug_assert!(removed.is_some());

    state.selection.ids_mut().shift_remove(&node_id);
    if state.chain_anchor == Some(node_id) {
        state.chain_anchor = None;
    }
    if state.pending_source() == Some(node_id) {
        state.clear_pending();
    }

    log::info!("Node {} gelöscht", node_id);
    EventOutcome::NodeDeleted { node_id }
}
