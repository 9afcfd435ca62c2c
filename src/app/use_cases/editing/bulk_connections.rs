//! Use-Case: Bulk-Änderungen an Verbindungen über die Selektion.
//!
//! Jede Bulk-Operation ist genau ein Undo-Schritt, egal wie viele Kanten
//! sie anfasst. Mit weniger als zwei selektierten Nodes wird sie abgelehnt
//! und es entsteht kein Undo-Eintrag.

use crate::app::{EventOutcome, GraphEditorSession};
use crate::core::{
    auto_connect_nodes, chain_in_order, connect_all_pairs, disconnect_all_pairs, ConnectRadius,
    GraphError, WaypointGraph,
};

/// Gemeinsame Logik für Bulk-Operationen über die selektierten Nodes.
///
/// Validiert die Selektion, erstellt einen Undo-Snapshot und führt die
/// Operation auf den Nodes in Erstellungsreihenfolge aus.
fn mutate_selected<F>(state: &mut GraphEditorSession, operation_name: &str, mutator: F) -> EventOutcome
where
    F: FnOnce(&mut WaypointGraph, &[u64]) -> (usize, usize),
{
    if !state.batch_actions_enabled() {
        log::warn!(
            "Bulk-Operation '{}' abgelehnt: mindestens zwei Nodes selektieren",
            operation_name
        );
        return EventOutcome::Refused(GraphError::InvalidOperation(format!(
            "'{}' braucht mindestens zwei selektierte Nodes",
            operation_name
        )));
    }

    let ids = state.selected_ids_by_creation();

    state.record_undo_snapshot();

    let (added, removed) = mutator(state.graph_mut(), &ids);

    log::info!(
        "Bulk-Operation '{}' auf {} Nodes: +{} / -{} Kante(n)",
        operation_name,
        ids.len(),
        added,
        removed
    );
    EventOutcome::EdgesChanged { added, removed }
}

/// Verbindet jedes Paar der Selektion (vollständiger Graph).
pub fn connect_selected_pairs(state: &mut GraphEditorSession) -> EventOutcome {
    mutate_selected(state, "Alle Paare verbinden", |graph, ids| {
        (connect_all_pairs(graph, ids), 0)
    })
}

/// Verkettet die Selektion in Erstellungsreihenfolge (i mit i+1).
pub fn chain_selected(state: &mut GraphEditorSession) -> EventOutcome {
    mutate_selected(state, "Selektion verketten", |graph, ids| {
        (chain_in_order(graph, ids), 0)
    })
}

/// Entfernt alle Kanten zwischen selektierten Nodes.
pub fn disconnect_selected(state: &mut GraphEditorSession) -> EventOutcome {
    mutate_selected(state, "Selektion trennen", |graph, ids| {
        (0, disconnect_all_pairs(graph, ids))
    })
}

/// Proximity-Verbindung für jeden selektierten Node (`None` = Profilradius).
pub fn auto_connect_selected(
    state: &mut GraphEditorSession,
    radius: Option<ConnectRadius>,
) -> EventOutcome {
    let radius = resolve_radius(state, radius);
    mutate_selected(state, "Auto-Connect Selektion", |graph, ids| {
        (auto_connect_nodes(graph, ids, radius), 0)
    })
}

/// Proximity-Verbindung für alle Nodes des Graphen (`None` = Profilradius).
///
/// Braucht keine Selektion; auf Graphen mit weniger als zwei Nodes ist es
/// ein No-Op ohne Undo-Eintrag.
pub fn auto_connect_all(state: &mut GraphEditorSession, radius: Option<ConnectRadius>) -> EventOutcome {
    if state.graph.node_count() < 2 {
        log::debug!("Auto-Connect: weniger als zwei Nodes vorhanden");
        return EventOutcome::EdgesChanged {
            added: 0,
            removed: 0,
        };
    }

    let radius = resolve_radius(state, radius);
    state.record_undo_snapshot();

    let added = crate::core::auto_connect_all(state.graph_mut(), radius);
    log::info!("Auto-Connect über alle Nodes: {} neue Kante(n)", added);
    EventOutcome::EdgesChanged { added, removed: 0 }
}

fn resolve_radius(state: &GraphEditorSession, radius: Option<ConnectRadius>) -> ConnectRadius {
    radius.unwrap_or(ConnectRadius::Global(state.profile.auto_connect_radius))
}
