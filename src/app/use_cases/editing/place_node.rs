//! Use-Case: Node per Klick ins Leere platzieren bzw. Anker per Klick wählen.

use crate::app::{EventOutcome, GraphEditorSession};
use crate::core::{auto_connect_nearby, GraphError, GroundProjector, NodeTemplate, TopologyBuilder};
use glam::Vec3;

/// Platziert einen Node am (projizierten) Kandidatenpunkt.
///
/// Im Ketten-Modus wird der neue Node ausschließlich mit dem Ketten-Anker
/// verbunden. Mit `auto_connect_on_place` kommen Proximity-Kanten im
/// Profilradius hinzu. Alles zusammen ist ein Undo-Schritt; danach ist der
/// neue Node der Ketten-Anker.
pub fn place_node(
    state: &mut GraphEditorSession,
    projector: &dyn GroundProjector,
    candidate: Vec3,
) -> EventOutcome {
    let anchor = state
        .chain_anchor
        .filter(|_| state.chain_mode)
        .filter(|&id| state.graph.contains(id));
    let template = NodeTemplate {
        reach_radius: state.profile.default_reach_radius,
        team: state.options.default_team,
        spawn: false,
    };
    let auto_connect_radius = state
        .auto_connect_on_place
        .then_some(state.profile.auto_connect_radius);

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    let graph = state.graph_mut();
    let builder = TopologyBuilder::new(candidate, projector, template);
    let node_id = builder.place_with_anchor(graph, candidate, anchor);

    if let Some(radius) = auto_connect_radius {
        let added = auto_connect_nearby(graph, node_id, radius);
        log::debug!("Auto-Connect: {} Kante(n) für Node {}", added, node_id);
    }

    state.chain_anchor = Some(node_id);

    match anchor {
        Some(anchor_id) => log::info!("Node {} platziert, verbunden mit {}", node_id, anchor_id),
        None => log::info!("Node {} platziert", node_id),
    }

    EventOutcome::NodePlaced {
        node_id,
        anchored_to: anchor,
    }
}

/// Setzt den Ketten-Anker auf einen bestehenden Node und selektiert ihn (keine Graph-Mutation).
pub fn select_anchor(state: &mut GraphEditorSession, node_id: u64) -> EventOutcome {
    if !state.graph.contains(node_id) {
        log::warn!("Anker nicht möglich: Node {} existiert nicht", node_id);
        return EventOutcome::Refused(GraphError::UnknownNode(node_id));
    }

    state.chain_anchor = Some(node_id);
    let ids = state.selection.ids_mut();
    ids.clear();
    ids.insert(node_id);

    log::debug!("Ketten-Anker: Node {}", node_id);
    EventOutcome::AnchorSelected { node_id }
}
