//! Use-Case: Einfache Feld-Änderungen an einem Node (je ein Undo-Schritt).

use crate::app::{EventOutcome, GraphEditorSession};
use crate::core::{GraphError, Team, WaypointGraph};
use glam::Vec3;

fn update_node<F>(state: &mut GraphEditorSession, node_id: u64, what: &str, write: F) -> EventOutcome
where
    F: FnOnce(&mut WaypointGraph) -> Result<(), GraphError>,
{
    if !state.graph.contains(node_id) {
        log::warn!("{} nicht änderbar: Node {} existiert nicht", what, node_id);
        return EventOutcome::Refused(GraphError::UnknownNode(node_id));
    }

    // Snapshot VOR Mutation
    state.record_undo_snapshot();

    match write(state.graph_mut()) {
        Ok(()) => {
            log::info!("{} von Node {} geändert", what, node_id);
            EventOutcome::NodeUpdated { node_id }
        }
        Err(e) => EventOutcome::Refused(e),
    }
}

/// Setzt die Position eines Nodes.
pub fn set_node_position(state: &mut GraphEditorSession, node_id: u64, position: Vec3) -> EventOutcome {
    update_node(state, node_id, "Position", |graph| {
        graph.set_position(node_id, position)
    })
}

/// Setzt den Erreichbarkeitsradius (negativ wird auf 0 begrenzt).
pub fn set_node_reach_radius(state: &mut GraphEditorSession, node_id: u64, radius: f32) -> EventOutcome {
    update_node(state, node_id, "Radius", |graph| {
        graph.set_reach_radius(node_id, radius)
    })
}

/// Setzt die Team-Zugehörigkeit.
pub fn set_node_team(state: &mut GraphEditorSession, node_id: u64, team: Team) -> EventOutcome {
    update_node(state, node_id, "Team", |graph| graph.set_owner_team(node_id, team))
}

/// Setzt die Spawn-Markierung.
pub fn set_node_spawn_point(state: &mut GraphEditorSession, node_id: u64, spawn: bool) -> EventOutcome {
    update_node(state, node_id, "Spawn-Markierung", |graph| {
        graph.set_spawn_point(node_id, spawn)
    })
}
