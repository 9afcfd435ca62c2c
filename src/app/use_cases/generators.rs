//! Use-Case: Topologie-Generatoren (Ring, Raster) als je ein Undo-Schritt.

use crate::app::{EventOutcome, GraphEditorSession};
use crate::core::{GroundProjector, NodeTemplate, TopologyBuilder};
use glam::Vec3;

fn template(state: &GraphEditorSession) -> NodeTemplate {
    NodeTemplate {
        reach_radius: state.profile.default_reach_radius,
        team: state.options.default_team,
        spawn: false,
    }
}

/// Übernimmt die erzeugten Nodes als neue Selektion.
fn select_generated(state: &mut GraphEditorSession, ids: &[u64]) {
    let selection = state.selection.ids_mut();
    selection.clear();
    selection.extend(ids.iter().copied());
}

/// Erzeugt einen Ring aus `count` Nodes um `center`.
///
/// Fehlende Parameter kommen aus `ring_count` und `ring_radius` der Optionen.
pub fn create_ring(
    state: &mut GraphEditorSession,
    projector: &dyn GroundProjector,
    center: Vec3,
    count: Option<usize>,
    radius: Option<f32>,
) -> EventOutcome {
    let count = count.unwrap_or(state.options.ring_count);
    let radius = radius.unwrap_or(state.options.ring_radius);

    if count == 0 {
        log::debug!("Ring mit 0 Nodes: nichts zu tun");
        return EventOutcome::NodesGenerated {
            node_ids: Vec::new(),
        };
    }
    if count < 3 {
        log::warn!("Ring mit {} Nodes ergibt keinen Zyklus", count);
    }

    let builder = TopologyBuilder::new(center, projector, template(state));

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let node_ids = builder.create_ring(state.graph_mut(), count, radius);
    select_generated(state, &node_ids);

    EventOutcome::NodesGenerated { node_ids }
}

/// Erzeugt ein `width × height`-Raster um `center`.
///
/// Fehlende Parameter kommen aus `grid_width`, `grid_height` und `grid_spacing`.
pub fn create_grid(
    state: &mut GraphEditorSession,
    projector: &dyn GroundProjector,
    center: Vec3,
    width: Option<usize>,
    height: Option<usize>,
    spacing: Option<f32>,
) -> EventOutcome {
    let width = width.unwrap_or(state.options.grid_width);
    let height = height.unwrap_or(state.options.grid_height);
    let spacing = spacing.unwrap_or(state.options.grid_spacing);

    if width == 0 || height == 0 {
        log::debug!("Raster {}×{}: nichts zu tun", width, height);
        return EventOutcome::NodesGenerated {
            node_ids: Vec::new(),
        };
    }

    let builder = TopologyBuilder::new(center, projector, template(state));

    // Snapshot VOR Mutation
    state.record_undo_snapshot();
    let node_ids = builder.create_grid(state.graph_mut(), width, height, spacing);
    select_generated(state, &node_ids);

    EventOutcome::NodesGenerated { node_ids }
}
