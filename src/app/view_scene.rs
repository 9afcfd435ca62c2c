//! Builder für Visualisierungs-Szenen aus dem Session-State.

use crate::app::GraphEditorSession;
use crate::shared::SessionScene;
use std::sync::Arc;

/// Baut eine SessionScene aus dem aktuellen Session-State.
pub fn build(state: &GraphEditorSession) -> SessionScene {
    let pending_source = state.pending_source();
    let pending_line_start = pending_source
        .and_then(|id| state.graph.node(id))
        .map(|node| node.position);

    SessionScene {
        graph: Arc::clone(&state.graph),
        selected_node_ids: Arc::clone(&state.selection.selected_node_ids),
        pending_source,
        pending_line_start,
        chain_anchor: state.chain_anchor,
        edit_active: state.is_active(),
        theme: state.profile.theme,
        stats: state.graph.stats(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::{ActiveMode, EditMode, GraphEditorSession};
    use crate::core::{Team, VehicleKind};
    use crate::shared::EditorOptions;
    use glam::Vec3;

    #[test]
    fn scene_highlights_pending_source_and_anchor() {
        let mut session = GraphEditorSession::new(VehicleKind::Wheeled, EditorOptions::default());
        let a = session
            .graph_mut()
            .add_node(Vec3::new(1.0, 2.0, 3.0), 1.0, Team::None, false);
        let b = session.graph_mut().add_node(Vec3::ZERO, 1.0, Team::None, true);
        session.mode = EditMode::Active(ActiveMode::PendingConnect { source: a });
        session.chain_anchor = Some(b);

        let scene = build(&session);

        assert!(scene.edit_active);
        assert_eq!(scene.pending_line_start, Some(Vec3::new(1.0, 2.0, 3.0)));
        assert_eq!(scene.node_color(a), scene.theme.pending_color);
        assert_eq!(scene.node_color(b), scene.theme.anchor_color);
        assert_eq!(scene.stats.node_count, 2);
    }

    #[test]
    fn empty_session_builds_empty_scene() {
        let session = GraphEditorSession::new(VehicleKind::Tank, EditorOptions::default());
        let scene = build(&session);

        assert!(!scene.has_nodes());
        assert!(!scene.edit_active);
        assert_eq!(scene.pending_source, None);
        assert_eq!(scene.stats.component_count, 0);
    }
}
