//! Use-Case: Selektion durch den Host (keine Graph-Mutation, kein Undo-Eintrag).

use crate::app::{EventOutcome, GraphEditorSession};

/// Selektiert die übergebenen Nodes; unbekannte IDs werden übersprungen.
pub fn select_nodes(state: &mut GraphEditorSession, ids: &[u64], additive: bool) -> EventOutcome {
    let graph = std::sync::Arc::clone(&state.graph);
    let selection = state.selection.ids_mut();
    if !additive {
        selection.clear();
    }
    selection.extend(ids.iter().copied().filter(|id| graph.contains(*id)));

    let count = state.selection.len();
    log::debug!("Selektion: {} Node(s)", count);
    EventOutcome::SelectionChanged { count }
}

/// Hebt die Selektion auf.
pub fn clear_selection(state: &mut GraphEditorSession) -> EventOutcome {
    if !state.selection.is_empty() {
        state.selection.ids_mut().clear();
    }
    EventOutcome::SelectionChanged { count: 0 }
}
