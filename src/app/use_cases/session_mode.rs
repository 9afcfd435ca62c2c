//! Use-Case: Modus-Schalter der Session.

use crate::app::{ActiveMode, EditMode, EventOutcome, GraphEditorSession};

/// Schaltet den Editier-Modus. Ausschalten verwirft eine laufende Verbindung.
pub fn set_edit_mode(state: &mut GraphEditorSession, enabled: bool) -> EventOutcome {
    match (enabled, state.mode) {
        (true, EditMode::Idle) => state.mode = EditMode::Active(ActiveMode::Default),
        (false, EditMode::Active(_)) => state.mode = EditMode::Idle,
        _ => return EventOutcome::Ignored,
    }
    log::info!(
        "Editier-Modus {} ({})",
        if enabled { "an" } else { "aus" },
        state.kind().label()
    );
    EventOutcome::ModeChanged
}

/// Schaltet den Ketten-Modus.
pub fn set_chain_mode(state: &mut GraphEditorSession, enabled: bool) -> EventOutcome {
    state.chain_mode = enabled;
    log::info!("Ketten-Modus: {}", enabled);
    EventOutcome::ModeChanged
}

/// Schaltet Proximity-Verbindung beim Platzieren.
pub fn set_auto_connect_on_place(state: &mut GraphEditorSession, enabled: bool) -> EventOutcome {
    state.auto_connect_on_place = enabled;
    log::info!("Auto-Connect beim Platzieren: {}", enabled);
    EventOutcome::ModeChanged
}
