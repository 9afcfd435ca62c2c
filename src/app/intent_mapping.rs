//! Übergangstabelle: rohe Eingaben auf mutierende Session-Commands.
//!
//! | Eingabe                                  | Vorbedingung           | Command                      |
//! |------------------------------------------|------------------------|------------------------------|
//! | Sekundär-/Mitteltaste, Kamera, Scroll    | –                      | keiner (Durchreichen)        |
//! | Escape                                   | Verbindung läuft       | `CancelPendingConnect`       |
//! | Löschen + Klick auf Node                 | –                      | `DeleteNode`                 |
//! | Shift + Klick auf Node                   | keine Quelle           | `SetConnectSource`           |
//! | Shift + Klick auf anderen Node           | Quelle gesetzt         | `ToggleConnectionFromSource` |
//! | Shift + Klick auf Quelle oder ins Leere  | Quelle gesetzt         | `CancelPendingConnect`       |
//! | Klick auf Node                           | –                      | `SelectAnchor`               |
//! | Klick ins Leere                          | –                      | `PlaceNode`                  |
//!
//! Im Modus `Idle` entsteht aus keiner Eingabe ein Command.

use super::events::{InputEvent, Key, Modifiers, PointerButton};
use super::{GraphEditorSession, SessionCommand};
use crate::core::Ray;
use glam::Vec3;

/// Übersetzt eine Eingabe in eine Sequenz ausführbarer `SessionCommand`s.
pub fn map_input_to_commands(state: &GraphEditorSession, event: InputEvent) -> Vec<SessionCommand> {
    if !state.is_active() {
        log::debug!("Editier-Modus aus, Eingabe ignoriert: {:?}", event);
        return Vec::new();
    }

    match event {
        InputEvent::Scroll { .. } => Vec::new(),
        InputEvent::KeyDown { key: Key::Escape } => {
            if state.pending_source().is_some() {
                vec![SessionCommand::CancelPendingConnect]
            } else {
                Vec::new()
            }
        }
        InputEvent::KeyDown { key: Key::Other } => Vec::new(),
        InputEvent::UndoRequested => vec![SessionCommand::Undo],
        InputEvent::RedoRequested => vec![SessionCommand::Redo],
        InputEvent::PointerDown {
            button,
            modifiers,
            ray,
        } => map_pointer_down(state, button, modifiers, &ray),
    }
}

fn map_pointer_down(
    state: &GraphEditorSession,
    button: PointerButton,
    modifiers: Modifiers,
    ray: &Ray,
) -> Vec<SessionCommand> {
    if button != PointerButton::Primary || modifiers.camera {
        return Vec::new();
    }

    let hit = state
        .graph
        .nearest_node_along_ray(ray, state.options.pick_max_distance);

    if modifiers.delete {
        return match hit {
            Some(node_id) => vec![SessionCommand::DeleteNode { node_id }],
            None => {
                log::debug!("Löschen: kein Node unter dem Zeiger");
                Vec::new()
            }
        };
    }

    if modifiers.shift {
        return match (state.pending_source(), hit) {
            (None, Some(node_id)) => vec![SessionCommand::SetConnectSource { node_id }],
            (None, None) => Vec::new(),
            (Some(source), Some(target_id)) if source != target_id => {
                vec![SessionCommand::ToggleConnectionFromSource { target_id }]
            }
            (Some(_), _) => vec![SessionCommand::CancelPendingConnect],
        };
    }

    match hit {
        Some(node_id) => vec![SessionCommand::SelectAnchor { node_id }],
        None => vec![SessionCommand::PlaceNode {
            candidate: placement_candidate(state, ray),
        }],
    }
}

/// Kandidatenpunkt für einen Klick ins Leere (vor der Bodenprojektion).
///
/// Schnitt mit der Referenzebene, sonst der Punkt in maximaler Platzierungsdistanz.
pub fn placement_candidate(state: &GraphEditorSession, ray: &Ray) -> Vec3 {
    let max_distance = state.options.placement_max_distance;
    ray.intersect_horizontal_plane(state.options.placement_plane_height)
        .filter(|point| point.distance(ray.origin) <= max_distance)
        .unwrap_or_else(|| ray.at(max_distance))
}
