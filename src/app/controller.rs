//! Session-Controller für zentrale Event-Verarbeitung.

use super::use_cases;
use super::use_cases::editing;
use super::view_scene;
use super::{EventOutcome, GraphEditorSession, InputEvent, SessionCommand};
use crate::core::{FlatGround, GroundProjector, NoGround};
use crate::shared::{EditorOptions, SessionScene};
use anyhow::Context;

/// Orchestriert Host-Eingaben und Use-Cases auf der Session.
///
/// Besitzt den Bodenprojektor des Hosts; alle Platzierungen und Generatoren
/// laufen über ihn.
pub struct SessionController {
    ground: Box<dyn GroundProjector>,
}

impl Default for SessionController {
    fn default() -> Self {
        Self::new(Box::new(NoGround))
    }
}

impl SessionController {
    /// Erstellt einen Controller mit dem Bodenprojektor des Hosts.
    pub fn new(ground: Box<dyn GroundProjector>) -> Self {
        Self { ground }
    }

    /// Controller mit ebenem Boden auf `height` und Probe-Geometrie aus den Optionen.
    pub fn with_flat_ground(height: f32, options: &EditorOptions) -> Self {
        Self::new(Box::new(FlatGround::new(
            height,
            options.probe_height,
            options.probe_length,
        )))
    }

    /// Verarbeitet eine Eingabe über die Übergangstabelle.
    ///
    /// Gibt das Ergebnis des letzten ausgeführten Commands zurück, oder
    /// `Ignored`, wenn die Eingabe durchgereicht wird.
    pub fn handle_input(
        &mut self,
        state: &mut GraphEditorSession,
        event: InputEvent,
    ) -> anyhow::Result<EventOutcome> {
        let commands = super::intent_mapping::map_input_to_commands(state, event);

        let mut outcome = EventOutcome::Ignored;
        for command in commands {
            outcome = self.handle_command(state, command)?;
        }

        Ok(outcome)
    }

    /// Führt einen mutierenden Command auf der Session aus.
    pub fn handle_command(
        &mut self,
        state: &mut GraphEditorSession,
        command: SessionCommand,
    ) -> anyhow::Result<EventOutcome> {
        state.command_log.record(&command);

        let ground = self.ground.as_ref();
        let outcome = match command {
            // === Session-Modi ===
            SessionCommand::SetEditMode { enabled } => {
                use_cases::session_mode::set_edit_mode(state, enabled)
            }
            SessionCommand::SetChainMode { enabled } => {
                use_cases::session_mode::set_chain_mode(state, enabled)
            }
            SessionCommand::SetAutoConnectOnPlace { enabled } => {
                use_cases::session_mode::set_auto_connect_on_place(state, enabled)
            }

            // === Klick-Aktionen ===
            SessionCommand::PlaceNode { candidate } => {
                editing::place_node(state, ground, candidate)
            }
            SessionCommand::DeleteNode { node_id } => editing::delete_node(state, node_id),
            SessionCommand::SetConnectSource { node_id } => {
                editing::set_connect_source(state, node_id)
            }
            SessionCommand::ToggleConnectionFromSource { target_id } => {
                editing::toggle_connection_from_source(state, target_id)
            }
            SessionCommand::CancelPendingConnect => editing::cancel_pending_connect(state),
            SessionCommand::SelectAnchor { node_id } => editing::select_anchor(state, node_id),

            // === Selektion ===
            SessionCommand::SelectNodes { ids, additive } => {
                use_cases::selection::select_nodes(state, &ids, additive)
            }
            SessionCommand::ClearSelection => use_cases::selection::clear_selection(state),

            // === Node-Eigenschaften ===
            SessionCommand::SetNodePosition { node_id, position } => {
                editing::set_node_position(state, node_id, position)
            }
            SessionCommand::SetNodeReachRadius { node_id, radius } => {
                editing::set_node_reach_radius(state, node_id, radius)
            }
            SessionCommand::SetNodeTeam { node_id, team } => {
                editing::set_node_team(state, node_id, team)
            }
            SessionCommand::SetNodeSpawnPoint { node_id, spawn } => {
                editing::set_node_spawn_point(state, node_id, spawn)
            }

            // === Topologie ===
            SessionCommand::CreateRing {
                center,
                count,
                radius,
            } => use_cases::generators::create_ring(state, ground, center, count, radius),
            SessionCommand::CreateGrid {
                center,
                width,
                height,
                spacing,
            } => use_cases::generators::create_grid(state, ground, center, width, height, spacing),

            // === Bulk-Verbindungen ===
            SessionCommand::ConnectSelectedPairs => editing::connect_selected_pairs(state),
            SessionCommand::ChainSelected => editing::chain_selected(state),
            SessionCommand::DisconnectSelected => editing::disconnect_selected(state),
            SessionCommand::AutoConnectSelected { radius } => {
                editing::auto_connect_selected(state, radius)
            }
            SessionCommand::AutoConnectAll { radius } => editing::auto_connect_all(state, radius),

            // === History ===
            SessionCommand::Undo => use_cases::history::undo(state),
            SessionCommand::Redo => use_cases::history::redo(state),
        };

        if cfg!(debug_assertions) {
            state
                .graph
                .verify_invariants()
                .context("Graph nach Command inkonsistent")?;
        }

        Ok(outcome)
    }

    /// Baut die Szene für die Visualisierung aus dem aktuellen Session-State.
    pub fn build_scene(&self, state: &GraphEditorSession) -> SessionScene {
        view_scene::build(state)
    }
}
