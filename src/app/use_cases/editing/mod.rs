//! Use-Case-Funktionen für Node- und Verbindungs-Editing.
//!
//! Aufgeteilt nach Operation:
//! - `place_node`: Neuen Node platzieren (Kette, optional Proximity)
//! - `delete_node`: Node inkl. aller Verbindungen löschen
//! - `connect`: Klick-Verbinden über Quell-Node
//! - `node_properties`: Position, Radius, Team, Spawn
//! - `bulk_connections`: Bulk-Änderungen über die Selektion

mod bulk_connections;
mod connect;
mod delete_node;
mod node_properties;
mod place_node;

pub use bulk_connections::{
    auto_connect_all, auto_connect_selected, chain_selected, connect_selected_pairs,
    disconnect_selected,
};
pub use connect::{cancel_pending_connect, set_connect_source, toggle_connection_from_source};
pub use delete_node::delete_node;
pub use node_properties::{set_node_position, set_node_reach_radius, set_node_spawn_point, set_node_team};
pub use place_node::{place_node, select_anchor};
