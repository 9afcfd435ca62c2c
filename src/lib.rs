//! Vehicle Waypoint Editor Library.
//! Editor-Kern für Wegpunkt-Graphen der Fahrzeug-KI, als Library exportiert
//! für Hosts, Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{
    EditMode, EventOutcome, GraphEditorSession, InputEvent, Modifiers, PointerButton,
    SessionCommand, SessionController,
};
pub use core::{
    ConnectRadius, GraphError, GraphStats, GroundProjector, Ray, Team, VehicleKind, VehicleProfile,
    WaypointGraph, WaypointNode,
};
pub use shared::{EditorOptions, SessionScene};
