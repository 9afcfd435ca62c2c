//! Core-Domänentypen: Wegpunkt-Nodes, Graph, Strahl, Bodenprojektion, Spatial-Index.

pub mod ground;
/// Core-Datenmodelle für Fahrzeug-Wegpunktgraphen
///
/// Dieses Modul definiert die Haupt-Datenstrukturen:
/// - WaypointGraph: Container für alle Nodes und ihre symmetrische Adjazenz
/// - WaypointNode: Einzelner Wegpunkt mit Position, Radius und Team
/// - VehicleProfile: Standardradien und Farbthema je Fahrzeugart
pub mod node;
pub mod proximity;
pub mod ray;
pub mod spatial;
pub mod topology;
pub mod vehicle;
pub mod waypoint_graph;

pub use ground::{project_or_keep, FlatGround, GroundProjector, NoGround};
pub use node::{Team, WaypointNode};
pub use proximity::{auto_connect_all, auto_connect_nearby, auto_connect_nodes, ConnectRadius};
pub use ray::Ray;
pub use spatial::{SpatialIndex, SpatialMatch};
pub use topology::{
    chain_in_order, connect_all_pairs, disconnect_all_pairs, NodeTemplate, TopologyBuilder,
};
pub use vehicle::{DisplayTheme, VehicleKind, VehicleProfile};
pub use waypoint_graph::{GraphError, GraphStats, WaypointGraph, MAX_NEXT_NODE_ID};
