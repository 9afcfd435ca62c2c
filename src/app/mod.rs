//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod history;
mod intent_mapping;
/// Session-State und Modi
///
/// Dieses Modul verwaltet den Zustand einer Bearbeitungs-Session (Graph, Modus, Anker, Selektion).
pub mod state;
pub mod use_cases;
pub mod view_scene;

pub use command_log::CommandLog;
pub use controller::SessionController;
pub use events::{EventOutcome, InputEvent, Key, Modifiers, PointerButton, SessionCommand};
pub use intent_mapping::placement_candidate;
pub use state::{ActiveMode, EditMode, GraphEditorSession, SelectionState};
pub use view_scene::build as build_session_scene;
