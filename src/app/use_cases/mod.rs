//! Use-Cases der Application-Layer-Orchestrierung.

pub mod editing;
pub mod generators;
pub mod history;
pub mod selection;
pub mod session_mode;
