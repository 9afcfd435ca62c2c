//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und dem Host geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod view_scene;

pub use options::EditorOptions;
pub use options::{PROBE_HEIGHT, PROBE_LENGTH};
pub use view_scene::SessionScene;
