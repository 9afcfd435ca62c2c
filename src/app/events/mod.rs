//! Eingabe-, Command- und Ergebnis-Typen für den Input/Command-Datenfluss.

mod command;
mod input;
mod outcome;

pub use command::SessionCommand;
pub use input::{InputEvent, Key, Modifiers, PointerButton};
pub use outcome::EventOutcome;
