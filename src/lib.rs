//! This crate provides the core logic for an Enigma rotor cipher machine
//! simulator. It includes modules for the rotor stack and its stepping
//! mechanism, the plugboard and reflector substitutions, message-level
//! encryption, and settings persistence.
//!
//! The cipher is historically broken; this is a simulator, not a security
//! primitive.

pub mod machine;
pub mod plugboard;
pub mod rotor;
pub mod settings;
pub mod shift;
pub mod tables;
pub mod types;

/// Re-exports the `Machine` struct from the machine module.
pub use machine::Machine;
/// Re-exports the `Plugboard` struct from the plugboard module.
pub use plugboard::Plugboard;
/// Re-exports the `Rotor` struct from the rotor module.
pub use rotor::Rotor;
/// Re-exports the settings document and its file persistence helpers.
pub use settings::{load_settings, save_settings, Settings};
/// Re-exports the alphabet rotation utilities.
pub use shift::{shift_letter, shift_string};
/// Re-exports the `Reflector` struct from the tables module.
pub use tables::Reflector;
/// Re-exports the core value types and the shared error type.
pub use types::{EnigmaError, Letter, ReflectorId, RotorId, ThreeLetterCode};
