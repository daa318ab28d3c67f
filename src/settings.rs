//! This module provides the [`Settings`] document that a machine is
//! configured from, together with JSON file persistence for it.

use crate::machine::Machine;
use crate::types::EnigmaError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const DEFAULT_ROTORS: &str = "123";
const DEFAULT_RING_SETTING: &str = "AAA";
const DEFAULT_POSITION: &str = "AAA";
const DEFAULT_REFLECTOR: &str = "A";

/// The machine configuration record.
///
/// Every field is a plain string in the same form [`Machine::new`] accepts.
/// Fields missing from a decoded document take their defaults, and an empty
/// string falls back to the default at build time as well, so a sparse
/// document always yields a usable machine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Three wheel digits `1`-`5`, leftmost rotor first.
    #[serde(default = "default_rotors")]
    pub rotors: String,
    /// Three ring setting letters.
    #[serde(default = "default_ring_setting")]
    pub ring_setting: String,
    /// Three starting position letters.
    #[serde(default = "default_position")]
    pub position: String,
    /// Reflector letter `A`-`C`.
    #[serde(default = "default_reflector")]
    pub reflector: String,
    /// Space-separated plugboard pairs, may be empty.
    #[serde(default)]
    pub plugboard: String,
}

fn default_rotors() -> String {
    DEFAULT_ROTORS.to_string()
}

fn default_ring_setting() -> String {
    DEFAULT_RING_SETTING.to_string()
}

fn default_position() -> String {
    DEFAULT_POSITION.to_string()
}

fn default_reflector() -> String {
    DEFAULT_REFLECTOR.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            rotors: default_rotors(),
            ring_setting: default_ring_setting(),
            position: default_position(),
            reflector: default_reflector(),
            plugboard: String::new(),
        }
    }
}

impl Settings {
    /// Constructs the machine this document describes.
    ///
    /// # Returns
    ///
    /// * `Err(EnigmaError::Machine)` / `Err(EnigmaError::Plugboard)` with
    ///   the underlying construction error when a field is invalid.
    pub fn build(&self) -> Result<Machine, EnigmaError> {
        let or_default = |value: &str, fallback: &'static str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };
        Machine::new(
            &or_default(&self.rotors, DEFAULT_ROTORS),
            &or_default(&self.ring_setting, DEFAULT_RING_SETTING),
            &or_default(&self.position, DEFAULT_POSITION),
            &or_default(&self.reflector, DEFAULT_REFLECTOR),
            &self.plugboard,
        )
    }

    /// Captures a machine's configuration as a settings document.
    ///
    /// The `position` and `plugboard` fields reflect the machine's *current*
    /// state, not the values it was constructed with.
    pub fn from_machine(machine: &Machine) -> Self {
        Settings {
            rotors: machine.rotor_ids(),
            ring_setting: machine.ring_settings(),
            position: machine.current_position(),
            reflector: machine.reflector().to_string(),
            plugboard: machine.plugboard_string(),
        }
    }
}

/// Reads a settings document from a JSON file.
///
/// # Returns
///
/// * `Err(EnigmaError::File)` if the file cannot be read.
/// * `Err(EnigmaError::Settings)` if the content is not a valid document.
pub fn load_settings(path: &Path) -> Result<Settings, EnigmaError> {
    let content = fs::read_to_string(path).map_err(|e| {
        EnigmaError::File(format!("failed to read file {}: {}", path.display(), e))
    })?;

    serde_json::from_str(&content)
        .map_err(|e| EnigmaError::Settings(format!("invalid settings document: {}", e)))
}

/// Writes a settings document to a JSON file, pretty-printed.
///
/// # Returns
///
/// * `Err(EnigmaError::File)` if the file cannot be written.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), EnigmaError> {
    let content = serde_json::to_string_pretty(settings)
        .map_err(|e| EnigmaError::Settings(format!("failed to encode settings: {}", e)))?;

    fs::write(path, content).map_err(|e| {
        EnigmaError::File(format!("failed to write file {}: {}", path.display(), e))
    })
}
