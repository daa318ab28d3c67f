//! This module defines the [`Machine`], which owns the three-rotor stack,
//! the plugboard, and the reflector, and orchestrates the stepping cascade
//! and the full signal path for each encrypted character.

use crate::plugboard::Plugboard;
use crate::rotor::Rotor;
use crate::tables::Reflector;
use crate::types::{EnigmaError, Letter, ReflectorId, RotorId, ThreeLetterCode, GROUP_SIZE};

/// A configured Enigma machine.
///
/// Rotors are stored in reading order: slot 0 is the slow (leftmost) wheel,
/// slot 2 the fast (rightmost) wheel next to the entry plate. The design is
/// fixed at exactly three rotors. Encryption and decryption are the same
/// operation: running ciphertext through a machine at the identical starting
/// configuration reproduces the plaintext.
#[derive(Debug, Clone, PartialEq)]
pub struct Machine {
    rotors: [Rotor; 3],
    reflector: Reflector,
    plugboard: Plugboard,
}

impl Machine {
    /// Creates a machine from its settings strings.
    ///
    /// # Arguments
    ///
    /// * `rotors` - three wheel digits `1`-`5`, leftmost first, e.g. `"123"`.
    /// * `ring_setting` - three alphabet letters, one per wheel.
    /// * `position` - three alphabet letters, the starting positions.
    /// * `reflector` - a single letter `A`-`C`.
    /// * `plugboard` - space-separated letter pairs, may be empty.
    ///
    /// Fields are validated in a fixed order: the length of each of the
    /// three-character fields, then their per-character values, then the
    /// reflector, then the plugboard specification.
    ///
    /// # Returns
    ///
    /// * `Err(EnigmaError::Machine)` on any field-shape violation.
    /// * `Err(EnigmaError::Plugboard)` on a malformed plugboard spec.
    pub fn new(
        rotors: &str,
        ring_setting: &str,
        position: &str,
        reflector: &str,
        plugboard: &str,
    ) -> Result<Self, EnigmaError> {
        for (field, name) in [
            (rotors, "rotors"),
            (ring_setting, "ring setting"),
            (position, "starting position"),
        ] {
            if field.chars().count() != 3 {
                return Err(EnigmaError::Machine(format!(
                    "invalid input length ({})",
                    name
                )));
            }
        }

        let mut ids = [RotorId::I; 3];
        for (slot, c) in rotors.chars().enumerate() {
            ids[slot] = RotorId::from_char(c)
                .map_err(|_| EnigmaError::Machine("invalid input value (rotors)".to_string()))?;
        }
        let rings = ThreeLetterCode::parse(ring_setting)
            .map_err(|_| EnigmaError::Machine("invalid input value (ring setting)".to_string()))?;
        let positions = ThreeLetterCode::parse(position).map_err(|_| {
            EnigmaError::Machine("invalid input value (starting position)".to_string())
        })?;

        let mut reflector_chars = reflector.chars();
        let reflector_id = match (reflector_chars.next(), reflector_chars.next()) {
            (Some(c), None) => ReflectorId::from_char(c)
                .map_err(|_| EnigmaError::Machine("invalid input value (reflector)".to_string()))?,
            _ => {
                return Err(EnigmaError::Machine(
                    "invalid input length (reflector)".to_string(),
                ))
            }
        };

        Ok(Machine {
            rotors: [
                Rotor::new(ids[0], rings.get(0), positions.get(0)),
                Rotor::new(ids[1], rings.get(1), positions.get(1)),
                Rotor::new(ids[2], rings.get(2), positions.get(2)),
            ],
            reflector: Reflector::new(reflector_id),
            plugboard: Plugboard::build(plugboard)?,
        })
    }

    /// Advances the rotor stack by one keystroke.
    ///
    /// The middle rotor is checked against its notch before anything moves;
    /// if it sits at the notch it steps together with the left rotor. The
    /// right rotor then steps unconditionally, pushing the middle rotor
    /// again when it left its own notch. Both checks can fire on the same
    /// keystroke, which is the historical double-stepping anomaly: the
    /// middle rotor can advance twice within three consecutive keystrokes.
    pub fn step_rotors(&mut self) {
        if self.rotors[1].at_notch() {
            self.rotors[1].step();
            self.rotors[0].step();
        }
        if self.rotors[2].step() {
            self.rotors[1].step();
        }
    }

    /// Encrypts a single character, stepping the rotors first.
    ///
    /// The signal path is: plugboard, then the rotor stack right-to-left,
    /// the reflector, the rotor stack left-to-right, and the plugboard
    /// again.
    ///
    /// # Returns
    ///
    /// * `Err(EnigmaError::InvalidInput)` if `c` is not a single alphabet
    ///   letter; the rotors do not move on a rejected character.
    pub fn encrypt_char(&mut self, c: char) -> Result<char, EnigmaError> {
        let letter = Letter::from_char(c)?;
        self.step_rotors();
        let mut signal = self.plugboard.swap(letter);
        signal = self.rotors[2].backward(signal);
        signal = self.rotors[1].backward(signal);
        signal = self.rotors[0].backward(signal);
        signal = self.reflector.reflect(signal);
        signal = self.rotors[0].forward(signal);
        signal = self.rotors[1].forward(signal);
        signal = self.rotors[2].forward(signal);
        Ok(self.plugboard.swap(signal).char())
    }

    /// Encrypts a message letter by letter.
    ///
    /// Whitespace is skipped entirely: it neither advances the rotors nor
    /// appears in the output. The result is grouped into blocks of five
    /// letters separated by single spaces, mirroring historical radio
    /// message formatting; the final block may be shorter.
    ///
    /// # Returns
    ///
    /// * `Err(EnigmaError::Machine)` if a non-whitespace character is not an
    ///   alphabet letter.
    pub fn encrypt_text(&mut self, text: &str) -> Result<String, EnigmaError> {
        let mut message = String::new();
        let mut count = 0;
        for c in text.chars() {
            if c.is_whitespace() {
                continue;
            }
            if !c.is_ascii_alphabetic() {
                return Err(EnigmaError::Machine(format!(
                    "invalid character to encrypt '{}'",
                    c
                )));
            }
            if count > 0 && count % GROUP_SIZE == 0 {
                message.push(' ');
            }
            message.push(self.encrypt_char(c)?);
            count += 1;
        }
        Ok(message)
    }

    /// Returns the three rotor positions as a string, leftmost rotor first.
    pub fn current_position(&self) -> String {
        self.rotors.iter().map(|r| r.position().char()).collect()
    }

    /// Returns the three wheel digits as a string, leftmost rotor first.
    pub fn rotor_ids(&self) -> String {
        self.rotors.iter().map(|r| r.id().digit()).collect()
    }

    /// Returns the three ring setting letters as a string, leftmost rotor
    /// first.
    pub fn ring_settings(&self) -> String {
        self.rotors.iter().map(|r| r.ring_setting().char()).collect()
    }

    /// Returns the reflector identifier.
    pub fn reflector(&self) -> ReflectorId {
        self.reflector.id()
    }

    /// Connects two letters on the plugboard. Same contract as
    /// [`Plugboard::add_connection`].
    pub fn add_connection(&mut self, pair: &str) -> Result<(), EnigmaError> {
        self.plugboard.add_connection(pair)
    }

    /// Removes the plugboard connection involving `letter`; no-op when the
    /// letter is unconnected.
    pub fn remove_connection(&mut self, letter: char) -> Result<(), EnigmaError> {
        self.plugboard.remove_connection(letter)
    }

    /// Replaces the whole plugboard from a specification string. The old
    /// board is kept when the new specification is invalid.
    pub fn replace_plugboard(&mut self, spec: &str) -> Result<(), EnigmaError> {
        self.plugboard = Plugboard::build(spec)?;
        Ok(())
    }

    /// Renders the current plugboard connections as a pair string.
    pub fn plugboard_string(&self) -> String {
        self.plugboard.to_spec_string()
    }
}
