//! This module defines the core value types used throughout the Enigma machine
//! simulator: validated alphabet letters, rotor and reflector identifiers, and
//! the error type shared by all components.

use std::fmt;
use thiserror::Error;

/// The fixed alphabet all positional arithmetic is performed over.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// Number of letters in the alphabet; every offset is reduced modulo this.
pub const ALPHABET_LEN: usize = 26;
/// Number of letters per output block in formatted ciphertext.
pub const GROUP_SIZE: usize = 5;

/// A single validated letter of the alphabet, stored as its index `0..26`.
///
/// Once constructed, a `Letter` is always a member of the alphabet, so the
/// signal-path hot loop performs no membership checks. Construction is
/// case-normalizing: `'q'` and `'Q'` produce the same `Letter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The first letter of the alphabet.
    pub const A: Letter = Letter(0);

    /// Creates a `Letter` from an alphabet index.
    ///
    /// # Returns
    ///
    /// * `Ok(Letter)` if `index` is below [`ALPHABET_LEN`].
    /// * `Err(EnigmaError::InvalidInput)` otherwise.
    pub fn new(index: u8) -> Result<Self, EnigmaError> {
        if (index as usize) < ALPHABET_LEN {
            Ok(Letter(index))
        } else {
            Err(EnigmaError::InvalidInput(format!(
                "alphabet index {} is out of range",
                index
            )))
        }
    }

    /// Creates a `Letter` from a character, normalizing case.
    ///
    /// # Returns
    ///
    /// * `Ok(Letter)` for `a..=z` and `A..=Z`.
    /// * `Err(EnigmaError::InvalidInput)` for any other character.
    pub fn from_char(c: char) -> Result<Self, EnigmaError> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Letter(upper as u8 - b'A'))
        } else {
            Err(EnigmaError::InvalidInput(format!(
                "'{}' is not a letter of the alphabet",
                c
            )))
        }
    }

    /// Returns the letter's alphabet index (0 for A, 25 for Z).
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the letter as an uppercase character.
    pub fn char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Returns the letter `n` positions forward in the alphabet, wrapping
    /// modulo 26. Negative offsets move backward.
    pub fn offset_by(self, n: i32) -> Letter {
        Letter((self.0 as i32 + n).rem_euclid(ALPHABET_LEN as i32) as u8)
    }

    /// Returns how many forward steps separate `self` from `target`,
    /// always in `0..26`.
    pub fn steps_to(self, target: Letter) -> i32 {
        (target.0 as i32 - self.0 as i32).rem_euclid(ALPHABET_LEN as i32)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.char())
    }
}

/// Exactly three letters, as used for ring settings and rotor positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThreeLetterCode([Letter; 3]);

impl ThreeLetterCode {
    /// Parses a three-letter string, checking length before per-character
    /// alphabet membership.
    pub fn parse(s: &str) -> Result<Self, EnigmaError> {
        let mut chars = s.chars();
        let code = match (chars.next(), chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), Some(c), None) => [
                Letter::from_char(a)?,
                Letter::from_char(b)?,
                Letter::from_char(c)?,
            ],
            _ => {
                return Err(EnigmaError::InvalidInput(format!(
                    "'{}' is not a three-letter code",
                    s
                )))
            }
        };
        Ok(ThreeLetterCode(code))
    }

    /// Returns the letter at the given slot (0 = leftmost).
    pub fn get(&self, slot: usize) -> Letter {
        self.0[slot]
    }

    /// Returns the three letters in order.
    pub fn letters(&self) -> [Letter; 3] {
        self.0
    }
}

impl fmt::Display for ThreeLetterCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

/// Identifies one of the five historical rotor wheels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotorId {
    I,
    II,
    III,
    IV,
    V,
}

impl RotorId {
    /// Parses a rotor identifier from its digit form `'1'..='5'`.
    pub fn from_char(c: char) -> Result<Self, EnigmaError> {
        match c {
            '1' => Ok(RotorId::I),
            '2' => Ok(RotorId::II),
            '3' => Ok(RotorId::III),
            '4' => Ok(RotorId::IV),
            '5' => Ok(RotorId::V),
            _ => Err(EnigmaError::Rotor(format!(
                "'{}' is not a valid rotor type",
                c
            ))),
        }
    }

    /// Returns the identifier's digit form.
    pub fn digit(self) -> char {
        match self {
            RotorId::I => '1',
            RotorId::II => '2',
            RotorId::III => '3',
            RotorId::IV => '4',
            RotorId::V => '5',
        }
    }
}

/// Identifies one of the three fixed reflector tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReflectorId {
    A,
    B,
    C,
}

impl ReflectorId {
    /// Parses a reflector identifier from its letter form, case-insensitively.
    pub fn from_char(c: char) -> Result<Self, EnigmaError> {
        match c.to_ascii_uppercase() {
            'A' => Ok(ReflectorId::A),
            'B' => Ok(ReflectorId::B),
            'C' => Ok(ReflectorId::C),
            _ => Err(EnigmaError::Machine(format!(
                "'{}' is not a valid reflector type",
                c
            ))),
        }
    }

    /// Returns the identifier's letter form.
    pub fn letter(self) -> char {
        match self {
            ReflectorId::A => 'A',
            ReflectorId::B => 'B',
            ReflectorId::C => 'C',
        }
    }
}

impl fmt::Display for ReflectorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Represents the various validation and boundary errors that can occur
/// during Enigma machine operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EnigmaError {
    /// A character-level operation received something other than a single
    /// alphabet letter.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// Invalid rotor type, ring setting, or starting letter at rotor
    /// construction.
    #[error("rotor error: {0}")]
    Rotor(String),
    /// Malformed pair, self-pairing, or a letter claimed by more than one
    /// pair while building or modifying a plugboard.
    #[error("plugboard error: {0}")]
    Plugboard(String),
    /// Invalid configuration field at machine construction, or a
    /// non-encryptable character in a message.
    #[error("machine error: {0}")]
    Machine(String),
    /// A settings document could not be decoded.
    #[error("settings error: {0}")]
    Settings(String),
    /// A file system operation failed while loading or saving settings or
    /// message batches.
    #[error("file error: {0}")]
    File(String),
}
