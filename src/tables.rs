//! Static wiring data for the five rotor wheels and the three reflectors,
//! plus the [`Reflector`] component itself. The tables are process-wide
//! immutable and shared freely across machine instances.

use crate::types::{Letter, ReflectorId, RotorId, ALPHABET_LEN};

// Historical Enigma I wheel wirings with their turnover notch letters.
const ROTOR_WIRINGS: [(&str, char); 5] = [
    ("EKMFLGDQVZNTOWYHXUSPAIBRCJ", 'Q'),
    ("AJDKSIRUXBLHWTMCQGZNPYFVOE", 'E'),
    ("BDFHJLCPRTXVZNYEIWGAKMUSQO", 'V'),
    ("ESOVPZJAYQUIRHXLNFTGKDCMWB", 'J'),
    ("VZBRGITYUPSDNHLXAWMJQOFECK", 'Z'),
];

const REFLECTOR_WIRINGS: [&str; 3] = [
    "EJMZALYXVBWFCRQUONTSPIKHGD",
    "YRUHQSLDPXNGOKMIEBFZCWVJAT",
    "FVPJIAOYEDRZXWGCTKUQSBNMHL",
];

fn parse_wiring(table: &str) -> [Letter; ALPHABET_LEN] {
    let mut wiring = [Letter::A; ALPHABET_LEN];
    for (i, c) in table.chars().enumerate() {
        // The embedded tables are known-good permutations of A-Z.
        wiring[i] = Letter::from_char(c).expect("wiring table contains a non-letter");
    }
    wiring
}

/// Returns the base substitution table for a rotor wheel, before any ring
/// or position offset is applied.
pub(crate) fn rotor_wiring(id: RotorId) -> [Letter; ALPHABET_LEN] {
    let (table, _) = ROTOR_WIRINGS[id.digit() as usize - '1' as usize];
    parse_wiring(table)
}

/// Returns the turnover notch letter for a rotor wheel, in the wheel's own
/// frame (ring setting A).
pub(crate) fn rotor_notch(id: RotorId) -> Letter {
    let (_, notch) = ROTOR_WIRINGS[id.digit() as usize - '1' as usize];
    Letter::from_char(notch).expect("notch table contains a non-letter")
}

/// A fixed involutive substitution that reflects the signal back through
/// the rotor stack. Reflectors carry no state and never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    id: ReflectorId,
    map: [Letter; ALPHABET_LEN],
}

impl Reflector {
    /// Creates the reflector for the given identifier.
    pub fn new(id: ReflectorId) -> Self {
        let table = match id {
            ReflectorId::A => REFLECTOR_WIRINGS[0],
            ReflectorId::B => REFLECTOR_WIRINGS[1],
            ReflectorId::C => REFLECTOR_WIRINGS[2],
        };
        Reflector {
            id,
            map: parse_wiring(table),
        }
    }

    /// Substitutes a letter through the reflector table.
    pub fn reflect(&self, letter: Letter) -> Letter {
        self.map[letter.index()]
    }

    /// Returns the reflector's identifier.
    pub fn id(&self) -> ReflectorId {
        self.id
    }
}
