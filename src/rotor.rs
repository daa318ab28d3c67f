//! This module defines the [`Rotor`], the stateful wheel at the heart of the
//! machine: a wiring permutation aligned by ring setting and rotational
//! position, with notch detection driving the stepping cascade.

use crate::tables;
use crate::types::{EnigmaError, Letter, RotorId, ALPHABET_LEN};

/// A single rotor wheel.
///
/// The wiring is stored pre-rotated for the current ring setting and
/// position, so the signal transforms are plain table lookups. Each step
/// re-rotates the table by one; it is never rebuilt from the base wiring in
/// the hot path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    id: RotorId,
    ring_setting: Letter,
    position: Letter,
    notch: Letter,
    wiring: [Letter; ALPHABET_LEN],
    inverse: [Letter; ALPHABET_LEN],
}

impl Rotor {
    /// Creates a rotor from typed parts.
    ///
    /// The base wiring is realigned for the ring setting (rotated by the
    /// negated ring index, with the notch letter shifted by the same
    /// amount), then rotated forward to the starting position.
    pub fn new(id: RotorId, ring_setting: Letter, start_position: Letter) -> Self {
        let ring_shift = -(ring_setting.index() as i32);
        let mut rotor = Rotor {
            id,
            ring_setting,
            position: Letter::A,
            notch: tables::rotor_notch(id).offset_by(ring_shift),
            wiring: tables::rotor_wiring(id),
            inverse: [Letter::A; ALPHABET_LEN],
        };
        rotor.shift_wiring(ring_shift);
        rotor.set_position(start_position);
        rotor
    }

    /// Creates a rotor from its untyped settings form: a type digit `1`-`5`
    /// and two alphabet letters.
    ///
    /// # Returns
    ///
    /// * `Err(EnigmaError::Rotor)` on an unknown rotor type, invalid ring
    ///   setting, or invalid starting letter.
    pub fn from_settings(
        rotor_type: char,
        ring_setting: char,
        start_position: char,
    ) -> Result<Self, EnigmaError> {
        let id = RotorId::from_char(rotor_type)?;
        let ring = Letter::from_char(ring_setting)
            .map_err(|_| EnigmaError::Rotor(format!("invalid ring setting '{}'", ring_setting)))?;
        let start = Letter::from_char(start_position).map_err(|_| {
            EnigmaError::Rotor(format!("invalid starting letter '{}'", start_position))
        })?;
        Ok(Rotor::new(id, ring, start))
    }

    /// Advances the rotor by one position, wrapping Z back to A.
    ///
    /// # Returns
    ///
    /// * `true` if the rotor sat at its notch *before* stepping. The machine
    ///   uses this to decide whether to cascade a step to the neighboring
    ///   rotor, which is what produces the historical double-step.
    pub fn step(&mut self) -> bool {
        let turnover = self.position == self.notch;
        self.shift_wiring(1);
        self.position = self.position.offset_by(1);
        turnover
    }

    /// Returns true if the current position equals the ring-adjusted notch
    /// letter.
    pub fn at_notch(&self) -> bool {
        self.position == self.notch
    }

    /// Substitutes a letter on the entry pass, traveling toward the
    /// reflector.
    pub fn backward(&self, letter: Letter) -> Letter {
        self.wiring[letter.index()]
    }

    /// Substitutes a letter on the return pass, traveling back from the
    /// reflector. Inverse of [`Rotor::backward`].
    pub fn forward(&self, letter: Letter) -> Letter {
        self.inverse[letter.index()]
    }

    /// Character-level wrapper around [`Rotor::backward`].
    ///
    /// # Returns
    ///
    /// * `Err(EnigmaError::InvalidInput)` if `c` is not a single alphabet
    ///   letter.
    pub fn backward_char(&self, c: char) -> Result<char, EnigmaError> {
        Ok(self.backward(Letter::from_char(c)?).char())
    }

    /// Character-level wrapper around [`Rotor::forward`].
    pub fn forward_char(&self, c: char) -> Result<char, EnigmaError> {
        Ok(self.forward(Letter::from_char(c)?).char())
    }

    /// Rotates the rotor to an absolute position, re-rotating the wiring by
    /// the delta from the current position.
    pub fn set_position(&mut self, position: Letter) {
        let jump = self.position.steps_to(position);
        self.shift_wiring(jump);
        self.position = position;
    }

    /// Returns the current rotational position.
    pub fn position(&self) -> Letter {
        self.position
    }

    /// Returns the ring setting the rotor was constructed with.
    pub fn ring_setting(&self) -> Letter {
        self.ring_setting
    }

    /// Returns the rotor's wheel identifier.
    pub fn id(&self) -> RotorId {
        self.id
    }

    /// Rotates the wiring table by `n`: every entry is shifted back by `n`
    /// in the alphabet and the table itself rotated left by `n`, which keeps
    /// the table expressed in the frame of the machine rather than the
    /// wheel.
    fn shift_wiring(&mut self, n: i32) {
        let shift = n.rem_euclid(ALPHABET_LEN as i32) as usize;
        let mut rotated = [Letter::A; ALPHABET_LEN];
        for (i, slot) in rotated.iter_mut().enumerate() {
            *slot = self.wiring[(i + shift) % ALPHABET_LEN].offset_by(-(shift as i32));
        }
        self.wiring = rotated;
        for (i, letter) in self.wiring.iter().enumerate() {
            self.inverse[letter.index()] = Letter::A.offset_by(i as i32);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_from_settings_invalid_type() {
        assert!(matches!(
            Rotor::from_settings('S', 'A', 'A'),
            Err(EnigmaError::Rotor(_))
        ));
    }

    #[test]
    fn test_from_settings_invalid_ring_setting() {
        assert!(matches!(
            Rotor::from_settings('1', '2', 'A'),
            Err(EnigmaError::Rotor(_))
        ));
    }

    #[test]
    fn test_from_settings_invalid_starting_letter() {
        assert!(matches!(
            Rotor::from_settings('1', 'A', '?'),
            Err(EnigmaError::Rotor(_))
        ));
    }

    #[test]
    fn test_from_settings_accepts_lowercase() {
        let rotor = Rotor::from_settings('1', 'a', 'u').unwrap();
        assert_eq!(rotor.position().char(), 'U');
        assert_eq!(rotor.ring_setting().char(), 'A');
    }

    #[test]
    fn test_initial_position() {
        let rotor = Rotor::from_settings('1', 'K', 'M').unwrap();
        assert_eq!(rotor.position().char(), 'M');
        assert_eq!(rotor.id(), RotorId::I);
    }

    #[test]
    fn test_step_advances_position() {
        let mut rotor = Rotor::from_settings('1', 'K', 'F').unwrap();
        rotor.step();
        assert_eq!(rotor.position().char(), 'G');
    }

    #[test]
    fn test_step_wraps_z_to_a() {
        let mut rotor = Rotor::from_settings('3', 'A', 'Z').unwrap();
        rotor.step();
        assert_eq!(rotor.position().char(), 'A');
    }

    // Reference transform generated from the historical wheel I table at
    // ring K, position M.
    #[test]
    fn test_signal_transforms() {
        let rotor = Rotor::from_settings('1', 'K', 'M').unwrap();
        assert_eq!(rotor.backward(letter('A')), letter('K'));
        assert_eq!(rotor.forward(letter('A')), letter('W'));
        assert_eq!(rotor.backward_char('a').unwrap(), 'K');
        assert_eq!(rotor.forward_char('A').unwrap(), 'W');
    }

    #[test]
    fn test_char_transforms_reject_non_letters() {
        let rotor = Rotor::from_settings('1', 'K', 'F').unwrap();
        assert!(rotor.forward_char(' ').is_err());
        assert!(rotor.backward_char('2').is_err());
    }

    #[test]
    fn test_forward_inverts_backward_everywhere() {
        let mut rotor = Rotor::from_settings('4', 'G', 'A').unwrap();
        for _ in 0..ALPHABET_LEN {
            for c in 'A'..='Z' {
                let l = letter(c);
                assert_eq!(rotor.forward(rotor.backward(l)), l);
                assert_eq!(rotor.backward(rotor.forward(l)), l);
            }
            rotor.step();
        }
    }

    #[test]
    fn test_set_position() {
        let mut rotor = Rotor::from_settings('1', 'F', 'K').unwrap();
        rotor.set_position(letter('N'));
        assert_eq!(rotor.position().char(), 'N');
        // Re-rotating must land on the same wiring as constructing there
        assert_eq!(rotor, Rotor::from_settings('1', 'F', 'N').unwrap());
    }

    #[test]
    fn test_notch_adjusted_for_ring_setting() {
        // Wheel II notches at E; ring F moves it back five letters to Z.
        let mut rotor = Rotor::from_settings('2', 'F', 'A').unwrap();
        let mut hits = Vec::new();
        for _ in 0..ALPHABET_LEN {
            if rotor.at_notch() {
                hits.push(rotor.position().char());
            }
            rotor.step();
        }
        assert_eq!(hits, vec!['Z']);
    }

    #[test]
    fn test_step_reports_turnover_before_stepping() {
        let mut rotor = Rotor::from_settings('3', 'A', 'V').unwrap();
        assert!(rotor.at_notch());
        assert!(rotor.step());
        assert!(!rotor.at_notch());
        assert!(!rotor.step());
    }
}
