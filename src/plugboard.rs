//! This module defines the [`Plugboard`], the user-configurable symmetric
//! letter-swap applied at both the entry and exit of the signal path.

use crate::types::{EnigmaError, Letter};

/// A set of disjoint letter pairs. Swapping is an involution: applying it
/// twice returns the original letter, which is what makes the same lookup
/// usable for both the entry and exit passes of the signal.
///
/// Pairs are kept in insertion order so the rendered specification string is
/// stable and round-trips through [`Plugboard::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plugboard {
    pairs: Vec<(Letter, Letter)>,
}

impl Plugboard {
    /// Creates an empty plugboard: every letter passes through unchanged.
    pub fn new() -> Self {
        Plugboard::default()
    }

    /// Builds a plugboard from a specification string of space-separated
    /// two-letter pairs, e.g. `"AB CD EF"`. An empty string yields an empty
    /// board.
    ///
    /// # Returns
    ///
    /// * `Err(EnigmaError::Plugboard)` if a pair does not consist of exactly
    ///   two letters, pairs a letter with itself, or claims a letter that an
    ///   earlier pair already connected. The whole build fails; nothing is
    ///   kept from a partially valid specification.
    pub fn build(spec: &str) -> Result<Self, EnigmaError> {
        let mut board = Plugboard::new();
        for pair in spec.split_whitespace() {
            board.connect(pair)?;
        }
        Ok(board)
    }

    /// Returns the connected partner of `letter`, or `letter` itself when
    /// unconnected.
    pub fn swap(&self, letter: Letter) -> Letter {
        for &(a, b) in &self.pairs {
            if a == letter {
                return b;
            }
            if b == letter {
                return a;
            }
        }
        letter
    }

    /// Connects two letters given as a two-character string.
    ///
    /// # Returns
    ///
    /// * `Err(EnigmaError::Plugboard)` if the pair is not exactly two
    ///   letters, the letters are equal, or either letter is already
    ///   connected. A failed call leaves the board unchanged.
    pub fn add_connection(&mut self, pair: &str) -> Result<(), EnigmaError> {
        self.connect(pair)
    }

    /// Removes the connection involving `letter`, if any. Removing an
    /// unconnected letter is a no-op, so deletion is idempotent.
    ///
    /// # Returns
    ///
    /// * `Err(EnigmaError::InvalidInput)` if `letter` is not an alphabet
    ///   letter.
    pub fn remove_connection(&mut self, letter: char) -> Result<(), EnigmaError> {
        let letter = Letter::from_char(letter)?;
        self.pairs.retain(|&(a, b)| a != letter && b != letter);
        Ok(())
    }

    /// Returns true if `letter` is part of a connection.
    pub fn is_connected(&self, letter: Letter) -> bool {
        self.swap(letter) != letter
    }

    /// Number of connected pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Returns true if no letters are connected.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders the connections as a space-separated pair string, each pair
    /// emitted once in insertion order. The result round-trips through
    /// [`Plugboard::build`].
    pub fn to_spec_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(a, b)| format!("{}{}", a, b))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn connect(&mut self, pair: &str) -> Result<(), EnigmaError> {
        let mut chars = pair.chars();
        let (first, second) = match (chars.next(), chars.next(), chars.next()) {
            (Some(a), Some(b), None) => (a, b),
            _ => {
                return Err(EnigmaError::Plugboard(format!(
                    "connection '{}' must link exactly two letters",
                    pair
                )))
            }
        };

        let a = Letter::from_char(first).map_err(|_| {
            EnigmaError::Plugboard(format!("'{}' is not a letter of the alphabet", first))
        })?;
        let b = Letter::from_char(second).map_err(|_| {
            EnigmaError::Plugboard(format!("'{}' is not a letter of the alphabet", second))
        })?;

        if a == b {
            return Err(EnigmaError::Plugboard(
                "a letter cannot be connected to itself".to_string(),
            ));
        }
        if self.is_connected(a) || self.is_connected(b) {
            return Err(EnigmaError::Plugboard(
                "a single letter can be connected only once".to_string(),
            ));
        }

        self.pairs.push((a, b));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::from_char(c).unwrap()
    }

    #[test]
    fn test_build_empty_spec() {
        let board = Plugboard::build("").unwrap();
        assert!(board.is_empty());
        assert_eq!(board.swap(letter('K')), letter('K'));
    }

    #[test]
    fn test_build_rejects_self_connection() {
        assert!(Plugboard::build("AA").is_err());
    }

    #[test]
    fn test_build_rejects_wrong_arity() {
        assert!(Plugboard::build("GGG").is_err());
        assert!(Plugboard::build("A").is_err());
    }

    #[test]
    fn test_build_rejects_reconnected_letter() {
        assert!(Plugboard::build("AS SF").is_err());
    }

    #[test]
    fn test_build_rejects_non_letters() {
        assert!(Plugboard::build("A1").is_err());
    }

    #[test]
    fn test_build_normalizes_case() {
        let board = Plugboard::build("ad fh").unwrap();
        assert_eq!(board.swap(letter('A')), letter('D'));
        assert_eq!(board.swap(letter('H')), letter('F'));
    }

    #[test]
    fn test_swap_is_involution() {
        let board = Plugboard::build("AB ID KC LW").unwrap();
        for c in 'A'..='Z' {
            let l = letter(c);
            assert_eq!(board.swap(board.swap(l)), l);
        }
        // Unconnected letters map to themselves
        assert_eq!(board.swap(letter('Z')), letter('Z'));
    }

    #[test]
    fn test_spec_string_round_trip() {
        let board = Plugboard::build("AB ID KC LW").unwrap();
        assert_eq!(board.to_spec_string(), "AB ID KC LW");
        assert_eq!(Plugboard::build(&board.to_spec_string()).unwrap(), board);
    }

    #[test]
    fn test_add_connection() {
        let mut board = Plugboard::build("AB ID KC LW").unwrap();
        board.add_connection("ER").unwrap();
        assert_eq!(board.to_spec_string(), "AB ID KC LW ER");
    }

    #[test]
    fn test_add_connection_rejects_connected_letter() {
        let mut board = Plugboard::build("AB").unwrap();
        assert!(board.add_connection("AC").is_err());
        assert!(board.add_connection("CB").is_err());
        // Board unchanged by the failed calls
        assert_eq!(board.to_spec_string(), "AB");
    }

    #[test]
    fn test_remove_connection() {
        let mut board = Plugboard::build("AB ID KC LW").unwrap();
        board.remove_connection('I').unwrap();
        assert_eq!(board.to_spec_string(), "AB KC LW");
    }

    #[test]
    fn test_remove_connection_is_idempotent() {
        let mut board = Plugboard::build("AB").unwrap();
        board.remove_connection('X').unwrap();
        board.remove_connection('B').unwrap();
        board.remove_connection('B').unwrap();
        assert!(board.is_empty());
        assert!(board.remove_connection('?').is_err());
    }

    #[test]
    fn test_invariants_after_mutation_sequence() {
        let mut board = Plugboard::build("AB CD EF").unwrap();
        board.remove_connection('C').unwrap();
        board.add_connection("CG").unwrap();
        board.add_connection("DH").unwrap();

        let mut seen = Vec::new();
        for c in 'A'..='Z' {
            let l = letter(c);
            let partner = board.swap(l);
            if partner != l {
                assert_eq!(board.swap(partner), l);
                assert!(!seen.contains(&l));
                seen.push(l);
            }
        }
        assert_eq!(seen.len(), board.len() * 2);
    }
}
