//! Caesar-style alphabet rotation, used both as a standalone utility and by
//! the rotor to realign its wiring and notch for a ring setting.

use crate::types::{EnigmaError, Letter};

/// Returns the letter `n` positions forward in the alphabet, wrapping
/// modulo 26. Case is normalized to uppercase.
///
/// # Returns
///
/// * `Ok(char)` with the shifted letter.
/// * `Err(EnigmaError::InvalidInput)` if `c` is not an alphabet letter.
pub fn shift_letter(c: char, n: i32) -> Result<char, EnigmaError> {
    Ok(Letter::from_char(c)?.offset_by(n).char())
}

/// Applies [`shift_letter`] to every alphabetic character of `text`,
/// uppercasing it; all other characters pass through in place.
pub fn shift_string(text: &str, n: i32) -> String {
    text.chars()
        .map(|c| match Letter::from_char(c) {
            Ok(letter) => letter.offset_by(n).char(),
            Err(_) => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_letter_basic() {
        assert_eq!(shift_letter('A', 3).unwrap(), 'D');
        assert_eq!(shift_letter('z', 1).unwrap(), 'A');
        assert_eq!(shift_letter('C', -3).unwrap(), 'Z');
    }

    #[test]
    fn test_shift_letter_rejects_non_letters() {
        assert!(shift_letter(' ', 3).is_err());
        assert!(shift_letter('7', 3).is_err());
    }

    #[test]
    fn test_shift_letter_round_trip() {
        for c in 'A'..='Z' {
            for n in [-27, -1, 0, 1, 13, 26, 55] {
                let shifted = shift_letter(c, n).unwrap();
                assert_eq!(shift_letter(shifted, -n).unwrap(), c);
            }
        }
    }

    #[test]
    fn test_shift_string_lowercase() {
        assert_eq!(shift_string("abcdstu", 2), "CDEFUVW");
    }

    #[test]
    fn test_shift_string_passes_non_letters_through() {
        assert_eq!(shift_string(" ?!@$ ?", 5), " ?!@$ ?");
        assert_eq!(shift_string("Test message! 1234", 7), "ALZA TLZZHNL! 1234");
    }
}
