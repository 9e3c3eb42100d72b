//! Random String Generation
//!
//! Produces random strings over fixed character sets, sized by a bit length.

use rand::RngCore;

use crate::error::KeyError;

const NUMERIC: &str = "0123456789";
const ALPHA: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
const SPECIAL: &str = "@#$_&-+()/%{}";

// == Character Sets ==
/// Alphabet a random string is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharSet {
    Numeric,
    Alpha,
    Special,
    AlphaNumeric,
    AlphaSpecial,
    NumericSpecial,
    /// Digits, letters and special characters
    All,
}

impl CharSet {
    /// Characters in this set, in selection order.
    pub fn alphabet(self) -> String {
        match self {
            CharSet::Numeric => NUMERIC.to_string(),
            CharSet::Alpha => ALPHA.to_string(),
            CharSet::Special => SPECIAL.to_string(),
            CharSet::AlphaNumeric => [ALPHA, NUMERIC].concat(),
            CharSet::AlphaSpecial => [ALPHA, SPECIAL].concat(),
            CharSet::NumericSpecial => [NUMERIC, SPECIAL].concat(),
            CharSet::All => [NUMERIC, ALPHA, SPECIAL].concat(),
        }
    }
}

/// Generates a random string of `ceil(bit_length / 8)` characters.
///
/// Each character is picked by one byte from the thread-local CSPRNG, reduced
/// modulo the alphabet size.
pub fn random_string(bit_length: usize, charset: CharSet) -> Result<String, KeyError> {
    if bit_length == 0 {
        return Err(KeyError::InvalidBitLength);
    }

    let alphabet: Vec<char> = charset.alphabet().chars().collect();
    let mut bytes = vec![0u8; bit_length.div_ceil(8)];
    rand::thread_rng().fill_bytes(&mut bytes);

    Ok(bytes
        .iter()
        .map(|byte| alphabet[*byte as usize % alphabet.len()])
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_rounds_up_to_whole_bytes() {
        assert_eq!(random_string(8, CharSet::All).unwrap().len(), 1);
        assert_eq!(random_string(9, CharSet::All).unwrap().len(), 2);
        assert_eq!(random_string(512, CharSet::All).unwrap().len(), 64);
    }

    #[test]
    fn test_zero_bit_length_rejected() {
        assert_eq!(
            random_string(0, CharSet::Alpha),
            Err(KeyError::InvalidBitLength)
        );
    }

    #[test]
    fn test_characters_stay_in_alphabet() {
        for charset in [
            CharSet::Numeric,
            CharSet::Alpha,
            CharSet::Special,
            CharSet::AlphaNumeric,
            CharSet::AlphaSpecial,
            CharSet::NumericSpecial,
            CharSet::All,
        ] {
            let alphabet = charset.alphabet();
            let generated = random_string(1024, charset).unwrap();
            assert!(
                generated.chars().all(|c| alphabet.contains(c)),
                "{:?} produced a character outside its alphabet",
                charset
            );
        }
    }

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(CharSet::Numeric.alphabet().len(), 10);
        assert_eq!(CharSet::Alpha.alphabet().len(), 52);
        assert_eq!(CharSet::Special.alphabet().len(), 13);
        assert_eq!(CharSet::All.alphabet().len(), 75);
    }

    #[test]
    fn test_successive_strings_differ() {
        let a = random_string(512, CharSet::All).unwrap();
        let b = random_string(512, CharSet::All).unwrap();
        assert_ne!(a, b);
    }
}
