//! Secret Module
//!
//! Random data plus its digest, used as the shared cache access token.

use crate::error::KeyError;
use crate::keys::{digest, random_string, verify, CharSet, HashAlgorithm};

// == Secret ==
/// Generates random data and derives a hex digest from it.
#[derive(Debug, Clone)]
pub struct Secret {
    algorithm: HashAlgorithm,
    random_data: Option<String>,
    hash: Option<String>,
}

impl Secret {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            random_data: None,
            hash: None,
        }
    }

    /// Generates fresh random data of `bit_length` bits over all characters.
    ///
    /// Any previously derived hash is discarded.
    pub fn generate_random_data(&mut self, bit_length: usize) -> Result<&str, KeyError> {
        self.hash = None;
        let data = self
            .random_data
            .insert(random_string(bit_length, CharSet::All)?);
        Ok(data.as_str())
    }

    /// Hashes the generated random data.
    pub fn create_hash(&mut self) -> Result<&str, KeyError> {
        let data = self
            .random_data
            .as_deref()
            .ok_or(KeyError::MissingRandomData)?;
        let hash = self.hash.insert(digest(self.algorithm, data));
        Ok(hash.as_str())
    }

    /// Checks whether `input` hashes to `stored_hash` with this secret's algorithm.
    pub fn verify_hash(&self, input: impl AsRef<[u8]>, stored_hash: &str) -> bool {
        verify(self.algorithm, input, stored_hash)
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    /// Generates random data and returns its digest as a token.
    pub fn issue_token(algorithm: HashAlgorithm, bit_length: usize) -> Result<String, KeyError> {
        let mut secret = Self::new(algorithm);
        secret.generate_random_data(bit_length)?;
        Ok(secret.create_hash()?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_requires_random_data() {
        let mut secret = Secret::new(HashAlgorithm::Sha512);
        assert_eq!(secret.create_hash(), Err(KeyError::MissingRandomData));
    }

    #[test]
    fn test_generate_then_hash() {
        let mut secret = Secret::new(HashAlgorithm::Sha512);
        let data = secret.generate_random_data(512).unwrap().to_string();
        assert_eq!(data.len(), 64);

        let hash = secret.create_hash().unwrap().to_string();
        assert_eq!(hash.len(), 128);
        assert!(secret.verify_hash(&data, &hash));
        assert_eq!(secret.hash(), Some(hash.as_str()));
    }

    #[test]
    fn test_regenerating_discards_hash() {
        let mut secret = Secret::new(HashAlgorithm::Sha256);
        secret.generate_random_data(64).unwrap();
        secret.create_hash().unwrap();

        secret.generate_random_data(64).unwrap();
        assert!(secret.hash().is_none());
    }

    #[test]
    fn test_issue_token() {
        let token = Secret::issue_token(HashAlgorithm::Sha256, 256).unwrap();
        assert_eq!(token.len(), 64);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));

        let other = Secret::issue_token(HashAlgorithm::Sha256, 256).unwrap();
        assert_ne!(token, other);
    }

    #[test]
    fn test_issue_token_rejects_zero_bits() {
        assert_eq!(
            Secret::issue_token(HashAlgorithm::Sha512, 0),
            Err(KeyError::InvalidBitLength)
        );
    }
}
