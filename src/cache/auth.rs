//! Authentication Gate
//!
//! Checks caller tokens against the secret a cache was built with.

use tracing::warn;

use crate::error::{CacheError, Result};

/// Holds the cache secret and validates tokens against it.
#[derive(Clone)]
pub struct AuthGate {
    secret: String,
}

impl AuthGate {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Fails with `Unauthorized` unless `token` equals the secret.
    ///
    /// Plain string equality; the comparison is not constant-time.
    pub fn authenticate(&self, token: &str) -> Result<()> {
        if token == self.secret {
            Ok(())
        } else {
            warn!("Rejected cache access with an invalid token");
            Err(CacheError::Unauthorized)
        }
    }
}

// Keep the secret out of debug output.
impl std::fmt::Debug for AuthGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGate").field("secret", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_token() {
        let gate = AuthGate::new("abc");
        assert!(gate.authenticate("abc").is_ok());
    }

    #[test]
    fn test_wrong_token() {
        let gate = AuthGate::new("abc");
        assert_eq!(gate.authenticate("abd"), Err(CacheError::Unauthorized));
        assert_eq!(gate.authenticate(""), Err(CacheError::Unauthorized));
        assert_eq!(gate.authenticate("abc "), Err(CacheError::Unauthorized));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let gate = AuthGate::new("super-secret");
        let rendered = format!("{:?}", gate);
        assert!(!rendered.contains("super-secret"));
    }
}
