//! Review-form code (Value Object)
//!
//! The public lookup key for a review form, distinct from its internal id.
//! Codes are short enough to share in a chat message and drawn from an
//! alphabet without visually confusable characters (`0/O/o`, `1/l/I/i`).
//!
//! Generation is random and does not consult storage; the caller checks the
//! candidate against persisted codes and retries on collision.

use crate::core::error::DomainError;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fixed code length, in characters.
pub const CODE_LENGTH: usize = 8;

/// Characters a code may contain. No `0`, `O`, `o`, `1`, `l`, `I`, `i`.
const ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghjkmnpqrstuvwxyz23456789";

/// A review form's public lookup code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FormCode(String);

impl FormCode {
    /// Generate a random candidate code.
    pub fn random() -> Self {
        Self::random_from(&mut rand::rng())
    }

    /// Generate a candidate code from the given source of randomness.
    ///
    /// Seeded generators make collision tests reproducible.
    pub fn random_from<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let code = (0..CODE_LENGTH)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        Self(code)
    }

    /// Parse a code received from outside, validating length and alphabet.
    pub fn parse(code: impl Into<String>) -> Result<Self, DomainError> {
        let code = code.into();
        if code.chars().count() != CODE_LENGTH {
            return Err(DomainError::validation(format!(
                "form code must be exactly {CODE_LENGTH} characters"
            )));
        }
        if !code.bytes().all(|b| ALPHABET.contains(&b)) {
            return Err(DomainError::validation(
                "form code contains characters outside the code alphabet",
            ));
        }
        Ok(Self(code))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FormCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
