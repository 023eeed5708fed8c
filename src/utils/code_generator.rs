//! Short code generation.
//!
//! Codes are drawn from the operating system CSPRNG and encoded as URL-safe
//! base64 without padding.

use base64::Engine as _;
use thiserror::Error;

/// Length of random bytes before base64 encoding.
const CODE_LENGTH_BYTES: usize = 9;

/// The randomness source failed to produce bytes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("randomness source failed: {0}")]
pub struct CodeGenerationError(pub String);

/// Source of candidate short codes.
///
/// Codes are random, so accidental collisions are rare but possible; callers
/// must still check the store.
#[cfg_attr(test, mockall::automock)]
pub trait CodeGenerator: Send + Sync {
    /// Produces a new candidate code.
    ///
    /// # Errors
    ///
    /// Returns [`CodeGenerationError`] if the randomness source is unavailable.
    fn generate(&self) -> Result<String, CodeGenerationError>;
}

/// Generates 12-character codes over `[A-Za-z0-9_-]` from 72 random bits.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> Result<String, CodeGenerationError> {
        let mut buffer = [0u8; CODE_LENGTH_BYTES];

        getrandom::fill(&mut buffer).map_err(|e| CodeGenerationError(e.to_string()))?;

        Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_correct_length() {
        let code = RandomCodeGenerator.generate().unwrap();
        assert_eq!(code.len(), 12);
    }

    #[test]
    fn test_generate_code_url_safe_characters() {
        let code = RandomCodeGenerator.generate().unwrap();
        assert!(
            code.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn test_generate_code_no_padding() {
        let code = RandomCodeGenerator.generate().unwrap();
        assert!(!code.contains('='));
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let codes: HashSet<String> = (0..1000)
            .map(|_| RandomCodeGenerator.generate().unwrap())
            .collect();

        assert_eq!(codes.len(), 1000);
    }
}
