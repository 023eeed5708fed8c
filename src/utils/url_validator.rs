//! Long URL validation.
//!
//! URLs are checked, not rewritten: the stored value is exactly what the
//! caller submitted.

use url::Url;

/// Errors that can occur while validating a long URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("URL must not contain surrounding whitespace")]
    SurroundingWhitespace,

    #[error("URL must not contain control characters")]
    ControlCharacter,

    #[error("invalid URL: {0}")]
    InvalidFormat(String),
}

/// Checks that `input` is a well-formed absolute URI.
///
/// Any scheme is accepted as long as the URL parses without a base. Special
/// schemes (`http`, `https`, `ftp`, ...) are rejected by the parser when the
/// host is missing.
///
/// ASCII control characters are rejected up front. The parser strips or
/// escapes them, but the raw input is what gets stored and later sent back
/// in the `Location` header, which cannot carry them.
///
/// # Errors
///
/// Returns [`UrlValidationError`] describing the first rule violated.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_long_url("https://example.com/a").is_ok());
/// assert!(validate_long_url("not a url").is_err());
/// assert!(validate_long_url("/relative/path").is_err());
/// ```
pub fn validate_long_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim() != input {
        return Err(UrlValidationError::SurroundingWhitespace);
    }

    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlValidationError::ControlCharacter);
    }

    Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_https_url() {
        assert!(validate_long_url("https://example.com/a").is_ok());
    }

    #[test]
    fn test_accepts_query_and_fragment() {
        assert!(validate_long_url("http://example.com/path?q=1&r=2#frag").is_ok());
    }

    #[test]
    fn test_accepts_non_http_absolute_uri() {
        assert!(validate_long_url("mailto:someone@example.com").is_ok());
        assert!(validate_long_url("ftp://files.example.com/pub").is_ok());
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(matches!(
            validate_long_url("not a url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_relative_path() {
        assert!(matches!(
            validate_long_url("/relative/path"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            validate_long_url(""),
            Err(UrlValidationError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_rejects_embedded_control_characters() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://example.com/a\rb",
            "https://example.com/\u{7f}",
            "https://example.com/\u{1}x",
        ] {
            assert_eq!(
                validate_long_url(input),
                Err(UrlValidationError::ControlCharacter),
                "{input:?}"
            );
        }
    }

    #[test]
    fn test_accepts_non_ascii() {
        assert!(validate_long_url("https://example.com/caf\u{e9}").is_ok());
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert_eq!(
            validate_long_url(" https://example.com"),
            Err(UrlValidationError::SurroundingWhitespace)
        );
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(validate_long_url("http://").is_err());
    }
}
