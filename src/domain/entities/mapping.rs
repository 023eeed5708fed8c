//! URL mapping entity representing a short code bound to a long URL.

use chrono::{DateTime, Duration, Utc};

/// How long a mapping is advertised as valid after creation.
///
/// Expiry is metadata only: nothing reads it back on redirect and no
/// background job purges expired rows.
pub const RETENTION_DAYS: i64 = 5;

/// Returns the retention window applied to every new mapping.
pub fn retention() -> Duration {
    Duration::days(RETENTION_DAYS)
}

/// A persisted short code → long URL mapping.
///
/// Mappings are created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Builds a stored mapping from its creation input and the id assigned by the store.
    pub fn from_new(id: i64, new_mapping: NewUrlMapping) -> Self {
        Self {
            id,
            code: new_mapping.code,
            long_url: new_mapping.long_url,
            short_url: new_mapping.short_url,
            created_at: new_mapping.created_at,
            expires_at: new_mapping.expires_at,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub code: String,
    pub long_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl NewUrlMapping {
    /// Derives `short_url` and `expires_at` from the base URL and creation time.
    ///
    /// `base_url` is used verbatim as a prefix, so it is expected to end with `/`.
    pub fn new(code: String, long_url: String, base_url: &str, created_at: DateTime<Utc>) -> Self {
        let short_url = format!("{base_url}{code}");

        Self {
            code,
            long_url,
            short_url,
            created_at,
            expires_at: created_at + retention(),
        }
    }
}
