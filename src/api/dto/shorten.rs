//! DTOs for the link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::UrlMapping;

/// Format of the `expires` field, e.g. `2024-03-03 23:30:00`.
pub const EXPIRES_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL. Checked for absolute-URI syntax by the shortening service.
    #[serde(rename = "longUrl")]
    #[validate(length(min = 1, message = "longUrl must not be empty"))]
    pub long_url: String,
}

/// Response for a created short link.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    #[serde(rename = "newUrl")]
    pub new_url: String,
    /// Advisory expiry time in UTC.
    pub expires: String,
    pub db_id: String,
}

impl From<&UrlMapping> for ShortenResponse {
    fn from(mapping: &UrlMapping) -> Self {
        Self {
            new_url: mapping.short_url.clone(),
            expires: mapping.expires_at.format(EXPIRES_FORMAT).to_string(),
            db_id: mapping.id.to_string(),
        }
    }
}
