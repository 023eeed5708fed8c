//! Handler for link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for one long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "longUrl": "https://example.com/a" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "newUrl": "http://localhost:5000/Xyz12_abC-9q",
///   "expires": "2024-01-20 10:30:05",
///   "db_id": "42"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request for a malformed body, an invalid URL, or a code
/// that is already in use. Returns 500 on storage or generation failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let mapping = state.shorten_service.shorten(&payload.long_url).await?;

    Ok((StatusCode::CREATED, Json(ShortenResponse::from(&mapping))))
}
