//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Returns `308 Permanent Redirect` with the stored URL in `Location`.
///
/// # Errors
///
/// Returns 400 Bad Request with `No URL with code: <code>` if the code is unknown.
/// Returns 500 on storage failures.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let long_url = state.redirect_resolver.resolve(&code).await?;

    Ok(Redirect::permanent(&long_url))
}
