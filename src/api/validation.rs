use serde::de::DeserializeOwned;

use super::ApiError;
use crate::domain::SeriesId;

/// Parses a path segment into a [`SeriesId`].
///
/// Any integer is accepted; ids that do not exist surface later as 404.
pub fn parse_series_id(raw: &str) -> Result<SeriesId, ApiError> {
    raw.parse::<i32>()
        .map(SeriesId::new)
        .map_err(|_| ApiError::validation(format!("Invalid series ID: {}", raw)))
}

/// Decodes a JSON request body into `T`.
///
/// The body is accepted regardless of the declared content type.
pub fn parse_json_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::validation("Request body is empty"));
    }

    serde_json::from_slice(body)
        .map_err(|e| ApiError::validation(format!("Invalid request body: {}", e)))
}
