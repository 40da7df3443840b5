//! Series endpoints.
//!
//! Every mutating handler follows the same shape: parse the id, fetch the
//! live record (404 short-circuits before any write), apply one rule,
//! persist, and respond with the resulting record.

use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
    http::StatusCode,
};
use std::sync::Arc;
use tracing::debug;

use super::validation::{parse_json_body, parse_series_id};
use super::{ApiError, AppState, MessageBody};
use crate::models::series::{Series, SeriesPayload, StatusPayload};

/// Fetches a series, lets `apply` mutate it, and persists it when `apply`
/// reports a change.
async fn fetch_apply_save<F>(state: &AppState, raw_id: &str, apply: F) -> Result<Series, ApiError>
where
    F: FnOnce(&mut Series) -> bool,
{
    let id = parse_series_id(raw_id)?;
    let mut series = state.series().get(id).await?;

    if !apply(&mut series) {
        return Ok(series);
    }

    Ok(state.series().replace(series).await?)
}

/// `GET /api/series`
pub async fn list_series(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Series>>, ApiError> {
    let series = state.series().list().await?;
    Ok(Json(series))
}

/// `POST /api/series`
pub async fn create_series(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<Series>), ApiError> {
    let payload: SeriesPayload = parse_json_body(&body?)?;
    let draft = payload.into_new_series();
    draft
        .check_progress()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let created = state.series().create(draft).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/series/{id}`
pub async fn get_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Series>, ApiError> {
    let id = parse_series_id(&id)?;
    let series = state.series().get(id).await?;
    Ok(Json(series))
}

/// `PUT /api/series/{id}`
///
/// The body is decoded only once the target exists, and only the fields it
/// carries overwrite the stored values.
pub async fn update_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Series>, ApiError> {
    let id = parse_series_id(&id)?;
    let mut series = state.series().get(id).await?;

    let payload: SeriesPayload = parse_json_body(&body?)?;
    payload.apply_to(&mut series);
    series
        .check_progress()
        .map_err(|e| ApiError::validation(e.to_string()))?;

    let updated = state.series().replace(series).await?;
    Ok(Json(updated))
}

/// `DELETE /api/series/{id}`
///
/// Succeeds for ids that are already gone.
pub async fn delete_series(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    let id = parse_series_id(&id)?;
    state.series().delete(id).await?;
    Ok(Json(MessageBody::new("Series deleted successfully")))
}

/// `PATCH /api/series/{id}/status`
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Series>, ApiError> {
    let id = parse_series_id(&id)?;
    let payload: StatusPayload = parse_json_body(&body?)?;

    let updated = state.series().update_status(id, &payload.status).await?;
    Ok(Json(updated))
}

/// `PATCH /api/series/{id}/episode`
///
/// At the last episode the record is returned unchanged.
pub async fn increment_episode(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Series>, ApiError> {
    let series = fetch_apply_save(&state, &id, |series| {
        let advanced = series.advance_episode();
        if !advanced {
            debug!(series_id = %series.id, "Episode already at ceiling");
        }
        advanced
    })
    .await?;
    Ok(Json(series))
}

/// `PATCH /api/series/{id}/upvote`
pub async fn upvote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Series>, ApiError> {
    let series = fetch_apply_save(&state, &id, |series| {
        series.upvote();
        true
    })
    .await?;
    Ok(Json(series))
}

/// `PATCH /api/series/{id}/downvote`
pub async fn downvote(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Series>, ApiError> {
    let series = fetch_apply_save(&state, &id, |series| {
        series.downvote();
        true
    })
    .await?;
    Ok(Json(series))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::domain::SeriesId;
    use crate::models::series::NewSeries;
    use crate::services::{SeriesError, SeriesService};
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tower::ServiceExt;

    /// Counts every call and fails if one is made.
    #[derive(Default)]
    struct RecordingService {
        calls: AtomicUsize,
    }

    impl RecordingService {
        fn hit(&self) -> SeriesError {
            self.calls.fetch_add(1, Ordering::SeqCst);
            SeriesError::Database("store should not be reached".into())
        }
    }

    #[async_trait::async_trait]
    impl SeriesService for RecordingService {
        async fn list(&self) -> Result<Vec<Series>, SeriesError> {
            Err(self.hit())
        }
        async fn create(&self, _draft: NewSeries) -> Result<Series, SeriesError> {
            Err(self.hit())
        }
        async fn get(&self, _id: SeriesId) -> Result<Series, SeriesError> {
            Err(self.hit())
        }
        async fn replace(&self, _series: Series) -> Result<Series, SeriesError> {
            Err(self.hit())
        }
        async fn update_status(&self, _id: SeriesId, _status: &str) -> Result<Series, SeriesError> {
            Err(self.hit())
        }
        async fn delete(&self, _id: SeriesId) -> Result<(), SeriesError> {
            Err(self.hit())
        }
        async fn count(&self) -> Result<u64, SeriesError> {
            Err(self.hit())
        }
        async fn ping(&self) -> Result<(), SeriesError> {
            Err(self.hit())
        }
    }

    #[tokio::test]
    async fn test_non_integer_id_never_reaches_store() {
        let service = Arc::new(RecordingService::default());
        let state = AppState::new(Config::default(), service.clone(), None);
        let app = crate::api::router(state);

        let requests = [
            ("GET", "/api/series/abc"),
            ("GET", "/api/series/%201"),
            ("PUT", "/api/series/abc"),
            ("DELETE", "/api/series/abc"),
            ("PATCH", "/api/series/abc/status"),
            ("PATCH", "/api/series/1.5/episode"),
            ("PATCH", "/api/series/x/upvote"),
            ("PATCH", "/api/series/x/downvote"),
        ];

        for (method, uri) in requests {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .body(Body::from(r#"{"status": "Watching"}"#))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{method} {uri}");
        }

        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_create_body_never_reaches_store() {
        let service = Arc::new(RecordingService::default());
        let state = AppState::new(Config::default(), service.clone(), None);
        let app = crate::api::router(state);

        for body in ["", "{", r#"{"episodes": "many"}"#, r#"{"episodes": 2, "current_episode": 3}"#] {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/api/series")
                        .header("Content-Type", "application/json")
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {body:?}");
        }

        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_oversized_body_is_json_error() {
        let service = Arc::new(RecordingService::default());
        let state = AppState::new(Config::default(), service.clone(), None);
        let app = crate::api::router(state);

        let body = serde_json::json!({
            "title": "Big",
            "description": "a".repeat(3 * 1024 * 1024),
        });

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/series")
                    .header("Content-Type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert!(json["error"].is_string());
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_storage_failure_is_json_500() {
        let service = Arc::new(RecordingService::default());
        let state = AppState::new(Config::default(), service.clone(), None);
        let app = crate::api::router(state);

        let requests = [
            ("GET", "/api/series", ""),
            ("POST", "/api/series", r#"{"title": "X"}"#),
            ("DELETE", "/api/series/1", ""),
        ];

        for (method, uri, body) in requests {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .method(method)
                        .uri(uri)
                        .body(Body::from(body))
                        .unwrap(),
                )
                .await
                .unwrap();

            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{method} {uri}"
            );
            let bytes = response.into_body().collect().await.unwrap().to_bytes();
            let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
            assert_eq!(json["error"], "store should not be reached");
        }

        assert_eq!(service.calls.load(Ordering::SeqCst), 3);
    }
}
