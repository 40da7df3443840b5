use axum::{
    Router,
    http::{HeaderValue, Method, header},
    middleware,
    routing::{get, patch},
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::{Config, ServerConfig};
use crate::db::Store;
use crate::services::{SeaOrmSeriesService, SeriesService};

mod error;
mod observability;
pub mod series;
mod system;
mod types;
mod validation;

pub use error::ApiError;
pub use types::*;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,

    series: Arc<dyn SeriesService>,

    pub start_time: std::time::Instant,

    pub prometheus_handle: Option<PrometheusHandle>,
}

impl AppState {
    /// Builds handler state around an already constructed series service.
    #[must_use]
    pub fn new(
        config: Config,
        series: Arc<dyn SeriesService>,
        prometheus_handle: Option<PrometheusHandle>,
    ) -> Arc<Self> {
        Arc::new(Self {
            config: Arc::new(config),
            series,
            start_time: std::time::Instant::now(),
            prometheus_handle,
        })
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn series(&self) -> &Arc<dyn SeriesService> {
        &self.series
    }
}

/// Connects the store described by `config` and wires the `SeaORM`-backed
/// series service into a fresh [`AppState`].
pub async fn create_app_state(
    config: Config,
    prometheus_handle: Option<PrometheusHandle>,
) -> anyhow::Result<Arc<AppState>> {
    let store = Store::with_pool_options(
        &config.general.database_path,
        config.general.max_db_connections,
        config.general.min_db_connections,
    )
    .await?;

    let series = Arc::new(SeaOrmSeriesService::new(store));
    Ok(AppState::new(config, series, prometheus_handle))
}

pub fn router(state: Arc<AppState>) -> Router {
    let cors_layer = build_cors_layer(&state.config().server);

    let api_router = Router::new()
        .route(
            "/series",
            get(series::list_series).post(series::create_series),
        )
        .route(
            "/series/{id}",
            get(series::get_series)
                .put(series::update_series)
                .delete(series::delete_series),
        )
        .route("/series/{id}/status", patch(series::update_status))
        .route("/series/{id}/episode", patch(series::increment_episode))
        .route("/series/{id}/upvote", patch(series::upvote))
        .route("/series/{id}/downvote", patch(series::downvote))
        .route("/system/status", get(system::get_status))
        .route("/system/health/live", get(system::health_live))
        .route("/system/health/ready", get(system::health_ready))
        .route("/metrics", get(observability::get_metrics))
        // Runs after routing so the matched route template is available
        .route_layer(middleware::from_fn(observability::logging_middleware))
        .with_state(state);

    Router::new()
        .nest("/api", api_router)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
}

fn build_cors_layer(server: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::ORIGIN, header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_LENGTH])
        .max_age(Duration::from_secs(server.cors_max_age_secs));

    // Credentials cannot be combined with a wildcard origin
    if server.cors_allowed_origins.iter().any(|o| o == "*") {
        layer.allow_origin(Any)
    } else {
        let origins: Vec<HeaderValue> = server
            .cors_allowed_origins
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        layer.allow_origin(origins).allow_credentials(true)
    }
}
