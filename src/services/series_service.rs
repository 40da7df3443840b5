//! Domain service for series persistence.
//!
//! The API layer only ever talks to a [`SeriesService`] handed to it at
//! construction time, so handlers can be exercised against any backing
//! store.

use crate::domain::SeriesId;
use crate::models::series::{NewSeries, Series};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeriesError {
    #[error("Series {0} not found")]
    NotFound(SeriesId),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for SeriesError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(err.to_string())
    }
}

/// Durable mapping from [`SeriesId`] to [`Series`] with soft-delete semantics.
///
/// Deleted records are invisible to every operation.
///
/// # Examples
///
/// ```rust,ignore
/// use series_tracker::services::{SeriesError, SeriesService};
/// use series_tracker::domain::SeriesId;
/// use std::sync::Arc;
///
/// async fn example(service: Arc<dyn SeriesService>) -> Result<(), SeriesError> {
///     let series = service.get(SeriesId::new(1)).await?;
///     println!("{} is at episode {}", series.title, series.current_episode);
///     Ok(())
/// }
/// ```
#[async_trait::async_trait]
pub trait SeriesService: Send + Sync {
    /// Lists every live series in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Database`] on storage failures.
    async fn list(&self) -> Result<Vec<Series>, SeriesError>;

    /// Persists a new series and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Database`] on storage failures.
    async fn create(&self, draft: NewSeries) -> Result<Series, SeriesError>;

    /// # Errors
    ///
    /// - Returns [`SeriesError::NotFound`] if no live series has this id
    /// - Returns [`SeriesError::Database`] on storage failures
    async fn get(&self, id: SeriesId) -> Result<Series, SeriesError>;

    /// Overwrites all mutable fields of an existing series.
    ///
    /// # Errors
    ///
    /// - Returns [`SeriesError::NotFound`] if no live series has this id
    /// - Returns [`SeriesError::Database`] on storage failures
    async fn replace(&self, series: Series) -> Result<Series, SeriesError>;

    /// Updates only the status column.
    ///
    /// # Errors
    ///
    /// - Returns [`SeriesError::NotFound`] if no live series has this id
    /// - Returns [`SeriesError::Database`] on storage failures
    async fn update_status(&self, id: SeriesId, status: &str) -> Result<Series, SeriesError>;

    /// Soft-deletes a series. Deleting an unknown or already deleted id
    /// succeeds without effect.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Database`] on storage failures.
    async fn delete(&self, id: SeriesId) -> Result<(), SeriesError>;

    /// Number of live series.
    ///
    /// # Errors
    ///
    /// Returns [`SeriesError::Database`] on storage failures.
    async fn count(&self) -> Result<u64, SeriesError>;

    /// # Errors
    ///
    /// Returns [`SeriesError::Database`] if the store cannot be reached.
    async fn ping(&self) -> Result<(), SeriesError>;
}
