//! `SeaORM` implementation of the `SeriesService` trait.

use crate::db::Store;
use crate::domain::SeriesId;
use crate::models::series::{NewSeries, Series};
use crate::services::series_service::{SeriesError, SeriesService};
use tracing::debug;

pub struct SeaOrmSeriesService {
    store: Store,
}

impl SeaOrmSeriesService {
    #[must_use]
    pub const fn new(store: Store) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl SeriesService for SeaOrmSeriesService {
    async fn list(&self) -> Result<Vec<Series>, SeriesError> {
        Ok(self.store.list_series().await?)
    }

    async fn create(&self, draft: NewSeries) -> Result<Series, SeriesError> {
        Ok(self.store.add_series(&draft).await?)
    }

    async fn get(&self, id: SeriesId) -> Result<Series, SeriesError> {
        self.store
            .get_series(id.value())
            .await?
            .ok_or(SeriesError::NotFound(id))
    }

    async fn replace(&self, series: Series) -> Result<Series, SeriesError> {
        let id = series.id;
        let updated = self
            .store
            .replace_series(&series)
            .await?
            .ok_or(SeriesError::NotFound(id))?;

        debug!(
            series_id = %id,
            current_episode = updated.current_episode,
            score = updated.score,
            "Series replaced"
        );
        Ok(updated)
    }

    async fn update_status(&self, id: SeriesId, status: &str) -> Result<Series, SeriesError> {
        self.store
            .update_series_status(id.value(), status)
            .await?
            .ok_or(SeriesError::NotFound(id))
    }

    async fn delete(&self, id: SeriesId) -> Result<(), SeriesError> {
        let removed = self.store.remove_series(id.value()).await?;
        if !removed {
            debug!(series_id = %id, "Delete requested for missing series");
        }
        Ok(())
    }

    async fn count(&self) -> Result<u64, SeriesError> {
        Ok(self.store.count_series().await?)
    }

    async fn ping(&self) -> Result<(), SeriesError> {
        Ok(self.store.ping().await?)
    }
}
