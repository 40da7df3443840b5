use crate::entities::{prelude::*, series};
use crate::models::series::{self as model, NewSeries};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use tracing::info;

pub struct SeriesRepository {
    conn: DatabaseConnection,
}

impl SeriesRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    fn map_model(row: series::Model) -> model::Series {
        model::Series {
            id: row.id.into(),
            title: row.title,
            description: row.description,
            seasons: row.seasons,
            episodes: row.episodes,
            genre: row.genre,
            status: row.status,
            current_episode: row.current_episode,
            score: row.score,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }

    pub async fn list(&self) -> anyhow::Result<Vec<model::Series>> {
        let rows = Series::find()
            .filter(series::Column::DeletedAt.is_null())
            .order_by_asc(series::Column::Id)
            .all(&self.conn)
            .await?;

        Ok(rows.into_iter().map(Self::map_model).collect())
    }

    pub async fn count(&self) -> anyhow::Result<u64> {
        let count = Series::find()
            .filter(series::Column::DeletedAt.is_null())
            .count(&self.conn)
            .await?;
        Ok(count)
    }

    pub async fn create(&self, draft: &NewSeries) -> anyhow::Result<model::Series> {
        let now = chrono::Utc::now().to_rfc3339();

        let active_model = series::ActiveModel {
            title: Set(draft.title.clone()),
            description: Set(draft.description.clone()),
            seasons: Set(draft.seasons),
            episodes: Set(draft.episodes),
            genre: Set(draft.genre.clone()),
            status: Set(draft.status.clone()),
            current_episode: Set(draft.current_episode),
            score: Set(draft.score),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            deleted_at: Set(None),
            ..Default::default()
        };

        let inserted = active_model.insert(&self.conn).await?;
        info!("Created series {}: {}", inserted.id, inserted.title);
        Ok(Self::map_model(inserted))
    }

    pub async fn get(&self, id: i32) -> anyhow::Result<Option<model::Series>> {
        let row = Series::find_by_id(id)
            .filter(series::Column::DeletedAt.is_null())
            .one(&self.conn)
            .await?;

        Ok(row.map(Self::map_model))
    }

    /// Overwrites every mutable column of a live row.
    ///
    /// Returns `None` when no live row has this id.
    pub async fn replace(&self, record: &model::Series) -> anyhow::Result<Option<model::Series>> {
        let id = record.id.value();
        let result = Series::update_many()
            .col_expr(series::Column::Title, Expr::value(record.title.clone()))
            .col_expr(
                series::Column::Description,
                Expr::value(record.description.clone()),
            )
            .col_expr(series::Column::Seasons, Expr::value(record.seasons))
            .col_expr(series::Column::Episodes, Expr::value(record.episodes))
            .col_expr(series::Column::Genre, Expr::value(record.genre.clone()))
            .col_expr(series::Column::Status, Expr::value(record.status.clone()))
            .col_expr(
                series::Column::CurrentEpisode,
                Expr::value(record.current_episode),
            )
            .col_expr(series::Column::Score, Expr::value(record.score))
            .col_expr(
                series::Column::UpdatedAt,
                Expr::value(chrono::Utc::now().to_rfc3339()),
            )
            .filter(series::Column::Id.eq(id))
            .filter(series::Column::DeletedAt.is_null())
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }
        self.get(id).await
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: &str,
    ) -> anyhow::Result<Option<model::Series>> {
        let result = Series::update_many()
            .col_expr(series::Column::Status, Expr::value(status))
            .col_expr(
                series::Column::UpdatedAt,
                Expr::value(chrono::Utc::now().to_rfc3339()),
            )
            .filter(series::Column::Id.eq(id))
            .filter(series::Column::DeletedAt.is_null())
            .exec(&self.conn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(None);
        }

        info!("Updated status for series {}: {}", id, status);
        self.get(id).await
    }

    /// Marks a live row as deleted. Returns whether a row was affected.
    pub async fn soft_delete(&self, id: i32) -> anyhow::Result<bool> {
        let result = Series::update_many()
            .col_expr(
                series::Column::DeletedAt,
                Expr::value(chrono::Utc::now().to_rfc3339()),
            )
            .filter(series::Column::Id.eq(id))
            .filter(series::Column::DeletedAt.is_null())
            .exec(&self.conn)
            .await?;

        let removed = result.rows_affected > 0;
        if removed {
            info!("Soft-deleted series with ID: {}", id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Store;

    async fn repo() -> SeriesRepository {
        let store = Store::with_pool_options("sqlite::memory:", 1, 1)
            .await
            .expect("in-memory store");
        SeriesRepository::new(store.conn)
    }

    fn draft(title: &str, episodes: i32) -> NewSeries {
        NewSeries {
            title: title.to_string(),
            description: String::new(),
            seasons: 1,
            episodes,
            genre: String::new(),
            status: crate::domain::DEFAULT_STATUS.to_string(),
            current_episode: 0,
            score: 0,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trips() {
        let repo = repo().await;
        let created = repo.create(&draft("Mushishi", 26)).await.unwrap();

        let fetched = repo.get(created.id.value()).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.status, "To Watch");
        assert_eq!(fetched.created_at, fetched.updated_at);
    }

    #[tokio::test]
    async fn test_soft_deleted_rows_are_hidden() {
        let repo = repo().await;
        let kept = repo.create(&draft("Kept", 12)).await.unwrap();
        let gone = repo.create(&draft("Gone", 12)).await.unwrap();

        assert!(repo.soft_delete(gone.id.value()).await.unwrap());
        assert!(!repo.soft_delete(gone.id.value()).await.unwrap());

        assert!(repo.get(gone.id.value()).await.unwrap().is_none());
        assert!(
            repo.update_status(gone.id.value(), "Dropped")
                .await
                .unwrap()
                .is_none()
        );

        let listed = repo.list().await.unwrap();
        assert_eq!(listed, vec![kept]);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_replace_missing_row_returns_none() {
        let repo = repo().await;
        let mut record = repo.create(&draft("Temp", 3)).await.unwrap();
        record.id = 999.into();

        assert!(repo.replace(&record).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_overwrites_fields() {
        let repo = repo().await;
        let mut record = repo.create(&draft("Before", 10)).await.unwrap();
        record.title = "After".to_string();
        record.current_episode = 4;
        record.score = -2;

        let updated = repo.replace(&record).await.unwrap().unwrap();
        assert_eq!(updated.title, "After");
        assert_eq!(updated.current_episode, 4);
        assert_eq!(updated.score, -2);
        assert_eq!(updated.created_at, record.created_at);
    }
}
