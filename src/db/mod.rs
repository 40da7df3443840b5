use crate::models::series::{NewSeries, Series};
use anyhow::Result;
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection, Statement};
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub mod migrator;
pub mod repositories;

#[derive(Clone)]
pub struct Store {
    pub conn: DatabaseConnection,
}

impl Store {
    pub async fn new(db_url: &str) -> Result<Self> {
        Self::with_pool_options(db_url, 5, 1).await
    }

    pub async fn with_pool_options(
        db_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self> {
        use sea_orm_migration::MigratorTrait;

        let path_str = db_url.trim_start_matches("sqlite:");
        if !path_str.starts_with(":memory:") {
            let path_str = path_str.split('?').next().unwrap_or(path_str);
            if let Some(parent) = Path::new(path_str).parent() {
                tokio::fs::create_dir_all(parent).await.ok();
            }
            if !Path::new(path_str).exists() {
                std::fs::File::create(path_str)?;
            }
        }

        let mut opt = ConnectOptions::new(db_url.to_string());
        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(10))
            .acquire_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .max_lifetime(Duration::from_secs(600))
            .sqlx_logging(false);

        let conn = Database::connect(opt).await?;

        migrator::Migrator::up(&conn, None).await?;

        info!(
            "Database connected & migrations applied (pool: {}-{})",
            min_connections, max_connections
        );

        Ok(Self { conn })
    }

    pub async fn ping(&self) -> Result<()> {
        let backend = self.conn.get_database_backend();
        self.conn
            .query_one(Statement::from_string(backend, "SELECT 1".to_string()))
            .await?;
        Ok(())
    }

    fn series_repo(&self) -> repositories::series::SeriesRepository {
        repositories::series::SeriesRepository::new(self.conn.clone())
    }

    pub async fn list_series(&self) -> Result<Vec<Series>> {
        self.series_repo().list().await
    }

    pub async fn count_series(&self) -> Result<u64> {
        self.series_repo().count().await
    }

    pub async fn add_series(&self, draft: &NewSeries) -> Result<Series> {
        self.series_repo().create(draft).await
    }

    pub async fn get_series(&self, id: i32) -> Result<Option<Series>> {
        self.series_repo().get(id).await
    }

    pub async fn replace_series(&self, record: &Series) -> Result<Option<Series>> {
        self.series_repo().replace(record).await
    }

    pub async fn update_series_status(&self, id: i32, status: &str) -> Result<Option<Series>> {
        self.series_repo().update_status(id, status).await
    }

    pub async fn remove_series(&self, id: i32) -> Result<bool> {
        self.series_repo().soft_delete(id).await
    }
}
