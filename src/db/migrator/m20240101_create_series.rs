use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Series::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Series::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Series::Title)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Series::Description)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Series::Seasons)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Series::Episodes)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Series::Genre)
                            .string()
                            .not_null()
                            .default(""),
                    )
                    .col(
                        ColumnDef::new(Series::Status)
                            .string()
                            .not_null()
                            .default("To Watch"),
                    )
                    .col(
                        ColumnDef::new(Series::CurrentEpisode)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(Series::Score)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Series::CreatedAt).string().not_null())
                    .col(ColumnDef::new(Series::UpdatedAt).string().not_null())
                    .col(ColumnDef::new(Series::DeletedAt).string().null())
                    .to_owned(),
            )
            .await?;

        // Every read filters on the tombstone
        manager
            .create_index(
                Index::create()
                    .name("idx_series_deleted_at")
                    .table(Series::Table)
                    .col(Series::DeletedAt)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Series::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Series {
    Table,
    Id,
    Title,
    Description,
    Seasons,
    Episodes,
    Genre,
    Status,
    CurrentEpisode,
    Score,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
