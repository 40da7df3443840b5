use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "series")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: String,
    pub seasons: i32,
    pub episodes: i32,
    pub genre: String,
    pub status: String,
    pub current_episode: i32,
    pub score: i32,
    pub created_at: String,
    pub updated_at: String,
    /// Set when the row is soft-deleted; such rows are invisible to every query.
    pub deleted_at: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
