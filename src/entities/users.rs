use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;

/// Requester accounts, written by the consumer side of the platform.
/// This service only reads them to display who placed an order.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nama: String,
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
