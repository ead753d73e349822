use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "chat_party")]
#[serde(rename_all = "snake_case")]
pub enum ChatParty {
    #[sea_orm(string_value = "mitra")]
    Mitra,
    #[sea_orm(string_value = "admin")]
    Admin,
}

impl std::fmt::Display for ChatParty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatParty::Mitra => write!(f, "mitra"),
            ChatParty::Admin => write!(f, "admin"),
        }
    }
}

/// Append-only support messages. Parties are addressed by mitra email or the
/// literal "admin", so the id columns are text rather than foreign keys.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "chat")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub sender_id: String,
    pub sender_type: ChatParty,
    pub receiver_id: String,
    pub receiver_type: ChatParty,
    pub message: String,
    pub read_by_sender: bool,
    pub read_by_receiver: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
