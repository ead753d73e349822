use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "mitra_status")]
#[serde(rename_all = "snake_case")]
pub enum MitraStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "terverifikasi")]
    Terverifikasi,
    #[sea_orm(string_value = "ditolak")]
    Ditolak,
}

impl std::fmt::Display for MitraStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MitraStatus::Pending => write!(f, "pending"),
            MitraStatus::Terverifikasi => write!(f, "terverifikasi"),
            MitraStatus::Ditolak => write!(f, "ditolak"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "mitra")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nama_toko: String,
    pub email: String,
    pub password_hash: String,
    pub alamat: String,
    pub phone_number: String,
    pub description: Option<String>,
    pub status: MitraStatus,
    pub saldo: i64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
