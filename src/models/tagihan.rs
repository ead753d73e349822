use crate::entities::{TagihanStatus, layanan_entity, tagihan_entity, user_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LayananInfo {
    pub nama_layanan: String,
    pub description: Option<String>,
}

impl From<layanan_entity::Model> for LayananInfo {
    fn from(m: layanan_entity::Model) -> Self {
        Self {
            nama_layanan: m.nama_layanan,
            description: m.description,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PelangganInfo {
    pub nama: String,
    pub email: String,
}

impl From<user_entity::Model> for PelangganInfo {
    fn from(m: user_entity::Model) -> Self {
        Self {
            nama: m.nama,
            email: m.email,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TagihanResponse {
    pub id: i64,
    pub nominal: i64,
    pub status: TagihanStatus,
    pub order_date: DateTime<Utc>,
    pub completion_date: Option<DateTime<Utc>>,
    pub work_started_at: Option<DateTime<Utc>>,
    pub work_duration_seconds: Option<i64>,
    pub rating: Option<i32>,
    pub layanan: Option<LayananInfo>,
    pub pelanggan: Option<PelangganInfo>,
}

impl TagihanResponse {
    pub fn from_parts(
        m: tagihan_entity::Model,
        layanan: Option<LayananInfo>,
        pelanggan: Option<PelangganInfo>,
    ) -> Self {
        Self {
            id: m.id,
            nominal: m.nominal,
            status: m.status,
            order_date: m.order_date,
            completion_date: m.completion_date,
            work_started_at: m.work_started_at,
            work_duration_seconds: m.work_duration_seconds,
            rating: m.rating,
            layanan,
            pelanggan,
        }
    }
}

/// An order currently being worked on. `elapsed_seconds` is recomputed from
/// the persisted start instant on every request.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ActiveOrderResponse {
    pub id: i64,
    pub nominal: i64,
    pub status: TagihanStatus,
    pub work_started_at: DateTime<Utc>,
    pub elapsed_seconds: i64,
    pub layanan: Option<LayananInfo>,
    pub pelanggan: Option<PelangganInfo>,
}

/// Invoice summary returned when an order is completed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct FinishOrderResponse {
    pub tagihan_id: i64,
    pub nama_layanan: Option<String>,
    pub nama_pelanggan: Option<String>,
    pub work_duration_seconds: i64,
    pub nominal: i64,
    pub fee: i64,
    pub net: i64,
    /// True when saldo was insufficient: the balance is left untouched and
    /// the fee is carried over to billing instead.
    pub fee_deferred: bool,
    pub saldo: i64,
}
