use crate::entities::{PaymentMethod, TopupStatus, topup_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Smallest top-up the product accepts, in rupiah.
pub const MIN_TOPUP_NOMINAL: i64 = 10_000;

/// `payment_method` arrives as a plain string so an unknown method gets the
/// product's own validation message instead of a deserializer error.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateTopupRequest {
    #[schema(example = 50000)]
    pub nominal: i64,
    #[schema(example = "bank_transfer")]
    pub payment_method: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopupResponse {
    pub id: i64,
    pub nominal: i64,
    pub payment_method: PaymentMethod,
    pub status: TopupStatus,
    pub transaction_code: String,
    pub created_at: DateTime<Utc>,
}

impl From<topup_entity::Model> for TopupResponse {
    fn from(m: topup_entity::Model) -> Self {
        Self {
            id: m.id,
            nominal: m.nominal,
            payment_method: m.payment_method,
            status: m.status,
            transaction_code: m.transaction_code,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SaldoResponse {
    pub saldo: i64,
}
