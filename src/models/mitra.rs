use crate::entities::{MitraStatus, mitra_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    #[schema(example = "Toko Berkah Jaya")]
    pub nama_toko: String,
    #[schema(example = "berkah@example.com")]
    pub email: String,
    #[schema(example = "rahasia123")]
    pub password: String,
    #[schema(example = "rahasia123")]
    pub confirm_password: String,
    #[schema(example = "Jl. Merdeka No. 10, Bandung")]
    pub alamat: String,
    #[schema(example = "081234567890")]
    pub phone_number: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[schema(example = "berkah@example.com")]
    pub email: String,
    #[schema(example = "rahasia123")]
    pub password: String,
}

/// Email is deliberately absent: it identifies the account and can never be
/// changed through this endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    #[schema(example = "Toko Berkah Jaya")]
    pub nama_toko: Option<String>,
    #[schema(example = "Jl. Merdeka No. 10, Bandung")]
    pub alamat: Option<String>,
    #[schema(example = "081234567890")]
    pub phone_number: Option<String>,
    #[schema(example = "Melayani service AC dan kulkas area Bandung")]
    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MitraResponse {
    pub id: i64,
    pub nama_toko: String,
    pub email: String,
    pub alamat: String,
    pub phone_number: String,
    pub description: Option<String>,
    pub status: MitraStatus,
    pub saldo: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<mitra_entity::Model> for MitraResponse {
    fn from(m: mitra_entity::Model) -> Self {
        Self {
            id: m.id,
            nama_toko: m.nama_toko,
            email: m.email,
            alamat: m.alamat,
            phone_number: m.phone_number,
            description: m.description,
            status: m.status,
            saldo: m.saldo,
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub mitra: MitraResponse,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_in: i64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerificationStatusResponse {
    pub status: MitraStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub mitra: MitraResponse,
    pub incoming_orders: i64,
    pub active_orders: i64,
}
