use crate::entities::{TagihanStatus, mitra_entity as mitra, tagihan_entity as tagihan};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::format_indonesian_phone;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel,
    PaginatorTrait, QueryFilter, Set,
};

#[derive(Clone)]
pub struct MitraService {
    pool: DatabaseConnection,
}

impl MitraService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn get_profile(&self, mitra_id: i64) -> AppResult<MitraResponse> {
        let account = self.find_mitra(mitra_id).await?;
        Ok(MitraResponse::from(account))
    }

    pub async fn update_profile(
        &self,
        mitra_id: i64,
        request: UpdateProfileRequest,
    ) -> AppResult<MitraResponse> {
        if request.nama_toko.is_none()
            && request.alamat.is_none()
            && request.phone_number.is_none()
            && request.description.is_none()
        {
            return Err(AppError::ValidationError(
                "Tidak ada data yang diubah".to_string(),
            ));
        }

        let account = self.find_mitra(mitra_id).await?;
        let mut am = account.into_active_model();

        if let Some(nama_toko) = request.nama_toko {
            let nama_toko = nama_toko.trim().to_string();
            if nama_toko.is_empty() {
                return Err(AppError::ValidationError(
                    "Nama toko tidak boleh kosong".to_string(),
                ));
            }
            am.nama_toko = Set(nama_toko);
        }
        if let Some(alamat) = request.alamat {
            let alamat = alamat.trim().to_string();
            if alamat.is_empty() {
                return Err(AppError::ValidationError(
                    "Alamat tidak boleh kosong".to_string(),
                ));
            }
            am.alamat = Set(alamat);
        }
        if let Some(phone_number) = request.phone_number {
            am.phone_number = Set(format_indonesian_phone(phone_number.trim()));
        }
        if let Some(description) = request.description {
            let description = description.trim().to_string();
            // an empty description clears the field
            am.description = Set((!description.is_empty()).then_some(description));
        }
        am.updated_at = Set(Some(Utc::now()));

        let updated = am.update(&self.pool).await?;
        Ok(MitraResponse::from(updated))
    }

    pub async fn verification_status(
        &self,
        mitra_id: i64,
    ) -> AppResult<VerificationStatusResponse> {
        let account = self.find_mitra(mitra_id).await?;
        Ok(VerificationStatusResponse {
            status: account.status,
            created_at: account.created_at.unwrap_or_else(Utc::now),
            updated_at: account.updated_at.unwrap_or_else(Utc::now),
        })
    }

    pub async fn dashboard(&self, mitra_id: i64) -> AppResult<DashboardResponse> {
        let account = self.find_mitra(mitra_id).await?;

        let incoming_orders = tagihan::Entity::find()
            .filter(tagihan::Column::Status.eq(TagihanStatus::Pending))
            .filter(tagihan::Column::MitraId.is_null())
            .count(&self.pool)
            .await? as i64;

        let active_orders = tagihan::Entity::find()
            .filter(tagihan::Column::MitraId.eq(mitra_id))
            .filter(tagihan::Column::Status.eq(TagihanStatus::SedangDikerjakan))
            .count(&self.pool)
            .await? as i64;

        Ok(DashboardResponse {
            mitra: MitraResponse::from(account),
            incoming_orders,
            active_orders,
        })
    }

    async fn find_mitra(&self, mitra_id: i64) -> AppResult<mitra::Model> {
        mitra::Entity::find_by_id(mitra_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Akun tidak ditemukan".to_string()))
    }
}
