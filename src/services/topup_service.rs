use crate::entities::{PaymentMethod, TopupStatus, mitra_entity as mitra, topup_entity as topup};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::generate_topup_code;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set,
};

#[derive(Clone)]
pub struct TopupService {
    pool: DatabaseConnection,
}

impl TopupService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn get_saldo(&self, mitra_id: i64) -> AppResult<SaldoResponse> {
        let account = self.find_account(mitra_id).await?;

        Ok(SaldoResponse {
            saldo: account.saldo,
        })
    }

    /// Records a pending top-up request. Payment confirmation happens outside
    /// this service, so saldo is not touched here.
    pub async fn create_topup(
        &self,
        mitra_id: i64,
        req: CreateTopupRequest,
    ) -> AppResult<TopupResponse> {
        if req.nominal < MIN_TOPUP_NOMINAL {
            return Err(AppError::ValidationError(
                "Nominal minimal Rp 10.000".to_string(),
            ));
        }
        let payment_method: PaymentMethod = req
            .payment_method
            .parse()
            .map_err(|_| AppError::ValidationError("Metode pembayaran tidak valid".to_string()))?;

        self.find_account(mitra_id).await?;

        let model = topup::ActiveModel {
            mitra_id: Set(mitra_id),
            nominal: Set(req.nominal),
            payment_method: Set(payment_method),
            status: Set(TopupStatus::Pending),
            transaction_code: Set(generate_topup_code()),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!(
            "Mitra {mitra_id} created top-up {} for {} via {}",
            model.transaction_code,
            model.nominal,
            model.payment_method
        );

        Ok(model.into())
    }

    pub async fn get_topup_history(
        &self,
        mitra_id: i64,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<TopupResponse>> {
        let page = params.get_page();
        let limit = params.get_limit();
        let offset = params.get_offset();

        let base_query = topup::Entity::find().filter(topup::Column::MitraId.eq(mitra_id));

        let total = base_query.clone().count(&self.pool).await? as i64;
        let records = base_query
            .order_by_desc(topup::Column::CreatedAt)
            .limit(limit as u64)
            .offset(offset as u64)
            .all(&self.pool)
            .await?;

        let data = records.into_iter().map(TopupResponse::from).collect();
        Ok(PaginatedResponse::new(data, page, limit, total))
    }

    async fn find_account(&self, mitra_id: i64) -> AppResult<mitra::Model> {
        mitra::Entity::find_by_id(mitra_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Akun tidak ditemukan".to_string()))
    }
}
