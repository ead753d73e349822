use crate::entities::{
    TagihanStatus, layanan_entity as layanan, mitra_entity as mitra, tagihan_entity as tagihan,
    user_entity as users,
};
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::{net_amount, platform_fee};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait, UpdateResult,
};
use std::collections::HashMap;

#[derive(Clone)]
pub struct TagihanService {
    pool: DatabaseConnection,
}

impl TagihanService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Unassigned pending orders, newest first. Visible to every mitra.
    pub async fn get_incoming_orders(&self) -> AppResult<Vec<TagihanResponse>> {
        let orders = tagihan::Entity::find()
            .filter(tagihan::Column::Status.eq(TagihanStatus::Pending))
            .filter(tagihan::Column::MitraId.is_null())
            .order_by_desc(tagihan::Column::OrderDate)
            .all(&self.pool)
            .await?;

        self.with_details(orders).await
    }

    /// Claims a pending order for the caller. The guarded update makes sure
    /// only one mitra wins when several accept at the same time.
    pub async fn accept_order(&self, mitra_id: i64, tagihan_id: i64) -> AppResult<TagihanResponse> {
        let update_result: UpdateResult = tagihan::Entity::update_many()
            .set(tagihan::ActiveModel {
                mitra_id: Set(Some(mitra_id)),
                status: Set(TagihanStatus::Diterima),
                updated_at: Set(Some(Utc::now())),
                ..Default::default()
            })
            .filter(tagihan::Column::Id.eq(tagihan_id))
            .filter(tagihan::Column::Status.eq(TagihanStatus::Pending))
            .filter(tagihan::Column::MitraId.is_null())
            .exec(&self.pool)
            .await?;

        if update_result.rows_affected == 0 {
            // Missing row means 404; an existing row lost the race.
            self.find_order(tagihan_id).await?;
            return Err(AppError::Conflict(
                "Pesanan sudah diambil mitra lain".to_string(),
            ));
        }

        log::info!("Mitra {mitra_id} accepted order {tagihan_id}");
        self.find_order_response(tagihan_id).await
    }

    /// Moves an accepted order to in-progress and records the start instant.
    pub async fn start_work(&self, mitra_id: i64, tagihan_id: i64) -> AppResult<TagihanResponse> {
        let now = Utc::now();
        let update_result: UpdateResult = tagihan::Entity::update_many()
            .set(tagihan::ActiveModel {
                status: Set(TagihanStatus::SedangDikerjakan),
                work_started_at: Set(Some(now)),
                updated_at: Set(Some(now)),
                ..Default::default()
            })
            .filter(tagihan::Column::Id.eq(tagihan_id))
            .filter(tagihan::Column::Status.eq(TagihanStatus::Diterima))
            .filter(tagihan::Column::MitraId.eq(mitra_id))
            .exec(&self.pool)
            .await?;

        if update_result.rows_affected == 0 {
            let order = self.find_order(tagihan_id).await?;
            return Err(reject_transition(&order, mitra_id));
        }

        log::info!("Mitra {mitra_id} started work on order {tagihan_id}");
        self.find_order_response(tagihan_id).await
    }

    /// Orders the caller is currently working on, with a server-side elapsed
    /// time so the client timer survives reloads.
    pub async fn get_active_orders(&self, mitra_id: i64) -> AppResult<Vec<ActiveOrderResponse>> {
        let orders = tagihan::Entity::find()
            .filter(tagihan::Column::MitraId.eq(mitra_id))
            .filter(tagihan::Column::Status.eq(TagihanStatus::SedangDikerjakan))
            .order_by_desc(tagihan::Column::WorkStartedAt)
            .all(&self.pool)
            .await?;

        let (layanan_map, user_map) = self.load_lookup_maps(&orders).await?;
        let now = Utc::now();

        let mut active = Vec::with_capacity(orders.len());
        for m in orders {
            // SedangDikerjakan implies work_started_at is set; skip rows that
            // violate it instead of failing the whole list
            let Some(started) = m.work_started_at else {
                log::warn!("Order {} is in progress without a start timestamp", m.id);
                continue;
            };
            active.push(ActiveOrderResponse {
                id: m.id,
                nominal: m.nominal,
                status: m.status.clone(),
                work_started_at: started,
                elapsed_seconds: m.elapsed_seconds(now).unwrap_or(0),
                layanan: layanan_map
                    .get(&m.layanan_id)
                    .cloned()
                    .map(LayananInfo::from),
                pelanggan: user_map.get(&m.user_id).cloned().map(PelangganInfo::from),
            });
        }

        Ok(active)
    }

    /// Completes an in-progress order: stamps the completion time, stores the
    /// work duration and debits the 10% platform fee from saldo. When saldo
    /// cannot cover the fee the balance is left alone and the fee is flagged
    /// as deferred for billing.
    pub async fn finish_order(
        &self,
        mitra_id: i64,
        tagihan_id: i64,
    ) -> AppResult<FinishOrderResponse> {
        let txn = self.pool.begin().await?;

        let order = tagihan::Entity::find_by_id(tagihan_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Pesanan tidak ditemukan".to_string()))?;

        if order.mitra_id != Some(mitra_id) {
            return Err(AppError::Forbidden);
        }
        if !order.status.can_transition_to(&TagihanStatus::Selesai) {
            return Err(AppError::ValidationError(format!(
                "Pesanan tidak dapat diselesaikan dari status {}",
                order.status
            )));
        }
        let Some(work_started_at) = order.work_started_at else {
            return Err(AppError::ValidationError(
                "Pesanan belum mulai dikerjakan".to_string(),
            ));
        };

        let completion_date = Utc::now();
        let work_duration_seconds = (completion_date - work_started_at).num_seconds().max(0);

        let update_result: UpdateResult = tagihan::Entity::update_many()
            .set(tagihan::ActiveModel {
                status: Set(TagihanStatus::Selesai),
                completion_date: Set(Some(completion_date)),
                work_duration_seconds: Set(Some(work_duration_seconds)),
                updated_at: Set(Some(completion_date)),
                ..Default::default()
            })
            .filter(tagihan::Column::Id.eq(tagihan_id))
            .filter(tagihan::Column::Status.eq(TagihanStatus::SedangDikerjakan))
            .filter(tagihan::Column::MitraId.eq(mitra_id))
            .exec(&txn)
            .await?;

        if update_result.rows_affected == 0 {
            return Err(AppError::Conflict("Pesanan sudah diselesaikan".to_string()));
        }

        let fee = platform_fee(order.nominal);
        let debit_result: UpdateResult = mitra::Entity::update_many()
            .col_expr(
                mitra::Column::Saldo,
                Expr::col(mitra::Column::Saldo).sub(fee),
            )
            .filter(mitra::Column::Id.eq(mitra_id))
            .filter(mitra::Column::Saldo.gte(fee))
            .exec(&txn)
            .await?;
        let fee_deferred = debit_result.rows_affected == 0;

        let account = mitra::Entity::find_by_id(mitra_id)
            .one(&txn)
            .await?
            .ok_or_else(|| AppError::NotFound("Akun tidak ditemukan".to_string()))?;
        let layanan_row = layanan::Entity::find_by_id(order.layanan_id).one(&txn).await?;
        let pelanggan_row = users::Entity::find_by_id(order.user_id).one(&txn).await?;

        txn.commit().await?;

        if fee_deferred {
            log::warn!(
                "Mitra {mitra_id} finished order {tagihan_id}, saldo below fee {fee}, fee deferred"
            );
        } else {
            log::info!("Mitra {mitra_id} finished order {tagihan_id}, fee {fee} debited");
        }

        Ok(FinishOrderResponse {
            tagihan_id: order.id,
            nama_layanan: layanan_row.map(|l| l.nama_layanan),
            nama_pelanggan: pelanggan_row.map(|p| p.nama),
            work_duration_seconds,
            nominal: order.nominal,
            fee,
            net: net_amount(order.nominal),
            fee_deferred,
            saldo: account.saldo,
        })
    }

    /// Every order ever assigned to the caller, newest first, paginated.
    pub async fn get_order_history(
        &self,
        mitra_id: i64,
        params: &PaginationParams,
    ) -> AppResult<PaginatedResponse<TagihanResponse>> {
        let page = params.get_page();
        let limit = params.get_limit();
        let offset = params.get_offset();

        let base_query = tagihan::Entity::find().filter(tagihan::Column::MitraId.eq(mitra_id));

        let total = base_query.clone().count(&self.pool).await? as i64;
        let orders = base_query
            .order_by_desc(tagihan::Column::OrderDate)
            .limit(limit as u64)
            .offset(offset as u64)
            .all(&self.pool)
            .await?;

        let data = self.with_details(orders).await?;
        Ok(PaginatedResponse::new(data, page, limit, total))
    }

    async fn find_order(&self, tagihan_id: i64) -> AppResult<tagihan::Model> {
        tagihan::Entity::find_by_id(tagihan_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Pesanan tidak ditemukan".to_string()))
    }

    async fn find_order_response(&self, tagihan_id: i64) -> AppResult<TagihanResponse> {
        let order = self.find_order(tagihan_id).await?;
        let layanan_info = layanan::Entity::find_by_id(order.layanan_id)
            .one(&self.pool)
            .await?
            .map(LayananInfo::from);
        let pelanggan_info = users::Entity::find_by_id(order.user_id)
            .one(&self.pool)
            .await?
            .map(PelangganInfo::from);

        Ok(TagihanResponse::from_parts(
            order,
            layanan_info,
            pelanggan_info,
        ))
    }

    async fn with_details(
        &self,
        orders: Vec<tagihan::Model>,
    ) -> AppResult<Vec<TagihanResponse>> {
        let (layanan_map, user_map) = self.load_lookup_maps(&orders).await?;

        Ok(orders
            .into_iter()
            .map(|m| {
                let layanan_info = layanan_map
                    .get(&m.layanan_id)
                    .cloned()
                    .map(LayananInfo::from);
                let pelanggan_info = user_map.get(&m.user_id).cloned().map(PelangganInfo::from);
                TagihanResponse::from_parts(m, layanan_info, pelanggan_info)
            })
            .collect())
    }

    /// Batch lookup of the service and requester rows referenced by a page of
    /// orders, keyed by id.
    async fn load_lookup_maps(
        &self,
        orders: &[tagihan::Model],
    ) -> AppResult<(HashMap<i64, layanan::Model>, HashMap<i64, users::Model>)> {
        if orders.is_empty() {
            return Ok((HashMap::new(), HashMap::new()));
        }

        let layanan_ids: Vec<i64> = orders.iter().map(|o| o.layanan_id).collect();
        let user_ids: Vec<i64> = orders.iter().map(|o| o.user_id).collect();

        let layanan_map = layanan::Entity::find()
            .filter(layanan::Column::Id.is_in(layanan_ids))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();
        let user_map = users::Entity::find()
            .filter(users::Column::Id.is_in(user_ids))
            .all(&self.pool)
            .await?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        Ok((layanan_map, user_map))
    }
}

/// Explains a guarded status update that matched no rows: wrong owner is a
/// permission problem, wrong status is a lifecycle problem.
fn reject_transition(order: &tagihan::Model, mitra_id: i64) -> AppError {
    if order.mitra_id != Some(mitra_id) {
        return AppError::Forbidden;
    }
    AppError::ValidationError(format!(
        "Pesanan tidak dapat diproses dari status {}",
        order.status
    ))
}
