use super::get_auth_mitra;
use crate::models::*;
use crate::services::TopupService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/topup/saldo",
    tag = "topup",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Current balance", body = SaldoResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn get_saldo(
    topup_service: web::Data<TopupService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match topup_service.get_saldo(auth.id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/topup",
    tag = "topup",
    request_body = CreateTopupRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Top-up request recorded", body = TopupResponse),
        (status = 400, description = "Invalid amount or payment method"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn create_topup(
    topup_service: web::Data<TopupService>,
    req: HttpRequest,
    request: web::Json<CreateTopupRequest>,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match topup_service
        .create_topup(auth.id, request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response,
            "message": "Permintaan top up berhasil dikirim"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/topup/history",
    tag = "topup",
    params(
        ("page" = Option<i64>, Query, description = "Page number, 1-based"),
        ("page_size" = Option<i64>, Query, description = "Rows per page, max 100")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Own top-ups, newest first"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_topup_history(
    topup_service: web::Data<TopupService>,
    req: HttpRequest,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match topup_service
        .get_topup_history(auth.id, &query.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn topup_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/topup")
            .route("", web::post().to(create_topup))
            .route("/saldo", web::get().to(get_saldo))
            .route("/history", web::get().to(get_topup_history)),
    );
}
