use super::get_auth_mitra;
use crate::models::*;
use crate::services::TagihanService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/tagihan/incoming",
    tag = "tagihan",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Unassigned pending orders", body = [TagihanResponse]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_incoming_orders(
    tagihan_service: web::Data<TagihanService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    if let Err(e) = get_auth_mitra(&req) {
        return Ok(e.error_response());
    }

    match tagihan_service.get_incoming_orders().await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/tagihan/{id}/accept",
    tag = "tagihan",
    params(
        ("id" = i64, Path, description = "Order id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Order claimed", body = TagihanResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order already taken")
    )
)]
pub async fn accept_order(
    tagihan_service: web::Data<TagihanService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match tagihan_service
        .accept_order(auth.id, path.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response,
            "message": "Pesanan berhasil diterima"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/tagihan/{id}/start",
    tag = "tagihan",
    params(
        ("id" = i64, Path, description = "Order id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Work started", body = TagihanResponse),
        (status = 400, description = "Order is not in an acceptable state"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Order belongs to another mitra"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn start_work(
    tagihan_service: web::Data<TagihanService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match tagihan_service.start_work(auth.id, path.into_inner()).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tagihan/active",
    tag = "tagihan",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Orders currently in progress", body = [ActiveOrderResponse]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_active_orders(
    tagihan_service: web::Data<TagihanService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match tagihan_service.get_active_orders(auth.id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/tagihan/{id}/finish",
    tag = "tagihan",
    params(
        ("id" = i64, Path, description = "Order id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Invoice summary", body = FinishOrderResponse),
        (status = 400, description = "Order is not in progress"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Order belongs to another mitra"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn finish_order(
    tagihan_service: web::Data<TagihanService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match tagihan_service
        .finish_order(auth.id, path.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/tagihan/history",
    tag = "tagihan",
    params(
        ("page" = Option<i64>, Query, description = "Page number, 1-based"),
        ("page_size" = Option<i64>, Query, description = "Rows per page, max 100")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Own orders, newest first"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_order_history(
    tagihan_service: web::Data<TagihanService>,
    req: HttpRequest,
    query: web::Query<PaginationParams>,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match tagihan_service
        .get_order_history(auth.id, &query.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn tagihan_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/tagihan")
            .route("/incoming", web::get().to(get_incoming_orders))
            .route("/active", web::get().to(get_active_orders))
            .route("/history", web::get().to(get_order_history))
            .route("/{id}/accept", web::post().to(accept_order))
            .route("/{id}/start", web::post().to(start_work))
            .route("/{id}/finish", web::post().to(finish_order)),
    );
}
