use super::get_auth_mitra;
use crate::models::*;
use crate::services::MitraService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/mitra/profile",
    tag = "mitra",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Own profile", body = MitraResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Account not found")
    )
)]
pub async fn get_profile(
    mitra_service: web::Data<MitraService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match mitra_service.get_profile(auth.id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/mitra/profile",
    tag = "mitra",
    request_body = UpdateProfileRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile updated", body = MitraResponse),
        (status = 400, description = "Invalid request data"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_profile(
    mitra_service: web::Data<MitraService>,
    req: HttpRequest,
    request: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match mitra_service
        .update_profile(auth.id, request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response,
            "message": "Profil berhasil diperbarui"
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/mitra/verification",
    tag = "mitra",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Verification status", body = VerificationStatusResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_verification_status(
    mitra_service: web::Data<MitraService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match mitra_service.verification_status(auth.id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/mitra/dashboard",
    tag = "mitra",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Profile with order counters", body = DashboardResponse),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_dashboard(
    mitra_service: web::Data<MitraService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match mitra_service.dashboard(auth.id).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn mitra_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/mitra")
            .route("/profile", web::get().to(get_profile))
            .route("/profile", web::put().to(update_profile))
            .route("/verification", web::get().to(get_verification_status))
            .route("/dashboard", web::get().to(get_dashboard)),
    );
}
