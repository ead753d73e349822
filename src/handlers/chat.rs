use super::get_auth_mitra;
use crate::models::*;
use crate::services::ChatService;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/chat/messages",
    tag = "chat",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Conversation grouped by day", body = [ChatDayGroup]),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_messages(
    chat_service: web::Data<ChatService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match chat_service.load_conversation(&auth.email).await {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/chat/messages",
    tag = "chat",
    request_body = SendMessageRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Message stored", body = ChatMessageResponse),
        (status = 400, description = "Empty message"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn send_message(
    chat_service: web::Data<ChatService>,
    req: HttpRequest,
    request: web::Json<SendMessageRequest>,
) -> Result<HttpResponse> {
    let auth = match get_auth_mitra(&req) {
        Ok(auth) => auth,
        Err(e) => return Ok(e.error_response()),
    };

    match chat_service
        .send_message(&auth.email, request.into_inner())
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": response
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn chat_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/chat")
            .route("/messages", web::get().to(get_messages))
            .route("/messages", web::post().to(send_message)),
    );
}
