use actix_web::web;
use utoipa::OpenApi;
use utoipa::{
    Modify,
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use crate::entities::{ChatParty, MitraStatus, PaymentMethod, TagihanStatus, TopupStatus};
use crate::handlers;
use crate::models::*;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.as_mut().unwrap();
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        )
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::auth::refresh,
        handlers::auth::logout,
        handlers::mitra::get_profile,
        handlers::mitra::update_profile,
        handlers::mitra::get_verification_status,
        handlers::mitra::get_dashboard,
        handlers::tagihan::get_incoming_orders,
        handlers::tagihan::accept_order,
        handlers::tagihan::start_work,
        handlers::tagihan::get_active_orders,
        handlers::tagihan::finish_order,
        handlers::tagihan::get_order_history,
        handlers::topup::get_saldo,
        handlers::topup::create_topup,
        handlers::topup::get_topup_history,
        handlers::chat::get_messages,
        handlers::chat::send_message,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            UpdateProfileRequest,
            MitraResponse,
            AuthResponse,
            VerificationStatusResponse,
            DashboardResponse,
            MitraStatus,
            TagihanStatus,
            TagihanResponse,
            LayananInfo,
            PelangganInfo,
            ActiveOrderResponse,
            FinishOrderResponse,
            CreateTopupRequest,
            TopupResponse,
            SaldoResponse,
            TopupStatus,
            PaymentMethod,
            SendMessageRequest,
            ChatMessageResponse,
            ChatDayGroup,
            ChatParty,
            ApiError,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Authentication API"),
        (name = "mitra", description = "Profile and verification API"),
        (name = "tagihan", description = "Order lifecycle API"),
        (name = "topup", description = "Balance top-up API"),
        (name = "chat", description = "Support chat API"),
    ),
    info(
        title = "SmartCare Mitra Backend API",
        version = "1.0.0",
        description = "SmartCare Mitra self-service portal REST API documentation"
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
