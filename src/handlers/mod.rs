pub mod auth;
pub mod chat;
pub mod mitra;
pub mod tagihan;
pub mod topup;

pub use auth::auth_config;
pub use chat::chat_config;
pub use mitra::mitra_config;
pub use tagihan::tagihan_config;
pub use topup::topup_config;

use crate::error::{AppError, AppResult};
use crate::middlewares::AuthMitra;
use actix_web::{HttpMessage, HttpRequest};

/// Identity stored in request extensions by the auth middleware. Present on
/// every route registered behind it.
pub(crate) fn get_auth_mitra(req: &HttpRequest) -> AppResult<AuthMitra> {
    req.extensions()
        .get::<AuthMitra>()
        .cloned()
        .ok_or_else(|| AppError::AuthError("Sesi tidak valid, silakan login ulang".to_string()))
}
