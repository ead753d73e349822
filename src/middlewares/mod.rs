pub mod auth;
pub mod cors;

pub use auth::{AuthMiddleware, AuthMitra};
pub use cors::create_cors;
