pub mod auth_service;
pub mod chat_service;
pub mod mitra_service;
pub mod tagihan_service;
pub mod topup_service;

pub use auth_service::*;
pub use chat_service::*;
pub use mitra_service::*;
pub use tagihan_service::*;
pub use topup_service::*;
