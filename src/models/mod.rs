pub mod chat;
pub mod common;
pub mod mitra;
pub mod tagihan;
pub mod topup;

pub use chat::*;
pub use common::*;
pub use mitra::*;
pub use tagihan::*;
pub use topup::*;
