pub mod chat;
pub mod layanan;
pub mod mitra;
pub mod tagihan;
pub mod topup;
pub mod users;

pub use chat as chat_entity;
pub use layanan as layanan_entity;
pub use mitra as mitra_entity;
pub use tagihan as tagihan_entity;
pub use topup as topup_entity;
pub use users as user_entity;

pub use chat::ChatParty;
pub use mitra::MitraStatus;
pub use tagihan::TagihanStatus;
pub use topup::{PaymentMethod, TopupStatus};
