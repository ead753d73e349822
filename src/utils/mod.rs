pub mod fee;
pub mod jwt;
pub mod password;
pub mod phone;
pub mod transaction_code;

pub use fee::{net_amount, platform_fee};
pub use jwt::*;
pub use password::*;
pub use phone::*;
pub use transaction_code::generate_topup_code;
