use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Both "success" and "completed" appear in live data written by the
/// out-of-scope confirmation process; the service itself only writes pending.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "topup_status")]
#[serde(rename_all = "snake_case")]
pub enum TopupStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "success")]
    Success,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "failed")]
    Failed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl std::fmt::Display for TopupStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopupStatus::Pending => write!(f, "pending"),
            TopupStatus::Success => write!(f, "success"),
            TopupStatus::Completed => write!(f, "completed"),
            TopupStatus::Failed => write!(f, "failed"),
            TopupStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "payment_method")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[sea_orm(string_value = "bank_transfer")]
    BankTransfer,
    #[sea_orm(string_value = "e_wallet")]
    EWallet,
    #[sea_orm(string_value = "virtual_account")]
    VirtualAccount,
    #[sea_orm(string_value = "credit_card")]
    CreditCard,
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PaymentMethod::BankTransfer => write!(f, "bank_transfer"),
            PaymentMethod::EWallet => write!(f, "e_wallet"),
            PaymentMethod::VirtualAccount => write!(f, "virtual_account"),
            PaymentMethod::CreditCard => write!(f, "credit_card"),
        }
    }
}

impl std::str::FromStr for PaymentMethod {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bank_transfer" => Ok(PaymentMethod::BankTransfer),
            "e_wallet" => Ok(PaymentMethod::EWallet),
            "virtual_account" => Ok(PaymentMethod::VirtualAccount),
            "credit_card" => Ok(PaymentMethod::CreditCard),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "topup")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub mitra_id: i64,
    pub nominal: i64,
    pub payment_method: PaymentMethod,
    pub status: TopupStatus,
    pub transaction_code: String,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_payment_method_from_str() {
        assert_eq!(
            PaymentMethod::from_str("bank_transfer"),
            Ok(PaymentMethod::BankTransfer)
        );
        assert_eq!(
            PaymentMethod::from_str("e_wallet"),
            Ok(PaymentMethod::EWallet)
        );
        assert_eq!(
            PaymentMethod::from_str("virtual_account"),
            Ok(PaymentMethod::VirtualAccount)
        );
        assert_eq!(
            PaymentMethod::from_str("credit_card"),
            Ok(PaymentMethod::CreditCard)
        );
        assert!(PaymentMethod::from_str("cash").is_err());
        assert!(PaymentMethod::from_str("").is_err());
    }
}
