use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Order lifecycle runs pending -> diterima -> sedang_dikerjakan -> selesai.
/// The remaining four values exist only in historical rows written by an
/// earlier consumer app and are display-only.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "tagihan_status")]
#[serde(rename_all = "snake_case")]
pub enum TagihanStatus {
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "diterima")]
    Diterima,
    #[sea_orm(string_value = "sedang_dikerjakan")]
    SedangDikerjakan,
    #[sea_orm(string_value = "selesai")]
    Selesai,
    #[sea_orm(string_value = "completed")]
    Completed,
    #[sea_orm(string_value = "success")]
    Success,
    #[sea_orm(string_value = "failed")]
    Failed,
    #[sea_orm(string_value = "cancelled")]
    Cancelled,
}

impl TagihanStatus {
    /// Legacy statuses never transition anywhere.
    pub fn is_legacy(&self) -> bool {
        matches!(
            self,
            TagihanStatus::Completed
                | TagihanStatus::Success
                | TagihanStatus::Failed
                | TagihanStatus::Cancelled
        )
    }

    pub fn can_transition_to(&self, next: &TagihanStatus) -> bool {
        if self.is_legacy() {
            return false;
        }
        matches!(
            (self, next),
            (TagihanStatus::Pending, TagihanStatus::Diterima)
                | (TagihanStatus::Diterima, TagihanStatus::SedangDikerjakan)
                | (TagihanStatus::SedangDikerjakan, TagihanStatus::Selesai)
        )
    }
}

impl std::fmt::Display for TagihanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagihanStatus::Pending => write!(f, "pending"),
            TagihanStatus::Diterima => write!(f, "diterima"),
            TagihanStatus::SedangDikerjakan => write!(f, "sedang_dikerjakan"),
            TagihanStatus::Selesai => write!(f, "selesai"),
            TagihanStatus::Completed => write!(f, "completed"),
            TagihanStatus::Success => write!(f, "success"),
            TagihanStatus::Failed => write!(f, "failed"),
            TagihanStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "tagihan")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub layanan_id: i64,
    pub mitra_id: Option<i64>,
    pub nominal: i64,
    pub status: TagihanStatus,
    pub order_date: DateTime<Utc>,
    pub completion_date: Option<DateTime<Utc>>,
    pub work_started_at: Option<DateTime<Utc>>,
    pub work_duration_seconds: Option<i64>,
    pub rating: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model {
    /// Whole seconds since work started, recomputed from the persisted
    /// timestamp so the value survives client reloads.
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> Option<i64> {
        self.work_started_at
            .map(|started| (now - started).num_seconds().max(0))
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_lifecycle_transitions() {
        assert!(TagihanStatus::Pending.can_transition_to(&TagihanStatus::Diterima));
        assert!(TagihanStatus::Diterima.can_transition_to(&TagihanStatus::SedangDikerjakan));
        assert!(TagihanStatus::SedangDikerjakan.can_transition_to(&TagihanStatus::Selesai));
    }

    #[test]
    fn test_no_skips_or_reverse_edges() {
        assert!(!TagihanStatus::Pending.can_transition_to(&TagihanStatus::SedangDikerjakan));
        assert!(!TagihanStatus::Pending.can_transition_to(&TagihanStatus::Selesai));
        assert!(!TagihanStatus::Diterima.can_transition_to(&TagihanStatus::Pending));
        assert!(!TagihanStatus::Selesai.can_transition_to(&TagihanStatus::SedangDikerjakan));
        assert!(!TagihanStatus::Selesai.can_transition_to(&TagihanStatus::Pending));
    }

    #[test]
    fn test_legacy_statuses_are_terminal() {
        for legacy in [
            TagihanStatus::Completed,
            TagihanStatus::Success,
            TagihanStatus::Failed,
            TagihanStatus::Cancelled,
        ] {
            assert!(legacy.is_legacy());
            assert!(!legacy.can_transition_to(&TagihanStatus::Diterima));
            assert!(!legacy.can_transition_to(&TagihanStatus::SedangDikerjakan));
            assert!(!legacy.can_transition_to(&TagihanStatus::Selesai));
        }
        assert!(!TagihanStatus::Pending.is_legacy());
    }

    #[test]
    fn test_elapsed_seconds_from_persisted_start() {
        let now = Utc::now();
        let model = Model {
            id: 1,
            user_id: 1,
            layanan_id: 1,
            mitra_id: Some(1),
            nominal: 100_000,
            status: TagihanStatus::SedangDikerjakan,
            order_date: now - Duration::hours(1),
            completion_date: None,
            work_started_at: Some(now - Duration::seconds(125)),
            work_duration_seconds: None,
            rating: None,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(model.elapsed_seconds(now), Some(125));
    }

    #[test]
    fn test_elapsed_seconds_without_start() {
        let now = Utc::now();
        let model = Model {
            id: 1,
            user_id: 1,
            layanan_id: 1,
            mitra_id: None,
            nominal: 100_000,
            status: TagihanStatus::Pending,
            order_date: now,
            completion_date: None,
            work_started_at: None,
            work_duration_seconds: None,
            rating: None,
            created_at: None,
            updated_at: None,
        };
        assert_eq!(model.elapsed_seconds(now), None);
    }
}
