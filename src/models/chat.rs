use crate::entities::{ChatParty, chat_entity};
use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    #[schema(example = "Halo admin, saya butuh bantuan")]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ChatMessageResponse {
    pub id: i64,
    pub sender_id: String,
    pub sender_type: ChatParty,
    pub receiver_id: String,
    pub receiver_type: ChatParty,
    pub message: String,
    pub read_by_sender: bool,
    pub read_by_receiver: bool,
    pub created_at: DateTime<Utc>,
}

impl From<chat_entity::Model> for ChatMessageResponse {
    fn from(m: chat_entity::Model) -> Self {
        Self {
            id: m.id,
            sender_id: m.sender_id,
            sender_type: m.sender_type,
            receiver_id: m.receiver_id,
            receiver_type: m.receiver_type,
            message: m.message,
            read_by_sender: m.read_by_sender,
            read_by_receiver: m.read_by_receiver,
            created_at: m.created_at.unwrap_or_else(Utc::now),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ChatDayGroup {
    pub label: String,
    pub date: NaiveDate,
    pub messages: Vec<ChatMessageResponse>,
}

const MONTH_ABBR_ID: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "Mei", "Jun", "Jul", "Agu", "Sep", "Okt", "Nov", "Des",
];

/// Day heading the way the chat window shows it: "Hari ini", "Kemarin",
/// otherwise "15 Agu 2025"-style with Indonesian month abbreviations.
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Hari ini".to_string()
    } else if date == today - Duration::days(1) {
        "Kemarin".to_string()
    } else {
        let month = MONTH_ABBR_ID[date.month0() as usize];
        format!("{} {} {}", date.day(), month, date.year())
    }
}

/// Buckets messages into calendar-day groups. Input must already be in
/// ascending `created_at` order; group order follows from that.
pub fn group_messages_by_day(
    messages: Vec<ChatMessageResponse>,
    today: NaiveDate,
) -> Vec<ChatDayGroup> {
    let mut groups: Vec<ChatDayGroup> = Vec::new();

    for message in messages {
        let date = message.created_at.date_naive();
        match groups.last_mut() {
            Some(group) if group.date == date => group.messages.push(message),
            _ => groups.push(ChatDayGroup {
                label: day_label(date, today),
                date,
                messages: vec![message],
            }),
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn message_at(id: i64, ts: DateTime<Utc>) -> ChatMessageResponse {
        ChatMessageResponse {
            id,
            sender_id: "toko@example.com".to_string(),
            sender_type: ChatParty::Mitra,
            receiver_id: "admin".to_string(),
            receiver_type: ChatParty::Admin,
            message: format!("pesan {id}"),
            read_by_sender: true,
            read_by_receiver: false,
            created_at: ts,
        }
    }

    #[test]
    fn test_day_label() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
        assert_eq!(day_label(today, today), "Hari ini");
        assert_eq!(
            day_label(NaiveDate::from_ymd_opt(2025, 8, 16).unwrap(), today),
            "Kemarin"
        );
        assert_eq!(
            day_label(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap(), today),
            "15 Agu 2025"
        );
        assert_eq!(
            day_label(NaiveDate::from_ymd_opt(2024, 12, 3).unwrap(), today),
            "3 Des 2024"
        );
        assert_eq!(
            day_label(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(), today),
            "1 Mei 2025"
        );
    }

    #[test]
    fn test_group_messages_by_day() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
        let messages = vec![
            message_at(1, Utc.with_ymd_and_hms(2025, 8, 15, 9, 0, 0).unwrap()),
            message_at(2, Utc.with_ymd_and_hms(2025, 8, 15, 10, 30, 0).unwrap()),
            message_at(3, Utc.with_ymd_and_hms(2025, 8, 16, 8, 0, 0).unwrap()),
            message_at(4, Utc.with_ymd_and_hms(2025, 8, 17, 7, 45, 0).unwrap()),
        ];

        let groups = group_messages_by_day(messages, today);

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0].label, "15 Agu 2025");
        assert_eq!(groups[0].messages.len(), 2);
        assert_eq!(groups[0].messages[0].id, 1);
        assert_eq!(groups[1].label, "Kemarin");
        assert_eq!(groups[2].label, "Hari ini");
        assert_eq!(groups[2].messages[0].id, 4);
    }

    #[test]
    fn test_group_messages_empty() {
        let today = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
        assert!(group_messages_by_day(Vec::new(), today).is_empty());
    }
}
