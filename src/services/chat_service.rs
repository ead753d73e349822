use crate::entities::{ChatParty, chat_entity as chat};
use crate::error::{AppError, AppResult};
use crate::models::*;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Set,
};

/// Logical id of the support desk side of every conversation.
const ADMIN_ID: &str = "admin";

#[derive(Clone)]
pub struct ChatService {
    pool: DatabaseConnection,
}

impl ChatService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Full conversation between the caller and admin, oldest first, grouped
    /// by calendar day. Loading counts as reading: everything addressed to
    /// the caller is marked read before the page is returned.
    pub async fn load_conversation(&self, mitra_email: &str) -> AppResult<Vec<ChatDayGroup>> {
        chat::Entity::update_many()
            .set(chat::ActiveModel {
                read_by_receiver: Set(true),
                ..Default::default()
            })
            .filter(chat::Column::ReceiverId.eq(mitra_email))
            .filter(chat::Column::ReadByReceiver.eq(false))
            .exec(&self.pool)
            .await?;

        let messages = chat::Entity::find()
            .filter(
                Condition::any()
                    .add(
                        Condition::all()
                            .add(chat::Column::SenderId.eq(mitra_email))
                            .add(chat::Column::ReceiverId.eq(ADMIN_ID)),
                    )
                    .add(
                        Condition::all()
                            .add(chat::Column::SenderId.eq(ADMIN_ID))
                            .add(chat::Column::ReceiverId.eq(mitra_email)),
                    ),
            )
            .order_by_asc(chat::Column::CreatedAt)
            .all(&self.pool)
            .await?;

        let responses: Vec<ChatMessageResponse> =
            messages.into_iter().map(ChatMessageResponse::from).collect();

        Ok(group_messages_by_day(responses, Utc::now().date_naive()))
    }

    /// Appends a message from the caller to the admin side.
    pub async fn send_message(
        &self,
        mitra_email: &str,
        req: SendMessageRequest,
    ) -> AppResult<ChatMessageResponse> {
        let message = req.message.trim();
        if message.is_empty() {
            return Err(AppError::ValidationError(
                "Pesan tidak boleh kosong".to_string(),
            ));
        }

        let model = chat::ActiveModel {
            sender_id: Set(mitra_email.to_string()),
            sender_type: Set(ChatParty::Mitra),
            receiver_id: Set(ADMIN_ID.to_string()),
            receiver_type: Set(ChatParty::Admin),
            message: Set(message.to_string()),
            read_by_sender: Set(true),
            read_by_receiver: Set(false),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(model.into())
    }
}
