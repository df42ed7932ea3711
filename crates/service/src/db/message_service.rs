use chrono::Utc;
use models::message::{self, MessagePriority, MessageStatus};
use models::validate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Payload of the public contact form. Status is always `unread` on
/// creation; priority defaults to normal.
#[derive(Clone, Debug, Deserialize)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub body: String,
    #[serde(default)]
    pub priority: MessagePriority,
}

impl NewMessage {
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate::require("name", &self.name)?;
        validate::validate_email(&self.email)?;
        validate::require("subject", &self.subject)?;
        validate::require("body", &self.body)?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct MessagePatch {
    pub status: Option<MessageStatus>,
    pub priority: Option<MessagePriority>,
}

/// Create a contact message in `unread` state.
pub async fn create_message(
    db: &DatabaseConnection,
    input: NewMessage,
) -> Result<message::Model, ServiceError> {
    input.validate()?;
    let now = Utc::now();
    let am = message::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        email: Set(input.email),
        phone: Set(input.phone),
        subject: Set(input.subject),
        body: Set(input.body),
        status: Set(MessageStatus::Unread),
        priority: Set(input.priority),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get message by id.
pub async fn get_message(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<message::Model>, ServiceError> {
    message::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Status/priority transitions (unread -> read -> replied).
pub async fn update_message(
    db: &DatabaseConnection,
    id: Uuid,
    patch: MessagePatch,
) -> Result<message::Model, ServiceError> {
    let mut am: message::ActiveModel = message::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("message"))?
        .into();
    if let Some(status) = patch.status {
        am.status = Set(status);
    }
    if let Some(priority) = patch.priority {
        am.priority = Set(priority);
    }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete a message. Returns whether a row existed.
pub async fn delete_message(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = message::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// List messages newest-first, optionally filtered by status.
pub async fn list_messages(
    db: &DatabaseConnection,
    status: Option<MessageStatus>,
) -> Result<Vec<message::Model>, ServiceError> {
    let mut q = message::Entity::find();
    if let Some(s) = status {
        q = q.filter(message::Column::Status.eq(s));
    }
    q.order_by_desc(message::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn sample_input() -> NewMessage {
        NewMessage {
            name: "Lea".into(),
            email: "lea@example.com".into(),
            phone: None,
            subject: "Availability in June".into(),
            body: "Hi, are you free on the 20th?".into(),
            priority: MessagePriority::Normal,
        }
    }

    #[test]
    fn contact_form_requires_subject_and_body() {
        let mut input = sample_input();
        input.subject = String::new();
        assert!(input.validate().is_err());

        let mut input = sample_input();
        input.body = " ".into();
        assert!(input.validate().is_err());
    }

    #[tokio::test]
    async fn message_status_lifecycle() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let created = create_message(&db, sample_input()).await?;
        assert_eq!(created.status, MessageStatus::Unread);

        let read = update_message(
            &db,
            created.id,
            MessagePatch { status: Some(MessageStatus::Read), priority: None },
        )
        .await?;
        assert_eq!(read.status, MessageStatus::Read);

        let replied = update_message(
            &db,
            created.id,
            MessagePatch { status: Some(MessageStatus::Replied), priority: Some(MessagePriority::High) },
        )
        .await?;
        assert_eq!(replied.status, MessageStatus::Replied);
        assert_eq!(replied.priority, MessagePriority::High);

        assert!(delete_message(&db, created.id).await?);
        Ok(())
    }
}
