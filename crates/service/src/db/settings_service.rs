use chrono::Utc;
use models::setting;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Closed set of configuration keys. Values are JSON documents whose shape
/// is checked per key before anything is written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SettingKey {
    SiteTitle,
    ContactInfo,
    ThemeColors,
    BookingPolicy,
}

impl SettingKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::SiteTitle => "site_title",
            SettingKey::ContactInfo => "contact_info",
            SettingKey::ThemeColors => "theme_colors",
            SettingKey::BookingPolicy => "booking_policy",
        }
    }

    pub fn parse(key: &str) -> Result<Self, ServiceError> {
        match key {
            "site_title" => Ok(SettingKey::SiteTitle),
            "contact_info" => Ok(SettingKey::ContactInfo),
            "theme_colors" => Ok(SettingKey::ThemeColors),
            "booking_policy" => Ok(SettingKey::BookingPolicy),
            other => Err(ServiceError::Validation(format!("unknown setting key: {}", other))),
        }
    }

    /// Per-key shape check for the JSON value.
    pub fn validate_value(&self, value: &Value) -> Result<(), ServiceError> {
        match self {
            SettingKey::SiteTitle => match value.as_str() {
                Some(s) if !s.trim().is_empty() => Ok(()),
                _ => Err(ServiceError::Validation("site_title must be a non-empty string".into())),
            },
            SettingKey::ContactInfo => {
                let obj = value.as_object().ok_or_else(|| {
                    ServiceError::Validation("contact_info must be an object".into())
                })?;
                match obj.get("email").and_then(Value::as_str) {
                    Some(email) if email.contains('@') => {}
                    _ => {
                        return Err(ServiceError::Validation(
                            "contact_info.email must be a valid email string".into(),
                        ))
                    }
                }
                for key in ["phone", "address"] {
                    if let Some(v) = obj.get(key) {
                        if !v.is_string() {
                            return Err(ServiceError::Validation(format!(
                                "contact_info.{} must be a string",
                                key
                            )));
                        }
                    }
                }
                Ok(())
            }
            SettingKey::ThemeColors => {
                let obj = value.as_object().ok_or_else(|| {
                    ServiceError::Validation("theme_colors must be an object".into())
                })?;
                for (name, v) in obj {
                    match v.as_str() {
                        Some(s) if s.starts_with('#') => {}
                        _ => {
                            return Err(ServiceError::Validation(format!(
                                "theme_colors.{} must be a #rrggbb string",
                                name
                            )))
                        }
                    }
                }
                Ok(())
            }
            SettingKey::BookingPolicy => {
                let obj = value.as_object().ok_or_else(|| {
                    ServiceError::Validation("booking_policy must be an object".into())
                })?;
                if let Some(v) = obj.get("deposit_percent") {
                    match v.as_u64() {
                        Some(p) if p <= 100 => {}
                        _ => {
                            return Err(ServiceError::Validation(
                                "booking_policy.deposit_percent must be an integer in 0..=100".into(),
                            ))
                        }
                    }
                }
                if let Some(v) = obj.get("cancellation_window_hours") {
                    if v.as_u64().is_none() {
                        return Err(ServiceError::Validation(
                            "booking_policy.cancellation_window_hours must be a non-negative integer"
                                .into(),
                        ));
                    }
                }
                Ok(())
            }
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct SettingUpsert {
    pub value: Value,
    #[serde(default)]
    pub description: Option<String>,
}

/// Insert or replace the value stored under a known key.
pub async fn upsert_setting(
    db: &DatabaseConnection,
    key: &str,
    input: SettingUpsert,
) -> Result<setting::Model, ServiceError> {
    let parsed = SettingKey::parse(key)?;
    parsed.validate_value(&input.value)?;

    let existing = setting::Entity::find()
        .filter(setting::Column::Key.eq(key))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    let now = Utc::now();
    debug!(key, replacing = existing.is_some(), "upserting setting");
    match existing {
        Some(model) => {
            let mut am: setting::ActiveModel = model.into();
            am.value = Set(input.value);
            if let Some(description) = input.description {
                am.description = Set(Some(description));
            }
            am.updated_at = Set(now.into());
            am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
        }
        None => {
            let am = setting::ActiveModel {
                id: Set(Uuid::new_v4()),
                key: Set(key.to_string()),
                value: Set(input.value),
                description: Set(input.description),
                created_at: Set(now.into()),
                updated_at: Set(now.into()),
            };
            am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
        }
    }
}

/// Get a single setting by key.
pub async fn get_setting(
    db: &DatabaseConnection,
    key: &str,
) -> Result<Option<setting::Model>, ServiceError> {
    setting::Entity::find()
        .filter(setting::Column::Key.eq(key))
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// List all settings ordered by key.
pub async fn list_settings(db: &DatabaseConnection) -> Result<Vec<setting::Model>, ServiceError> {
    setting::Entity::find()
        .order_by_asc(setting::Column::Key)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}
