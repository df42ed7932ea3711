use chrono::Utc;
use models::booking::{self, BookingStatus};
use models::validate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use sea_orm::prelude::Date;
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Payload of the public booking form (and the admin "new booking" dialog).
/// Status is always `pending` on creation.
#[derive(Clone, Debug, Deserialize)]
pub struct NewBooking {
    pub client_name: String,
    pub email: String,
    pub phone: String,
    pub event_type: String,
    pub event_date: Date,
    pub event_time: String,
    pub location: String,
    pub duration: String,
    #[serde(default)]
    pub price: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub service_id: Option<Uuid>,
}

impl NewBooking {
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate::require("client_name", &self.client_name)?;
        validate::validate_email(&self.email)?;
        validate::require("phone", &self.phone)?;
        validate::require("event_type", &self.event_type)?;
        validate::require("event_time", &self.event_time)?;
        validate::require("location", &self.location)?;
        validate::require("duration", &self.duration)?;
        if let Some(price) = self.price {
            if price < 0 {
                return Err(ServiceError::Validation("price must be >= 0".into()));
            }
        }
        Ok(())
    }
}

/// Admin-side partial update. Double options distinguish "leave alone"
/// from "set to null" for nullable columns.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct BookingPatch {
    pub client_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub event_type: Option<String>,
    pub event_date: Option<Date>,
    pub event_time: Option<String>,
    pub location: Option<String>,
    pub duration: Option<String>,
    #[serde(default)]
    pub price: Option<Option<i64>>,
    pub status: Option<BookingStatus>,
    #[serde(default)]
    pub notes: Option<Option<String>>,
    #[serde(default)]
    pub service_id: Option<Option<Uuid>>,
}

/// Create a booking in `pending` state.
pub async fn create_booking(
    db: &DatabaseConnection,
    input: NewBooking,
) -> Result<booking::Model, ServiceError> {
    input.validate()?;
    let now = Utc::now();
    let am = booking::ActiveModel {
        id: Set(Uuid::new_v4()),
        client_name: Set(input.client_name),
        email: Set(input.email),
        phone: Set(input.phone),
        event_type: Set(input.event_type),
        event_date: Set(input.event_date),
        event_time: Set(input.event_time),
        location: Set(input.location),
        duration: Set(input.duration),
        price: Set(input.price),
        status: Set(BookingStatus::Pending),
        notes: Set(input.notes),
        service_id: Set(input.service_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get booking by id.
pub async fn get_booking(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<booking::Model>, ServiceError> {
    booking::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Apply a partial update to a booking (status transitions included).
pub async fn update_booking(
    db: &DatabaseConnection,
    id: Uuid,
    patch: BookingPatch,
) -> Result<booking::Model, ServiceError> {
    let mut am: booking::ActiveModel = booking::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("booking"))?
        .into();
    if let Some(client_name) = patch.client_name {
        validate::require("client_name", &client_name)?;
        am.client_name = Set(client_name);
    }
    if let Some(email) = patch.email {
        validate::validate_email(&email)?;
        am.email = Set(email);
    }
    if let Some(phone) = patch.phone {
        validate::require("phone", &phone)?;
        am.phone = Set(phone);
    }
    if let Some(event_type) = patch.event_type {
        validate::require("event_type", &event_type)?;
        am.event_type = Set(event_type);
    }
    if let Some(event_date) = patch.event_date {
        am.event_date = Set(event_date);
    }
    if let Some(event_time) = patch.event_time {
        am.event_time = Set(event_time);
    }
    if let Some(location) = patch.location {
        am.location = Set(location);
    }
    if let Some(duration) = patch.duration {
        am.duration = Set(duration);
    }
    if let Some(price) = patch.price {
        if let Some(p) = price {
            if p < 0 {
                return Err(ServiceError::Validation("price must be >= 0".into()));
            }
        }
        am.price = Set(price);
    }
    if let Some(status) = patch.status {
        am.status = Set(status);
    }
    if let Some(notes) = patch.notes {
        am.notes = Set(notes);
    }
    if let Some(service_id) = patch.service_id {
        am.service_id = Set(service_id);
    }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete a booking. Returns whether a row existed.
pub async fn delete_booking(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = booking::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// List bookings newest-first, optionally filtered by status.
pub async fn list_bookings(
    db: &DatabaseConnection,
    status: Option<BookingStatus>,
) -> Result<Vec<booking::Model>, ServiceError> {
    let mut q = booking::Entity::find();
    if let Some(s) = status {
        q = q.filter(booking::Column::Status.eq(s));
    }
    q.order_by_desc(booking::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::NaiveDate;

    fn sample_input() -> NewBooking {
        NewBooking {
            client_name: "Ana P.".into(),
            email: "ana@example.com".into(),
            phone: "+1 555 0100".into(),
            event_type: "wedding".into(),
            event_date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            event_time: "14:00".into(),
            location: "Lakeside pavilion".into(),
            duration: "8 hours".into(),
            price: None,
            notes: None,
            service_id: None,
        }
    }

    #[test]
    fn blank_required_field_rejected() {
        let mut input = sample_input();
        input.event_type = "   ".into();
        assert!(input.validate().is_err());

        let mut input = sample_input();
        input.email = "not-an-email".into();
        assert!(input.validate().is_err());

        assert!(sample_input().validate().is_ok());
    }

    #[tokio::test]
    async fn booking_crud_and_status_transition() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let created = create_booking(&db, sample_input()).await?;
        assert_eq!(created.status, BookingStatus::Pending);

        let patch = BookingPatch {
            status: Some(BookingStatus::Confirmed),
            price: Some(Some(150_000)),
            ..Default::default()
        };
        let updated = update_booking(&db, created.id, patch).await?;
        assert_eq!(updated.status, BookingStatus::Confirmed);
        assert_eq!(updated.price, Some(150_000));

        let pending = list_bookings(&db, Some(BookingStatus::Pending)).await?;
        assert!(pending.iter().all(|b| b.id != created.id));

        assert!(delete_booking(&db, created.id).await?);
        Ok(())
    }
}
