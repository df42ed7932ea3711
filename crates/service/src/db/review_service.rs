use chrono::Utc;
use models::review;
use models::validate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ServiceError;

/// Client-submitted review. Reviews always start unapproved and
/// unfeatured; an admin flips those flags afterwards.
#[derive(Clone, Debug, Deserialize)]
pub struct NewReview {
    pub client_name: String,
    pub rating: i32,
    pub title: String,
    pub content: String,
    pub service_type: String,
    #[serde(default)]
    pub booking_id: Option<Uuid>,
}

impl NewReview {
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate::require("client_name", &self.client_name)?;
        validate::validate_rating(self.rating)?;
        validate::require("title", &self.title)?;
        validate::require("content", &self.content)?;
        validate::require("service_type", &self.service_type)?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ReviewPatch {
    pub client_name: Option<String>,
    pub rating: Option<i32>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub service_type: Option<String>,
    pub featured: Option<bool>,
    pub approved: Option<bool>,
    #[serde(default)]
    pub booking_id: Option<Option<Uuid>>,
}

/// Create a review awaiting moderation.
pub async fn create_review(
    db: &DatabaseConnection,
    input: NewReview,
) -> Result<review::Model, ServiceError> {
    input.validate()?;
    let now = Utc::now();
    let am = review::ActiveModel {
        id: Set(Uuid::new_v4()),
        client_name: Set(input.client_name),
        rating: Set(input.rating),
        title: Set(input.title),
        content: Set(input.content),
        service_type: Set(input.service_type),
        featured: Set(false),
        approved: Set(false),
        booking_id: Set(input.booking_id),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get review by id.
pub async fn get_review(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<review::Model>, ServiceError> {
    review::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Apply a partial update (moderation flags included).
pub async fn update_review(
    db: &DatabaseConnection,
    id: Uuid,
    patch: ReviewPatch,
) -> Result<review::Model, ServiceError> {
    let mut am: review::ActiveModel = review::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("review"))?
        .into();
    if let Some(client_name) = patch.client_name {
        validate::require("client_name", &client_name)?;
        am.client_name = Set(client_name);
    }
    if let Some(rating) = patch.rating {
        validate::validate_rating(rating)?;
        am.rating = Set(rating);
    }
    if let Some(title) = patch.title {
        am.title = Set(title);
    }
    if let Some(content) = patch.content {
        am.content = Set(content);
    }
    if let Some(service_type) = patch.service_type {
        am.service_type = Set(service_type);
    }
    if let Some(featured) = patch.featured {
        am.featured = Set(featured);
    }
    if let Some(approved) = patch.approved {
        am.approved = Set(approved);
    }
    if let Some(booking_id) = patch.booking_id {
        am.booking_id = Set(booking_id);
    }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete a review. Returns whether a row existed.
pub async fn delete_review(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = review::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// List reviews newest-first. The public site passes `approved = true`;
/// the homepage additionally filters on `featured`.
pub async fn list_reviews(
    db: &DatabaseConnection,
    approved: Option<bool>,
    featured: Option<bool>,
) -> Result<Vec<review::Model>, ServiceError> {
    let mut q = review::Entity::find();
    if let Some(a) = approved {
        q = q.filter(review::Column::Approved.eq(a));
    }
    if let Some(f) = featured {
        q = q.filter(review::Column::Featured.eq(f));
    }
    q.order_by_desc(review::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn sample_input() -> NewReview {
        NewReview {
            client_name: "Marco R.".into(),
            rating: 5,
            title: "Stunning photos".into(),
            content: "Every shot was perfect.".into(),
            service_type: "portrait".into(),
            booking_id: None,
        }
    }

    #[test]
    fn out_of_range_rating_rejected() {
        let mut input = sample_input();
        input.rating = 0;
        assert!(input.validate().is_err());
        input.rating = 6;
        assert!(input.validate().is_err());
        input.rating = 3;
        assert!(input.validate().is_ok());
    }

    #[tokio::test]
    async fn review_moderation_flow() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let created = create_review(&db, sample_input()).await?;
        assert!(!created.approved);
        assert!(!created.featured);

        let approved = update_review(
            &db,
            created.id,
            ReviewPatch { approved: Some(true), ..Default::default() },
        )
        .await?;
        assert!(approved.approved);

        let public = list_reviews(&db, Some(true), None).await?;
        assert!(public.iter().any(|r| r.id == created.id));

        // rating updates stay bounds-checked
        let err = update_review(
            &db,
            created.id,
            ReviewPatch { rating: Some(9), ..Default::default() },
        )
        .await;
        assert!(err.is_err());

        assert!(delete_review(&db, created.id).await?);
        Ok(())
    }
}
