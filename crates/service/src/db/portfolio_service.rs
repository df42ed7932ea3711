use chrono::Utc;
use models::portfolio_item;
use models::types::StringList;
use models::validate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ServiceError;

#[derive(Clone, Debug, Deserialize)]
pub struct NewPortfolioItem {
    pub title: String,
    pub description: String,
    pub category: String,
    pub image_url: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl NewPortfolioItem {
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate::require("title", &self.title)?;
        validate::require("description", &self.description)?;
        validate::require("category", &self.category)?;
        validate::require("image_url", &self.image_url)?;
        Ok(())
    }
}

/// Partial update; absent fields stay untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PortfolioItemPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub featured: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// Create a portfolio item.
pub async fn create_portfolio_item(
    db: &DatabaseConnection,
    input: NewPortfolioItem,
) -> Result<portfolio_item::Model, ServiceError> {
    input.validate()?;
    let now = Utc::now();
    let am = portfolio_item::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        description: Set(input.description),
        category: Set(input.category),
        image_url: Set(input.image_url),
        featured: Set(input.featured),
        tags: Set(StringList(input.tags)),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get portfolio item by id.
pub async fn get_portfolio_item(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<portfolio_item::Model>, ServiceError> {
    portfolio_item::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Apply a partial update to a portfolio item.
pub async fn update_portfolio_item(
    db: &DatabaseConnection,
    id: Uuid,
    patch: PortfolioItemPatch,
) -> Result<portfolio_item::Model, ServiceError> {
    let mut am: portfolio_item::ActiveModel = portfolio_item::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("portfolio item"))?
        .into();
    if let Some(title) = patch.title {
        validate::require("title", &title)?;
        am.title = Set(title);
    }
    if let Some(description) = patch.description {
        am.description = Set(description);
    }
    if let Some(category) = patch.category {
        validate::require("category", &category)?;
        am.category = Set(category);
    }
    if let Some(image_url) = patch.image_url {
        validate::require("image_url", &image_url)?;
        am.image_url = Set(image_url);
    }
    if let Some(featured) = patch.featured {
        am.featured = Set(featured);
    }
    if let Some(tags) = patch.tags {
        am.tags = Set(StringList(tags));
    }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete a portfolio item. Returns whether a row existed.
pub async fn delete_portfolio_item(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = portfolio_item::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// List portfolio items newest-first, optionally filtered by category and
/// the featured flag.
pub async fn list_portfolio_items(
    db: &DatabaseConnection,
    category: Option<&str>,
    featured: Option<bool>,
) -> Result<Vec<portfolio_item::Model>, ServiceError> {
    let mut q = portfolio_item::Entity::find();
    if let Some(c) = category {
        q = q.filter(portfolio_item::Column::Category.eq(c));
    }
    if let Some(f) = featured {
        q = q.filter(portfolio_item::Column::Featured.eq(f));
    }
    q.order_by_desc(portfolio_item::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn sample_input() -> NewPortfolioItem {
        NewPortfolioItem {
            title: "Golden hour".into(),
            description: "Sunset engagement shoot".into(),
            category: "engagement".into(),
            image_url: "https://cdn.example.com/golden.jpg".into(),
            featured: false,
            tags: vec!["sunset".into()],
        }
    }

    #[test]
    fn create_requires_title_and_image() {
        let mut input = sample_input();
        input.title = " ".into();
        assert!(matches!(input.validate(), Err(ServiceError::Model(_))));

        let mut input = sample_input();
        input.image_url = String::new();
        assert!(input.validate().is_err());

        assert!(sample_input().validate().is_ok());
    }

    #[tokio::test]
    async fn portfolio_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let created = create_portfolio_item(&db, sample_input()).await?;
        assert!(!created.featured);

        // newest-first: the fresh item leads the list
        let list = list_portfolio_items(&db, Some("engagement"), None).await?;
        assert_eq!(list.first().map(|m| m.id), Some(created.id));

        let patch = PortfolioItemPatch { featured: Some(true), ..Default::default() };
        let updated = update_portfolio_item(&db, created.id, patch).await?;
        assert!(updated.featured);
        assert_eq!(updated.title, "Golden hour");

        assert!(delete_portfolio_item(&db, created.id).await?);
        assert!(!delete_portfolio_item(&db, created.id).await?);
        assert!(get_portfolio_item(&db, created.id).await?.is_none());
        Ok(())
    }
}
