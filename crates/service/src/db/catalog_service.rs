use chrono::Utc;
use models::service;
use models::types::StringList;
use models::validate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ServiceError;

fn default_active() -> bool {
    true
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewService {
    pub name: String,
    pub description: String,
    /// Starting price in minor currency units.
    pub price_from: i64,
    pub duration: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl NewService {
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate::require("name", &self.name)?;
        validate::require("description", &self.description)?;
        validate::require("duration", &self.duration)?;
        validate::require("category", &self.category)?;
        if self.price_from < 0 {
            return Err(ServiceError::Validation("price_from must be >= 0".into()));
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price_from: Option<i64>,
    pub duration: Option<String>,
    pub features: Option<Vec<String>>,
    pub category: Option<String>,
    #[serde(default)]
    pub image_url: Option<Option<String>>,
    pub popular: Option<bool>,
    pub active: Option<bool>,
}

/// Create a service package.
pub async fn create_service(
    db: &DatabaseConnection,
    input: NewService,
) -> Result<service::Model, ServiceError> {
    input.validate()?;
    let now = Utc::now();
    let am = service::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        description: Set(input.description),
        price_from: Set(input.price_from),
        duration: Set(input.duration),
        features: Set(StringList(input.features)),
        category: Set(input.category),
        image_url: Set(input.image_url),
        popular: Set(input.popular),
        active: Set(input.active),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get service by id.
pub async fn get_service(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<service::Model>, ServiceError> {
    service::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Apply a partial update to a service package.
pub async fn update_service(
    db: &DatabaseConnection,
    id: Uuid,
    patch: ServicePatch,
) -> Result<service::Model, ServiceError> {
    let mut am: service::ActiveModel = service::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("service"))?
        .into();
    if let Some(name) = patch.name {
        validate::require("name", &name)?;
        am.name = Set(name);
    }
    if let Some(description) = patch.description {
        am.description = Set(description);
    }
    if let Some(price_from) = patch.price_from {
        if price_from < 0 {
            return Err(ServiceError::Validation("price_from must be >= 0".into()));
        }
        am.price_from = Set(price_from);
    }
    if let Some(duration) = patch.duration {
        validate::require("duration", &duration)?;
        am.duration = Set(duration);
    }
    if let Some(features) = patch.features {
        am.features = Set(StringList(features));
    }
    if let Some(category) = patch.category {
        validate::require("category", &category)?;
        am.category = Set(category);
    }
    if let Some(image_url) = patch.image_url {
        am.image_url = Set(image_url);
    }
    if let Some(popular) = patch.popular {
        am.popular = Set(popular);
    }
    if let Some(active) = patch.active {
        am.active = Set(active);
    }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete a service. Bookings referencing it keep their row, the FK is
/// nulled by the schema.
pub async fn delete_service(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = service::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// List services newest-first with optional active/category filters.
pub async fn list_services(
    db: &DatabaseConnection,
    active: Option<bool>,
    category: Option<&str>,
) -> Result<Vec<service::Model>, ServiceError> {
    let mut q = service::Entity::find();
    if let Some(a) = active {
        q = q.filter(service::Column::Active.eq(a));
    }
    if let Some(c) = category {
        q = q.filter(service::Column::Category.eq(c));
    }
    q.order_by_desc(service::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn sample_input() -> NewService {
        NewService {
            name: "Portrait mini".into(),
            description: "30 minute studio session".into(),
            price_from: 15_000,
            duration: "30 minutes".into(),
            features: vec!["10 retouched photos".into()],
            category: "portrait".into(),
            image_url: None,
            popular: false,
            active: true,
        }
    }

    #[test]
    fn negative_price_rejected() {
        let mut input = sample_input();
        input.price_from = -1;
        assert!(matches!(input.validate(), Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn service_crud_service() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let created = create_service(&db, sample_input()).await?;
        let found = get_service(&db, created.id).await?.unwrap();
        assert_eq!(found.price_from, 15_000);

        let patch = ServicePatch { active: Some(false), popular: Some(true), ..Default::default() };
        let updated = update_service(&db, created.id, patch).await?;
        assert!(!updated.active);
        assert!(updated.popular);

        // inactive services drop out of the public listing filter
        let active_only = list_services(&db, Some(true), None).await?;
        assert!(active_only.iter().all(|s| s.id != created.id));

        assert!(delete_service(&db, created.id).await?);
        Ok(())
    }
}
