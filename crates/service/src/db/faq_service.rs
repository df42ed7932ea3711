use chrono::Utc;
use models::faq;
use models::validate;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::errors::ServiceError;

#[derive(Clone, Debug, Deserialize)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
    pub category: String,
    /// Defaults to the end of the list when omitted.
    #[serde(default)]
    pub sort_order: Option<i32>,
    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

impl NewFaq {
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate::require("question", &self.question)?;
        validate::require("answer", &self.answer)?;
        validate::require("category", &self.category)?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct FaqPatch {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub category: Option<String>,
    pub sort_order: Option<i32>,
    pub active: Option<bool>,
}

async fn next_sort_order(db: &DatabaseConnection) -> Result<i32, ServiceError> {
    let last = faq::Entity::find()
        .order_by_desc(faq::Column::SortOrder)
        .limit(1)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(last.map(|m| m.sort_order + 1).unwrap_or(0))
}

/// Create an FAQ entry, appended to the end of the list unless a sort key
/// is given.
pub async fn create_faq(db: &DatabaseConnection, input: NewFaq) -> Result<faq::Model, ServiceError> {
    input.validate()?;
    let sort_order = match input.sort_order {
        Some(s) => s,
        None => next_sort_order(db).await?,
    };
    let now = Utc::now();
    let am = faq::ActiveModel {
        id: Set(Uuid::new_v4()),
        question: Set(input.question),
        answer: Set(input.answer),
        category: Set(input.category),
        sort_order: Set(sort_order),
        active: Set(input.active),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get FAQ by id.
pub async fn get_faq(db: &DatabaseConnection, id: Uuid) -> Result<Option<faq::Model>, ServiceError> {
    faq::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Apply a partial update to an FAQ entry.
pub async fn update_faq(
    db: &DatabaseConnection,
    id: Uuid,
    patch: FaqPatch,
) -> Result<faq::Model, ServiceError> {
    let mut am: faq::ActiveModel = faq::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("faq"))?
        .into();
    if let Some(question) = patch.question {
        validate::require("question", &question)?;
        am.question = Set(question);
    }
    if let Some(answer) = patch.answer {
        validate::require("answer", &answer)?;
        am.answer = Set(answer);
    }
    if let Some(category) = patch.category {
        am.category = Set(category);
    }
    if let Some(sort_order) = patch.sort_order {
        am.sort_order = Set(sort_order);
    }
    if let Some(active) = patch.active {
        am.active = Set(active);
    }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete an FAQ entry. Remaining rows keep their sort keys.
pub async fn delete_faq(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = faq::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// List FAQs in display order; the public route passes `active = true`.
pub async fn list_faqs(
    db: &DatabaseConnection,
    active: Option<bool>,
) -> Result<Vec<faq::Model>, ServiceError> {
    let mut q = faq::Entity::find();
    if let Some(a) = active {
        q = q.filter(faq::Column::Active.eq(a));
    }
    q.order_by_asc(faq::Column::SortOrder)
        .order_by_asc(faq::Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Shift the entry one slot towards the front (floor at 0). Only this
/// row's sort key changes; no cascading renumber.
pub async fn move_faq_up(db: &DatabaseConnection, id: Uuid) -> Result<faq::Model, ServiceError> {
    shift_sort_order(db, id, -1).await
}

/// Shift the entry one slot towards the back.
pub async fn move_faq_down(db: &DatabaseConnection, id: Uuid) -> Result<faq::Model, ServiceError> {
    shift_sort_order(db, id, 1).await
}

/// Sort keys never go below zero; shifting the front entry up is a no-op.
fn shifted_sort_order(current: i32, delta: i32) -> i32 {
    (current + delta).max(0)
}

async fn shift_sort_order(
    db: &DatabaseConnection,
    id: Uuid,
    delta: i32,
) -> Result<faq::Model, ServiceError> {
    let current = faq::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("faq"))?;
    let next = shifted_sort_order(current.sort_order, delta);
    debug!(%id, from = current.sort_order, to = next, "shifting faq sort order");
    let mut am: faq::ActiveModel = current.into();
    am.sort_order = Set(next);
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn sample_input(sort_order: Option<i32>) -> NewFaq {
        NewFaq {
            question: "Do you travel?".into(),
            answer: "Yes, within 200 km.".into(),
            category: "logistics".into(),
            sort_order,
            active: true,
        }
    }

    #[test]
    fn sort_order_floors_at_zero() {
        assert_eq!(shifted_sort_order(0, -1), 0);
        assert_eq!(shifted_sort_order(1, -1), 0);
        assert_eq!(shifted_sort_order(5, -1), 4);
        assert_eq!(shifted_sort_order(0, 1), 1);
    }

    #[test]
    fn empty_answer_rejected() {
        let mut input = sample_input(None);
        input.answer = String::new();
        assert!(input.validate().is_err());
    }

    #[tokio::test]
    async fn reorder_moves_only_the_target_row() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let a = create_faq(&db, sample_input(Some(5))).await?;
        let b = create_faq(&db, sample_input(Some(6))).await?;

        let moved = move_faq_up(&db, b.id).await?;
        assert_eq!(moved.sort_order, 5);

        // the sibling is untouched
        let a_after = get_faq(&db, a.id).await?.unwrap();
        assert_eq!(a_after.sort_order, 5);

        let down = move_faq_down(&db, b.id).await?;
        assert_eq!(down.sort_order, 6);

        // floor at zero
        let zeroed = update_faq(&db, b.id, FaqPatch { sort_order: Some(0), ..Default::default() }).await?;
        assert_eq!(zeroed.sort_order, 0);
        let still_zero = move_faq_up(&db, b.id).await?;
        assert_eq!(still_zero.sort_order, 0);

        delete_faq(&db, a.id).await?;
        delete_faq(&db, b.id).await?;
        Ok(())
    }
}
