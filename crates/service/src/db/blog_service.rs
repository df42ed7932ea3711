use chrono::Utc;
use common::pagination::Pagination;
use models::blog_post;
use models::types::StringList;
use models::validate;
use sea_orm::prelude::Date;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::ServiceError;

#[derive(Clone, Debug, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
    pub published_on: Date,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub published: bool,
}

impl NewBlogPost {
    pub fn validate(&self) -> Result<(), ServiceError> {
        validate::require("title", &self.title)?;
        validate::require("excerpt", &self.excerpt)?;
        validate::require("content", &self.content)?;
        validate::require("author", &self.author)?;
        validate::require("category", &self.category)?;
        Ok(())
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub published_on: Option<Date>,
    pub category: Option<String>,
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub image_url: Option<Option<String>>,
    pub featured: Option<bool>,
    pub published: Option<bool>,
}

/// Create a blog post. Counters start at zero.
pub async fn create_blog_post(
    db: &DatabaseConnection,
    input: NewBlogPost,
) -> Result<blog_post::Model, ServiceError> {
    input.validate()?;
    let now = Utc::now();
    let am = blog_post::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title),
        excerpt: Set(input.excerpt),
        content: Set(input.content),
        author: Set(input.author),
        published_on: Set(input.published_on),
        category: Set(input.category),
        tags: Set(StringList(input.tags)),
        image_url: Set(input.image_url),
        featured: Set(input.featured),
        published: Set(input.published),
        views: Set(0),
        likes: Set(0),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    };
    am.insert(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Get blog post by id.
pub async fn get_blog_post(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<Option<blog_post::Model>, ServiceError> {
    blog_post::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))
}

/// Apply a partial update to a blog post.
pub async fn update_blog_post(
    db: &DatabaseConnection,
    id: Uuid,
    patch: BlogPostPatch,
) -> Result<blog_post::Model, ServiceError> {
    let mut am: blog_post::ActiveModel = blog_post::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("blog post"))?
        .into();
    if let Some(title) = patch.title {
        validate::require("title", &title)?;
        am.title = Set(title);
    }
    if let Some(excerpt) = patch.excerpt {
        am.excerpt = Set(excerpt);
    }
    if let Some(content) = patch.content {
        am.content = Set(content);
    }
    if let Some(author) = patch.author {
        am.author = Set(author);
    }
    if let Some(published_on) = patch.published_on {
        am.published_on = Set(published_on);
    }
    if let Some(category) = patch.category {
        validate::require("category", &category)?;
        am.category = Set(category);
    }
    if let Some(tags) = patch.tags {
        am.tags = Set(StringList(tags));
    }
    if let Some(image_url) = patch.image_url {
        am.image_url = Set(image_url);
    }
    if let Some(featured) = patch.featured {
        am.featured = Set(featured);
    }
    if let Some(published) = patch.published {
        am.published = Set(published);
    }
    am.updated_at = Set(Utc::now().into());
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Delete a blog post. Returns whether a row existed.
pub async fn delete_blog_post(db: &DatabaseConnection, id: Uuid) -> Result<bool, ServiceError> {
    let res = blog_post::Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}

/// List blog posts newest-first with optional published/category filters
/// and optional pagination.
pub async fn list_blog_posts(
    db: &DatabaseConnection,
    published: Option<bool>,
    category: Option<&str>,
    page: Option<Pagination>,
) -> Result<Vec<blog_post::Model>, ServiceError> {
    let mut q = blog_post::Entity::find();
    if let Some(p) = published {
        q = q.filter(blog_post::Column::Published.eq(p));
    }
    if let Some(c) = category {
        q = q.filter(blog_post::Column::Category.eq(c));
    }
    let q = q.order_by_desc(blog_post::Column::CreatedAt);
    match page {
        Some(p) => {
            let (page_idx, per_page) = p.normalize();
            q.paginate(db, per_page)
                .fetch_page(page_idx)
                .await
                .map_err(|e| ServiceError::Db(e.to_string()))
        }
        None => q.all(db).await.map_err(|e| ServiceError::Db(e.to_string())),
    }
}

/// Bump the view counter by one.
pub async fn record_view(db: &DatabaseConnection, id: Uuid) -> Result<blog_post::Model, ServiceError> {
    let post = blog_post::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("blog post"))?;
    let views = post.views + 1;
    let mut am: blog_post::ActiveModel = post.into();
    am.views = Set(views);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

/// Bump the like counter by one.
pub async fn like_blog_post(
    db: &DatabaseConnection,
    id: Uuid,
) -> Result<blog_post::Model, ServiceError> {
    let post = blog_post::Entity::find_by_id(id)
        .one(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?
        .ok_or_else(|| ServiceError::not_found("blog post"))?;
    let likes = post.likes + 1;
    let mut am: blog_post::ActiveModel = post.into();
    am.likes = Set(likes);
    am.update(db).await.map_err(|e| ServiceError::Db(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use chrono::NaiveDate;

    fn sample_input() -> NewBlogPost {
        NewBlogPost {
            title: "Five posing tips".into(),
            excerpt: "Quick wins for camera-shy clients".into(),
            content: "...".into(),
            author: "Studio team".into(),
            published_on: NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
            category: "tips".into(),
            tags: vec!["posing".into()],
            image_url: None,
            featured: false,
            published: false,
        }
    }

    #[test]
    fn draft_requires_title_and_author() {
        let mut input = sample_input();
        input.title = String::new();
        assert!(input.validate().is_err());

        let mut input = sample_input();
        input.author = "  ".into();
        assert!(input.validate().is_err());
    }

    #[tokio::test]
    async fn blog_publish_and_counters() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;

        let created = create_blog_post(&db, sample_input()).await?;
        assert!(!created.published);
        assert_eq!(created.views, 0);

        // drafts are invisible to the public filter
        let public = list_blog_posts(&db, Some(true), None, None).await?;
        assert!(public.iter().all(|p| p.id != created.id));

        let published = update_blog_post(
            &db,
            created.id,
            BlogPostPatch { published: Some(true), ..Default::default() },
        )
        .await?;
        assert!(published.published);

        let viewed = record_view(&db, created.id).await?;
        assert_eq!(viewed.views, 1);
        let liked = like_blog_post(&db, created.id).await?;
        assert_eq!(liked.likes, 1);
        assert_eq!(liked.views, 1);

        assert!(delete_blog_post(&db, created.id).await?);
        Ok(())
    }
}
