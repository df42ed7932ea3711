use crate::db::connect;
use crate::types::StringList;
use crate::{blog_post, booking, faq, portfolio_item, review, service, setting};
use anyhow::Result;
use chrono::{NaiveDate, Utc};
use migration::MigratorTrait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

fn sample_service() -> service::ActiveModel {
    service::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(format!("Wedding Classic {}", Uuid::new_v4())),
        description: Set("Full-day wedding coverage".into()),
        price_from: Set(120_000),
        duration: Set("8 hours".into()),
        features: Set(StringList(vec!["two photographers".into(), "online gallery".into()])),
        category: Set("wedding".into()),
        image_url: Set(None),
        popular: Set(true),
        active: Set(true),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    }
}

#[tokio::test]
async fn test_service_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let created = sample_service().insert(&db).await?;
    assert!(created.active);
    assert_eq!(created.features.len(), 2);

    let found = service::Entity::find_by_id(created.id).one(&db).await?;
    assert!(found.is_some());
    assert_eq!(found.unwrap().price_from, 120_000);

    let found_by_category = service::Entity::find()
        .filter(service::Column::Category.eq("wedding"))
        .filter(service::Column::Id.eq(created.id))
        .one(&db)
        .await?;
    assert!(found_by_category.is_some());

    service::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_booking_fk_to_service() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;
    let svc = sample_service().insert(&db).await?;

    let b = booking::ActiveModel {
        id: Set(Uuid::new_v4()),
        client_name: Set("Ana P.".into()),
        email: Set(format!("ana_{}@example.com", Uuid::new_v4())),
        phone: Set("+1 555 0100".into()),
        event_type: Set("wedding".into()),
        event_date: Set(NaiveDate::from_ymd_opt(2026, 10, 17).unwrap()),
        event_time: Set("14:00".into()),
        location: Set("Lakeside pavilion".into()),
        duration: Set("8 hours".into()),
        price: Set(Some(150_000)),
        status: Set(booking::BookingStatus::Pending),
        notes: Set(None),
        service_id: Set(Some(svc.id)),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };
    let created = b.insert(&db).await?;
    assert_eq!(created.status, booking::BookingStatus::Pending);
    assert_eq!(created.service_id, Some(svc.id));

    // deleting the referenced service nulls the FK, the booking survives
    service::Entity::delete_by_id(svc.id).exec(&db).await?;
    let after = booking::Entity::find_by_id(created.id).one(&db).await?.unwrap();
    assert_eq!(after.service_id, None);

    booking::Entity::delete_by_id(created.id).exec(&db).await?;
    Ok(())
}

#[tokio::test]
async fn test_review_crud_with_booking() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let r = review::ActiveModel {
        id: Set(Uuid::new_v4()),
        client_name: Set("Marco R.".into()),
        rating: Set(5),
        title: Set("Stunning photos".into()),
        content: Set("Every shot was perfect.".into()),
        service_type: Set("portrait".into()),
        featured: Set(false),
        approved: Set(false),
        booking_id: Set(None),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    };
    let created = r.insert(&db).await?;
    assert_eq!(created.rating, 5);
    assert!(!created.approved);

    let mut am: review::ActiveModel = created.clone().into();
    am.approved = Set(true);
    let approved = am.update(&db).await?;
    assert!(approved.approved);

    review::Entity::delete_by_id(created.id).exec(&db).await?;
    let gone = review::Entity::find_by_id(created.id).one(&db).await?;
    assert!(gone.is_none());
    Ok(())
}

#[tokio::test]
async fn test_content_tables_roundtrip() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let item = portfolio_item::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set("Golden hour".into()),
        description: Set("Sunset engagement shoot".into()),
        category: Set("engagement".into()),
        image_url: Set("https://cdn.example.com/golden.jpg".into()),
        featured: Set(true),
        tags: Set(StringList(vec!["sunset".into(), "outdoor".into()])),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    }
    .insert(&db)
    .await?;
    assert_eq!(item.tags.len(), 2);

    let post = blog_post::ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set("Five posing tips".into()),
        excerpt: Set("Quick wins for camera-shy clients".into()),
        content: Set("...".into()),
        author: Set("Studio team".into()),
        published_on: Set(NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()),
        category: Set("tips".into()),
        tags: Set(StringList(vec!["posing".into()])),
        image_url: Set(None),
        featured: Set(false),
        published: Set(true),
        views: Set(0),
        likes: Set(0),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    }
    .insert(&db)
    .await?;
    assert!(post.published);

    let entry = faq::ActiveModel {
        id: Set(Uuid::new_v4()),
        question: Set("Do you travel?".into()),
        answer: Set("Yes, within 200 km.".into()),
        category: Set("logistics".into()),
        sort_order: Set(3),
        active: Set(true),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    }
    .insert(&db)
    .await?;
    assert_eq!(entry.sort_order, 3);

    let key = format!("site_title_test_{}", Uuid::new_v4());
    let s = setting::ActiveModel {
        id: Set(Uuid::new_v4()),
        key: Set(key.clone()),
        value: Set(serde_json::json!("Luma Studio")),
        description: Set(Some("test key".into())),
        created_at: Set(Utc::now().into()),
        updated_at: Set(Utc::now().into()),
    }
    .insert(&db)
    .await?;
    let by_key = setting::Entity::find()
        .filter(setting::Column::Key.eq(key))
        .one(&db)
        .await?;
    assert_eq!(by_key.map(|m| m.id), Some(s.id));

    portfolio_item::Entity::delete_by_id(item.id).exec(&db).await?;
    blog_post::Entity::delete_by_id(post.id).exec(&db).await?;
    faq::Entity::delete_by_id(entry.id).exec(&db).await?;
    setting::Entity::delete_by_id(s.id).exec(&db).await?;
    Ok(())
}
