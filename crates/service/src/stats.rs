//! Dashboard aggregates. The numbers are computed in one pure pass over
//! the rows so the formulas stay unit-testable without a database.

use models::blog_post;
use models::booking::{self, BookingStatus};
use models::faq;
use models::message::{self, MessageStatus};
use models::portfolio_item;
use models::review;
use models::service as catalog;
use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait};
use serde::Serialize;

use crate::errors::ServiceError;

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct StudioStats {
    pub total_bookings: u64,
    pub pending_bookings: u64,
    pub total_messages: u64,
    pub unread_messages: u64,
    pub total_reviews: u64,
    pub pending_reviews: u64,
    pub total_blog_posts: u64,
    pub published_posts: u64,
    pub total_portfolio_items: u64,
    pub total_services: u64,
    pub total_faqs: u64,
    /// Sum of quoted prices in minor units; unquoted bookings contribute 0.
    pub total_revenue: i64,
    /// Mean rating over approved reviews; `None` when nothing is approved.
    pub average_rating: Option<f64>,
}

/// Pure aggregation over already-fetched rows.
pub fn compute(
    bookings: &[booking::Model],
    messages: &[message::Model],
    reviews: &[review::Model],
    posts: &[blog_post::Model],
    portfolio_count: u64,
    service_count: u64,
    faq_count: u64,
) -> StudioStats {
    let pending_bookings =
        bookings.iter().filter(|b| b.status == BookingStatus::Pending).count() as u64;
    let total_revenue: i64 = bookings.iter().filter_map(|b| b.price).sum();

    let unread_messages =
        messages.iter().filter(|m| m.status == MessageStatus::Unread).count() as u64;

    let approved: Vec<_> = reviews.iter().filter(|r| r.approved).collect();
    let pending_reviews = reviews.len() as u64 - approved.len() as u64;
    let average_rating = if approved.is_empty() {
        None
    } else {
        let sum: i64 = approved.iter().map(|r| r.rating as i64).sum();
        Some(sum as f64 / approved.len() as f64)
    };

    let published_posts = posts.iter().filter(|p| p.published).count() as u64;

    StudioStats {
        total_bookings: bookings.len() as u64,
        pending_bookings,
        total_messages: messages.len() as u64,
        unread_messages,
        total_reviews: reviews.len() as u64,
        pending_reviews,
        total_blog_posts: posts.len() as u64,
        published_posts,
        total_portfolio_items: portfolio_count,
        total_services: service_count,
        total_faqs: faq_count,
        total_revenue,
        average_rating,
    }
}

/// Fetch everything the dashboard needs and aggregate.
pub async fn collect(db: &DatabaseConnection) -> Result<StudioStats, ServiceError> {
    let bookings = booking::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let messages = message::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let reviews = review::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let posts = blog_post::Entity::find()
        .all(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let portfolio_count = portfolio_item::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let service_count = catalog::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;
    let faq_count = faq::Entity::find()
        .count(db)
        .await
        .map_err(|e| ServiceError::Db(e.to_string()))?;

    Ok(compute(
        &bookings,
        &messages,
        &reviews,
        &posts,
        portfolio_count,
        service_count,
        faq_count,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use uuid::Uuid;

    fn booking(status: BookingStatus, price: Option<i64>) -> booking::Model {
        let now = Utc::now();
        booking::Model {
            id: Uuid::new_v4(),
            client_name: "Ana".into(),
            email: "ana@example.com".into(),
            phone: "+1 555 0100".into(),
            event_type: "wedding".into(),
            event_date: NaiveDate::from_ymd_opt(2026, 6, 20).unwrap(),
            event_time: "14:00".into(),
            location: "Riverside park".into(),
            duration: "4h".into(),
            price,
            status,
            notes: None,
            service_id: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    fn review(approved: bool, rating: i32) -> review::Model {
        let now = Utc::now();
        review::Model {
            id: Uuid::new_v4(),
            client_name: "Marco".into(),
            rating,
            title: "Great".into(),
            content: "Really great.".into(),
            service_type: "portrait".into(),
            featured: false,
            approved,
            booking_id: None,
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[test]
    fn empty_dataset_yields_zeroes_and_no_rating() {
        let stats = compute(&[], &[], &[], &[], 0, 0, 0);
        assert_eq!(stats.total_bookings, 0);
        assert_eq!(stats.total_revenue, 0);
        assert_eq!(stats.average_rating, None);
    }

    #[test]
    fn revenue_ignores_unquoted_bookings() {
        let bookings = vec![
            booking(BookingStatus::Confirmed, Some(150_00)),
            booking(BookingStatus::Pending, None),
            booking(BookingStatus::Completed, Some(320_00)),
        ];
        let stats = compute(&bookings, &[], &[], &[], 0, 0, 0);
        assert_eq!(stats.total_revenue, 470_00);
        assert_eq!(stats.pending_bookings, 1);
        assert_eq!(stats.total_bookings, 3);
    }

    #[test]
    fn confirming_a_booking_drops_the_pending_count() {
        let mut bookings = vec![
            booking(BookingStatus::Pending, None),
            booking(BookingStatus::Pending, Some(150_00)),
            booking(BookingStatus::Completed, Some(320_00)),
        ];
        let before = compute(&bookings, &[], &[], &[], 0, 0, 0);
        assert_eq!(before.pending_bookings, 2);

        bookings[0].status = BookingStatus::Confirmed;
        let after = compute(&bookings, &[], &[], &[], 0, 0, 0);
        assert_eq!(after.pending_bookings, before.pending_bookings - 1);
        // everything else holds steady
        assert_eq!(after.total_bookings, before.total_bookings);
        assert_eq!(after.total_revenue, before.total_revenue);
    }

    #[test]
    fn average_rating_over_approved_only() {
        let reviews = vec![review(true, 5), review(true, 4), review(false, 1)];
        let stats = compute(&[], &[], &reviews, &[], 0, 0, 0);
        assert_eq!(stats.average_rating, Some(4.5));
        assert_eq!(stats.pending_reviews, 1);
        assert_eq!(stats.total_reviews, 3);
    }
}
