//! Migrator registering table migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_service;
mod m20240101_000002_create_portfolio_item;
mod m20240101_000003_create_booking;
mod m20240101_000004_create_message;
mod m20240101_000005_create_review;
mod m20240101_000006_create_blog_post;
mod m20240101_000007_create_faq;
mod m20240101_000008_create_setting;
mod m20240101_000100_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_service::Migration),
            Box::new(m20240101_000002_create_portfolio_item::Migration),
            // booking references service, review references booking
            Box::new(m20240101_000003_create_booking::Migration),
            Box::new(m20240101_000004_create_message::Migration),
            Box::new(m20240101_000005_create_review::Migration),
            Box::new(m20240101_000006_create_blog_post::Migration),
            Box::new(m20240101_000007_create_faq::Migration),
            Box::new(m20240101_000008_create_setting::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000100_add_indexes::Migration),
        ]
    }
}
