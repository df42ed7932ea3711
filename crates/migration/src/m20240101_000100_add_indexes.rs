use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Booking: status and event date drive the admin dashboard filters
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_status")
                    .table(Booking::Table)
                    .col(Booking::Status)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_booking_event_date")
                    .table(Booking::Table)
                    .col(Booking::EventDate)
                    .to_owned(),
            )
            .await?;

        // Message: unread counter
        manager
            .create_index(
                Index::create()
                    .name("idx_message_status")
                    .table(Message::Table)
                    .col(Message::Status)
                    .to_owned(),
            )
            .await?;

        // Review: public listing filters
        manager
            .create_index(
                Index::create()
                    .name("idx_review_approved")
                    .table(Review::Table)
                    .col(Review::Approved)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_review_featured")
                    .table(Review::Table)
                    .col(Review::Featured)
                    .to_owned(),
            )
            .await?;

        // Blog: published flag and category filter
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_post_published")
                    .table(BlogPost::Table)
                    .col(BlogPost::Published)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_blog_post_category")
                    .table(BlogPost::Table)
                    .col(BlogPost::Category)
                    .to_owned(),
            )
            .await?;

        // Portfolio: category and featured filters
        manager
            .create_index(
                Index::create()
                    .name("idx_portfolio_item_category")
                    .table(PortfolioItem::Table)
                    .col(PortfolioItem::Category)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_portfolio_item_featured")
                    .table(PortfolioItem::Table)
                    .col(PortfolioItem::Featured)
                    .to_owned(),
            )
            .await?;

        // FAQ: public listing is active + ordered
        manager
            .create_index(
                Index::create()
                    .name("idx_faq_active_sort")
                    .table(Faq::Table)
                    .col(Faq::Active)
                    .col(Faq::SortOrder)
                    .to_owned(),
            )
            .await?;

        // Setting: key is the logical primary key
        manager
            .create_index(
                Index::create()
                    .name("uniq_setting_key")
                    .table(Setting::Table)
                    .col(Setting::Key)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_booking_status").table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_booking_event_date").table(Booking::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_message_status").table(Message::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_review_approved").table(Review::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_review_featured").table(Review::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_blog_post_published").table(BlogPost::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_blog_post_category").table(BlogPost::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_portfolio_item_category").table(PortfolioItem::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop().name("idx_portfolio_item_featured").table(PortfolioItem::Table).to_owned(),
            )
            .await?;
        manager
            .drop_index(Index::drop().name("idx_faq_active_sort").table(Faq::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_setting_key").table(Setting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Booking {
    Table,
    Status,
    EventDate,
}

#[derive(DeriveIden)]
enum Message {
    Table,
    Status,
}

#[derive(DeriveIden)]
enum Review {
    Table,
    Approved,
    Featured,
}

#[derive(DeriveIden)]
enum BlogPost {
    Table,
    Published,
    Category,
}

#[derive(DeriveIden)]
enum PortfolioItem {
    Table,
    Category,
    Featured,
}

#[derive(DeriveIden)]
enum Faq {
    Table,
    Active,
    SortOrder,
}

#[derive(DeriveIden)]
enum Setting {
    Table,
    Key,
}
