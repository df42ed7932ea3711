use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PortfolioItem::Table)
                    .if_not_exists()
                    .col(uuid(PortfolioItem::Id).primary_key())
                    .col(string_len(PortfolioItem::Title, 256).not_null())
                    .col(text(PortfolioItem::Description).not_null())
                    .col(string_len(PortfolioItem::Category, 64).not_null())
                    .col(string_len(PortfolioItem::ImageUrl, 512).not_null())
                    .col(boolean(PortfolioItem::Featured).not_null())
                    .col(json_binary(PortfolioItem::Tags).not_null())
                    .col(timestamp_with_time_zone(PortfolioItem::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(PortfolioItem::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(PortfolioItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum PortfolioItem {
    Table,
    Id,
    Title,
    Description,
    Category,
    ImageUrl,
    Featured,
    Tags,
    CreatedAt,
    UpdatedAt,
}
