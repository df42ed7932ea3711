use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Faq::Table)
                    .if_not_exists()
                    .col(uuid(Faq::Id).primary_key())
                    .col(text(Faq::Question).not_null())
                    .col(text(Faq::Answer).not_null())
                    .col(string_len(Faq::Category, 64).not_null())
                    // manual sort key; duplicates allowed, display order only
                    .col(integer(Faq::SortOrder).not_null())
                    .col(boolean(Faq::Active).not_null())
                    .col(timestamp_with_time_zone(Faq::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Faq::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Faq::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Faq {
    Table,
    Id,
    Question,
    Answer,
    Category,
    SortOrder,
    Active,
    CreatedAt,
    UpdatedAt,
}
