use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Message::Table)
                    .if_not_exists()
                    .col(uuid(Message::Id).primary_key())
                    .col(string_len(Message::Name, 128).not_null())
                    .col(string_len(Message::Email, 256).not_null())
                    .col(string_len_null(Message::Phone, 32))
                    .col(string_len(Message::Subject, 256).not_null())
                    .col(text(Message::Body).not_null())
                    .col(string_len(Message::Status, 16).not_null())
                    .col(string_len(Message::Priority, 16).not_null())
                    .col(timestamp_with_time_zone(Message::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Message::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Message::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Message {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Subject,
    Body,
    Status,
    Priority,
    CreatedAt,
    UpdatedAt,
}
