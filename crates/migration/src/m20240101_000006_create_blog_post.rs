use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlogPost::Table)
                    .if_not_exists()
                    .col(uuid(BlogPost::Id).primary_key())
                    .col(string_len(BlogPost::Title, 256).not_null())
                    .col(text(BlogPost::Excerpt).not_null())
                    .col(text(BlogPost::Content).not_null())
                    .col(string_len(BlogPost::Author, 128).not_null())
                    .col(date(BlogPost::PublishedOn).not_null())
                    .col(string_len(BlogPost::Category, 64).not_null())
                    .col(json_binary(BlogPost::Tags).not_null())
                    .col(string_null(BlogPost::ImageUrl))
                    .col(boolean(BlogPost::Featured).not_null())
                    .col(boolean(BlogPost::Published).not_null())
                    .col(big_integer(BlogPost::Views).not_null())
                    .col(big_integer(BlogPost::Likes).not_null())
                    .col(timestamp_with_time_zone(BlogPost::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(BlogPost::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(BlogPost::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum BlogPost {
    Table,
    Id,
    Title,
    Excerpt,
    Content,
    Author,
    PublishedOn,
    Category,
    Tags,
    ImageUrl,
    Featured,
    Published,
    Views,
    Likes,
    CreatedAt,
    UpdatedAt,
}
