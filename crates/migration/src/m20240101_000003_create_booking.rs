use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Booking::Table)
                    .if_not_exists()
                    .col(uuid(Booking::Id).primary_key())
                    .col(string_len(Booking::ClientName, 128).not_null())
                    .col(string_len(Booking::Email, 256).not_null())
                    .col(string_len(Booking::Phone, 32).not_null())
                    .col(string_len(Booking::EventType, 64).not_null())
                    .col(date(Booking::EventDate).not_null())
                    .col(string_len(Booking::EventTime, 32).not_null())
                    .col(string_len(Booking::Location, 256).not_null())
                    .col(string_len(Booking::Duration, 64).not_null())
                    .col(big_integer_null(Booking::Price))
                    .col(string_len(Booking::Status, 16).not_null())
                    .col(text_null(Booking::Notes))
                    .col(uuid_null(Booking::ServiceId))
                    .col(timestamp_with_time_zone(Booking::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Booking::UpdatedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_booking_service")
                            .from(Booking::Table, Booking::ServiceId)
                            .to(Service::Table, Service::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Booking::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Booking {
    Table,
    Id,
    ClientName,
    Email,
    Phone,
    EventType,
    EventDate,
    EventTime,
    Location,
    Duration,
    Price,
    Status,
    Notes,
    ServiceId,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Service {
    Table,
    Id,
}
