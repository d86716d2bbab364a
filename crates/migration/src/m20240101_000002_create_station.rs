//! Create `station` table for refill locations.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Station::Table)
                    .if_not_exists()
                    .col(pk_auto(Station::Id))
                    .col(string_len(Station::Name, 100))
                    .col(double(Station::Latitude))
                    .col(double(Station::Longitude))
                    .col(
                        ColumnDef::new(Station::Description)
                            .string_len(255)
                            .null(),
                    )
                    .col(timestamp_with_time_zone(Station::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Station::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Station { Table, Id, Name, Latitude, Longitude, Description, CreatedAt }
