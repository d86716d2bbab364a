use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Station: composite index on coordinates for map viewport queries
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_station_coordinates")
                    .table(Station::Table)
                    .col(Station::Latitude)
                    .col(Station::Longitude)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_station_coordinates").to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Station { Table, Latitude, Longitude }
