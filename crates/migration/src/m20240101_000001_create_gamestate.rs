//! Create `gamestate` table.
//!
//! Holds the whole map document as opaque JSON text under a fixed key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gamestate::Table)
                    .if_not_exists()
                    .col(integer(Gamestate::Id).primary_key())
                    .col(text(Gamestate::Data).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Gamestate::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Gamestate { Table, Id, Data }
