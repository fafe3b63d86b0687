use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260829_000001_create_user_table::User;

static IDX_FAVORITE_USER_ID: &str = "idx_favorite_user_id";
static FK_FAVORITE_USER_ID: &str = "fk_favorite_user_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // CharacterId and VehicleId carry no foreign keys: favorites may
        // outlive the catalog row they reference, and the listing skips such
        // orphans. There is also no uniqueness constraint per (user, target);
        // duplicate prevention happens at write time in the service layer.
        manager
            .create_table(
                Table::create()
                    .table(Favorite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favorite::Id))
                    .col(integer(Favorite::UserId))
                    .col(integer_null(Favorite::CharacterId))
                    .col(integer_null(Favorite::VehicleId))
                    .col(timestamp(Favorite::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .col(Favorite::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_FAVORITE_USER_ID)
                    .from_tbl(Favorite::Table)
                    .from_col(Favorite::UserId)
                    .to_tbl(User::Table)
                    .to_col(User::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVORITE_USER_ID)
                    .table(Favorite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favorite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favorite {
    Table,
    Id,
    UserId,
    CharacterId,
    VehicleId,
    CreatedAt,
}
