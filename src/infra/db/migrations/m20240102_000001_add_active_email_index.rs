//! Migration: Email is unique among admins with `removed = false`.

use sea_orm_migration::prelude::*;

const INDEX_NAME: &str = "idx_admins_email_active";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Partial index, same syntax on PostgreSQL and SQLite
        manager
            .get_connection()
            .execute_unprepared(&format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS {} ON admins (email) WHERE removed = false",
                INDEX_NAME
            ))
            .await?;

        // Search filters on removed = false
        manager
            .create_index(
                Index::create()
                    .name("idx_admins_removed")
                    .table(Admins::Table)
                    .col(Admins::Removed)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_admins_removed")
                    .table(Admins::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(INDEX_NAME)
                    .table(Admins::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Admins {
    Table,
    Removed,
}
