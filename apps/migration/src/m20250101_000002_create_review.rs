use sea_orm_migration::prelude::*;

use crate::m20250101_000001_create_profile::Profile;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_review_table()).await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_tutor_profile_id")
                    .table(Review::Table)
                    .col(Review::TutorProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_student_profile_id")
                    .table(Review::Table)
                    .col(Review::StudentProfileId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

fn create_review_table() -> TableCreateStatement {
    Table::create()
        .table(Review::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Review::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Review::StudentProfileId)
                .big_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(Review::TutorProfileId)
                .big_integer()
                .not_null(),
        )
        .col(ColumnDef::new(Review::Rating).small_integer().not_null())
        .col(ColumnDef::new(Review::Text).text().not_null())
        .col(
            ColumnDef::new(Review::CreatedAt)
                .custom(Alias::new("datetime(6)"))
                .not_null(),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_review_student_profile")
                .from(Review::Table, Review::StudentProfileId)
                .to(Profile::Table, Profile::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_review_tutor_profile")
                .from(Review::Table, Review::TutorProfileId)
                .to(Profile::Table, Profile::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

#[derive(DeriveIden)]
enum Review {
    Table,
    Id,
    StudentProfileId,
    TutorProfileId,
    Rating,
    Text,
    CreatedAt,
}
