use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(create_profile_table()).await?;

        // Activation links resolve by token.
        manager
            .create_index(
                Index::create()
                    .name("idx_profile_activation_token")
                    .table(Profile::Table)
                    .col(Profile::ActivationToken)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profile::Table).to_owned())
            .await
    }
}

fn create_profile_table() -> TableCreateStatement {
    Table::create()
        .table(Profile::Table)
        .if_not_exists()
        .col(
            ColumnDef::new(Profile::Id)
                .big_integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(ColumnDef::new(Profile::Name).string_len(50).not_null())
        .col(
            ColumnDef::new(Profile::Email)
                .string_len(128)
                .not_null()
                .unique_key(),
        )
        .col(
            ColumnDef::new(Profile::ProfileType)
                .small_integer()
                .not_null(),
        )
        .col(
            ColumnDef::new(Profile::GithubToken)
                .char_len(64)
                .not_null(),
        )
        .col(ColumnDef::new(Profile::Bio).text().not_null())
        .col(ColumnDef::new(Profile::Rate).decimal_len(5, 2).not_null())
        .col(ColumnDef::new(Profile::Image).char_len(32).not_null())
        // Timestamps carry microsecond precision; DATETIME(0) would
        // round the fractional part away.
        .col(
            ColumnDef::new(Profile::LastEditAt)
                .custom(Alias::new("datetime(6)"))
                .not_null(),
        )
        .col(ColumnDef::new(Profile::ActivationToken).char_len(32).null())
        .col(
            ColumnDef::new(Profile::PasswordHash)
                .char_len(128)
                .not_null(),
        )
        .col(
            ColumnDef::new(Profile::PasswordSalt)
                .char_len(64)
                .not_null(),
        )
        .to_owned()
}

#[derive(DeriveIden)]
pub enum Profile {
    Table,
    Id,
    Name,
    Email,
    ProfileType,
    GithubToken,
    Bio,
    Rate,
    Image,
    LastEditAt,
    ActivationToken,
    PasswordHash,
    PasswordSalt,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_edit_at_keeps_fractional_seconds() {
        let sql = create_profile_table().to_string(MysqlQueryBuilder);
        assert!(sql.contains("datetime(6)"), "{sql}");
    }
}
