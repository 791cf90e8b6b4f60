use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000003_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Consent::Table)
                    .if_not_exists()
                    .col(pk_auto(Consent::Id))
                    .col(integer(Consent::UserId))
                    .col(string_len(Consent::ConsentType, 32))
                    .col(string_len(Consent::Status, 16).default("PENDING"))
                    .col(timestamp_null(Consent::GrantedAt))
                    .col(timestamp_null(Consent::RevokedAt))
                    .col(timestamp_null(Consent::ExpiresAt))
                    .col(string_null(Consent::PrivacyPolicyVersion))
                    .col(string_null(Consent::TermsVersion))
                    .col(string_null(Consent::IpAddress))
                    .col(string_null(Consent::UserAgent))
                    .col(
                        timestamp(Consent::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Consent::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_consent_user_id")
                            .from(Consent::Table, Consent::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_consent_user_type_unique")
                            .col(Consent::UserId)
                            .col(Consent::ConsentType),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Consent::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Consent {
    Table,
    Id,
    UserId,
    ConsentType,
    Status,
    GrantedAt,
    RevokedAt,
    ExpiresAt,
    PrivacyPolicyVersion,
    TermsVersion,
    IpAddress,
    UserAgent,
    CreatedAt,
    UpdatedAt,
}
