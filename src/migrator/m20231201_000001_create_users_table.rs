use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Users::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Users::UserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Users::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Users::GivenName).string_len(255).not_null())
                    .col(ColumnDef::new(Users::Surname).string_len(255).not_null())
                    .col(ColumnDef::new(Users::City).string_len(255).not_null())
                    .col(ColumnDef::new(Users::PhoneNumber).string_len(20).not_null())
                    .col(ColumnDef::new(Users::ProfileDescription).text().not_null())
                    .col(ColumnDef::new(Users::PasswordHash).string_len(255).not_null())
                    .to_owned(),
            )
            .await?;

        // Member and caregiver share their key with the owning user row
        manager
            .create_table(
                Table::create()
                    .table(Member::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Member::MemberUserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Member::HouseRules).text().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-member-member_user_id")
                            .from(Member::Table, Member::MemberUserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Caregiver::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Caregiver::CaregiverUserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Caregiver::Photo).string_len(255).not_null())
                    .col(ColumnDef::new(Caregiver::Gender).string_len(10).not_null())
                    .col(
                        ColumnDef::new(Caregiver::CaregivingType)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Caregiver::HourlyRate)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-caregiver-caregiver_user_id")
                            .from(Caregiver::Table, Caregiver::CaregiverUserId)
                            .to(Users::Table, Users::UserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Caregiver::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Member::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Users::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Users {
    Table,
    UserId,
    Email,
    GivenName,
    Surname,
    City,
    PhoneNumber,
    ProfileDescription,
    PasswordHash,
}

#[derive(DeriveIden)]
enum Member {
    Table,
    MemberUserId,
    HouseRules,
}

#[derive(DeriveIden)]
enum Caregiver {
    Table,
    CaregiverUserId,
    Photo,
    Gender,
    CaregivingType,
    HourlyRate,
}
