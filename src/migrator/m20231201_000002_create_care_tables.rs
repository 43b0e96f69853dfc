use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Address::MemberUserId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Address::HouseNumber).string_len(10).not_null())
                    .col(ColumnDef::new(Address::Street).string_len(255).not_null())
                    .col(ColumnDef::new(Address::Town).string_len(255).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-address-member_user_id")
                            .from(Address::Table, Address::MemberUserId)
                            .to(Member::Table, Member::MemberUserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Appointment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Appointment::AppointmentId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Appointment::CaregiverUserId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Appointment::MemberUserId).integer().not_null())
                    .col(ColumnDef::new(Appointment::AppointmentDate).date().not_null())
                    .col(ColumnDef::new(Appointment::AppointmentTime).time().not_null())
                    .col(ColumnDef::new(Appointment::WorkHours).integer().not_null())
                    .col(ColumnDef::new(Appointment::Status).string_len(255).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-appointment-caregiver_user_id")
                            .from(Appointment::Table, Appointment::CaregiverUserId)
                            .to(Caregiver::Table, Caregiver::CaregiverUserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-appointment-member_user_id")
                            .from(Appointment::Table, Appointment::MemberUserId)
                            .to(Member::Table, Member::MemberUserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Job::JobId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Job::MemberUserId).integer().not_null())
                    .col(
                        ColumnDef::new(Job::RequiredCaregivingType)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Job::OtherRequirements).text().not_null())
                    .col(ColumnDef::new(Job::DatePosted).date().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-job-member_user_id")
                            .from(Job::Table, Job::MemberUserId)
                            .to(Member::Table, Member::MemberUserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(JobApplication::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobApplication::CaregiverUserId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(JobApplication::JobId).integer().not_null())
                    .col(ColumnDef::new(JobApplication::DateApplied).date().not_null())
                    .primary_key(
                        Index::create()
                            .col(JobApplication::CaregiverUserId)
                            .col(JobApplication::JobId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-job_application-caregiver_user_id")
                            .from(JobApplication::Table, JobApplication::CaregiverUserId)
                            .to(Caregiver::Table, Caregiver::CaregiverUserId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-job_application-job_id")
                            .from(JobApplication::Table, JobApplication::JobId)
                            .to(Job::Table, Job::JobId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // FK lookup indexes
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_appointment_caregiver_user_id")
                    .table(Appointment::Table)
                    .col(Appointment::CaregiverUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_appointment_member_user_id")
                    .table(Appointment::Table)
                    .col(Appointment::MemberUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_job_member_user_id")
                    .table(Job::Table)
                    .col(Job::MemberUserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_job_application_job_id")
                    .table(JobApplication::Table)
                    .col(JobApplication::JobId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobApplication::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Appointment::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Member {
    Table,
    MemberUserId,
}

#[derive(DeriveIden)]
enum Caregiver {
    Table,
    CaregiverUserId,
}

#[derive(DeriveIden)]
enum Address {
    Table,
    MemberUserId,
    HouseNumber,
    Street,
    Town,
}

#[derive(DeriveIden)]
enum Appointment {
    Table,
    AppointmentId,
    CaregiverUserId,
    MemberUserId,
    AppointmentDate,
    AppointmentTime,
    WorkHours,
    Status,
}

#[derive(DeriveIden)]
enum Job {
    Table,
    JobId,
    MemberUserId,
    RequiredCaregivingType,
    OtherRequirements,
    DatePosted,
}

#[derive(DeriveIden)]
enum JobApplication {
    Table,
    CaregiverUserId,
    JobId,
    DateApplied,
}
