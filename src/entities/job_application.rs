use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Keyed by `(caregiver_user_id, job_id)`, in that order: a caregiver
/// applies to a given job at most once.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "job_application")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub caregiver_user_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub job_id: i32,
    pub date_applied: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::caregiver::Entity",
        from = "Column::CaregiverUserId",
        to = "super::caregiver::Column::CaregiverUserId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Caregiver,
    #[sea_orm(
        belongs_to = "super::job::Entity",
        from = "Column::JobId",
        to = "super::job::Column::JobId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Job,
}

impl Related<super::caregiver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Caregiver.def()
    }
}

impl Related<super::job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Job.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
