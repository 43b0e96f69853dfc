use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "appointment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub appointment_id: i32,
    pub caregiver_user_id: i32,
    pub member_user_id: i32,
    pub appointment_date: Date,
    pub appointment_time: Time,
    pub work_hours: i32,
    pub status: String,
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
        belongs_to = "super::member::Entity",
        from = "Column::MemberUserId",
        to = "super::member::Column::MemberUserId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Member,
}

impl Related<super::caregiver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Caregiver.def()
    }
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
