use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "job")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub job_id: i32,
    pub member_user_id: i32,
    pub required_caregiving_type: String,
    #[sea_orm(column_type = "Text")]
    pub other_requirements: String,
    pub date_posted: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberUserId",
        to = "super::member::Column::MemberUserId",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Member,
    #[sea_orm(has_many = "super::job_application::Entity")]
    JobApplication,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::job_application::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::JobApplication.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
