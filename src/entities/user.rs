use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub email: String,
    pub given_name: String,
    pub surname: String,
    pub city: String,
    pub phone_number: String,
    #[sea_orm(column_type = "Text")]
    pub profile_description: String,
    // argon2 PHC string; the plaintext never reaches the table
    #[serde(skip_serializing)]
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_one = "super::member::Entity")]
    Member,
    #[sea_orm(has_one = "super::caregiver::Entity")]
    Caregiver,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl Related<super::caregiver::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Caregiver.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
