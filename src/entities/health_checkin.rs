use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// One row per user per day. mood/energy_level/sleep_quality are 1-10.
// `symptoms` is a JSON string array; NULL when the user reported none.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "health_checkins")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub date: Date,
    pub mood: i32,
    pub energy_level: i32,
    pub sleep_quality: i32,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub symptoms: Option<serde_json::Value>,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
