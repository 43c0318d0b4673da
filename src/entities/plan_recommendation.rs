use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// Completion is a boolean flip with timestamp; rows are never deleted.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "plan_recommendations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub plan_id: Option<i32>,
    pub title: String,
    pub category: String,
    pub priority: String,
    pub completed: bool,
    pub completed_at: Option<DateTime>,
    pub due_date: Option<Date>,
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
    #[sea_orm(
        belongs_to = "super::user_plan::Entity",
        from = "Column::PlanId",
        to = "super::user_plan::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    UserPlan,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::user_plan::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserPlan.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
