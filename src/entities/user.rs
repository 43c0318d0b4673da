use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub name: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::health_checkin::Entity")]
    HealthCheckin,
    #[sea_orm(has_many = "super::user_plan::Entity")]
    UserPlan,
    #[sea_orm(has_many = "super::plan_recommendation::Entity")]
    PlanRecommendation,
    #[sea_orm(has_many = "super::chat_message::Entity")]
    ChatMessage,
    #[sea_orm(has_many = "super::coherence_data::Entity")]
    CoherenceData,
}

impl Related<super::health_checkin::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HealthCheckin.def()
    }
}

impl Related<super::plan_recommendation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlanRecommendation.def()
    }
}

impl Related<super::chat_message::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ChatMessage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
