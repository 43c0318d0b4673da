use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

// `load` is the 0-100 severity driving all priority banding.
// `category` holds a health_systems slug; the original schema kept this as a
// loose string rather than a foreign key.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "health_issues")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub category: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub load: i32,
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub recommendations: Option<serde_json::Value>,
    #[sea_orm(column_type = "Text", nullable)]
    pub detailed_info: Option<String>,
    // {diet: [...], lifestyle: [...], supplements: [...]}
    #[sea_orm(column_type = "JsonBinary", nullable)]
    pub specific_advice: Option<serde_json::Value>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::issue_detail::Entity")]
    IssueDetail,
    #[sea_orm(has_many = "super::scanner_component::Entity")]
    ScannerComponent,
    #[sea_orm(has_many = "super::issue_recommendation::Entity")]
    IssueRecommendation,
}

impl Related<super::issue_detail::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IssueDetail.def()
    }
}

impl Related<super::scanner_component::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ScannerComponent.def()
    }
}

impl Related<super::issue_recommendation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::IssueRecommendation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
