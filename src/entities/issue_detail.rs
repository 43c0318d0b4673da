use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Deserialize, Serialize)]
#[sea_orm(table_name = "issue_details")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub issue_id: i32,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::health_issue::Entity",
        from = "Column::IssueId",
        to = "super::health_issue::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    HealthIssue,
}

impl Related<super::health_issue::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::HealthIssue.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
