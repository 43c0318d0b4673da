use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserPlans::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserPlans::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserPlans::UserId).integer().not_null())
                    .col(ColumnDef::new(UserPlans::Title).string().not_null())
                    .col(ColumnDef::new(UserPlans::Category).string().not_null())
                    .col(ColumnDef::new(UserPlans::Priority).string().not_null())
                    .col(ColumnDef::new(UserPlans::CreatedAt).date_time().not_null())
                    .col(ColumnDef::new(UserPlans::UpdatedAt).date_time().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-user_plan-user_id")
                            .from(UserPlans::Table, UserPlans::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(PlanRecommendations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PlanRecommendations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(PlanRecommendations::UserId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(PlanRecommendations::PlanId).integer())
                    .col(ColumnDef::new(PlanRecommendations::Title).string().not_null())
                    .col(
                        ColumnDef::new(PlanRecommendations::Category)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlanRecommendations::Priority)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlanRecommendations::Completed)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(PlanRecommendations::CompletedAt).date_time())
                    .col(ColumnDef::new(PlanRecommendations::DueDate).date())
                    .col(
                        ColumnDef::new(PlanRecommendations::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(PlanRecommendations::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-plan_recommendation-user_id")
                            .from(PlanRecommendations::Table, PlanRecommendations::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-plan_recommendation-plan_id")
                            .from(PlanRecommendations::Table, PlanRecommendations::PlanId)
                            .to(UserPlans::Table, UserPlans::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PlanRecommendations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(UserPlans::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum UserPlans {
    Table,
    Id,
    UserId,
    Title,
    Category,
    Priority,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum PlanRecommendations {
    Table,
    Id,
    UserId,
    PlanId,
    Title,
    Category,
    Priority,
    Completed,
    CompletedAt,
    DueDate,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
