use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Adds the long-form detail text and the structured diet/lifestyle/supplements
// advice blob that issue detail views render.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(HealthIssues::Table)
                    .add_column(ColumnDef::new(HealthIssues::DetailedInfo).text())
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(HealthIssues::Table)
                    .add_column(ColumnDef::new(HealthIssues::SpecificAdvice).json_binary())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(HealthIssues::Table)
                    .drop_column(HealthIssues::SpecificAdvice)
                    .to_owned(),
            )
            .await?;

        manager
            .alter_table(
                Table::alter()
                    .table(HealthIssues::Table)
                    .drop_column(HealthIssues::DetailedInfo)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum HealthIssues {
    Table,
    DetailedInfo,
    SpecificAdvice,
}
