use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Health Systems Table
        manager
            .create_table(
                Table::create()
                    .table(HealthSystems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HealthSystems::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(HealthSystems::Slug)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(HealthSystems::Name).string().not_null())
                    .col(ColumnDef::new(HealthSystems::Description).text().not_null())
                    .col(
                        ColumnDef::new(HealthSystems::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Health Issues Table
        manager
            .create_table(
                Table::create()
                    .table(HealthIssues::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HealthIssues::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HealthIssues::Name).string().not_null())
                    .col(ColumnDef::new(HealthIssues::Category).string().not_null())
                    .col(ColumnDef::new(HealthIssues::Description).text().not_null())
                    .col(ColumnDef::new(HealthIssues::Load).integer().not_null())
                    .col(ColumnDef::new(HealthIssues::Recommendations).json_binary())
                    .col(
                        ColumnDef::new(HealthIssues::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HealthIssues::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // Issue Details Table
        manager
            .create_table(
                Table::create()
                    .table(IssueDetails::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IssueDetails::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(IssueDetails::IssueId).integer().not_null())
                    .col(ColumnDef::new(IssueDetails::Title).string().not_null())
                    .col(ColumnDef::new(IssueDetails::Content).text().not_null())
                    .col(
                        ColumnDef::new(IssueDetails::DisplayOrder)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-issue_detail-issue_id")
                            .from(IssueDetails::Table, IssueDetails::IssueId)
                            .to(HealthIssues::Table, HealthIssues::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Scanner Components Table
        manager
            .create_table(
                Table::create()
                    .table(ScannerComponents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ScannerComponents::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(ScannerComponents::IssueId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScannerComponents::Name).string().not_null())
                    .col(
                        ColumnDef::new(ScannerComponents::Value)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(ScannerComponents::Description).text())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-scanner_component-issue_id")
                            .from(ScannerComponents::Table, ScannerComponents::IssueId)
                            .to(HealthIssues::Table, HealthIssues::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Issue Recommendations Table
        manager
            .create_table(
                Table::create()
                    .table(IssueRecommendations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(IssueRecommendations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(IssueRecommendations::IssueId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IssueRecommendations::Recommendation)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(IssueRecommendations::Priority)
                            .string()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-issue_recommendation-issue_id")
                            .from(
                                IssueRecommendations::Table,
                                IssueRecommendations::IssueId,
                            )
                            .to(HealthIssues::Table, HealthIssues::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(IssueRecommendations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(ScannerComponents::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(IssueDetails::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HealthIssues::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HealthSystems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HealthSystems {
    Table,
    Id,
    Slug,
    Name,
    Description,
    CreatedAt,
}

#[derive(DeriveIden)]
enum HealthIssues {
    Table,
    Id,
    Name,
    Category,
    Description,
    Load,
    Recommendations,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum IssueDetails {
    Table,
    Id,
    IssueId,
    Title,
    Content,
    DisplayOrder,
}

#[derive(DeriveIden)]
enum ScannerComponents {
    Table,
    Id,
    IssueId,
    Name,
    Value,
    Description,
}

#[derive(DeriveIden)]
enum IssueRecommendations {
    Table,
    Id,
    IssueId,
    Recommendation,
    Priority,
}
