use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Health Check-ins Table (one row per user per day)
        manager
            .create_table(
                Table::create()
                    .table(HealthCheckins::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(HealthCheckins::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(HealthCheckins::UserId).integer().not_null())
                    .col(ColumnDef::new(HealthCheckins::Date).date().not_null())
                    .col(ColumnDef::new(HealthCheckins::Mood).integer().not_null())
                    .col(
                        ColumnDef::new(HealthCheckins::EnergyLevel)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HealthCheckins::SleepQuality)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(HealthCheckins::Symptoms).json_binary())
                    .col(ColumnDef::new(HealthCheckins::Notes).text())
                    .col(
                        ColumnDef::new(HealthCheckins::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(HealthCheckins::UpdatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-health_checkin-user_id")
                            .from(HealthCheckins::Table, HealthCheckins::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx-health_checkin-user_date")
                    .table(HealthCheckins::Table)
                    .col(HealthCheckins::UserId)
                    .col(HealthCheckins::Date)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Coherence Data Table (one row per body scan)
        manager
            .create_table(
                Table::create()
                    .table(CoherenceData::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CoherenceData::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CoherenceData::UserId).integer().not_null())
                    .col(ColumnDef::new(CoherenceData::ScanId).uuid().not_null())
                    .col(ColumnDef::new(CoherenceData::Score).integer().not_null())
                    .col(ColumnDef::new(CoherenceData::Message).text().not_null())
                    .col(
                        ColumnDef::new(CoherenceData::CreatedAt)
                            .date_time()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-coherence_data-user_id")
                            .from(CoherenceData::Table, CoherenceData::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CoherenceData::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(HealthCheckins::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum HealthCheckins {
    Table,
    Id,
    UserId,
    Date,
    Mood,
    EnergyLevel,
    SleepQuality,
    Symptoms,
    Notes,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum CoherenceData {
    Table,
    Id,
    UserId,
    ScanId,
    Score,
    Message,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}
