use sea_orm_migration::prelude::*;

mod m20260420_000001_create_users;
mod m20260420_000002_create_health_catalog;
mod m20260427_000001_create_checkins;
mod m20260504_000001_create_plans;
mod m20260511_000001_create_chat_messages;
mod m20260518_000001_create_recipes;
mod m20260601_000001_alter_health_issues;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260420_000001_create_users::Migration),
            Box::new(m20260420_000002_create_health_catalog::Migration),
            Box::new(m20260427_000001_create_checkins::Migration),
            Box::new(m20260504_000001_create_plans::Migration),
            Box::new(m20260511_000001_create_chat_messages::Migration),
            Box::new(m20260518_000001_create_recipes::Migration),
            Box::new(m20260601_000001_alter_health_issues::Migration),
        ]
    }
}
