pub mod analysis;
pub mod api;
pub mod assistant;
pub mod entities;
pub mod metrics;
pub mod migrator;
pub mod telemetry;

pub use sea_orm;
