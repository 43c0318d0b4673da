pub mod auth;
pub mod chat;
pub mod checkins;
pub mod coherence;
pub mod dashboard;
pub mod insights;
pub mod issues;
pub mod middleware;
pub mod plan;
pub mod profile;
pub mod recipes;
pub mod systems;
