pub mod chat_message;
pub mod coherence_data;
pub mod health_checkin;
pub mod health_issue;
pub mod health_system;
pub mod issue_detail;
pub mod issue_recommendation;
pub mod plan_recommendation;
pub mod recipe;
pub mod recipe_ingredient;
pub mod scanner_component;
pub mod user;
pub mod user_plan;

pub use chat_message::Entity as ChatMessage;
pub use coherence_data::Entity as CoherenceData;
pub use health_checkin::Entity as HealthCheckin;
pub use health_issue::Entity as HealthIssue;
pub use health_system::Entity as HealthSystem;
pub use issue_detail::Entity as IssueDetail;
pub use issue_recommendation::Entity as IssueRecommendation;
pub use plan_recommendation::Entity as PlanRecommendation;
pub use recipe::Entity as Recipe;
pub use recipe_ingredient::Entity as RecipeIngredient;
pub use scanner_component::Entity as ScannerComponent;
pub use user::Entity as User;
pub use user_plan::Entity as UserPlan;

pub mod prelude;
