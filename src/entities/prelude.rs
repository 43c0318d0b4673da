pub use super::chat_message::Entity as ChatMessage;
pub use super::coherence_data::Entity as CoherenceData;
pub use super::health_checkin::Entity as HealthCheckin;
pub use super::health_issue::Entity as HealthIssue;
pub use super::health_system::Entity as HealthSystem;
pub use super::issue_detail::Entity as IssueDetail;
pub use super::issue_recommendation::Entity as IssueRecommendation;
pub use super::plan_recommendation::Entity as PlanRecommendation;
pub use super::recipe::Entity as Recipe;
pub use super::recipe_ingredient::Entity as RecipeIngredient;
pub use super::scanner_component::Entity as ScannerComponent;
pub use super::user::Entity as User;
pub use super::user_plan::Entity as UserPlan;
