// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CrafterType, MatchCriteria, Mood, Project, QuizAnswers, SavedResult};
pub use requests::SaveResultsRequest;
pub use responses::{ErrorResponse, HealthResponse, MatchResponse, SaveResultsResponse, SubscriptionStatus};
