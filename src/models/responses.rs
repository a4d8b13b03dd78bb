use serde::{Deserialize, Serialize};

use crate::models::domain::{CrafterType, Project};

/// Response for the quiz match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResponse {
    pub matches: Vec<Project>,
    #[serde(rename = "crafterType")]
    pub crafter_type: CrafterType,
    #[serde(rename = "totalCandidates")]
    pub total_candidates: usize,
}

/// Outcome of the best-effort mailing-list subscription after a save
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionStatus {
    Subscribed,
    Failed,
    Skipped,
}

/// Response for the save results endpoint
///
/// `subscription` is a side-channel status: a failed subscription never
/// fails the save itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveResultsResponse {
    pub success: bool,
    #[serde(rename = "uniqueId")]
    pub unique_id: String,
    #[serde(rename = "resultsUrl")]
    pub results_url: String,
    pub subscription: SubscriptionStatus,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
