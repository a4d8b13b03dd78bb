use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::{CrafterType, Project, QuizAnswers};

/// Request to save a quiz outcome under a shareable identifier
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SaveResultsRequest {
    #[validate(email)]
    pub email: String,
    #[serde(rename = "firstName", alias = "first_name", default)]
    pub first_name: Option<String>,
    #[serde(rename = "quizAnswers", alias = "quiz_answers")]
    pub quiz_answers: QuizAnswers,
    #[serde(rename = "matchedProjects", alias = "matched_projects", default)]
    pub matched_projects: Vec<Project>,
    #[serde(rename = "crafterType", alias = "crafter_type")]
    pub crafter_type: CrafterType,
}
