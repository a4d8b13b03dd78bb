use crate::core::{
    filters::{matches_category, matches_machine_ownership, matches_stash_buster, matches_time_budget},
    vocab,
};
use crate::models::{MatchCriteria, Project, QuizAnswers};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<Project>,
    pub total_candidates: usize,
}

/// Main matching orchestrator - applies the rule conjunction to the catalog
///
/// # Rules
/// 1. Category overlap (skipped for "surprise me" or no preference)
/// 2. Stash-buster flag
/// 3. Time-budget token match
/// 4. Machine ownership containment
///
/// A project must pass every applicable rule to be kept. Catalog order is
/// preserved; there is no ranking.
#[derive(Debug, Clone, Copy, Default)]
pub struct Matcher;

impl Matcher {
    pub fn new() -> Self {
        Self
    }

    /// Translate quiz answers into catalog-vocabulary criteria
    ///
    /// The "surprise" sentinel or an empty selection disables the category
    /// rule. Codes that map to nothing are dropped, so a fully unmapped
    /// answer list degrades to "no constraint" rather than excluding
    /// everything.
    pub fn build_criteria(&self, answers: &QuizAnswers) -> MatchCriteria {
        let skip_categories = answers.project_types.is_empty()
            || answers.project_types.iter().any(|t| t == vocab::SURPRISE);

        let categories = if skip_categories {
            Vec::new()
        } else {
            vocab::map_categories(&answers.project_types)
        };

        MatchCriteria {
            categories,
            mood: answers.mood,
            machines: vocab::map_machines(&answers.machines),
        }
    }

    /// Filter the catalog against the quiz answers
    ///
    /// # Arguments
    /// * `answers` - The user's quiz answers
    /// * `catalog` - The full project catalog, consumed by value
    ///
    /// # Returns
    /// MatchResult with the surviving projects in catalog order
    pub fn find_matches(&self, answers: &QuizAnswers, catalog: Vec<Project>) -> MatchResult {
        let total_candidates = catalog.len();
        let criteria = self.build_criteria(answers);

        let matches: Vec<Project> = catalog
            .into_iter()
            .filter(|project| matches_category(project, &criteria))
            .filter(|project| matches_stash_buster(project, &criteria))
            .filter(|project| matches_time_budget(project, &criteria))
            .filter(|project| matches_machine_ownership(project, &criteria))
            .collect();

        MatchResult {
            matches,
            total_candidates,
        }
    }
}
