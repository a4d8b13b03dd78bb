use serde::{Deserialize, Deserializer, Serialize};

/// What the user is in the mood to make.
///
/// Unknown or missing wire values collapse to `Unset`, which imposes no
/// stash-buster or time constraint during matching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    StashBuster,
    Quick,
    TakeTime,
    #[default]
    #[serde(other)]
    Unset,
}

/// Quiz answers as submitted by the user
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuizAnswers {
    #[serde(rename = "projectTypes", alias = "project_types", default)]
    pub project_types: Vec<String>,
    #[serde(default)]
    pub mood: Mood,
    #[serde(default)]
    pub machines: Vec<String>,
    // Read into the model but not used for filtering yet; die-based
    // matching is pending the project_dies join.
    #[serde(rename = "selectedDieId", alias = "selected_die_id", default)]
    pub selected_die_id: Option<i64>,
}

/// A craft project from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub title: String,
    #[serde(alias = "categories", deserialize_with = "de_category_set", default)]
    pub category: Vec<String>,
    #[serde(deserialize_with = "de_null_default", default)]
    pub time_estimate: String,
    #[serde(deserialize_with = "de_null_default", default)]
    pub is_stash_buster: bool,
    #[serde(deserialize_with = "de_machine_set", default)]
    pub machines_required: Vec<String>,
    #[serde(deserialize_with = "de_null_default", default)]
    pub skill_level: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub accuquilt_pattern_url: Option<String>,
    #[serde(default)]
    pub notion_instructions_url: Option<String>,
}

/// Crafter archetype derived from the quiz mood
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrafterType {
    pub title: String,
    pub emoji: String,
    pub description: String,
}

impl CrafterType {
    /// Mailing-list tag for this archetype: the title lower-cased with
    /// spaces replaced by hyphens.
    pub fn tag(&self) -> String {
        self.title.to_lowercase().replace(' ', "-")
    }
}

/// A saved quiz outcome, retrievable by its public identifier
///
/// `matched_projects` is a point-in-time snapshot; later catalog edits do
/// not change a saved result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedResult {
    pub unique_id: String,
    pub email: String,
    pub first_name: Option<String>,
    pub quiz_answers: QuizAnswers,
    pub matched_projects: Vec<Project>,
    pub crafter_type: CrafterType,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Catalog-vocabulary criteria derived from quiz answers
///
/// Built once per match request by mapping answer codes through the
/// vocabulary tables. Empty `categories`/`machines` means no constraint.
#[derive(Debug, Clone)]
pub struct MatchCriteria {
    pub categories: Vec<String>,
    pub mood: Mood,
    pub machines: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

/// Accept a category set, a legacy scalar category, or null.
///
/// Older catalog rows stored `category` as a single string; those are
/// normalized to singleton sets here so matching only ever sees sets.
fn de_category_set<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(s)) => vec![s],
        Some(OneOrMany::Many(v)) => v,
        None => Vec::new(),
    })
}

/// Accept a machine set, a legacy comma-separated string, or null.
fn de_machine_set<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<OneOrMany>::deserialize(deserializer)? {
        Some(OneOrMany::One(s)) => s
            .split(',')
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .collect(),
        Some(OneOrMany::Many(v)) => v,
        None => Vec::new(),
    })
}

/// Treat an explicit null the same as a missing field.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
