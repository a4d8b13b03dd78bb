use crate::models::{CrafterType, Project, QuizAnswers, SavedResult};
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with the saved-results store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// PostgreSQL client for saved quiz results
///
/// Each save is a single-row insert under a freshly minted identifier.
/// Records are never updated or deleted here; retention is an external
/// policy concern.
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
    ) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        // Run migrations on startup
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
    ) -> Result<Self, StoreError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
        )
        .await
    }

    /// Save a quiz outcome under a new shareable identifier
    ///
    /// The identifier is only handed back once the row is committed, and
    /// every call inserts a brand-new row - a repeated email gets a second
    /// record, never an overwrite. Retrying a failed save therefore always
    /// mints a fresh identifier.
    pub async fn save_result(
        &self,
        email: &str,
        first_name: Option<&str>,
        quiz_answers: &QuizAnswers,
        matched_projects: &[Project],
        crafter_type: &CrafterType,
    ) -> Result<String, StoreError> {
        let unique_id = generate_unique_id();

        let query = r#"
            INSERT INTO saved_results
                (unique_id, email, first_name, quiz_answers, matched_projects, crafter_type, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, NOW())
        "#;

        sqlx::query(query)
            .bind(&unique_id)
            .bind(email)
            .bind(first_name)
            .bind(Json(quiz_answers))
            .bind(Json(matched_projects))
            .bind(Json(crafter_type))
            .execute(&self.pool)
            .await?;

        tracing::debug!("Saved results under id {}", unique_id);

        Ok(unique_id)
    }

    /// Fetch a saved result by its shareable identifier
    ///
    /// Returns `Ok(None)` for unknown or malformed identifiers; an
    /// identifier that matches nothing is not an error condition.
    pub async fn get_result(&self, unique_id: &str) -> Result<Option<SavedResult>, StoreError> {
        let query = r#"
            SELECT unique_id, email, first_name, quiz_answers, matched_projects, crafter_type, created_at
            FROM saved_results
            WHERE unique_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(unique_id)
            .fetch_optional(&self.pool)
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let quiz_answers: Json<QuizAnswers> = row.get("quiz_answers");
        let matched_projects: Json<Vec<Project>> = row.get("matched_projects");
        let crafter_type: Json<CrafterType> = row.get("crafter_type");

        Ok(Some(SavedResult {
            unique_id: row.get("unique_id"),
            email: row.get("email"),
            first_name: row.get("first_name"),
            quiz_answers: quiz_answers.0,
            matched_projects: matched_projects.0,
            crafter_type: crafter_type.0,
            created_at: row.get("created_at"),
        }))
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, StoreError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}

/// Mint a shareable identifier: a random component followed by a time
/// component, rendered as one lowercase hex string.
///
/// The random half is a full UUIDv4 (cryptographically strong source), so
/// collisions stay negligible at any plausible volume; the millisecond
/// timestamp keeps identifiers roughly sortable by creation. The result
/// is URL-path-safe with no escaping required.
pub fn generate_unique_id() -> String {
    let random_part = uuid::Uuid::new_v4().simple().to_string();
    let time_part = format!("{:x}", chrono::Utc::now().timestamp_millis());
    format!("{}{}", random_part, time_part)
}
