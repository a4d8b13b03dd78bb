use crate::models::Project;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when reading the project catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Unauthorized: invalid API key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Read-only client for the external project catalog
///
/// The catalog is served over a PostgREST-style interface. No server-side
/// filtering is requested; the full collection comes back and every
/// matching rule runs locally.
pub struct CatalogClient {
    base_url: String,
    api_key: String,
    client: Client,
}

impl CatalogClient {
    /// Create a new catalog client
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            client,
        }
    }

    /// Fetch the full project collection
    ///
    /// Rows that fail to deserialize are skipped rather than failing the
    /// whole read; a partial catalog still produces useful matches.
    pub async fn list_projects(&self) -> Result<Vec<Project>, CatalogError> {
        let url = format!(
            "{}/rest/v1/projects?select=*",
            self.base_url.trim_end_matches('/')
        );

        tracing::debug!("Fetching catalog from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::UNAUTHORIZED {
            return Err(CatalogError::Unauthorized);
        }

        if !response.status().is_success() {
            return Err(CatalogError::ApiError(format!(
                "Failed to fetch catalog: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let rows = json
            .as_array()
            .ok_or_else(|| CatalogError::InvalidResponse("Expected a JSON array".into()))?;

        let total = rows.len();

        let projects: Vec<Project> = rows
            .iter()
            .filter_map(|row| match serde_json::from_value(row.clone()) {
                Ok(project) => Some(project),
                Err(e) => {
                    tracing::debug!("Skipping malformed catalog row: {}", e);
                    None
                }
            })
            .collect();

        tracing::debug!("Fetched {} projects (rows: {})", projects.len(), total);

        Ok(projects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_client_creation() {
        let client = CatalogClient::new(
            "https://catalog.test/".to_string(),
            "test_key".to_string(),
        );

        assert_eq!(client.base_url, "https://catalog.test/");
        assert_eq!(client.api_key, "test_key");
    }
}
