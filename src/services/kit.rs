use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the Kit mailing-list API
#[derive(Debug, Error)]
pub enum KitError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Client for the Kit (ConvertKit) mailing-list API
///
/// Invoked after a successful save. The whole exchange is best-effort:
/// callers log failures and report them through the side-channel status,
/// never as a failure of the save itself.
pub struct KitClient {
    base_url: String,
    api_key: String,
    form_id: String,
    client: Client,
}

impl KitClient {
    /// Create a new Kit client
    pub fn new(base_url: String, api_key: String, form_id: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url,
            api_key,
            form_id,
            client,
        }
    }

    /// Subscribe an email to the form and apply the given tags
    ///
    /// Tag application is two steps against the v3 API: list all tags to
    /// resolve names into ids, then subscribe the email to each id. A tag
    /// name with no match is skipped.
    pub async fn subscribe(
        &self,
        email: &str,
        first_name: Option<&str>,
        tags: &[String],
    ) -> Result<(), KitError> {
        let url = format!(
            "{}/v3/forms/{}/subscribe",
            self.base_url.trim_end_matches('/'),
            self.form_id
        );

        let response = self
            .client
            .post(&url)
            .json(&json!({
                "api_key": self.api_key,
                "email": email,
                "first_name": first_name.unwrap_or(""),
            }))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(KitError::ApiError(format!(
                "Form subscribe failed: {}",
                response.status()
            )));
        }

        if !tags.is_empty() {
            self.apply_tags(email, tags).await?;
        }

        Ok(())
    }

    /// Resolve tag names to ids and subscribe the email to each
    async fn apply_tags(&self, email: &str, tags: &[String]) -> Result<(), KitError> {
        let url = format!(
            "{}/v3/tags?api_key={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(&self.api_key)
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(KitError::ApiError(format!(
                "Tag listing failed: {}",
                response.status()
            )));
        }

        let json: Value = response.json().await?;

        let known_tags = json
            .get("tags")
            .and_then(|t| t.as_array())
            .ok_or_else(|| KitError::InvalidResponse("Missing tags array".into()))?;

        for tag_name in tags {
            let tag_id = known_tags.iter().find_map(|tag| {
                let name = tag.get("name").and_then(|n| n.as_str())?;
                if name == tag_name {
                    tag.get("id").and_then(|id| id.as_i64())
                } else {
                    None
                }
            });

            let Some(tag_id) = tag_id else {
                tracing::debug!("No Kit tag named {:?}, skipping", tag_name);
                continue;
            };

            let tag_url = format!(
                "{}/v3/tags/{}/subscribe",
                self.base_url.trim_end_matches('/'),
                tag_id
            );

            let response = self
                .client
                .post(&tag_url)
                .json(&json!({
                    "api_key": self.api_key,
                    "email": email,
                }))
                .send()
                .await?;

            if !response.status().is_success() {
                tracing::warn!(
                    "Applying Kit tag {:?} failed: {}",
                    tag_name,
                    response.status()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kit_client_creation() {
        let client = KitClient::new(
            "https://api.kit.test/".to_string(),
            "test_key".to_string(),
            "9145879".to_string(),
        );

        assert_eq!(client.base_url, "https://api.kit.test/");
        assert_eq!(client.form_id, "9145879");
    }
}
