use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};

use super::ExternalRecommendationProvider;
use crate::error::{AppError, AppResult};

/// Azure ML scoring provider
///
/// POSTs the identifier to a deployed scoring endpoint and expects a JSON
/// body carrying a `recommendations` array. Any transport or status failure
/// is reported as an error; the aggregator converts it into placeholder
/// items rather than surfacing it.
#[derive(Debug, Clone)]
pub struct AzureMlProvider {
    http_client: HttpClient,
    scoring_url: String,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ScoringRequest<'a> {
    identifier: &'a str,
}

#[derive(Debug, Deserialize)]
struct ScoringResponse {
    recommendations: Vec<String>,
}

impl AzureMlProvider {
    pub fn new(scoring_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            scoring_url,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl ExternalRecommendationProvider for AzureMlProvider {
    async fn fetch_recommendations(&self, identifier: &str) -> AppResult<Vec<String>> {
        tracing::debug!(identifier = %identifier, "Fetching from external scoring endpoint");

        let mut request = self
            .http_client
            .post(&self.scoring_url)
            .json(&ScoringRequest { identifier });

        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                identifier = %identifier,
                status = %status,
                body = %body,
                "External scoring request failed"
            );
            return Err(AppError::ExternalApi(format!(
                "scoring endpoint returned status {}: {}",
                status, body
            )));
        }

        let scored: ScoringResponse = response.json().await?;

        tracing::info!(
            identifier = %identifier,
            item_count = scored.recommendations.len(),
            "Fetched external recommendations"
        );

        Ok(scored.recommendations)
    }

    fn name(&self) -> &'static str {
        "azure-ml"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scoring_request_wire_format() {
        let json = serde_json::to_string(&ScoringRequest { identifier: "u42" }).unwrap();
        assert_eq!(json, r#"{"identifier":"u42"}"#);
    }

    #[test]
    fn test_scoring_response_parses_recommendations() {
        let scored: ScoringResponse =
            serde_json::from_str(r#"{"recommendations":["item1","item2"]}"#).unwrap();
        assert_eq!(scored.recommendations, vec!["item1", "item2"]);
    }
}
