use super::{placeholder_items, ExternalRecommendationProvider};
use crate::error::AppResult;

/// Local stand-in for the external scoring service.
///
/// Emits the same `"{source name} Recommendation {n}"` items the aggregator
/// falls back to when a real scoring call fails, so wiring this provider in
/// is indistinguishable from a permanently-failing network provider.
#[derive(Debug, Clone)]
pub struct PlaceholderProvider {
    source_name: String,
}

impl PlaceholderProvider {
    pub fn new(source_name: String) -> Self {
        Self { source_name }
    }
}

#[async_trait::async_trait]
impl ExternalRecommendationProvider for PlaceholderProvider {
    async fn fetch_recommendations(&self, _identifier: &str) -> AppResult<Vec<String>> {
        Ok(placeholder_items(&self.source_name))
    }

    fn name(&self) -> &'static str {
        "placeholder"
    }
}
