use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{IdentifierKind, RecommendationResult, SourceTable, RECOMMENDATIONS_PER_SOURCE},
    services::{
        normalizer::normalize,
        providers::{placeholder_items, ExternalRecommendationProvider},
        resolver::{resolve, ResolvedRecommendation},
        sampler::{sample, IndexSource, SampleStrategy},
    },
};

/// Composes the three source pipelines into one response.
///
/// Holds read-only snapshots of both tables for the duration of a request;
/// concurrent requests against the same snapshot need no locking because
/// nothing here mutates shared state.
pub struct RecommendationAggregator {
    collaborative: Arc<SourceTable>,
    content: Arc<SourceTable>,
    external: Arc<dyn ExternalRecommendationProvider>,
    indices: Arc<dyn IndexSource>,
    external_source_name: String,
}

impl RecommendationAggregator {
    pub fn new(
        collaborative: Arc<SourceTable>,
        content: Arc<SourceTable>,
        external: Arc<dyn ExternalRecommendationProvider>,
        indices: Arc<dyn IndexSource>,
        external_source_name: String,
    ) -> Self {
        Self {
            collaborative,
            content,
            external,
            indices,
            external_source_name,
        }
    }

    /// The sole public operation: aggregates all three sources for one
    /// identifier.
    ///
    /// The only failure a caller can observe is a blank identifier, checked
    /// before any table access. Everything downstream resolves to data, via
    /// exact matches, sampling, or placeholder items.
    pub async fn get_recommendations(
        &self,
        identifier: &str,
        kind: IdentifierKind,
    ) -> AppResult<RecommendationResult> {
        if identifier.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "identifier must not be empty".to_string(),
            ));
        }

        let collaborative = self.resolve_collaborative(identifier, kind);
        let content = self.resolve_content(identifier, kind);
        let external = self.fetch_external(identifier).await;

        Ok(RecommendationResult {
            collaborative: normalize(collaborative, RECOMMENDATIONS_PER_SOURCE),
            content: normalize(content, RECOMMENDATIONS_PER_SOURCE),
            external: normalize(external, RECOMMENDATIONS_PER_SOURCE),
        })
    }

    fn resolve_collaborative(&self, identifier: &str, kind: IdentifierKind) -> Vec<String> {
        let is_primary = kind == IdentifierKind::UserBased;
        match resolve(&self.collaborative, identifier, is_primary) {
            ResolvedRecommendation::Exact(items) => items.to_vec(),
            ResolvedRecommendation::Fallback(reason) => {
                tracing::debug!(
                    source = "collaborative",
                    reason = ?reason,
                    "Falling back to sampled first fields"
                );
                sample(
                    &self.collaborative,
                    RECOMMENDATIONS_PER_SOURCE,
                    SampleStrategy::MultipleRandomFirstFields,
                    self.indices.as_ref(),
                )
            }
        }
    }

    fn resolve_content(&self, identifier: &str, kind: IdentifierKind) -> Vec<String> {
        let is_primary = kind == IdentifierKind::ContentBased;
        match resolve(&self.content, identifier, is_primary) {
            ResolvedRecommendation::Exact(items) => items.to_vec(),
            ResolvedRecommendation::Fallback(reason) => {
                tracing::debug!(
                    source = "content",
                    reason = ?reason,
                    "Falling back to a sampled row"
                );
                sample(
                    &self.content,
                    RECOMMENDATIONS_PER_SOURCE,
                    SampleStrategy::SingleRandomRow,
                    self.indices.as_ref(),
                )
            }
        }
    }

    /// Queries the external seam; a failed call degrades to placeholder items
    /// and never propagates.
    async fn fetch_external(&self, identifier: &str) -> Vec<String> {
        match self.external.fetch_recommendations(identifier).await {
            Ok(items) => items,
            Err(e) => {
                tracing::warn!(
                    provider = self.external.name(),
                    error = %e,
                    "External source failed, substituting placeholder items"
                );
                placeholder_items(&self.external_source_name)
            }
        }
    }
}
