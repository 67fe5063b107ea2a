/// External recommendation source abstraction
///
/// The aggregator treats the external ML source as a capability with exactly
/// one production implementation (a network scoring call) and one local
/// placeholder implementation; it holds a trait object and never
/// distinguishes between them. Provider failures are caught upstream and
/// converted into placeholder items, so no failure of this seam ever reaches
/// a caller.
use crate::{error::AppResult, models::RECOMMENDATIONS_PER_SOURCE};

pub mod azure_ml;
pub mod placeholder;

pub use azure_ml::AzureMlProvider;
pub use placeholder::PlaceholderProvider;

/// Trait for external recommendation providers
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait ExternalRecommendationProvider: Send + Sync {
    /// Fetch recommendations for an identifier.
    ///
    /// The response only has to be normalizable to five items; shorter or
    /// longer lists are fixed up by the normalizer.
    async fn fetch_recommendations(&self, identifier: &str) -> AppResult<Vec<String>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Synthetic item list standing in for an external response, in the shape
/// `"{source name} Recommendation {n}"` for n in 1..=5.
pub fn placeholder_items(source_name: &str) -> Vec<String> {
    (1..=RECOMMENDATIONS_PER_SOURCE)
        .map(|n| format!("{} Recommendation {}", source_name, n))
        .collect()
}
