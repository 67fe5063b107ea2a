use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::config::Config;
use crate::models::SourceTable;
use crate::services::providers::{
    AzureMlProvider, ExternalRecommendationProvider, PlaceholderProvider,
};
use crate::services::sampler::{IndexSource, ThreadRngIndexSource};
use crate::services::RecommendationAggregator;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub tables: Arc<RwLock<TableSnapshot>>,
    pub external: Arc<dyn ExternalRecommendationProvider>,
    pub indices: Arc<dyn IndexSource>,
    pub external_source_name: String,
    pub collaborative_table_path: String,
    pub content_table_path: String,
}

/// The published pair of source tables.
///
/// Reloads build a fresh snapshot in a local scope and replace the whole
/// value under a short write lock, so readers only ever observe a complete
/// pair; a table already in use is never mutated.
pub struct TableSnapshot {
    pub collaborative: Arc<SourceTable>,
    pub content: Arc<SourceTable>,
    pub loaded_at: DateTime<Utc>,
}

impl TableSnapshot {
    pub fn new(collaborative: SourceTable, content: SourceTable) -> Self {
        Self {
            collaborative: Arc::new(collaborative),
            content: Arc::new(content),
            loaded_at: Utc::now(),
        }
    }
}

impl AppState {
    /// Creates application state from already-loaded tables.
    ///
    /// The external seam is wired from configuration: a scoring URL selects
    /// the network provider, otherwise the local placeholder stands in.
    pub fn new(config: &Config, collaborative: SourceTable, content: SourceTable) -> Self {
        let external: Arc<dyn ExternalRecommendationProvider> = match &config.external_scoring_url
        {
            Some(url) => Arc::new(AzureMlProvider::new(
                url.clone(),
                config.external_api_key.clone(),
            )),
            None => Arc::new(PlaceholderProvider::new(config.external_source_name.clone())),
        };

        tracing::info!(provider = external.name(), "Wired external recommendation provider");

        Self {
            tables: Arc::new(RwLock::new(TableSnapshot::new(collaborative, content))),
            external,
            indices: Arc::new(ThreadRngIndexSource),
            external_source_name: config.external_source_name.clone(),
            collaborative_table_path: config.collaborative_table_path.clone(),
            content_table_path: config.content_table_path.clone(),
        }
    }

    /// Builds an aggregator over the current table snapshot.
    ///
    /// The snapshot Arcs are cloned out under a read lock, so the request
    /// keeps a stable view even if a reload swaps the snapshot mid-flight.
    pub async fn aggregator(&self) -> RecommendationAggregator {
        let snapshot = self.tables.read().await;
        RecommendationAggregator::new(
            snapshot.collaborative.clone(),
            snapshot.content.clone(),
            self.external.clone(),
            self.indices.clone(),
            self.external_source_name.clone(),
        )
    }
}
