use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Every recommendation list handed to a caller has exactly this many entries.
pub const RECOMMENDATIONS_PER_SOURCE: usize = 5;

/// Declares which table a supplied identifier is expected to match.
///
/// A user-based identifier keys into the collaborative table; a content-based
/// identifier keys into the content table. The other table is only ever
/// queried opportunistically via fallback sampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    UserBased,
    ContentBased,
}

/// One parsed row of a source table: an identifier plus its five items.
///
/// Items are carried verbatim from the source text. A row that parsed with
/// enough fields may still hold empty strings; the normalizer filters those
/// out at response time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationRow {
    pub key: String,
    pub items: [String; RECOMMENDATIONS_PER_SOURCE],
}

/// An in-memory recommendation table for one source.
///
/// Rows keep their source-text order so the fallback sampler can address them
/// by index; a key index sits alongside for exact-match lookups. Duplicate
/// keys follow a first-occurrence-wins policy.
#[derive(Debug, Default, Clone)]
pub struct SourceTable {
    rows: Vec<RecommendationRow>,
    index: HashMap<String, usize>,
}

impl SourceTable {
    /// Appends a row, keeping the earlier entry when the key already exists.
    ///
    /// The row is still stored for index-based sampling; only the key lookup
    /// ignores it.
    pub fn insert(&mut self, row: RecommendationRow) {
        let position = self.rows.len();
        self.index.entry(row.key.clone()).or_insert(position);
        self.rows.push(row);
    }

    /// Exact-match lookup by key.
    pub fn get(&self, key: &str) -> Option<&RecommendationRow> {
        self.index.get(key).map(|&i| &self.rows[i])
    }

    /// Row at a sampling index, in source-text order.
    pub fn row(&self, position: usize) -> Option<&RecommendationRow> {
        self.rows.get(position)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The combined answer for one aggregation request.
///
/// Built once per request and handed straight to the caller; never persisted.
/// Each list holds exactly [`RECOMMENDATIONS_PER_SOURCE`] entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationResult {
    pub collaborative: Vec<String>,
    pub content: Vec<String>,
    pub external: Vec<String>,
}
