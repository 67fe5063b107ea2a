use crate::models::{SourceTable, RECOMMENDATIONS_PER_SOURCE};

/// Why a source could not be resolved exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// The identifier is this source's native key type but no row matched.
    NoMatch,
    /// The identifier kind has no defined relationship to this source's keys,
    /// so the source is only queried opportunistically.
    KindMismatch,
}

/// Outcome of resolving an identifier against one source table.
///
/// Absence is represented as data, never as an error: a missing key or a
/// mismatched identifier kind both come back as a fallback marker that the
/// aggregator turns into sampled output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedRecommendation {
    Exact([String; RECOMMENDATIONS_PER_SOURCE]),
    Fallback(FallbackReason),
}

/// Resolves an identifier against a table.
///
/// `is_primary` states whether the identifier's declared kind matches this
/// source's native key type. Only primary lookups attempt an exact match.
pub fn resolve(
    table: &SourceTable,
    identifier: &str,
    is_primary: bool,
) -> ResolvedRecommendation {
    if !is_primary {
        return ResolvedRecommendation::Fallback(FallbackReason::KindMismatch);
    }

    match table.get(identifier) {
        Some(row) => ResolvedRecommendation::Exact(row.items.clone()),
        None => ResolvedRecommendation::Fallback(FallbackReason::NoMatch),
    }
}
