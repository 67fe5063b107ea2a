use rand::Rng;

use crate::models::SourceTable;

/// Sampling window cap for whole-row picks.
const SINGLE_ROW_WINDOW: usize = 10;
/// Sampling window cap for first-field picks.
const FIRST_FIELD_WINDOW: usize = 20;

/// How a substitute recommendation list is drawn from a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleStrategy {
    /// One uniformly-random row; all five of its items in order. Used when a
    /// content-style fallback is needed for a user-based query.
    SingleRandomRow,
    /// `count` independent uniformly-random rows (repetition allowed), taking
    /// only the first item of each. Used when a collaborative-style fallback
    /// is needed for a content-based query.
    MultipleRandomFirstFields,
}

/// Source of sampling indices.
///
/// Production draws from the thread-local RNG; tests inject a fixed sequence
/// so fallback output is exactly reproducible.
pub trait IndexSource: Send + Sync {
    /// Returns an index in `[0, bound)`. Callers never pass a zero bound.
    fn pick(&self, bound: usize) -> usize;
}

/// [`IndexSource`] backed by `rand`'s thread-local RNG.
#[derive(Debug, Default, Clone)]
pub struct ThreadRngIndexSource;

impl IndexSource for ThreadRngIndexSource {
    fn pick(&self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Draws a substitute recommendation list from `table`.
///
/// Indices are drawn from a window bounded by the table size, so small tables
/// are sampled in full and large tables only near their head. An empty table
/// yields an empty list; padding it out is the normalizer's job, the sampler
/// never fabricates placeholder text.
pub fn sample(
    table: &SourceTable,
    count: usize,
    strategy: SampleStrategy,
    indices: &dyn IndexSource,
) -> Vec<String> {
    if table.is_empty() {
        return Vec::new();
    }

    match strategy {
        SampleStrategy::SingleRandomRow => {
            let window = table.len().min(SINGLE_ROW_WINDOW);
            table
                .row(indices.pick(window))
                .map(|row| row.items.to_vec())
                .unwrap_or_default()
        }
        SampleStrategy::MultipleRandomFirstFields => {
            let window = table.len().min(FIRST_FIELD_WINDOW);
            (0..count)
                .filter_map(|_| table.row(indices.pick(window)))
                .map(|row| row.items[0].clone())
                .collect()
        }
    }
}

/// Deterministic index source fed by a fixed sequence, recording the window
/// bound of every pick.
#[cfg(test)]
pub(crate) struct FixedIndexSource {
    picks: std::sync::Mutex<std::collections::VecDeque<usize>>,
    bounds: std::sync::Mutex<Vec<usize>>,
}

#[cfg(test)]
impl FixedIndexSource {
    pub(crate) fn new(picks: &[usize]) -> Self {
        Self {
            picks: std::sync::Mutex::new(picks.iter().copied().collect()),
            bounds: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn seen_bounds(&self) -> Vec<usize> {
        self.bounds.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl IndexSource for FixedIndexSource {
    fn pick(&self, bound: usize) -> usize {
        self.bounds.lock().unwrap().push(bound);
        self.picks
            .lock()
            .unwrap()
            .pop_front()
            .expect("index source exhausted")
    }
}
