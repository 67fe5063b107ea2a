pub mod aggregator;
pub mod loader;
pub mod normalizer;
pub mod providers;
pub mod resolver;
pub mod sampler;

pub use aggregator::RecommendationAggregator;
