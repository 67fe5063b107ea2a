//! Recommendation aggregation service.
//!
//! Aggregates a collaborative-filtering table, a content-filtering table, and
//! an external ML scoring source into one uniformly shaped five-item-per-source
//! result for a supplied identifier, exposed over a small HTTP API.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
