//! FitMatch Recs - product recommendation scoring for the FitMatch style assistant
//!
//! Ranks a static product catalog against a style profile produced by an external
//! analysis service. Scoring is a pure, stateless function; the HTTP layer only
//! supplies the profile and renders the ranked list.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{Recommender, RecommendationResult, calculate_match_score, matches_best_colors};
pub use self::models::{StyleProfile, Product, ScoredProduct, MatchReason, RecommendationRequest, RecommendationResponse};
pub use self::services::{CatalogStore, CatalogError};
