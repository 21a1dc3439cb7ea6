// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{StyleProfile, Product, ProductCategory, ScoredProduct, MatchReason, HIGH_MATCH_THRESHOLD};
pub use requests::RecommendationRequest;
pub use responses::{RecommendationResponse, HealthResponse, ErrorResponse};
