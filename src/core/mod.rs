// Core algorithm exports
pub mod recommender;
pub mod rules;
pub mod scoring;

pub use recommender::{Recommender, RecommendationResult};
pub use rules::{HeuristicRule, ProfileField, Requirement, DEFAULT_RULES};
pub use scoring::{calculate_match_score, matches_best_colors};
