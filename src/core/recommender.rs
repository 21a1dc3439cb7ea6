use rand::Rng;
use crate::models::{Product, ScoredProduct, StyleProfile};
use crate::core::{
    rules::{HeuristicRule, DEFAULT_RULES},
    scoring::{calculate_match_score, BASE_SCORE},
};

/// Width of the placeholder score range used before a profile exists (70..=89)
pub const PLACEHOLDER_SPREAD: u8 = 20;

/// Result of ranking a catalog
#[derive(Debug)]
pub struct RecommendationResult {
    pub products: Vec<ScoredProduct>,
    /// False when scores are random placeholders
    pub personalized: bool,
}

/// Ranks a product catalog against a style profile
///
/// # Ranking
/// 1. Score every product (heuristic rules, or placeholders without a profile)
/// 2. Stable sort by score, descending, so ties keep catalog order
///
/// The recommender holds no mutable state and can be shared between workers.
#[derive(Debug, Clone)]
pub struct Recommender {
    rules: &'static [HeuristicRule],
}

impl Recommender {
    pub fn new(rules: &'static [HeuristicRule]) -> Self {
        Self { rules }
    }

    pub fn with_default_rules() -> Self {
        Self {
            rules: DEFAULT_RULES,
        }
    }

    pub fn rules(&self) -> &[HeuristicRule] {
        self.rules
    }

    /// Rank the catalog, drawing placeholder scores from the thread-local RNG
    pub fn recommend(
        &self,
        profile: Option<&StyleProfile>,
        catalog: &[Product],
    ) -> RecommendationResult {
        self.recommend_with_rng(profile, catalog, &mut rand::rng())
    }

    /// Rank the catalog against a profile
    ///
    /// # Arguments
    /// * `profile` - The user's style profile, `None` if no analysis exists yet
    /// * `catalog` - Products to rank; never modified
    /// * `rng` - Source for placeholder scores, only used when `profile` is `None`
    ///
    /// # Returns
    /// Every catalog product exactly once, best match first
    pub fn recommend_with_rng<R: Rng>(
        &self,
        profile: Option<&StyleProfile>,
        catalog: &[Product],
        rng: &mut R,
    ) -> RecommendationResult {
        let mut products: Vec<ScoredProduct> = match profile {
            Some(profile) => catalog
                .iter()
                .map(|product| {
                    let (score, reasons) = calculate_match_score(product, profile, self.rules);
                    ScoredProduct::new(product.clone(), score, reasons)
                })
                .collect(),
            None => {
                tracing::debug!(
                    "No style profile, assigning placeholder scores to {} products",
                    catalog.len()
                );
                catalog
                    .iter()
                    .map(|product| {
                        let score = rng.random_range(BASE_SCORE..BASE_SCORE + PLACEHOLDER_SPREAD);
                        ScoredProduct::new(product.clone(), score, Vec::new())
                    })
                    .collect()
            }
        };

        // sort_by is stable
        products.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        tracing::debug!(
            "Ranked {} products (personalized: {})",
            products.len(),
            profile.is_some()
        );

        RecommendationResult {
            products,
            personalized: profile.is_some(),
        }
    }
}

impl Default for Recommender {
    fn default() -> Self {
        Self::with_default_rules()
    }
}
