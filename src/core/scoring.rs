use crate::models::{MatchReason, Product, StyleProfile};
use crate::core::rules::HeuristicRule;

/// Starting score for every profiled product
pub const BASE_SCORE: u8 = 70;

/// Bonus when a product color overlaps the profile's best colors
pub const COLOR_MATCH_BONUS: u8 = 15;

/// Highest score a profiled product can reach; 100 is never awarded
pub const MAX_PROFILED_SCORE: u8 = 99;

/// Calculate a match score (70-99) for a product against a style profile
///
/// Scoring formula:
/// score = min(
///     70                              # base
///     + 15 if any color overlaps      # bidirectional substring
///     + sum(rule.bonus for each matching heuristic rule),
///     99
/// )
///
/// Returns the score and the reasons that contributed to it, in evaluation order.
pub fn calculate_match_score(
    product: &Product,
    profile: &StyleProfile,
    rules: &[HeuristicRule],
) -> (u8, Vec<MatchReason>) {
    let mut score = BASE_SCORE as u32;
    let mut reasons = Vec::new();

    if matches_best_colors(&product.colors, &profile.best_colors) {
        score += COLOR_MATCH_BONUS as u32;
        reasons.push(MatchReason::ColorMatch);
    }

    for rule in rules {
        if rule.applies(profile, product) {
            score += rule.bonus as u32;
            reasons.push(rule.reason);
        }
    }

    (score.min(MAX_PROFILED_SCORE as u32) as u8, reasons)
}

/// Check whether any product color and any best color contain one another
///
/// Containment is case-insensitive and checked in both directions, so a best
/// color of "Navy Blue" matches a product color of "Blue" and vice versa.
#[inline]
pub fn matches_best_colors(product_colors: &[String], best_colors: &[String]) -> bool {
    let best: Vec<String> = best_colors.iter().map(|c| c.to_lowercase()).collect();

    product_colors.iter().any(|pc| {
        let pc = pc.to_lowercase();
        best.iter().any(|bc| bc.contains(&pc) || pc.contains(bc.as_str()))
    })
}
