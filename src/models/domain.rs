use serde::{Deserialize, Deserializer, Serialize};

/// Style profile produced by the external analysis collaborator
///
/// Only `best_colors`, `body_type` and `skin_tone` take part in scoring.
/// The remaining fields are carried through for clients that render them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleProfile {
    #[serde(rename = "bestColors", default, deserialize_with = "null_as_default")]
    pub best_colors: Vec<String>,
    #[serde(rename = "bodyType", default, deserialize_with = "null_as_default")]
    pub body_type: String,
    #[serde(rename = "skinTone", default, deserialize_with = "null_as_default")]
    pub skin_tone: String,
    #[serde(rename = "faceShape", default, skip_serializing_if = "Option::is_none")]
    pub face_shape: Option<String>,
    #[serde(rename = "bestPatterns", default, deserialize_with = "null_as_default")]
    pub best_patterns: Vec<String>,
}

/// Catalog category of a product
///
/// Unknown or missing categories deserialize as `Other`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    Top,
    Bottom,
    Shoes,
    Accessory,
    #[default]
    #[serde(other)]
    Other,
}

/// Static catalog entry
///
/// Everything except `colors` and `tags` is opaque to the scorer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub currency: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub category: ProductCategory,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub colors: Vec<String>,
}

/// Scoring rule that contributed to a match score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchReason {
    /// A product color overlaps the profile's best colors
    ColorMatch,
    SlimFit,
    CasualFit,
    StructuredFit,
    DarkForFairSkin,
    PastelForDeepSkin,
    BeigeForMediumSkin,
}

/// Product ranked against a style profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchReasons")]
    pub match_reasons: Vec<MatchReason>,
    #[serde(rename = "isHighMatch")]
    pub is_high_match: bool,
}

/// Score from which a product is highlighted as a strong match
pub const HIGH_MATCH_THRESHOLD: u8 = 80;

impl ScoredProduct {
    pub fn new(product: Product, match_score: u8, match_reasons: Vec<MatchReason>) -> Self {
        Self {
            product,
            match_score,
            match_reasons,
            is_high_match: match_score >= HIGH_MATCH_THRESHOLD,
        }
    }

    pub fn id(&self) -> &str {
        &self.product.id
    }
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
