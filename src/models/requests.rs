use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::StyleProfile;

/// Request for ranked product recommendations
///
/// A missing or `null` profile means the user has not completed an analysis yet.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct RecommendationRequest {
    #[serde(default)]
    pub profile: Option<StyleProfile>,
    #[validate(range(min = 1, max = 100))]
    #[serde(default)]
    pub limit: Option<u16>,
}
