use crate::models::{MatchReason, Product, StyleProfile};

/// Profile attribute a heuristic rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileField {
    BodyType,
    SkinTone,
}

impl ProfileField {
    fn text(self, profile: &StyleProfile) -> &str {
        match self {
            ProfileField::BodyType => &profile.body_type,
            ProfileField::SkinTone => &profile.skin_tone,
        }
    }
}

/// What a product must carry for a rule to fire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    Tag(&'static str),
    Color(&'static str),
}

impl Requirement {
    /// Case-normalized set membership, never substring
    fn is_met_by(self, product: &Product) -> bool {
        match self {
            Requirement::Tag(tag) => contains_normalized(&product.tags, tag),
            Requirement::Color(color) => contains_normalized(&product.colors, color),
        }
    }
}

/// One additive body-type or skin-tone heuristic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeuristicRule {
    pub reason: MatchReason,
    pub field: ProfileField,
    /// Matched case-insensitively as a substring of the profile field
    pub keyword: &'static str,
    pub requirement: Requirement,
    pub bonus: u8,
}

impl HeuristicRule {
    pub fn applies(&self, profile: &StyleProfile, product: &Product) -> bool {
        let text = self.field.text(profile).to_lowercase();
        text.contains(&self.keyword.to_lowercase()) && self.requirement.is_met_by(product)
    }
}

/// Body-type and skin-tone rules, evaluated in order, each independently additive
pub const DEFAULT_RULES: &[HeuristicRule] = &[
    HeuristicRule {
        reason: MatchReason::SlimFit,
        field: ProfileField::BodyType,
        keyword: "slim",
        requirement: Requirement::Tag("Slim"),
        bonus: 10,
    },
    HeuristicRule {
        reason: MatchReason::CasualFit,
        field: ProfileField::BodyType,
        keyword: "average",
        requirement: Requirement::Tag("Casual"),
        bonus: 5,
    },
    HeuristicRule {
        reason: MatchReason::StructuredFit,
        field: ProfileField::BodyType,
        keyword: "broad",
        requirement: Requirement::Tag("Structured"),
        bonus: 10,
    },
    HeuristicRule {
        reason: MatchReason::DarkForFairSkin,
        field: ProfileField::SkinTone,
        keyword: "fair",
        requirement: Requirement::Color("Dark"),
        bonus: 5,
    },
    HeuristicRule {
        reason: MatchReason::PastelForDeepSkin,
        field: ProfileField::SkinTone,
        keyword: "deep",
        requirement: Requirement::Color("Pastel"),
        bonus: 5,
    },
    HeuristicRule {
        reason: MatchReason::BeigeForMediumSkin,
        field: ProfileField::SkinTone,
        keyword: "medium",
        requirement: Requirement::Color("Beige"),
        bonus: 5,
    },
];

#[inline]
fn contains_normalized(values: &[String], wanted: &str) -> bool {
    let wanted = wanted.to_lowercase();
    values.iter().any(|v| v.to_lowercase() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProductCategory;

    fn product(tags: &[&str], colors: &[&str]) -> Product {
        Product {
            id: "p".to_string(),
            name: "Test Product".to_string(),
            brand: "Test".to_string(),
            price: 1000.0,
            currency: "₹".to_string(),
            image: String::new(),
            link: String::new(),
            category: ProductCategory::Top,
            tags: tags.iter().map(|s| s.to_string()).collect(),
            colors: colors.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn profile(body_type: &str, skin_tone: &str) -> StyleProfile {
        StyleProfile {
            body_type: body_type.to_string(),
            skin_tone: skin_tone.to_string(),
            ..StyleProfile::default()
        }
    }

    fn rule(reason: MatchReason) -> &'static HeuristicRule {
        DEFAULT_RULES.iter().find(|r| r.reason == reason).unwrap()
    }

    #[test]
    fn test_slim_rule() {
        let slim = rule(MatchReason::SlimFit);
        assert!(slim.applies(&profile("Slim build", ""), &product(&["Slim"], &[])));
        assert!(!slim.applies(&profile("Average", ""), &product(&["Slim"], &[])));
        assert!(!slim.applies(&profile("Slim build", ""), &product(&["Casual"], &[])));
    }

    #[test]
    fn test_tag_match_is_exact_not_substring() {
        let slim = rule(MatchReason::SlimFit);
        assert!(!slim.applies(&profile("slim", ""), &product(&["Slim Fit"], &[])));
        assert!(slim.applies(&profile("slim", ""), &product(&["slim"], &[])));
    }

    #[test]
    fn test_color_requirement_is_exact() {
        let fair = rule(MatchReason::DarkForFairSkin);
        assert!(fair.applies(&profile("", "Fair"), &product(&[], &["Dark"])));
        assert!(!fair.applies(&profile("", "Fair"), &product(&[], &["Dark Blue"])));
    }

    #[test]
    fn test_profile_keyword_is_substring() {
        let medium = rule(MatchReason::BeigeForMediumSkin);
        assert!(medium.applies(&profile("", "Medium-Olive"), &product(&[], &["Beige"])));

        let broad = rule(MatchReason::StructuredFit);
        assert!(broad.applies(&profile("Broad shoulders", ""), &product(&["Structured"], &[])));
    }

    #[test]
    fn test_capitalized_keyword_matches() {
        let rule = HeuristicRule {
            reason: MatchReason::SlimFit,
            field: ProfileField::BodyType,
            keyword: "Slim",
            requirement: Requirement::Tag("Slim"),
            bonus: 10,
        };

        assert!(rule.applies(&profile("Slim build", ""), &product(&["Slim"], &[])));
        assert!(rule.applies(&profile("very SLIM", ""), &product(&["slim"], &[])));
    }

    #[test]
    fn test_empty_profile_fires_nothing() {
        let p = product(&["Slim", "Casual", "Structured"], &["Dark", "Pastel", "Beige"]);
        let empty = StyleProfile::default();

        assert!(DEFAULT_RULES.iter().all(|r| !r.applies(&empty, &p)));
    }

    #[test]
    fn test_rule_table_bonuses() {
        let total: u32 = DEFAULT_RULES.iter().map(|r| r.bonus as u32).sum();
        assert_eq!(total, 40);
        assert_eq!(DEFAULT_RULES.len(), 6);
    }
}
