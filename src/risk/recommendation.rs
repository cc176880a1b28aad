//! Recommendation templates keyed by attribute and risk tier

use crate::core::{AttributeType, Distribution, RiskLevel};

/// Guidance text for a finding.
///
/// `Low` findings get a fixed message. `Medium` and `High` findings embed
/// the observed distribution: the category map as JSON, or the age range.
pub fn recommend(attribute: AttributeType, risk: RiskLevel, distribution: &Distribution) -> String {
    if risk == RiskLevel::Low {
        return balanced_message(attribute).to_string();
    }

    match (attribute, distribution) {
        (_, Distribution::Numeric(summary)) => format!(
            "Expand age range. Current range: {}-{} years",
            summary.min, summary.max
        ),
        (AttributeType::RaceEthnicity, Distribution::Categorical(categories)) => format!(
            "Increase diversity. Current: {}",
            serde_json::to_string(categories).unwrap_or_default()
        ),
        (_, Distribution::Categorical(categories)) => format!(
            "Resample to achieve 50/50 balance. Current: {}",
            serde_json::to_string(categories).unwrap_or_default()
        ),
    }
}

fn balanced_message(attribute: AttributeType) -> &'static str {
    match attribute {
        AttributeType::Gender => "Distribution is balanced",
        AttributeType::Age => "Age distribution is diverse",
        AttributeType::RaceEthnicity => "Racial distribution is balanced",
    }
}
