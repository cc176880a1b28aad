pub mod recommendation;

use crate::config::RiskThresholds;
use crate::core::{AttributeFinding, AttributeType, Distribution, NumericSummary, RiskLevel};

pub use recommendation::recommend;

/// Maps attribute distributions to risk tiers.
#[derive(Debug, Clone, Default)]
pub struct RiskClassifier {
    pub thresholds: RiskThresholds,
}

impl RiskClassifier {
    pub fn new(thresholds: RiskThresholds) -> Self {
        Self { thresholds }
    }

    /// Classify a distribution and attach its recommendation.
    pub fn assess(&self, attribute: AttributeType, distribution: Distribution) -> AttributeFinding {
        let risk_level = self.classify(attribute, &distribution);
        let recommendation = recommend(attribute, risk_level, &distribution);
        AttributeFinding {
            attribute_type: attribute,
            distribution,
            risk_level,
            recommendation,
        }
    }

    pub fn classify(&self, attribute: AttributeType, distribution: &Distribution) -> RiskLevel {
        match distribution {
            Distribution::Categorical(_) => {
                let max_share = distribution.max_percentage().unwrap_or(0.0);
                self.classify_concentration(attribute, max_share)
            }
            Distribution::Numeric(summary) => self.classify_range(summary),
        }
    }

    /// Skewed categorical data is risky: the larger the dominant share, the
    /// higher the tier. Comparisons are strict.
    fn classify_concentration(&self, attribute: AttributeType, max_share: f64) -> RiskLevel {
        let limits = match attribute {
            AttributeType::Gender => self.thresholds.gender,
            AttributeType::RaceEthnicity => self.thresholds.race_ethnicity,
            // Age is tabulated numerically; a categorical age only arrives hand-built.
            AttributeType::Age => self.thresholds.gender,
        };

        if max_share > limits.high {
            RiskLevel::High
        } else if max_share > limits.medium {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    // Inverted sense: a narrow range means low diversity and high risk.
    fn classify_range(&self, summary: &NumericSummary) -> RiskLevel {
        let limits = self.thresholds.age;
        match summary.range {
            r if r < limits.high_below => RiskLevel::High,
            r if r < limits.medium_below => RiskLevel::Medium,
            _ => RiskLevel::Low,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConcentrationThresholds, RangeThresholds};
    use indexmap::IndexMap;

    fn categorical(pairs: &[(&str, f64)]) -> Distribution {
        Distribution::Categorical(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), *v))
                .collect::<IndexMap<_, _>>(),
        )
    }

    fn ages(min: i64, max: i64) -> Distribution {
        Distribution::Numeric(NumericSummary {
            average: (min + max) as f64 / 2.0,
            min,
            max,
            range: max - min,
        })
    }

    #[test]
    fn test_gender_thresholds_are_strict() {
        let classifier = RiskClassifier::default();
        let gender = AttributeType::Gender;
        assert_eq!(
            classifier.classify(gender, &categorical(&[("male", 80.0), ("female", 20.0)])),
            RiskLevel::High
        );
        assert_eq!(
            classifier.classify(gender, &categorical(&[("male", 75.0), ("female", 25.0)])),
            RiskLevel::Medium
        );
        assert_eq!(
            classifier.classify(gender, &categorical(&[("male", 60.1), ("female", 39.9)])),
            RiskLevel::Medium
        );
        assert_eq!(
            classifier.classify(gender, &categorical(&[("male", 60.0), ("female", 40.0)])),
            RiskLevel::Low
        );
    }

    #[test]
    fn test_race_thresholds() {
        let classifier = RiskClassifier::default();
        let race = AttributeType::RaceEthnicity;
        assert_eq!(
            classifier.classify(race, &categorical(&[("A", 70.1), ("B", 29.9)])),
            RiskLevel::High
        );
        assert_eq!(
            classifier.classify(race, &categorical(&[("A", 70.0), ("B", 30.0)])),
            RiskLevel::Medium
        );
        assert_eq!(
            classifier.classify(race, &categorical(&[("A", 50.0), ("B", 50.0)])),
            RiskLevel::Low
        );
    }

    #[test]
    fn test_each_attribute_uses_own_concentration_limits() {
        let classifier = RiskClassifier::default();
        let split = categorical(&[("A", 72.0), ("B", 28.0)]);
        assert_eq!(classifier.classify(AttributeType::Gender, &split), RiskLevel::Medium);
        assert_eq!(classifier.classify(AttributeType::RaceEthnicity, &split), RiskLevel::High);
        assert_eq!(classifier.classify(AttributeType::Age, &split), RiskLevel::Medium);
    }

    #[test]
    fn test_age_range_is_inverted() {
        let classifier = RiskClassifier::default();
        let age = AttributeType::Age;
        assert_eq!(classifier.classify(age, &ages(25, 26)), RiskLevel::High);
        assert_eq!(classifier.classify(age, &ages(20, 39)), RiskLevel::High);
        assert_eq!(classifier.classify(age, &ages(20, 40)), RiskLevel::Medium);
        assert_eq!(classifier.classify(age, &ages(20, 59)), RiskLevel::Medium);
        assert_eq!(classifier.classify(age, &ages(20, 60)), RiskLevel::Low);
        assert_eq!(classifier.classify(age, &ages(18, 75)), RiskLevel::Low);
    }

    #[test]
    fn test_custom_thresholds() {
        let classifier = RiskClassifier::new(RiskThresholds {
            gender: ConcentrationThresholds {
                high: 90.0,
                medium: 85.0,
            },
            race_ethnicity: ConcentrationThresholds::race_ethnicity_defaults(),
            age: RangeThresholds {
                high_below: 5,
                medium_below: 10,
            },
        });
        assert_eq!(
            classifier.classify(
                AttributeType::Gender,
                &categorical(&[("male", 80.0), ("female", 20.0)])
            ),
            RiskLevel::Low
        );
        assert_eq!(
            classifier.classify(AttributeType::Age, &ages(20, 27)),
            RiskLevel::Medium
        );
    }

    #[test]
    fn test_assess_builds_finding() {
        let finding = RiskClassifier::default().assess(
            AttributeType::Gender,
            categorical(&[("male", 80.0), ("female", 20.0)]),
        );
        assert_eq!(finding.attribute_type, AttributeType::Gender);
        assert_eq!(finding.risk_level, RiskLevel::High);
        assert!(finding.recommendation.starts_with("Resample"));
    }
}
