use serde::{Deserialize, Serialize};

/// Thresholds for an attribute whose risk grows with category concentration.
///
/// A distribution is `High` when its largest share is strictly above `high`,
/// `Medium` when strictly above `medium`, `Low` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConcentrationThresholds {
    pub high: f64,
    pub medium: f64,
}

impl ConcentrationThresholds {
    pub fn gender_defaults() -> Self {
        Self {
            high: 75.0,
            medium: 60.0,
        }
    }

    pub fn race_ethnicity_defaults() -> Self {
        Self {
            high: 70.0,
            medium: 50.0,
        }
    }

    fn validate(&self, name: &str) -> Result<(), String> {
        if !(0.0..=100.0).contains(&self.medium) || !(0.0..=100.0).contains(&self.high) {
            return Err(format!("{name} thresholds must be percentages in 0..=100"));
        }
        if self.medium > self.high {
            return Err(format!(
                "{name} medium threshold ({}) exceeds high threshold ({})",
                self.medium, self.high
            ));
        }
        Ok(())
    }
}

/// Thresholds for a numeric attribute where a narrow spread is the risk.
///
/// `High` when the range is strictly below `high_below`, `Medium` when
/// strictly below `medium_below`, `Low` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeThresholds {
    pub high_below: i64,
    pub medium_below: i64,
}

impl Default for RangeThresholds {
    fn default() -> Self {
        Self {
            high_below: 20,
            medium_below: 40,
        }
    }
}

/// Per-attribute risk thresholds, tunable per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    #[serde(default = "ConcentrationThresholds::gender_defaults")]
    pub gender: ConcentrationThresholds,

    #[serde(default = "ConcentrationThresholds::race_ethnicity_defaults")]
    pub race_ethnicity: ConcentrationThresholds,

    #[serde(default)]
    pub age: RangeThresholds,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            gender: ConcentrationThresholds::gender_defaults(),
            race_ethnicity: ConcentrationThresholds::race_ethnicity_defaults(),
            age: RangeThresholds::default(),
        }
    }
}

impl RiskThresholds {
    pub fn validate(&self) -> Result<(), String> {
        self.gender.validate("gender")?;
        self.race_ethnicity.validate("race_ethnicity")?;
        if self.age.high_below > self.age.medium_below {
            return Err(format!(
                "age high_below ({}) exceeds medium_below ({})",
                self.age.high_below, self.age.medium_below
            ));
        }
        Ok(())
    }
}
