use crate::analysis::{AttributeRule, KeywordTable};
use crate::core::AttributeType;
use serde::{Deserialize, Serialize};

/// Header keywords per protected attribute.
///
/// An empty list disables detection of that attribute. Attribute order in
/// the resulting table is fixed: gender, age, race/ethnicity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    #[serde(default = "default_gender_keywords")]
    pub gender: Vec<String>,

    #[serde(default = "default_age_keywords")]
    pub age: Vec<String>,

    #[serde(default = "default_race_ethnicity_keywords")]
    pub race_ethnicity: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            gender: default_gender_keywords(),
            age: default_age_keywords(),
            race_ethnicity: default_race_ethnicity_keywords(),
        }
    }
}

impl KeywordConfig {
    pub fn to_table(&self) -> KeywordTable {
        let rules = [
            (AttributeType::Gender, &self.gender),
            (AttributeType::Age, &self.age),
            (AttributeType::RaceEthnicity, &self.race_ethnicity),
        ]
        .into_iter()
        .filter(|(_, keywords)| !keywords.is_empty())
        .map(|(attribute, keywords)| AttributeRule::new(attribute, keywords.iter().cloned()))
        .collect();
        KeywordTable::new(rules)
    }
}

fn default_gender_keywords() -> Vec<String> {
    vec!["gender".into(), "sex".into()]
}
fn default_age_keywords() -> Vec<String> {
    vec!["age".into()]
}
fn default_race_ethnicity_keywords() -> Vec<String> {
    vec!["race".into(), "ethnicity".into()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_builtin_table() {
        assert_eq!(KeywordConfig::default().to_table(), KeywordTable::default());
    }

    #[test]
    fn test_empty_list_disables_attribute() {
        let config = KeywordConfig {
            age: Vec::new(),
            ..KeywordConfig::default()
        };
        let attributes: Vec<_> = config
            .to_table()
            .rules()
            .iter()
            .map(|rule| rule.attribute)
            .collect();
        assert_eq!(
            attributes,
            vec![AttributeType::Gender, AttributeType::RaceEthnicity]
        );
    }

    #[test]
    fn test_partial_toml() {
        let config: KeywordConfig = toml::from_str(r#"gender = ["gender", "sex", "genre"]"#).unwrap();
        assert_eq!(config.gender.len(), 3);
        assert_eq!(config.age, vec!["age".to_string()]);
    }
}
