//! Column classification by header keyword.
//!
//! A fixed, ordered table of `(attribute, keywords)` rules is evaluated
//! against the header once. Matching is a case-insensitive substring test,
//! so `Applicant_Gender` and `SEX` both resolve to [`AttributeType::Gender`].
//! The first matching column in header order wins; later matches for the
//! same attribute are ignored.

use crate::core::AttributeType;
use serde::{Deserialize, Serialize};

/// Keywords identifying one protected attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRule {
    pub attribute: AttributeType,
    pub keywords: Vec<String>,
}

impl AttributeRule {
    pub fn new<I, S>(attribute: AttributeType, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attribute,
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }

    fn matches(&self, column: &str) -> bool {
        let column = column.to_lowercase();
        self.keywords
            .iter()
            .filter(|keyword| !keyword.is_empty())
            .any(|keyword| column.contains(&keyword.to_lowercase()))
    }
}

/// Ordered keyword table. Rule order is also the order findings are reported in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTable {
    rules: Vec<AttributeRule>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self::new(vec![
            AttributeRule::new(AttributeType::Gender, ["gender", "sex"]),
            AttributeRule::new(AttributeType::Age, ["age"]),
            AttributeRule::new(AttributeType::RaceEthnicity, ["race", "ethnicity"]),
        ])
    }
}

impl KeywordTable {
    pub fn new(rules: Vec<AttributeRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[AttributeRule] {
        &self.rules
    }

    /// Resolve each rule to the first header column it matches.
    ///
    /// Attributes without a matching column are left out. One column may
    /// satisfy several rules (a `gender_age` column matches both Gender and
    /// Age).
    pub fn classify<'a>(&self, columns: &'a [String]) -> Vec<ColumnMatch<'a>> {
        self.rules
            .iter()
            .filter_map(|rule| {
                columns
                    .iter()
                    .find(|column| rule.matches(column))
                    .map(|column| ColumnMatch {
                        attribute: rule.attribute,
                        column: column.as_str(),
                    })
            })
            .collect()
    }
}

/// A protected attribute resolved to a concrete header column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMatch<'a> {
    pub attribute: AttributeType,
    pub column: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_default_table_order() {
        let attributes: Vec<_> = KeywordTable::default()
            .rules()
            .iter()
            .map(|rule| rule.attribute)
            .collect();
        assert_eq!(
            attributes,
            vec![
                AttributeType::Gender,
                AttributeType::Age,
                AttributeType::RaceEthnicity
            ]
        );
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let columns = header(&["ID", "Applicant_SEX", "AgeYears", "Ethnicity"]);
        let matches = KeywordTable::default().classify(&columns);
        assert_eq!(
            matches,
            vec![
                ColumnMatch {
                    attribute: AttributeType::Gender,
                    column: "Applicant_SEX"
                },
                ColumnMatch {
                    attribute: AttributeType::Age,
                    column: "AgeYears"
                },
                ColumnMatch {
                    attribute: AttributeType::RaceEthnicity,
                    column: "Ethnicity"
                },
            ]
        );
    }

    #[test]
    fn test_first_declared_column_wins() {
        let columns = header(&["sex", "gender"]);
        let matches = KeywordTable::default().classify(&columns);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].column, "sex");
    }

    #[test]
    fn test_unmatched_attributes_are_skipped() {
        let columns = header(&["name", "income"]);
        assert!(KeywordTable::default().classify(&columns).is_empty());
    }

    #[test]
    fn test_result_follows_rule_order_not_header_order() {
        let columns = header(&["race", "age", "gender"]);
        let attributes: Vec<_> = KeywordTable::default()
            .classify(&columns)
            .into_iter()
            .map(|m| m.attribute)
            .collect();
        assert_eq!(
            attributes,
            vec![
                AttributeType::Gender,
                AttributeType::Age,
                AttributeType::RaceEthnicity
            ]
        );
    }

    #[test]
    fn test_custom_table() {
        let table = KeywordTable::new(vec![AttributeRule::new(
            AttributeType::Gender,
            ["genre"],
        )]);
        let columns = header(&["gender", "Genre"]);
        let matches = table.classify(&columns);
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].column, "Genre");
    }

    #[test]
    fn test_empty_keyword_never_matches() {
        let table = KeywordTable::new(vec![AttributeRule::new(AttributeType::Age, [""])]);
        assert!(table.classify(&header(&["anything"])).is_empty());
    }
}
