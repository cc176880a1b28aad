//! Value distributions for protected-attribute columns.
//!
//! Categorical columns produce a category-to-percentage map. Numeric columns
//! (Age) produce a [`NumericSummary`]. Empty and missing cells never count
//! toward any category or the denominator, and an attribute whose sample is
//! empty yields no distribution at all.

use crate::core::{Dataset, Distribution, NumericSummary, ValueKind};
use indexmap::IndexMap;
use tracing::debug;

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Tabulate the distribution of `column` according to `kind`.
pub fn analyze_column(dataset: &Dataset, column: &str, kind: ValueKind) -> Option<Distribution> {
    let values = dataset.values(column);
    match kind {
        ValueKind::Categorical { fold_case } => {
            categorical_distribution(values, fold_case).map(Distribution::Categorical)
        }
        ValueKind::Numeric => numeric_summary(values).map(Distribution::Numeric),
    }
}

/// Share of each distinct value, in percent, keyed in first-seen order.
///
/// With `fold_case` the labels are trimmed and lower-cased before counting,
/// and cells that are blank after trimming are dropped. Without it labels
/// are counted verbatim.
pub fn categorical_distribution<'a, I>(values: I, fold_case: bool) -> Option<IndexMap<String, f64>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for value in values {
        let label = if fold_case {
            value.trim().to_lowercase()
        } else {
            value.to_string()
        };
        if label.is_empty() {
            continue;
        }
        *counts.entry(label).or_insert(0) += 1;
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return None;
    }

    Some(
        counts
            .into_iter()
            .map(|(label, count)| (label, round1(100.0 * count as f64 / total as f64)))
            .collect(),
    )
}

/// Leading integer of a cell: optional sign then digits, rest ignored.
///
/// `"34.0"` reads as 34 and `"40.5"` as 40. Cells without leading digits,
/// or whose digits overflow `i64`, yield `None`.
pub fn leading_integer(value: &str) -> Option<i64> {
    let value = value.trim();
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let digits = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    if digits == 0 {
        return None;
    }
    let sign_len = value.len() - unsigned.len();
    value[..sign_len + digits].parse().ok()
}

/// Summary of the cells that start with an integer.
///
/// Cells without one are excluded from the sample. Returns `None` when no
/// cell parses, so callers never divide by an empty sample.
pub fn numeric_summary<'a, I>(values: I) -> Option<NumericSummary>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sample = Vec::new();
    let mut skipped = 0usize;
    for value in values {
        match leading_integer(value) {
            Some(n) => sample.push(n),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(skipped, parsed = sample.len(), "Excluded unparsable numeric cells");
    }

    let min = *sample.iter().min()?;
    let max = *sample.iter().max()?;
    let sum: i128 = sample.iter().map(|&n| n as i128).sum();
    let average = round1(sum as f64 / sample.len() as f64);

    Some(NumericSummary {
        average,
        min,
        max,
        range: max.saturating_sub(min),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Row;

    fn column(name: &str, values: &[&str]) -> Dataset {
        Dataset::from_rows(
            values
                .iter()
                .map(|v| {
                    let mut row = Row::new();
                    row.insert(name.to_string(), v.to_string());
                    row
                })
                .collect(),
        )
    }

    #[test]
    fn test_round1() {
        assert_eq!(round1(66.666), 66.7);
        assert_eq!(round1(33.333), 33.3);
        assert_eq!(round1(80.0), 80.0);
    }

    #[test]
    fn test_categorical_fold_case_merges_labels() {
        let dist =
            categorical_distribution(["Male", " male ", "FEMALE", "female"], true).unwrap();
        assert_eq!(dist.get("male"), Some(&50.0));
        assert_eq!(dist.get("female"), Some(&50.0));
        assert_eq!(dist.len(), 2);
    }

    #[test]
    fn test_categorical_raw_keeps_case() {
        let dist = categorical_distribution(["Asian", "asian", "Asian", "White"], false).unwrap();
        assert_eq!(dist.get("Asian"), Some(&50.0));
        assert_eq!(dist.get("asian"), Some(&25.0));
        assert_eq!(dist.get("White"), Some(&25.0));
    }

    #[test]
    fn test_many_singletons_drift_within_per_category_bound() {
        let labels: Vec<String> = (0..16).map(|i| format!("group{i}")).collect();
        let dist = categorical_distribution(labels.iter().map(String::as_str), false).unwrap();

        // 6.25 rounds up to 6.3 for every one of the 16 categories
        assert!(dist.values().all(|&share| share == 6.3));
        let total: f64 = dist.values().sum();
        assert!((total - 100.8).abs() < 1e-9);
        assert!((total - 100.0).abs() <= 0.05 * dist.len() as f64 + 1e-9);
    }

    #[test]
    fn test_categorical_first_seen_order() {
        let dist = categorical_distribution(["b", "a", "b"], false).unwrap();
        let keys: Vec<_> = dist.keys().cloned().collect();
        assert_eq!(keys, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_blank_cells_leave_denominator() {
        let dataset = column("gender", &["male", "", "   ", "female", "male", "male"]);
        let dist = analyze_column(&dataset, "gender", ValueKind::Categorical { fold_case: true });
        let Some(Distribution::Categorical(dist)) = dist else {
            panic!("expected categorical distribution");
        };
        assert_eq!(dist.get("male"), Some(&75.0));
        assert_eq!(dist.get("female"), Some(&25.0));
    }

    #[test]
    fn test_all_empty_yields_nothing() {
        assert!(categorical_distribution(["", " "], true).is_none());
        assert!(categorical_distribution(std::iter::empty(), false).is_none());
    }

    #[test]
    fn test_numeric_summary() {
        let summary = numeric_summary(["25", "25", "25", "26"]).unwrap();
        assert_eq!(
            summary,
            NumericSummary {
                average: 25.3,
                min: 25,
                max: 26,
                range: 1
            }
        );
    }

    #[test]
    fn test_numeric_skips_unparsable_cells() {
        let summary = numeric_summary(["18", "unknown", " 75 ", "40.5", "n/a"]).unwrap();
        assert_eq!(summary.min, 18);
        assert_eq!(summary.max, 75);
        assert_eq!(summary.range, 57);
        // 18 + 75 + 40 over three parsed cells
        assert_eq!(summary.average, 44.3);
    }

    #[test]
    fn test_float_formatted_ages_keep_integer_part() {
        let dataset = column("age", &["25.0", "60.0", "33.0"]);
        let Some(Distribution::Numeric(summary)) =
            analyze_column(&dataset, "age", ValueKind::Numeric)
        else {
            panic!("expected numeric distribution");
        };
        assert_eq!(
            summary,
            NumericSummary {
                average: 39.3,
                min: 25,
                max: 60,
                range: 35
            }
        );
    }

    #[test]
    fn test_leading_integer() {
        assert_eq!(leading_integer("34.0"), Some(34));
        assert_eq!(leading_integer(" 40.5 "), Some(40));
        assert_eq!(leading_integer("-3"), Some(-3));
        assert_eq!(leading_integer("+7 years"), Some(7));
        assert_eq!(leading_integer("12abc"), Some(12));
        assert_eq!(leading_integer("n/a"), None);
        assert_eq!(leading_integer("-"), None);
        assert_eq!(leading_integer(".5"), None);
        assert_eq!(leading_integer("99999999999999999999"), None);
    }

    #[test]
    fn test_numeric_empty_sample_yields_nothing() {
        assert!(numeric_summary(["n/a", "?"]).is_none());
        let dataset = column("age", &["", ""]);
        assert!(analyze_column(&dataset, "age", ValueKind::Numeric).is_none());
    }
}
