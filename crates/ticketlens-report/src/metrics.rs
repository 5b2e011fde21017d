//! Timestamp parsing and per-category averages

use chrono::NaiveDateTime;
use std::collections::HashMap;

const TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%m/%d/%Y %H:%M",
];

/// Lenient timestamp parse; unparseable values become missing
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
}

/// Hours between first response and resolution.
///
/// Missing on either side yields missing. Negative spans are kept as-is;
/// the subtraction is not clamped.
pub fn elapsed_hours(
    first_response: Option<NaiveDateTime>,
    resolution: Option<NaiveDateTime>,
) -> Option<f64> {
    let (first, resolution) = (first_response?, resolution?);
    Some((resolution - first).num_seconds() as f64 / 3600.0)
}

/// Per-category means over the non-missing values only.
///
/// A category with zero non-missing values is omitted, not reported as
/// zero or NaN. Rows are sorted by category label.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryAverages {
    means: Vec<(String, f64)>,
}

impl CategoryAverages {
    pub fn compute<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Option<f64>)>,
    {
        let mut sums: HashMap<String, (f64, usize)> = HashMap::new();
        let mut skipped = 0usize;
        for (category, value) in pairs {
            let Some(value) = value else {
                skipped += 1;
                continue;
            };
            let entry = sums.entry(category.to_string()).or_insert((0.0, 0));
            entry.0 += value;
            entry.1 += 1;
        }

        let mut means: Vec<(String, f64)> = sums
            .into_iter()
            .map(|(category, (sum, n))| (category, sum / n as f64))
            .collect();
        means.sort_by(|a, b| a.0.cmp(&b.0));

        tracing::debug!(categories = means.len(), skipped, "category means computed");
        Self { means }
    }

    /// (category, mean) rows sorted by category label
    pub fn rows(&self) -> &[(String, f64)] {
        &self.means
    }

    pub fn get(&self, category: &str) -> Option<f64> {
        self.means
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, mean)| *mean)
    }

    pub fn is_empty(&self) -> bool {
        self.means.is_empty()
    }
}
