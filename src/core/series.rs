use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Ordered collection of named numeric series.
///
/// Insertion order is draw order. The first inserted series seeds the value
/// extent, matching how the chart derives its y-domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    series: IndexMap<String, Vec<f64>>,
}

impl SeriesSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from unnamed series, naming them `series-0`, `series-1`, ...
    #[must_use]
    pub fn from_values(values: Vec<Vec<f64>>) -> Self {
        let series = values
            .into_iter()
            .enumerate()
            .map(|(index, values)| (format!("series-{index}"), values))
            .collect();
        Self { series }
    }

    /// Inserts or replaces a series. A replaced series keeps its position.
    pub fn push(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.series.insert(name.into(), values);
    }

    #[must_use]
    pub fn with_series(mut self, name: impl Into<String>, values: Vec<f64>) -> Self {
        self.push(name, values);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<(&str, &[f64])> {
        self.series
            .get_index(index)
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&[f64]> {
        self.series.get(name).map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.series
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    /// Length of the longest series.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.series.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Checks the set can seed both axis domains.
    pub fn validate(&self) -> ChartResult<()> {
        let Some((_, first)) = self.series.first() else {
            return Err(ChartError::EmptySeries);
        };
        if first.is_empty() {
            return Err(ChartError::EmptySeries);
        }

        for (name, values) in &self.series {
            if values.iter().any(|value| !value.is_finite()) {
                return Err(ChartError::InvalidData(format!(
                    "series `{name}` contains non-finite values"
                )));
            }
        }
        Ok(())
    }

    /// Raw `(min, max)` across every point, seeded by the first series' first value.
    ///
    /// The pair is not normalized; a flat dataset returns `(v, v)`.
    pub fn value_extent(&self) -> ChartResult<(f64, f64)> {
        self.validate()?;
        let seed = self
            .series
            .first()
            .and_then(|(_, values)| values.first().copied())
            .ok_or(ChartError::EmptySeries)?;

        let extent = self
            .series
            .values()
            .flatten()
            .fold((seed, seed), |(min, max), value| {
                (min.min(*value), max.max(*value))
            });
        Ok(extent)
    }

    /// Index-axis extent `(0, max(len - 1, 1))` over the longest series.
    #[must_use]
    pub fn index_extent(&self) -> (f64, f64) {
        let last_index = self.max_len().saturating_sub(1).max(1);
        (0.0, last_index as f64)
    }
}
