use serde::{Deserialize, Serialize};

use crate::core::extent::scale_extent;
use crate::core::ticks::{TickPlan, decimal_places, tick_plan, tick_precision};

/// One-directional affine map from a source interval onto a target interval.
///
/// `map(c) = target.0 + (target.1 - target.0) * (c - source.0) / (source.1 - source.0)`.
/// A zero-width source maps every input to `target.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearMapping {
    source_start: f64,
    source_end: f64,
    target_start: f64,
    target_end: f64,
}

impl LinearMapping {
    #[must_use]
    pub const fn new(source: (f64, f64), target: (f64, f64)) -> Self {
        Self {
            source_start: source.0,
            source_end: source.1,
            target_start: target.0,
            target_end: target.1,
        }
    }

    /// Position of `value` inside the source interval, `0` at its start and `1` at its end.
    #[must_use]
    pub fn normalize(self, value: f64) -> f64 {
        let span = self.source_end - self.source_start;
        if span == 0.0 {
            return 0.0;
        }
        (value - self.source_start) / span
    }

    /// Places a normalized position onto the target interval.
    #[must_use]
    pub fn place(self, normalized: f64) -> f64 {
        self.target_start + (self.target_end - self.target_start) * normalized
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        self.place(self.normalize(value))
    }

    /// The same mapping with source and target swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            source_start: self.target_start,
            source_end: self.target_end,
            target_start: self.source_start,
            target_end: self.source_end,
        }
    }
}

/// Maps a data domain onto an output range and back.
///
/// A `Scale` is a plain value: it is built once per layout pass from the
/// current data bounds and pixel extent, never mutated, and replaced when
/// either changes. The domain is normalized with [`scale_extent`] at
/// construction, so tick and precision queries never see a zero-width span
/// for finite input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    domain: (f64, f64),
    range: (f64, f64),
    forward: LinearMapping,
    inverse: LinearMapping,
}

impl Scale {
    /// Creates a scale from an unordered domain candidate and an output range.
    #[must_use]
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        let domain = scale_extent(domain.0, domain.1);
        let forward = LinearMapping::new(domain, range);
        Self {
            domain,
            range,
            forward,
            inverse: forward.reversed(),
        }
    }

    /// Normalized `(lo, hi)` data domain.
    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        self.range
    }

    /// Maps a data value to an output coordinate.
    #[must_use]
    pub fn forward(self, value: f64) -> f64 {
        self.forward.map(value)
    }

    /// Maps an output coordinate back to a data value.
    #[must_use]
    pub fn inverse(self, coordinate: f64) -> f64 {
        self.inverse.map(coordinate)
    }

    /// Round-number gridline boundaries for roughly `count` divisions.
    #[must_use]
    pub fn ticks(self, count: usize) -> TickPlan {
        tick_plan(self.domain.0, self.domain.1, count)
    }

    /// Power-of-ten granularity of one division, used to choose label digits.
    #[must_use]
    pub fn precision(self, count: usize) -> f64 {
        tick_precision(self.domain.0, self.domain.1, count)
    }

    /// Fractional digits for labels of a `count`-division axis.
    #[must_use]
    pub fn label_decimals(self, count: usize) -> usize {
        decimal_places(self.precision(count))
    }

    /// Returns `true` when `value` lies inside the domain, allowing `tolerance`
    /// on either side.
    #[must_use]
    pub fn domain_contains(self, value: f64, tolerance: f64) -> bool {
        value >= self.domain.0 - tolerance && value <= self.domain.1 + tolerance
    }
}
