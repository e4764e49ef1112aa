use serde::{Deserialize, Serialize};

/// Upper bound on values yielded by one `TickValues` iterator.
pub const MAX_TICK_VALUES: usize = 10_000;

/// Largest division count a layout asks a tick plan for.
///
/// A plan built from at most this many divisions stays far below
/// `MAX_TICK_VALUES`, so its last value always reaches the domain end.
pub const MAX_TICK_COUNT: usize = 100;

/// Upper bound on fractional digits derived from a precision value.
///
/// `f64` carries about 17 significant decimal digits, so more label digits
/// would only print noise.
pub const MAX_LABEL_DECIMALS: usize = 17;

const DECIMAL_COUNT_TOLERANCE: f64 = 1e-9;

/// Round-number gridline boundaries in data space.
///
/// Iterating `start, start + step, ...` up to `stop` yields evenly spaced
/// gridline positions covering the domain the plan was built from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickPlan {
    pub start: f64,
    pub stop: f64,
    pub step: f64,
}

impl TickPlan {
    #[must_use]
    pub const fn new(start: f64, stop: f64, step: f64) -> Self {
        Self { start, stop, step }
    }

    /// Returns `true` when iterating the plan yields at least one value.
    #[must_use]
    pub fn is_usable(self) -> bool {
        self.start.is_finite()
            && self.stop.is_finite()
            && self.step.is_finite()
            && self.step > 0.0
            && self.start <= self.stop
    }

    /// Iterates tick values from `start` through `stop`.
    ///
    /// Values are computed as `start + i * step` so rounding error does not
    /// accumulate. A degenerate plan (non-finite bounds, non-positive step)
    /// yields nothing.
    #[must_use]
    pub fn values(self) -> TickValues {
        TickValues {
            plan: self,
            index: 0,
            done: !self.is_usable(),
        }
    }
}

/// Iterator returned by [`TickPlan::values`].
#[derive(Debug, Clone)]
pub struct TickValues {
    plan: TickPlan,
    index: usize,
    done: bool,
}

impl Iterator for TickValues {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.done || self.index >= MAX_TICK_VALUES {
            return None;
        }

        let value = self.plan.start + self.plan.step * self.index as f64;
        // Accept a last value that overshoots `stop` by float noise only.
        let tolerance = self.plan.step / 10.0;
        if value > self.plan.stop + tolerance {
            self.done = true;
            return None;
        }

        self.index += 1;
        Some(value)
    }
}

/// Largest power of ten no greater than one division's natural width.
///
/// `count == 0` is treated as one division. A zero-width or non-finite span
/// has no defined precision and propagates a non-finite (or zero) result;
/// callers normalize domains with [`scale_extent`](crate::core::scale_extent)
/// first.
#[must_use]
pub fn tick_precision(lo: f64, hi: f64, count: usize) -> f64 {
    let divisions = count.max(1) as f64;
    let exponent = ((hi - lo) / divisions).log10().floor();
    // powi is exact for integer exponents (0.001 stays 0.001); powf keeps
    // +-inf and NaN from a degenerate span.
    if exponent.is_finite() {
        10_f64.powi(exponent as i32)
    } else {
        10_f64.powf(exponent)
    }
}

/// Computes round-number tick boundaries for the domain `(lo, hi)`.
///
/// The resulting plan satisfies `start <= lo`, `stop >= hi` and `step > 0`
/// for a non-degenerate span. The number of ticks it yields may differ
/// slightly from `count`.
#[must_use]
pub fn tick_plan(lo: f64, hi: f64, count: usize) -> TickPlan {
    let divisions = count.max(1) as f64;
    let precision = tick_precision(lo, hi, count);

    let start = (lo / precision).floor() * precision;
    let stop = (hi / precision).ceil() * precision;
    let step = ((stop - start) / divisions / precision).floor() * precision;

    TickPlan { start, stop, step }
}

/// Number of fractional digits needed to print values at `precision`.
///
/// Counts how many times `precision` must be multiplied by ten to reach one.
/// Non-finite or non-positive precision yields `0`.
#[must_use]
pub fn decimal_places(precision: f64) -> usize {
    if !precision.is_finite() || precision <= 0.0 {
        return 0;
    }

    let mut value = precision;
    let mut decimals = 0;
    while value < 1.0 - DECIMAL_COUNT_TOLERANCE && decimals < MAX_LABEL_DECIMALS {
        value *= 10.0;
        decimals += 1;
    }
    decimals
}
