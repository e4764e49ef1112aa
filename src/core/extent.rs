/// Normalizes an unordered domain candidate into an ordered, non-degenerate pair.
///
/// A zero-width domain is widened toward zero so downstream mappings never
/// divide by zero:
///
/// - `(3, 3)` becomes `(0, 3)`
/// - `(-3, -3)` becomes `(-3, 0)`
/// - `(0, 0)` becomes `(0, 1)`
///
/// NaN is not rejected: a single NaN is ignored by `f64::min`/`f64::max`,
/// two NaN inputs come back as a NaN pair.
#[must_use]
pub fn scale_extent(a: f64, b: f64) -> (f64, f64) {
    let lo = a.min(b);
    let hi = a.max(b);

    if lo < hi {
        return (lo, hi);
    }

    if lo > 0.0 {
        (0.0, lo)
    } else if lo < 0.0 {
        (lo, 0.0)
    } else if lo == 0.0 {
        (0.0, 1.0)
    } else {
        (lo, hi)
    }
}
