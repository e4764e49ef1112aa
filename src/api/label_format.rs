use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

// Largest scale a `Decimal` can carry.
const MAX_DECIMAL_SCALE: u32 = 28;

/// Formats an axis label with exactly `decimals` fractional digits.
///
/// Rounding goes through `Decimal` so values such as `0.1 + 0.2` print as
/// `0.30` rather than exposing binary float noise. Values outside the
/// `Decimal` range fall back to `format!`.
#[must_use]
pub fn format_axis_label(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let Some(decimal) = Decimal::from_f64(value) else {
        return format!("{value:.decimals$}");
    };

    let scale = u32::try_from(decimals)
        .unwrap_or(MAX_DECIMAL_SCALE)
        .min(MAX_DECIMAL_SCALE);
    let mut rounded =
        decimal.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded.rescale(scale);
    rounded.to_string()
}
