use serde::{Deserialize, Serialize};

use crate::core::PlotPoint;
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        let channels = [self.red, self.green, self.blue, self.alpha];
        if channels
            .iter()
            .all(|value| value.is_finite() && (0.0..=1.0).contains(value))
        {
            return Ok(());
        }
        Err(ChartError::InvalidData(format!(
            "color channels must be finite and in [0, 1], got {channels:?}"
        )))
    }
}

/// Chart axis a gridline or label belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Horizontal axis over data indices.
    Index,
    /// Vertical axis over series values.
    Value,
}

/// What a stroke depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrokeKind {
    /// Gridline at one tick of `Axis`; runs across the whole plot area.
    Gridline(Axis),
    /// Segment between two adjacent points of a series.
    Series { index: usize },
}

/// Straight stroke in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub kind: StrokeKind,
    pub from: PlotPoint,
    pub to: PlotPoint,
    pub width: f64,
    pub color: Color,
}

impl Stroke {
    pub fn validate(self) -> ChartResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "{:?} stroke endpoints must be finite",
                self.kind
            )));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{:?} stroke width must be finite and > 0",
                self.kind
            )));
        }
        self.color.validate()
    }
}

/// Tick label placed next to an axis.
///
/// Value-axis labels are right-aligned against the plot's left edge;
/// index-axis labels are centered under their gridline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub axis: Axis,
    pub text: String,
    pub anchor: PlotPoint,
    pub font_size_px: f64,
    pub color: Color,
}

impl AxisLabel {
    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(format!(
                "{:?} axis label must not be empty",
                self.axis
            )));
        }
        if !self.anchor.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "{:?} axis label anchor must be finite",
                self.axis
            )));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}
