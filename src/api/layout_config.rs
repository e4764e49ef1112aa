use serde::{Deserialize, Serialize};

use crate::core::MAX_TICK_COUNT;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Layout-pass configuration.
///
/// This type is serializable so host applications can persist/load chart setup
/// without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayoutConfig {
    #[serde(default = "default_insets")]
    pub insets: PlotInsets,
    #[serde(default = "default_tick_count")]
    pub x_tick_count: usize,
    #[serde(default = "default_tick_count")]
    pub y_tick_count: usize,
}

impl Default for ChartLayoutConfig {
    fn default() -> Self {
        Self {
            insets: default_insets(),
            x_tick_count: default_tick_count(),
            y_tick_count: default_tick_count(),
        }
    }
}

impl ChartLayoutConfig {
    #[must_use]
    pub fn with_insets(mut self, insets: PlotInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Sets the requested gridline division counts, clamped to
    /// `1..=MAX_TICK_COUNT`.
    #[must_use]
    pub fn with_tick_counts(mut self, x_tick_count: usize, y_tick_count: usize) -> Self {
        self.x_tick_count = clamp_tick_count(x_tick_count);
        self.y_tick_count = clamp_tick_count(y_tick_count);
        self
    }

    /// Rejects bad insets and clamps tick counts set directly or loaded
    /// from JSON.
    pub fn validate(self) -> ChartResult<Self> {
        self.insets.validate()?;
        Ok(self.with_tick_counts(self.x_tick_count, self.y_tick_count))
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

/// Pixel margins between the viewport edges and the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotInsets {
    pub left_px: f64,
    pub right_px: f64,
    pub top_px: f64,
    pub bottom_px: f64,
}

impl Default for PlotInsets {
    fn default() -> Self {
        Self {
            left_px: 40.0,
            right_px: 10.0,
            top_px: 10.0,
            bottom_px: 24.0,
        }
    }
}

impl PlotInsets {
    /// Same margin on every edge.
    #[must_use]
    pub const fn uniform(px: f64) -> Self {
        Self {
            left_px: px,
            right_px: px,
            top_px: px,
            bottom_px: px,
        }
    }

    fn validate(self) -> ChartResult<()> {
        for (edge, value) in [
            ("left", self.left_px),
            ("right", self.right_px),
            ("top", self.top_px),
            ("bottom", self.bottom_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "{edge} inset must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Colors and stroke widths used when building a render frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartStyle {
    pub series_colors: Vec<Color>,
    pub series_stroke_width: f64,
    pub grid_color: Color,
    pub grid_stroke_width: f64,
    pub label_color: Color,
    pub label_font_size_px: f64,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            series_colors: vec![
                Color::rgb(0.16, 0.38, 1.0),
                Color::rgb(0.94, 0.33, 0.31),
                Color::rgb(0.15, 0.65, 0.60),
                Color::rgb(1.0, 0.60, 0.0),
            ],
            series_stroke_width: 2.0,
            grid_color: Color::rgba(0.5, 0.5, 0.5, 0.35),
            grid_stroke_width: 1.0,
            label_color: Color::rgb(0.2, 0.2, 0.2),
            label_font_size_px: 11.0,
        }
    }
}

impl ChartStyle {
    /// Color for the series at `index`, cycling through the palette.
    #[must_use]
    pub fn series_color(&self, index: usize) -> Color {
        if self.series_colors.is_empty() {
            return self.label_color;
        }
        self.series_colors[index % self.series_colors.len()]
    }
}

fn default_insets() -> PlotInsets {
    PlotInsets::default()
}

fn default_tick_count() -> usize {
    5
}

fn clamp_tick_count(count: usize) -> usize {
    count.clamp(1, MAX_TICK_COUNT)
}
