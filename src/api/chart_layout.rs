#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{PlotPoint, Scale, SeriesSet, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{Axis, AxisLabel, RenderFrame, Stroke, StrokeKind};

use super::label_format::format_axis_label;
use super::layout_config::{ChartLayoutConfig, ChartStyle};

/// Gap between an axis label and the plot edge.
const LABEL_GAP_PX: f64 = 4.0;

/// Plot rectangle inside the viewport, in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// One gridline position with its formatted label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    /// Screen coordinate along the axis (x for the index axis, y for the value axis).
    pub pixel: f64,
    pub label: String,
}

pub type AxisTicks = SmallVec<[AxisTick; 16]>;

/// Geometry of one layout pass.
///
/// Both axis scales are rebuilt from scratch here whenever the viewport or
/// the dataset changes; nothing is carried over from a previous pass.
#[derive(Debug, Clone)]
pub struct ChartLayout<'a> {
    series: &'a SeriesSet,
    viewport: Viewport,
    config: ChartLayoutConfig,
    plot_area: PlotArea,
    x_scale: Scale,
    y_scale: Scale,
}

impl<'a> ChartLayout<'a> {
    pub fn compute(
        series: &'a SeriesSet,
        viewport: Viewport,
        config: ChartLayoutConfig,
    ) -> ChartResult<Self> {
        if !viewport.is_valid() {
            warn!(
                width = viewport.width,
                height = viewport.height,
                "reject layout pass for invalid viewport"
            );
            return Err(ChartError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let config = config.validate()?;
        if let Err(err) = series.validate() {
            warn!(error = %err, "reject layout pass for invalid series");
            return Err(err);
        }

        let insets = config.insets;
        let plot_area = PlotArea {
            left: insets.left_px,
            top: insets.top_px,
            width: f64::from(viewport.width) - insets.left_px - insets.right_px,
            height: f64::from(viewport.height) - insets.top_px - insets.bottom_px,
        };
        if plot_area.width <= 0.0 || plot_area.height <= 0.0 {
            warn!(
                width = viewport.width,
                height = viewport.height,
                "insets leave no room for the plot area"
            );
            return Err(ChartError::InvalidData(
                "plot area must be > 0 after insets".to_owned(),
            ));
        }

        let x_scale = Scale::new(series.index_extent(), (0.0, plot_area.width));
        let y_scale = Scale::new(series.value_extent()?, (0.0, plot_area.height));

        debug!(
            series = series.len(),
            x_domain = ?x_scale.domain(),
            y_domain = ?y_scale.domain(),
            plot_width = plot_area.width,
            plot_height = plot_area.height,
            "layout pass"
        );

        Ok(Self {
            series,
            viewport,
            config,
            plot_area,
            x_scale,
            y_scale,
        })
    }

    #[must_use]
    pub fn series(&self) -> &'a SeriesSet {
        self.series
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn config(&self) -> ChartLayoutConfig {
        self.config
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot_area
    }

    /// Index-axis scale, mapping data index to plot-relative x.
    #[must_use]
    pub fn x_scale(&self) -> Scale {
        self.x_scale
    }

    /// Value-axis scale, mapping value to height above the plot bottom.
    #[must_use]
    pub fn y_scale(&self) -> Scale {
        self.y_scale
    }

    #[must_use]
    pub fn index_to_screen_x(&self, index: f64) -> f64 {
        self.plot_area.left + self.x_scale.forward(index)
    }

    #[must_use]
    pub fn value_to_screen_y(&self, value: f64) -> f64 {
        self.plot_area.bottom() - self.y_scale.forward(value)
    }

    /// Screen position of one data point.
    pub fn point_at(&self, series_index: usize, value_index: usize) -> ChartResult<PlotPoint> {
        let values = self.series_values(series_index)?;
        let value = values.get(value_index).copied().ok_or_else(|| {
            ChartError::InvalidData(format!(
                "value index {value_index} out of range for series {series_index}"
            ))
        })?;
        Ok(PlotPoint::new(
            self.index_to_screen_x(value_index as f64),
            self.value_to_screen_y(value),
        ))
    }

    /// Projects every point of one series into screen space.
    pub fn project_series(&self, series_index: usize) -> ChartResult<Vec<PlotPoint>> {
        let values = self.series_values(series_index)?;
        trace!(series_index, count = values.len(), "project series");

        #[cfg(feature = "parallel-projection")]
        {
            Ok(values
                .par_iter()
                .enumerate()
                .map(|(index, value)| {
                    PlotPoint::new(
                        self.index_to_screen_x(index as f64),
                        self.value_to_screen_y(*value),
                    )
                })
                .collect())
        }

        #[cfg(not(feature = "parallel-projection"))]
        {
            Ok(values
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    PlotPoint::new(
                        self.index_to_screen_x(index as f64),
                        self.value_to_screen_y(*value),
                    )
                })
                .collect())
        }
    }

    /// Horizontal gridlines of the value axis, bottom to top.
    #[must_use]
    pub fn y_gridlines(&self) -> AxisTicks {
        axis_ticks(self.y_scale, self.config.y_tick_count, |value| {
            self.value_to_screen_y(value)
        })
    }

    /// Vertical gridlines of the index axis, left to right.
    #[must_use]
    pub fn x_gridlines(&self) -> AxisTicks {
        axis_ticks(self.x_scale, self.config.x_tick_count, |index| {
            self.index_to_screen_x(index)
        })
    }

    /// Materializes gridlines, axis labels and series polylines for a backend.
    pub fn build_render_frame(&self, style: &ChartStyle) -> ChartResult<RenderFrame> {
        let area = self.plot_area;
        let mut frame = RenderFrame::new(self.viewport);
        let gridline = |axis, from, to| Stroke {
            kind: StrokeKind::Gridline(axis),
            from,
            to,
            width: style.grid_stroke_width,
            color: style.grid_color,
        };
        let label = |axis, text, anchor| AxisLabel {
            axis,
            text,
            anchor,
            font_size_px: style.label_font_size_px,
            color: style.label_color,
        };

        for tick in self.y_gridlines() {
            frame.push_stroke(gridline(
                Axis::Value,
                PlotPoint::new(area.left, tick.pixel),
                PlotPoint::new(area.right(), tick.pixel),
            ));
            frame.push_label(label(
                Axis::Value,
                tick.label,
                PlotPoint::new(area.left - LABEL_GAP_PX, tick.pixel),
            ));
        }

        for tick in self.x_gridlines() {
            frame.push_stroke(gridline(
                Axis::Index,
                PlotPoint::new(tick.pixel, area.top),
                PlotPoint::new(tick.pixel, area.bottom()),
            ));
            frame.push_label(label(
                Axis::Index,
                tick.label,
                PlotPoint::new(
                    tick.pixel,
                    area.bottom() + LABEL_GAP_PX + style.label_font_size_px,
                ),
            ));
        }

        for series_index in 0..self.series.len() {
            let color = style.series_color(series_index);
            let points = self.project_series(series_index)?;
            for pair in points.windows(2) {
                frame.push_stroke(Stroke {
                    kind: StrokeKind::Series {
                        index: series_index,
                    },
                    from: pair[0],
                    to: pair[1],
                    width: style.series_stroke_width,
                    color,
                });
            }
        }

        frame.validate()?;
        Ok(frame)
    }

    fn series_values(&self, series_index: usize) -> ChartResult<&'a [f64]> {
        let series: &'a SeriesSet = self.series;
        series
            .get(series_index)
            .map(|(_, values)| values)
            .ok_or(ChartError::SeriesIndexOutOfRange {
                index: series_index,
                len: series.len(),
            })
    }
}

/// Gridline values of `scale` that fall inside its domain, paired with screen
/// coordinates and labels.
fn axis_ticks(scale: Scale, count: usize, to_screen: impl Fn(f64) -> f64) -> AxisTicks {
    let plan = scale.ticks(count);
    let decimals = scale.label_decimals(count);
    let tolerance = plan.step.abs() / 10.0;

    plan.values()
        .filter(|value| scale.domain_contains(*value, tolerance))
        .map(|value| AxisTick {
            value,
            pixel: to_screen(value),
            label: format_axis_label(value, decimals),
        })
        .collect()
}
