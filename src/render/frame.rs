use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Axis, AxisLabel, Stroke, StrokeKind};

/// Everything one layout pass asks a backend to draw.
///
/// Strokes are ordered gridlines first, then series segments, so drawing
/// them in order puts data on top of the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub strokes: Vec<Stroke>,
    pub labels: Vec<AxisLabel>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            strokes: Vec::new(),
            labels: Vec::new(),
        }
    }

    pub fn push_stroke(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    pub fn push_label(&mut self, label: AxisLabel) {
        self.labels.push(label);
    }

    #[must_use]
    pub fn gridline_count(&self, axis: Axis) -> usize {
        self.strokes
            .iter()
            .filter(|stroke| stroke.kind == StrokeKind::Gridline(axis))
            .count()
    }

    /// Segments of the series at `index`, in draw order.
    pub fn series_strokes(&self, index: usize) -> impl Iterator<Item = &Stroke> {
        self.strokes
            .iter()
            .filter(move |stroke| stroke.kind == StrokeKind::Series { index })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.strokes.iter().try_for_each(|stroke| stroke.validate())?;
        self.labels.iter().try_for_each(AxisLabel::validate)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty() && self.labels.is_empty()
    }
}
