use ordered_float::OrderedFloat;
use tracing::trace;

use super::chart_layout::ChartLayout;

/// Resolves pointer positions to data indices through the index-axis inverse.
#[derive(Debug, Clone, Copy)]
pub struct InputMapper<'l, 'a> {
    layout: &'l ChartLayout<'a>,
}

impl<'l, 'a> InputMapper<'l, 'a> {
    #[must_use]
    pub fn new(layout: &'l ChartLayout<'a>) -> Self {
        Self { layout }
    }

    /// Data index under a screen x coordinate.
    ///
    /// The inverse-mapped position is rounded to the nearest index and
    /// clamped to the longest series, so pointers outside the plot area snap
    /// to the first or last point.
    #[must_use]
    pub fn index_at(&self, pointer_x: f64) -> Option<usize> {
        if !pointer_x.is_finite() {
            return None;
        }
        let len = self.layout.series().max_len();
        if len == 0 {
            return None;
        }

        let local_x = pointer_x - self.layout.plot_area().left;
        let position = self.layout.x_scale().inverse(local_x);
        if !position.is_finite() {
            return None;
        }

        let last = (len - 1) as f64;
        let index = position.round().clamp(0.0, last) as usize;
        trace!(pointer_x, position, index, "resolve pointer index");
        Some(index)
    }

    /// Index and value of one series under a screen x coordinate.
    ///
    /// Returns `None` when the series is shorter than the resolved index.
    #[must_use]
    pub fn nearest_value(&self, series_index: usize, pointer_x: f64) -> Option<(usize, f64)> {
        let index = self.index_at(pointer_x)?;
        let (_, values) = self.layout.series().get(series_index)?;
        values.get(index).map(|value| (index, *value))
    }

    /// Series whose point at the resolved index is vertically closest to the pointer.
    #[must_use]
    pub fn nearest_series(&self, pointer_x: f64, pointer_y: f64) -> Option<usize> {
        if !pointer_y.is_finite() {
            return None;
        }
        let index = self.index_at(pointer_x)?;

        self.layout
            .series()
            .iter()
            .enumerate()
            .filter_map(|(series_index, (_, values))| {
                values.get(index).map(|value| {
                    let distance = (self.layout.value_to_screen_y(*value) - pointer_y).abs();
                    (OrderedFloat(distance), series_index)
                })
            })
            .min_by_key(|item| item.0)
            .map(|(_, series_index)| series_index)
    }
}
