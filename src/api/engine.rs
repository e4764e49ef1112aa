use tracing::debug;

use crate::core::{SeriesSet, Viewport};
use crate::error::ChartResult;
use crate::render::Renderer;

use super::chart_layout::ChartLayout;
use super::input_mapper::InputMapper;
use super::layout_config::{ChartLayoutConfig, ChartStyle};

/// Headless line-chart control.
///
/// Holds the dataset, viewport and configuration. Every query runs a fresh
/// layout pass, so scales always reflect the current size and data.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    series: SeriesSet,
    viewport: Viewport,
    config: ChartLayoutConfig,
    style: ChartStyle,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, viewport: Viewport, config: ChartLayoutConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            series: SeriesSet::new(),
            viewport,
            config,
            style: ChartStyle::default(),
        })
    }

    #[must_use]
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn set_series(&mut self, series: SeriesSet) {
        debug!(count = series.len(), "set series");
        self.series = series;
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        debug!(
            width = viewport.width,
            height = viewport.height,
            "set viewport"
        );
        self.viewport = viewport;
    }

    pub fn set_config(&mut self, config: ChartLayoutConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Runs a layout pass over the current state.
    pub fn layout(&self) -> ChartResult<ChartLayout<'_>> {
        ChartLayout::compute(&self.series, self.viewport, self.config)
    }

    /// Lays out the chart and hands the resulting frame to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.layout()?.build_render_frame(&self.style)?;
        self.renderer.render(&frame)
    }

    /// Data index under a pointer x coordinate.
    pub fn index_at(&self, pointer_x: f64) -> ChartResult<Option<usize>> {
        let layout = self.layout()?;
        Ok(InputMapper::new(&layout).index_at(pointer_x))
    }
}
