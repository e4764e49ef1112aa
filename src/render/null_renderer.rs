use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Renderer that only records what it was asked to draw.
///
/// Frames are still validated, so headless callers and tests see the same
/// geometry errors a drawing backend would.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_stroke_count: usize,
    pub last_label_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_stroke_count = frame.strokes.len();
        self.last_label_count = frame.labels.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
