use crate::error::SliderResult;
use crate::render::{RectRole, RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so geometry bugs surface without a real
/// backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_rect_count: usize,
    pub last_bar_count: usize,
    pub last_text_count: usize,
    pub frames_rendered: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> SliderResult<()> {
        frame.validate()?;
        self.last_rect_count = frame.rects.len();
        self.last_bar_count = frame.rects_with_role(RectRole::RangeBar).count();
        self.last_text_count = frame.texts.len();
        self.frames_rendered += 1;
        Ok(())
    }
}
