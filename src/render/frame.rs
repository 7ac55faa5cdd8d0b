use crate::core::TrackBounds;
use crate::error::{SliderError, SliderResult};
use crate::render::{RectPrimitive, RectRole, TextPrimitive};

/// Backend-agnostic scene for one slider draw pass.
///
/// Coordinates are local to the track: `(0, 0)` is its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub track: TrackBounds,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(track: TrackBounds) -> Self {
        Self {
            track,
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> SliderResult<()> {
        if !self.track.width.is_finite() || self.track.width < 0.0 {
            return Err(SliderError::InvalidFrame(format!(
                "track width must be finite and >= 0, got {}",
                self.track.width
            )));
        }

        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty() && self.texts.is_empty()
    }

    /// Rectangles drawn for one role, in paint order.
    pub fn rects_with_role(&self, role: RectRole) -> impl Iterator<Item = &RectPrimitive> {
        self.rects.iter().filter(move |rect| rect.role == role)
    }
}
