use smallvec::SmallVec;

use crate::core::{TrackBounds, ValueRange, format_minutes};
use crate::error::SliderResult;
use crate::interaction::HandleEdge;
use crate::render::{
    Color, RectPrimitive, RectRole, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

use super::{RangeRow, RangeSlider};

/// Visual defaults for the built-in frame builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderStyle {
    pub track_color: Color,
    pub bar_color: Color,
    pub handle_color: Color,
    pub label_color: Color,
    pub bar_height_ratio: f64,
    pub corner_radius_px: f64,
    pub label_font_size_px: f64,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_color: Color::rgb(0.90, 0.91, 0.93),
            bar_color: Color::rgb(0.26, 0.52, 0.96),
            handle_color: Color::rgb(0.12, 0.29, 0.66),
            label_color: Color::rgb(0.20, 0.20, 0.22),
            bar_height_ratio: 0.6,
            corner_radius_px: 2.0,
            label_font_size_px: 11.0,
        }
    }
}

fn row_primitives(
    row: RangeRow,
    track: TrackBounds,
    style: SliderStyle,
) -> SmallVec<[RectPrimitive; 3]> {
    let bar_height = track.height * style.bar_height_ratio.clamp(0.0, 1.0);
    let bar_top = (track.height - bar_height) / 2.0;
    let mut rects = SmallVec::new();
    rects.push(
        RectPrimitive::new(
            row.left,
            bar_top,
            row.width.max(0.0),
            bar_height,
            style.bar_color,
            RectRole::RangeBar,
        )
        .with_corner_radius(style.corner_radius_px),
    );
    for (edge, role) in [
        (HandleEdge::Start, RectRole::StartHandle),
        (HandleEdge::End, RectRole::EndHandle),
    ] {
        let (from, to) = row.handle_span(edge);
        rects.push(RectPrimitive::new(
            from,
            0.0,
            to - from,
            track.height,
            style.handle_color,
            role,
        ));
    }
    rects
}

impl RangeSlider {
    /// Builds the frame for the caller's current values with default style.
    #[must_use]
    pub fn build_render_frame(&self, values: &[ValueRange]) -> RenderFrame {
        self.build_render_frame_styled(values, SliderStyle::default())
    }

    #[must_use]
    pub fn build_render_frame_styled(
        &self,
        values: &[ValueRange],
        style: SliderStyle,
    ) -> RenderFrame {
        let track = self.track_bounds();
        let mut frame = RenderFrame::new(track).with_rect(
            RectPrimitive::new(
                0.0,
                0.0,
                self.width(),
                track.height.max(0.0),
                style.track_color,
                RectRole::Track,
            )
            .with_corner_radius(style.corner_radius_px),
        );

        for row in self.rows(values) {
            frame.rects.extend(row_primitives(row, track, style));
            if self.config().show_labels
                && let Some(range) = values.get(row.index)
            {
                frame = frame.with_text(TextPrimitive::new(
                    format!("{} - {}", format_minutes(range.start), format_minutes(range.end)),
                    row.left + row.width / 2.0,
                    -style.label_font_size_px,
                    style.label_font_size_px,
                    style.label_color,
                    TextHAlign::Center,
                ));
            }
        }

        frame
    }

    /// Builds and hands the frame to `renderer`.
    pub fn render_with<R: Renderer>(
        &self,
        renderer: &mut R,
        values: &[ValueRange],
    ) -> SliderResult<()> {
        let frame = self.build_render_frame(values);
        renderer.render(&frame)
    }
}
