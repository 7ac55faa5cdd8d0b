use smallvec::SmallVec;

use crate::core::ValueRange;
use crate::interaction::HandleEdge;

use super::RangeList;

/// Track-local pixel layout of one range and its two handles.
///
/// A row never clamps anything: it only locates itself and forwards raw pixel
/// positions to the alignment layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeRow {
    pub index: usize,
    pub left: f64,
    pub width: f64,
    pub handle_width: f64,
}

impl RangeRow {
    #[must_use]
    pub fn layout(list: &RangeList<'_>, index: usize, handle_width: f64) -> Option<Self> {
        let (left, right) = list.range_pixels(index)?;
        Some(Self {
            index,
            left,
            width: right - left,
            handle_width,
        })
    }

    /// Lays out every row of the list in track order.
    #[must_use]
    pub fn layout_all(list: &RangeList<'_>, handle_width: f64) -> Vec<Self> {
        (0..list.values().len())
            .filter_map(|index| Self::layout(list, index, handle_width))
            .collect()
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.left + self.width
    }

    #[must_use]
    pub fn handle_center(self, edge: HandleEdge) -> f64 {
        match edge {
            HandleEdge::Start => self.left,
            HandleEdge::End => self.right(),
        }
    }

    /// Horizontal hit span `(from, to)` of one handle.
    #[must_use]
    pub fn handle_span(self, edge: HandleEdge) -> (f64, f64) {
        let center = self.handle_center(edge);
        let half = self.handle_width / 2.0;
        (center - half, center + half)
    }

    /// Handles under a track-local x coordinate, with their distance to it.
    #[must_use]
    pub fn handle_hits(self, local_x: f64) -> SmallVec<[(HandleEdge, f64); 2]> {
        [HandleEdge::Start, HandleEdge::End]
            .into_iter()
            .filter(|edge| {
                let (from, to) = self.handle_span(*edge);
                local_x >= from && local_x <= to
            })
            .map(|edge| (edge, (local_x - self.handle_center(edge)).abs()))
            .collect()
    }

    /// Forwards a raw pixel position for one of this row's handles.
    #[must_use]
    pub fn forward(
        self,
        list: &RangeList<'_>,
        edge: HandleEdge,
        pixel: f64,
    ) -> Option<Vec<ValueRange>> {
        match edge {
            HandleEdge::Start => list.set_start_px(pixel, self.index),
            HandleEdge::End => list.set_end_px(pixel, self.index),
        }
    }
}

/// Picks the handle nearest to `local_x` across all rows.
///
/// Exact ties prefer an end handle over a start handle so a collapsed range
/// can be pulled open again. Other ties keep the later candidate.
#[must_use]
pub fn hit_test_rows(rows: &[RangeRow], local_x: f64) -> Option<(usize, HandleEdge)> {
    let mut best: Option<(usize, HandleEdge, f64)> = None;
    for row in rows {
        for (edge, distance) in row.handle_hits(local_x) {
            let better = match best {
                None => true,
                Some((_, best_edge, best_distance)) => {
                    distance < best_distance
                        || (distance == best_distance
                            && !(best_edge == HandleEdge::End && edge == HandleEdge::Start))
                }
            };
            if better {
                best = Some((row.index, edge, distance));
            }
        }
    }
    best.map(|(index, edge, _)| (index, edge))
}
