// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle accumulation and the finished marker region.

use alloc::vec::Vec;

use peniko::Fill;
use peniko::kurbo::{BezPath, Insets, Rect, Shape};

use crate::outline::outlined_path;
use crate::view::TextBounds;

/// The finished, immutable marker region for one span.
///
/// The region is the union of every rectangle that survived padding,
/// clipping and degenerate elimination, expressed as a single path to fill
/// with the [non-zero winding rule](Fill::NonZero). The value is frozen:
/// nothing about it can be changed after it is returned.
#[derive(Clone, Debug)]
pub struct MarkerGeometry {
    path: BezPath,
    rects: Vec<Rect>,
    bounding_box: Rect,
    outlined: bool,
}

impl MarkerGeometry {
    /// The fill-ready path of the region.
    ///
    /// When the region came from more than one rectangle, this is the
    /// simplified outline of their union, with no overlapping interior
    /// edges.
    #[must_use]
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Consumes the region, returning its path.
    #[must_use]
    pub fn into_path(self) -> BezPath {
        self.path
    }

    /// The surviving source rectangles, in emission order.
    #[must_use]
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// The bounding box of the region.
    #[must_use]
    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    /// Returns `true` if the path is a simplified union outline rather than
    /// a single rectangle.
    #[must_use]
    pub fn is_outlined(&self) -> bool {
        self.outlined
    }

    /// The fill rule the path is meant to be filled with.
    #[must_use]
    pub fn fill_rule(&self) -> Fill {
        Fill::NonZero
    }
}

/// Accumulates padded, clipped rectangles across the lines of one span.
///
/// Owned by a single geometry call and never shared; [`Self::finish`]
/// consumes it into the frozen [`MarkerGeometry`].
#[derive(Clone, Debug)]
pub(crate) struct GeometryAccumulator {
    padding: Insets,
    line_geometry: bool,
    clip: Option<(f64, f64)>,
    rects: Vec<Rect>,
    needs_outline: bool,
}

impl GeometryAccumulator {
    /// Creates an accumulator with the padding profile, vertical extent mode
    /// and optional `(left, right)` viewport interval fixed for the whole
    /// span.
    pub(crate) fn new(padding: Insets, line_geometry: bool, clip: Option<(f64, f64)>) -> Self {
        Self {
            padding,
            line_geometry,
            clip,
            rects: Vec::new(),
            needs_outline: false,
        }
    }

    /// Pads, clips and records one bounds rectangle, discarding it when the
    /// result is degenerate.
    pub(crate) fn add(&mut self, bounds: &TextBounds) {
        let mut left = bounds.left - self.padding.x0;
        let mut right = bounds.right() + self.padding.x1;
        let (top, bottom) = if self.line_geometry {
            (bounds.top - self.padding.y0, bounds.bottom() + self.padding.y1)
        } else {
            (
                bounds.text_top - self.padding.y0,
                bounds.text_bottom() + self.padding.y1,
            )
        };
        if let Some((viewport_left, viewport_right)) = self.clip {
            left = left.max(viewport_left);
            right = right.min(viewport_right);
        }
        if right <= left || bottom <= top {
            return;
        }

        if !self.rects.is_empty() {
            self.needs_outline = true;
        }
        self.rects.push(Rect::new(left, top, right, bottom));
    }

    /// Finishes the span, producing the frozen region.
    ///
    /// Returns `None` when no rectangle survived.
    pub(crate) fn finish(self) -> Option<MarkerGeometry> {
        if self.rects.is_empty() {
            return None;
        }
        let bounding_box = self
            .rects
            .iter()
            .skip(1)
            .fold(self.rects[0], |acc, r| acc.union(*r));
        let path = if self.needs_outline {
            outlined_path(&self.rects)
        } else {
            self.rects[0].to_path(0.0)
        };
        Some(MarkerGeometry {
            path,
            rects: self.rects,
            bounding_box,
            outlined: self.needs_outline,
        })
    }
}
