// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Read-only capability traits for the hosting text view.

use core::ops::Range;

use peniko::kurbo::Insets;
use smallvec::SmallVec;

/// The horizontal bounds of a run of text plus its inner vertical text
/// extent.
///
/// `top`/`height` cover the full line; `text_top`/`text_height` cover only
/// the portion occupied by text, excluding inter-line spacing. Which pair the
/// marker uses depends on whether the span is rendered with line or text
/// geometry.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct TextBounds {
    /// The left edge.
    pub left: f64,
    /// The top of the full line extent.
    pub top: f64,
    /// The width of the bounds.
    pub width: f64,
    /// The height of the full line extent.
    pub height: f64,
    /// The top of the inner text extent.
    pub text_top: f64,
    /// The height of the inner text extent.
    pub text_height: f64,
}

impl TextBounds {
    /// Creates bounds from a left edge, full line extent and inner text
    /// extent.
    #[must_use]
    pub const fn new(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        text_top: f64,
        text_height: f64,
    ) -> Self {
        Self {
            left,
            top,
            width,
            height,
            text_top,
            text_height,
        }
    }

    /// The right edge.
    #[must_use]
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// The bottom of the full line extent.
    #[must_use]
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// The bottom of the inner text extent.
    #[must_use]
    #[inline]
    pub fn text_bottom(&self) -> f64 {
        self.text_top + self.text_height
    }
}

/// One display line of the hosting view, as an immutable snapshot.
///
/// Offsets are byte offsets into the underlying buffer. Vertical coordinates
/// are in the view's render space and grow downward.
pub trait TextViewLine {
    /// The offset of the first character of the line.
    fn start(&self) -> usize;

    /// The offset one past the last real character, excluding the line break.
    fn end(&self) -> usize;

    /// The offset one past the line break, or [`Self::end`] when the line has
    /// none.
    fn end_including_line_break(&self) -> usize;

    /// The top of the line.
    fn top(&self) -> f64;

    /// The bottom of the line.
    fn bottom(&self) -> f64 {
        self.top() + self.height()
    }

    /// The height of the line.
    fn height(&self) -> f64;

    /// The top of the inner text extent.
    fn text_top(&self) -> f64;

    /// The height of the inner text extent.
    fn text_height(&self) -> f64;

    /// The right edge of the line's real text.
    fn text_right(&self) -> f64;

    /// The visual width drawn for the end-of-line marker when selected.
    fn end_of_line_width(&self) -> f64;

    /// Returns `true` for the final line of the document.
    fn is_last_document_line(&self) -> bool;

    /// The normalized bounds of the text intersecting `range`.
    ///
    /// More than one rectangle is legal for a single line: bidirectional or
    /// otherwise reordered sub-runs produce one rectangle each, in visual
    /// order.
    fn normalized_text_bounds(&self, range: Range<usize>) -> SmallVec<[TextBounds; 2]>;
}

/// The narrow, read-only slice of a text view that marker geometry needs.
///
/// Implementations must answer these queries consistently for the duration of
/// one geometry call; the crate never mutates the view and holds no state
/// across calls.
pub trait TextView {
    /// The line snapshot type produced by [`Self::line_containing`].
    type Line: TextViewLine;

    /// The display line containing the given buffer offset.
    ///
    /// An offset at the very end of the document belongs to the last line.
    fn line_containing(&self, offset: usize) -> Self::Line;

    /// The width of one virtual space column, from the formatted line source.
    fn column_width(&self) -> f64;

    /// The left edge of the viewport. Read only when clipping is requested.
    fn viewport_left(&self) -> f64;

    /// The right edge of the viewport. Read only when clipping is requested.
    fn viewport_right(&self) -> f64;

    /// The padding profile for multi-line (line geometry) markers.
    fn line_marker_padding(&self) -> Insets;

    /// The padding profile for single-line (text geometry) markers.
    fn text_marker_padding(&self) -> Insets;
}
