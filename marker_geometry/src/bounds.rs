// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-line bounds resolution.

use smallvec::{SmallVec, smallvec};

use crate::position::VirtualSpan;
use crate::view::{TextBounds, TextView, TextViewLine};

/// Resolves one line's portion of the span into an ordered batch of bounds.
///
/// `extent` is the overlap of `line`'s extent with the unprocessed tail of
/// `span`, as produced by the walker. The whole `span` is also needed here:
/// when the extent starts in virtual space, the rectangle is widened by the
/// span's overall virtual space delta, not just this line's share.
pub(crate) fn line_marker_bounds<V: TextView>(
    view: &V,
    line: &V::Line,
    extent: VirtualSpan,
    span: VirtualSpan,
) -> SmallVec<[TextBounds; 2]> {
    let column_width = view.column_width();
    if extent.start().is_in_virtual_space() {
        // The whole extent lies past the real text.
        let leading =
            line.text_right() + extent.start().virtual_spaces() as f64 * column_width;
        let mut width = line.end_of_line_width();
        let vspaces = span
            .end()
            .virtual_spaces()
            .saturating_sub(span.start().virtual_spaces());
        if vspaces > 0 {
            width += vspaces as f64 * column_width;
        }
        smallvec![TextBounds::new(
            leading,
            line.top(),
            width,
            line.height(),
            line.text_top(),
            line.text_height(),
        )]
    } else if extent.end().is_in_virtual_space() {
        // Real text followed by a virtual space tail.
        let mut bounds = line.normalized_text_bounds(extent.buffer_range());
        let width = extent.end().virtual_spaces() as f64 * column_width;
        bounds.push(TextBounds::new(
            line.text_right(),
            line.top(),
            width,
            line.height(),
            line.text_top(),
            line.text_height(),
        ));
        bounds
    } else {
        line.normalized_text_bounds(extent.buffer_range())
    }
}
