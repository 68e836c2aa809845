// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public marker geometry entry points.

use crate::bounds::line_marker_bounds;
use crate::error::Error;
use crate::position::VirtualSpan;
use crate::region::{GeometryAccumulator, MarkerGeometry};
use crate::view::{TextView, TextViewLine};
use crate::walker::walk_span;

/// The shape of the selection a marker is built for.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// A free-form span between two positions.
    #[default]
    Stream,
    /// A rectangular column selection. Not supported by this crate.
    Box,
}

/// Returns `true` if `span` crosses more than one display line.
///
/// The comparison uses line-break-inclusive extents, so a span reaching the
/// very start of the next line counts as multi-line. Multi-line spans are
/// marked with line geometry (full line height, line padding profile),
/// single-line spans with text geometry.
pub fn is_multi_line_span<V: TextView>(view: &V, span: VirtualSpan) -> bool {
    let first = view.line_containing(span.start().offset());
    let last = view.line_containing(span.end().offset());
    (first.start(), first.end_including_line_break())
        != (last.start(), last.end_including_line_break())
}

/// Builds the marker region for `span`.
///
/// Walks the span line by line, resolves each line's overlap into padded
/// rectangles, optionally clips them to the view's viewport, and merges the
/// survivors into one frozen [`MarkerGeometry`]. Returns `Ok(None)` when no
/// rectangle survives, as for an empty span or one clipped entirely away.
///
/// # Errors
///
/// [`Error::UnsupportedBoxSelection`] when `mode` is [`SelectionMode::Box`].
pub fn create_geometry<V: TextView>(
    view: &V,
    span: VirtualSpan,
    mode: SelectionMode,
    clip_to_viewport: bool,
) -> Result<Option<MarkerGeometry>, Error> {
    if mode == SelectionMode::Box {
        return Err(Error::UnsupportedBoxSelection);
    }

    let line_geometry = is_multi_line_span(view, span);
    let padding = if line_geometry {
        view.line_marker_padding()
    } else {
        view.text_marker_padding()
    };
    let clip = clip_to_viewport.then(|| (view.viewport_left(), view.viewport_right()));

    let mut accumulator = GeometryAccumulator::new(padding, line_geometry, clip);
    walk_span(view, span, |line, extent| {
        for bounds in line_marker_bounds(view, line, extent, span) {
            accumulator.add(&bounds);
        }
    });
    Ok(accumulator.finish())
}
