// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line-by-line traversal of a span.

use crate::position::{VirtualPoint, VirtualSpan};
use crate::view::{TextView, TextViewLine};

/// Walks `span` one display line at a time, feeding each line and its overlap
/// with the span to `emit`.
///
/// The overlap of a line's extent with the remaining span is non-empty for
/// any well-formed span and line provider. A missing overlap is a logic bug
/// in the caller or the provider: debug builds assert, release builds log and
/// skip the line.
pub(crate) fn walk_span<V, F>(view: &V, span: VirtualSpan, mut emit: F)
where
    V: TextView,
    F: FnMut(&V::Line, VirtualSpan),
{
    let mut pos = span.start();
    while pos < span.end() {
        let line = view.line_containing(pos.offset());

        // Virtual space is attributed to the line extent only when the
        // cursor itself is in virtual space.
        let line_extent = VirtualSpan::new(
            VirtualPoint::new(line.start(), 0),
            VirtualPoint::new(line.end_including_line_break(), pos.virtual_spaces()),
        );
        match line_extent.overlap(VirtualSpan::new(pos, span.end())) {
            Some(extent) => emit(&line, extent),
            None => {
                debug_assert!(
                    false,
                    "line extent {line_extent:?} does not overlap the span tail at {pos:?}"
                );
                log::warn!(
                    "line at offset {} does not overlap the marker span; skipping",
                    pos.offset()
                );
            }
        }

        if line.is_last_document_line() {
            break;
        }
        let next = VirtualPoint::new(line.end_including_line_break(), 0);
        if next <= pos {
            // A lookup that fails to advance would revisit the same line
            // forever.
            debug_assert!(false, "line lookup failed to advance past {pos:?}");
            log::warn!(
                "line lookup failed to advance past offset {}; stopping walk",
                pos.offset()
            );
            break;
        }
        pos = next;
    }
}
