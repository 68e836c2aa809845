// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A scripted [`TextView`] with fixed-width columns and uniform line height.
//!
//! Every byte of the backing text, line breaks included, occupies one column
//! of [`COLUMN_WIDTH`]. Line `i` occupies the vertical band
//! `i * LINE_HEIGHT..(i + 1) * LINE_HEIGHT`, with the text band inset by
//! [`TEXT_INSET`] on both sides. This keeps expected marker coordinates easy
//! to derive by hand in tests.

use core::ops::Range;

use marker_geometry::{TextBounds, TextView, TextViewLine};
use peniko::kurbo::Insets;
use smallvec::SmallVec;

/// Width of one column, and of one virtual space.
pub const COLUMN_WIDTH: f64 = 8.0;
/// Height of one display line.
pub const LINE_HEIGHT: f64 = 16.0;
/// Distance between a line's full extent and its inner text extent.
pub const TEXT_INSET: f64 = 2.0;

#[derive(Copy, Clone, Debug)]
struct LineData {
    index: usize,
    start: usize,
    end: usize,
    end_including_line_break: usize,
}

/// A scripted text view over a fixed string.
#[derive(Clone, Debug)]
pub struct TestView {
    lines: Vec<LineData>,
    viewport: (f64, f64),
    line_padding: Insets,
    text_padding: Insets,
    split_bounds_at: Option<usize>,
    pinned_line: Option<usize>,
}

impl TestView {
    /// Creates a view over `text`, with a generous viewport and no padding.
    pub fn new(text: &str) -> Self {
        let bytes = text.as_bytes();
        let mut lines = Vec::new();
        let mut start = 0;
        for (i, &b) in bytes.iter().enumerate() {
            if b == b'\n' {
                lines.push(LineData {
                    index: lines.len(),
                    start,
                    end: i,
                    end_including_line_break: i + 1,
                });
                start = i + 1;
            }
        }
        lines.push(LineData {
            index: lines.len(),
            start,
            end: bytes.len(),
            end_including_line_break: bytes.len(),
        });
        Self {
            lines,
            viewport: (0.0, 800.0),
            line_padding: Insets::ZERO,
            text_padding: Insets::ZERO,
            split_bounds_at: None,
            pinned_line: None,
        }
    }

    /// Sets the viewport interval used when clipping.
    pub fn with_viewport(mut self, left: f64, right: f64) -> Self {
        self.viewport = (left, right);
        self
    }

    /// Sets the padding profile for multi-line markers.
    pub fn with_line_padding(mut self, padding: Insets) -> Self {
        self.line_padding = padding;
        self
    }

    /// Sets the padding profile for single-line markers.
    pub fn with_text_padding(mut self, padding: Insets) -> Self {
        self.text_padding = padding;
        self
    }

    /// Splits every text bounds query at `offset`, as a reordered sub-run
    /// boundary would.
    pub fn with_split_bounds_at(mut self, offset: usize) -> Self {
        self.split_bounds_at = Some(offset);
        self
    }

    /// Makes every line lookup return line `index`, regardless of offset.
    ///
    /// This deliberately breaks the lookup contract, for exercising the
    /// walker's invariant handling.
    pub fn with_pinned_line(mut self, index: usize) -> Self {
        self.pinned_line = Some(index);
        self
    }

    fn line(&self, index: usize) -> TestLine {
        TestLine {
            data: self.lines[index],
            last: index == self.lines.len() - 1,
            split_bounds_at: self.split_bounds_at,
        }
    }
}

impl TextView for TestView {
    type Line = TestLine;

    fn line_containing(&self, offset: usize) -> TestLine {
        let index = match self.pinned_line {
            Some(pinned) => pinned,
            None => self
                .lines
                .iter()
                .position(|l| offset < l.end_including_line_break)
                .unwrap_or(self.lines.len() - 1),
        };
        self.line(index)
    }

    fn column_width(&self) -> f64 {
        COLUMN_WIDTH
    }

    fn viewport_left(&self) -> f64 {
        self.viewport.0
    }

    fn viewport_right(&self) -> f64 {
        self.viewport.1
    }

    fn line_marker_padding(&self) -> Insets {
        self.line_padding
    }

    fn text_marker_padding(&self) -> Insets {
        self.text_padding
    }
}

/// One line of a [`TestView`].
#[derive(Copy, Clone, Debug)]
pub struct TestLine {
    data: LineData,
    last: bool,
    split_bounds_at: Option<usize>,
}

impl TestLine {
    fn x(&self, offset: usize) -> f64 {
        (offset - self.data.start) as f64 * COLUMN_WIDTH
    }

    fn column_bounds(&self, lo: usize, hi: usize) -> TextBounds {
        TextBounds::new(
            self.x(lo),
            self.top(),
            self.x(hi) - self.x(lo),
            self.height(),
            self.text_top(),
            self.text_height(),
        )
    }
}

impl TextViewLine for TestLine {
    fn start(&self) -> usize {
        self.data.start
    }

    fn end(&self) -> usize {
        self.data.end
    }

    fn end_including_line_break(&self) -> usize {
        self.data.end_including_line_break
    }

    fn top(&self) -> f64 {
        self.data.index as f64 * LINE_HEIGHT
    }

    fn height(&self) -> f64 {
        LINE_HEIGHT
    }

    fn text_top(&self) -> f64 {
        self.top() + TEXT_INSET
    }

    fn text_height(&self) -> f64 {
        LINE_HEIGHT - 2.0 * TEXT_INSET
    }

    fn text_right(&self) -> f64 {
        self.x(self.data.end)
    }

    fn end_of_line_width(&self) -> f64 {
        COLUMN_WIDTH
    }

    fn is_last_document_line(&self) -> bool {
        self.last
    }

    fn normalized_text_bounds(&self, range: Range<usize>) -> SmallVec<[TextBounds; 2]> {
        let lo = range.start.max(self.data.start);
        let hi = range.end.min(self.data.end_including_line_break);
        let mut bounds = SmallVec::new();
        if hi <= lo {
            return bounds;
        }
        match self.split_bounds_at {
            Some(split) if split > lo && split < hi => {
                bounds.push(self.column_bounds(lo, split));
                bounds.push(self.column_bounds(split, hi));
            }
            _ => bounds.push(self.column_bounds(lo, hi)),
        }
        bounds
    }
}
