// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary simplification for unions of axis-aligned rectangles.
//!
//! A marker that spans several lines is a union of rectangles whose edges
//! overlap where the lines meet. Filling them one by one produces seams and
//! double-covered strips; outlining replaces the union with its boundary so
//! the region fills and strokes cleanly.

use alloc::vec::Vec;

use hashbrown::HashMap;
use peniko::kurbo::{BezPath, Rect};
use smallvec::SmallVec;

/// A step along the grid, in screen orientation (y grows downward).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Dir {
    Right,
    Down,
    Left,
    Up,
}

impl Dir {
    fn step(self, (x, y): (usize, usize)) -> (usize, usize) {
        match self {
            Self::Right => (x + 1, y),
            Self::Down => (x, y + 1),
            Self::Left => (x - 1, y),
            Self::Up => (x, y - 1),
        }
    }

    /// Candidate outgoing directions relative to the incoming one: right
    /// turn first, then straight, then left. The boundary keeps the covered
    /// region on its right, so preferring the right turn keeps the trace on
    /// the boundary of a single connected component where two components
    /// touch corner to corner.
    fn turn_order(self) -> [Self; 3] {
        match self {
            Self::Right => [Self::Down, Self::Right, Self::Up],
            Self::Down => [Self::Left, Self::Down, Self::Right],
            Self::Left => [Self::Up, Self::Left, Self::Down],
            Self::Up => [Self::Right, Self::Up, Self::Left],
        }
    }
}

type EdgeMap = HashMap<(usize, usize), SmallVec<[Dir; 2]>>;

/// Computes the boundary of the union of `rects` as closed polygonal loops.
///
/// Boundaries are traced with the covered region to the right of the
/// direction of travel, so holes come out wound opposite to outer loops and
/// the result fills correctly under the non-zero rule.
pub(crate) fn outlined_path(rects: &[Rect]) -> BezPath {
    let mut path = BezPath::new();
    if rects.is_empty() {
        return path;
    }

    // Compress coordinates into a grid.
    let mut xs: Vec<f64> = Vec::with_capacity(rects.len() * 2);
    let mut ys: Vec<f64> = Vec::with_capacity(rects.len() * 2);
    for r in rects {
        xs.extend([r.x0, r.x1]);
        ys.extend([r.y0, r.y1]);
    }
    xs.sort_unstable_by(f64::total_cmp);
    xs.dedup();
    ys.sort_unstable_by(f64::total_cmp);
    ys.dedup();
    let cols = xs.len() - 1;
    let rows = ys.len() - 1;

    // Mark the cells each rectangle covers.
    let mut covered = alloc::vec![false; cols * rows];
    let grid_index = |axis: &[f64], value: f64| axis.partition_point(|v| v.total_cmp(&value).is_lt());
    for r in rects {
        let c0 = grid_index(&xs, r.x0);
        let c1 = grid_index(&xs, r.x1);
        let r0 = grid_index(&ys, r.y0);
        let r1 = grid_index(&ys, r.y1);
        for c in c0..c1 {
            for row in r0..r1 {
                covered[c * rows + row] = true;
            }
        }
    }
    let cell = |c: usize, row: usize| covered[c * rows + row];

    // Collect the directed boundary edges, keyed by their start vertex.
    let mut edges = EdgeMap::new();
    for row_line in 0..=rows {
        for c in 0..cols {
            let above = row_line > 0 && cell(c, row_line - 1);
            let below = row_line < rows && cell(c, row_line);
            if below && !above {
                edges.entry((c, row_line)).or_default().push(Dir::Right);
            } else if above && !below {
                edges.entry((c + 1, row_line)).or_default().push(Dir::Left);
            }
        }
    }
    for col_line in 0..=cols {
        for row in 0..rows {
            let left = col_line > 0 && cell(col_line - 1, row);
            let right = col_line < cols && cell(col_line, row);
            if left && !right {
                edges.entry((col_line, row)).or_default().push(Dir::Down);
            } else if right && !left {
                edges.entry((col_line, row + 1)).or_default().push(Dir::Up);
            }
        }
    }

    // Trace the loops. Vertices are visited in grid order, so each loop
    // starts at its own minimal vertex, which is always a corner.
    let mut starts: Vec<(usize, usize)> = edges.keys().copied().collect();
    starts.sort_unstable();
    for start in starts {
        while let Some(first) = pop_first_edge(&mut edges, start) {
            let mut corners: Vec<(usize, usize)> = alloc::vec![start];
            let mut dir = first;
            let mut vertex = dir.step(start);
            while vertex != start {
                let Some(next) = pop_turning_edge(&mut edges, vertex, dir) else {
                    debug_assert!(false, "boundary trace stranded at {vertex:?}");
                    break;
                };
                if next != dir {
                    corners.push(vertex);
                }
                dir = next;
                vertex = dir.step(vertex);
            }

            path.move_to((xs[corners[0].0], ys[corners[0].1]));
            for &(cx, cy) in &corners[1..] {
                path.line_to((xs[cx], ys[cy]));
            }
            path.close_path();
        }
    }
    path
}

fn pop_first_edge(edges: &mut EdgeMap, vertex: (usize, usize)) -> Option<Dir> {
    let dirs = edges.get_mut(&vertex)?;
    let dir = dirs.remove(0);
    if dirs.is_empty() {
        edges.remove(&vertex);
    }
    Some(dir)
}

fn pop_turning_edge(edges: &mut EdgeMap, vertex: (usize, usize), incoming: Dir) -> Option<Dir> {
    let dirs = edges.get_mut(&vertex)?;
    for candidate in incoming.turn_order() {
        if let Some(index) = dirs.iter().position(|&d| d == candidate) {
            let dir = dirs.remove(index);
            if dirs.is_empty() {
                edges.remove(&vertex);
            }
            return Some(dir);
        }
    }
    None
}
