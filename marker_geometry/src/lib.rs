// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marker geometry for text view selections and highlights.
//!
//! Given a span over text content — buffer positions plus optional virtual
//! space past the end of a line — this crate computes the region that marks
//! the span on screen: one or more axis-aligned rectangles, padded, optionally
//! clipped to the viewport, and merged into a single fill-ready path.
//!
//! The crate performs no layout of its own. Line geometry, column width and
//! viewport bounds are consumed through the read-only [`TextView`] and
//! [`TextViewLine`] capability traits, implemented by whatever text view
//! stack hosts the marker.
//!
//! The entry point is [`create_geometry`]; [`is_multi_line_span`] exposes the
//! predicate that selects between the line and text padding profiles.
//!
//! ## Features
//!
//! - `std` (enabled by default): Use the standard library, through `peniko`.
//! - `libm`: Use floating point implementations from `libm` in dependencies,
//!   allowing use in `no_std` environments.
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.

// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("marker_geometry requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use peniko;
pub use smallvec;

mod bounds;
mod error;
mod marker;
mod outline;
mod position;
mod region;
mod view;
mod walker;

pub use error::Error;
pub use marker::{SelectionMode, create_geometry, is_multi_line_span};
pub use position::{VirtualPoint, VirtualSpan};
pub use region::MarkerGeometry;
pub use view::{TextBounds, TextView, TextViewLine};
