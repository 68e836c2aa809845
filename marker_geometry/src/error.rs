// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Errors surfaced when building marker geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Rectangular (box) selection geometry was requested.
    ///
    /// Box selections are made of per-line column ranges rather than a single
    /// contiguous span and need a different geometry pass, which this crate
    /// does not provide. The call produces no partial result.
    UnsupportedBoxSelection,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnsupportedBoxSelection => {
                write!(f, "box selection marker geometry is not supported")
            }
        }
    }
}

impl core::error::Error for Error {}
