// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Behavior tests for marker geometry, driven through a scripted text view.

mod utils;
