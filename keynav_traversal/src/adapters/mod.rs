// Copyright 2026 the Keynav Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapters to integrate with other Keynav crates.
//!
//! Enabled via feature flags to keep the core small and `no_std` by default.

#[cfg(feature = "widget_tree_adapter")]
pub mod widget_tree;
