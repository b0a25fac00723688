// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Tab geometry is `f32`; compare it with the `approx` crate's macros rather
//! than `assert_eq!`.

pub use approx::assert_abs_diff_eq;
