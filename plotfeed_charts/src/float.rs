// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Float helpers for `no_std` builds.
//!
//! `f64::round` is not available in `core`; dispatch to `libm` when building
//! without `std`.

/// Float math helpers for `f64` in `no_std` mode.
pub(crate) trait FloatExt {
    fn round(self) -> Self;
}

#[cfg(feature = "libm")]
impl FloatExt for f64 {
    fn round(self) -> Self {
        libm::round(self)
    }
}

#[cfg(not(feature = "libm"))]
compile_error!("plotfeed_charts requires either the `std` or `libm` feature");
