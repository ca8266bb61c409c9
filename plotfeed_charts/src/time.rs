// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Day-based time constants and helpers for date plots.
//!
//! Time is modeled as a numeric offset in **seconds** from an arbitrary
//! reference date; calendar formatting belongs to the renderer. Dates
//! anchored at noon avoid daylight-saving adjustments, so the whole-day step
//! here is a fixed 86 400 seconds.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Seconds in one day.
pub const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;

/// Tick locations at whole-day boundaries, `0..=days`.
pub fn day_ticks(days: usize) -> Vec<f64> {
    (0..=days).map(|i| SECONDS_PER_DAY * i as f64).collect()
}

/// Formats a seconds offset as a whole-day label, e.g. `day 3`.
///
/// The offset is rounded to the nearest day.
pub fn format_day(seconds: f64) -> String {
    if !seconds.is_finite() {
        return alloc::format!("{seconds}");
    }
    let days = (seconds / SECONDS_PER_DAY).round();
    alloc::format!("day {days}")
}
