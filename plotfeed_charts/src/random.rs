// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic sample-data generation.
//!
//! Demo sources randomize their backing data once at construction and treat
//! it as immutable afterwards. A small xorshift stream keeps the data
//! reproducible: the same seed always yields the same series.

extern crate alloc;

use alloc::vec::Vec;

fn xorshift32(mut state: u32) -> u32 {
    state ^= state << 13;
    state ^= state >> 17;
    state ^= state << 5;
    state
}

/// `count` values uniformly distributed in `[min, min + span]`.
///
/// A zero seed is remapped so the stream does not collapse to all zeros.
pub fn uniform_values(seed: u32, count: usize, min: f64, span: f64) -> Vec<f64> {
    let mut state = if seed == 0 { 0x9E37_79B9 } else { seed };
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        state = xorshift32(state);
        let unit = f64::from(state) / f64::from(u32::MAX);
        out.push(min + span * unit);
    }
    out
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn same_seed_reproduces_the_same_series() {
        assert_eq!(uniform_values(7, 60, 1.2, 1.2), uniform_values(7, 60, 1.2, 1.2));
        assert_ne!(uniform_values(7, 60, 1.2, 1.2), uniform_values(8, 60, 1.2, 1.2));
    }

    #[test]
    fn values_stay_inside_the_requested_interval() {
        for value in uniform_values(42, 1000, 1.2, 1.2) {
            assert!((1.2..=2.4).contains(&value), "{value} out of range");
        }
    }

    #[test]
    fn zero_seed_still_produces_a_varied_stream() {
        let values = uniform_values(0, 8, 0.0, 1.0);
        assert!(values.windows(2).any(|w| w[0] != w[1]), "stream collapsed");
    }
}
