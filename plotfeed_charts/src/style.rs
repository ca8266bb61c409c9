// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Styling descriptors shared by plot specs.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Brush;
use peniko::color::palette::css;

/// A stroked-line description: paint, width, and dash pattern.
///
/// Pure data for the renderer; an empty dash pattern means a solid line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in scene coordinates.
    pub width: f64,
    /// Dash segment lengths, empty for solid strokes.
    pub dash: Vec<f64>,
}

impl LineStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, width: f64) -> Self {
        Self {
            brush: brush.into(),
            width,
            dash: Vec::new(),
        }
    }

    /// Convenience for a dashed stroke.
    pub fn dashed(brush: impl Into<Brush>, width: f64, dash: impl Into<Vec<f64>>) -> Self {
        Self {
            brush: brush.into(),
            width,
            dash: dash.into(),
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::solid(css::BLACK, 1.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn solid_strokes_have_no_dash_pattern() {
        let style = LineStyle::solid(css::BLUE, 3.0);
        assert!(style.dash.is_empty());
        assert_eq!(style.width, 3.0);
    }

    #[test]
    fn dashed_strokes_keep_their_pattern() {
        let style = LineStyle::dashed(css::GREEN, 3.0, [5.0, 5.0]);
        assert_eq!(style.dash, [5.0, 5.0]);
    }
}
