// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick-label styling decisions.
//!
//! The renderer owns its axis label set; this module only derives
//! descriptors. A styler is a pure function from tick locations to styled
//! labels, so relabeling never mutates state the renderer holds.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use peniko::color::palette::css;
use peniko::{Brush, Color};
use plotfeed_core::ValueRange;

/// Color for an axis tick label, keyed to the sign of the tick value.
///
/// Zero counts as non-negative.
pub fn label_color(tick: f64) -> Color {
    if tick >= 0.0 { css::GREEN } else { css::RED }
}

/// Symmetric exclusion intervals of `tick ± tolerance` around each location.
///
/// Useful for dropping labels that would collide with an orthogonal axis or
/// with custom labels placed at the same locations.
pub fn whole_tick_exclusions(ticks: &[f64], tolerance: f64) -> Vec<ValueRange> {
    ticks
        .iter()
        .map(|&tick| ValueRange::around(tick, tolerance))
        .collect()
}

/// One styled tick-label descriptor for the renderer to apply.
#[derive(Clone, Debug, PartialEq)]
pub struct TickLabelSpec {
    /// Tick location in data units.
    pub location: f64,
    /// Label text.
    pub text: String,
    /// Label fill paint.
    pub fill: Brush,
    /// Perpendicular offset from the axis line.
    pub offset: f64,
    /// Rotation in radians.
    pub rotation: f64,
}

/// Derives sign-colored labels for a set of tick locations.
#[derive(Clone, Debug)]
pub struct TickLabelStyler {
    positive: Color,
    negative: Color,
    offset: f64,
    exclusions: Vec<ValueRange>,
}

impl TickLabelStyler {
    /// Creates a styler with the palette of [`label_color`] and no
    /// exclusions.
    pub fn new() -> Self {
        Self {
            positive: css::GREEN,
            negative: css::RED,
            offset: 0.0,
            exclusions: Vec::new(),
        }
    }

    /// Sets the non-negative and negative label colors.
    pub fn with_colors(mut self, positive: Color, negative: Color) -> Self {
        self.positive = positive;
        self.negative = negative;
        self
    }

    /// Sets the label offset.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Drops labels whose locations fall inside any of `exclusions`.
    pub fn with_exclusions(mut self, exclusions: Vec<ValueRange>) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Derives one styled label per non-excluded location.
    pub fn labels(&self, locations: &[f64]) -> Vec<TickLabelSpec> {
        locations
            .iter()
            .copied()
            .filter(|location| !self.exclusions.iter().any(|range| range.contains(*location)))
            .map(|location| TickLabelSpec {
                location,
                text: alloc::format!("{location}"),
                fill: Brush::Solid(if location >= 0.0 {
                    self.positive
                } else {
                    self.negative
                }),
                offset: self.offset,
                rotation: 0.0,
            })
            .collect()
    }
}

impl Default for TickLabelStyler {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixed location→text labels sharing one style, such as category names
/// under a bar axis.
#[derive(Clone, Debug, Default)]
pub struct CustomTickLabels {
    entries: Vec<(f64, String)>,
    fill: Brush,
    offset: f64,
    rotation: f64,
}

impl CustomTickLabels {
    /// Creates an empty label set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one label at a tick location.
    pub fn with_label(mut self, location: f64, text: impl Into<String>) -> Self {
        self.entries.push((location, text.into()));
        self
    }

    /// Sets the shared fill paint.
    pub fn with_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.fill = fill.into();
        self
    }

    /// Sets the shared offset.
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the shared rotation in radians.
    pub fn with_rotation(mut self, rotation: f64) -> Self {
        self.rotation = rotation;
        self
    }

    /// Derives the styled label descriptors, in insertion order.
    pub fn labels(&self) -> Vec<TickLabelSpec> {
        self.entries
            .iter()
            .map(|(location, text)| TickLabelSpec {
                location: *location,
                text: text.clone(),
                fill: self.fill.clone(),
                offset: self.offset,
                rotation: self.rotation,
            })
            .collect()
    }
}
