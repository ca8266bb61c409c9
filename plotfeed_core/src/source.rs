// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pull-based data-source contract.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;

use crate::field::PlotField;
use crate::identity::PlotId;

/// The callback contract a rendering collaborator pulls data through.
///
/// The renderer asks for one value per visible record per redraw. Evaluation
/// is synchronous and side-effect free, and an absent result tells the
/// renderer to skip that point rather than substitute a default.
pub trait PlotDataSource {
    /// Number of records backing the identified plot.
    fn record_count(&self, plot: &PlotId) -> usize;

    /// The numeric value for one field of one record.
    ///
    /// Absent for `record >= record_count(plot)` and for field tags the
    /// source does not carry.
    fn value(&self, plot: &PlotId, field: PlotField, record: usize) -> Option<f64>;

    /// Optional per-record annotation text.
    ///
    /// Only sources that render per-point annotations answer; the default is
    /// no annotation.
    fn data_label(&self, plot: &PlotId, record: usize) -> Option<String> {
        let _ = (plot, record);
        None
    }

    /// Radial displacement for pie-style plots, in the same unit as the pie
    /// radius.
    ///
    /// The default is no displacement.
    fn radial_offset(&self, plot: &PlotId, record: usize) -> f64 {
        let _ = (plot, record);
        0.0
    }

    /// The X/Y position of one record, when both fields are present.
    fn point(&self, plot: &PlotId, record: usize) -> Option<Point> {
        let x = self.value(plot, PlotField::X, record)?;
        let y = self.value(plot, PlotField::Y, record)?;
        Some(Point::new(x, y))
    }
}
