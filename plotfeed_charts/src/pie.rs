// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie chart demo source.
//!
//! Slice widths come from the backing array; per-slice annotations are the
//! decimal record index. The first slice is displaced outward by an eighth of
//! the radius, an index-keyed special case with no general rule.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;
use plotfeed_core::{PlotDataSource, PlotField, PlotId};

/// Identity of the demo pie plot.
pub const PIE_CHART_1: PlotId = PlotId::from_static("Pie Chart 1");

/// Data source and descriptor for one pie plot.
#[derive(Clone, Debug)]
pub struct PieChartSource {
    id: PlotId,
    slices: Vec<f64>,
    radius: f64,
    start_angle: f64,
    center: Point,
    label_fill: Brush,
    selection_title: Option<String>,
}

impl PieChartSource {
    /// Creates a pie source over `slices`.
    ///
    /// Defaults match the demo configuration: radius 131, start angle π/4,
    /// center anchor at (0.5, 0.38) in unit view coordinates, light-gray
    /// annotations.
    pub fn new(id: PlotId, slices: Vec<f64>) -> Self {
        Self {
            id,
            slices,
            radius: 131.0,
            start_angle: core::f64::consts::FRAC_PI_4,
            center: Point::new(0.5, 0.38),
            label_fill: Brush::Solid(css::LIGHT_GRAY),
            selection_title: None,
        }
    }

    /// The canonical demo source: slices `[20, 30, 60]`.
    pub fn demo() -> Self {
        Self::new(PIE_CHART_1, alloc::vec![20.0, 30.0, 60.0])
    }

    /// Sets the pie radius.
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Sets the start angle in radians.
    pub fn with_start_angle(mut self, start_angle: f64) -> Self {
        self.start_angle = start_angle;
        self
    }

    /// Sets the center anchor in unit view coordinates.
    pub fn with_center(mut self, center: Point) -> Self {
        self.center = center;
        self
    }

    /// Sets the annotation fill paint.
    pub fn with_label_fill(mut self, fill: impl Into<Brush>) -> Self {
        self.label_fill = fill.into();
        self
    }

    /// Plot identity.
    pub fn id(&self) -> &PlotId {
        &self.id
    }

    /// Pie radius in scene units.
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Start angle in radians.
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Center anchor in unit view coordinates.
    pub fn center(&self) -> Point {
        self.center
    }

    /// Annotation fill paint.
    pub fn label_fill(&self) -> &Brush {
        &self.label_fill
    }

    /// Records a slice selection reported by the renderer.
    pub fn select(&mut self, record: usize) {
        self.selection_title = Some(format!("Selected index: {record}"));
    }

    /// The display title recorded by the last selection, if any.
    pub fn selection_title(&self) -> Option<&str> {
        self.selection_title.as_deref()
    }
}

impl PlotDataSource for PieChartSource {
    fn record_count(&self, _plot: &PlotId) -> usize {
        self.slices.len()
    }

    fn value(&self, _plot: &PlotId, field: PlotField, record: usize) -> Option<f64> {
        match field {
            PlotField::SliceWidth => self.slices.get(record).copied(),
            _ => None,
        }
    }

    fn data_label(&self, _plot: &PlotId, record: usize) -> Option<String> {
        (record < self.slices.len()).then(|| format!("{record}"))
    }

    fn radial_offset(&self, _plot: &PlotId, record: usize) -> f64 {
        if record == 0 && !self.slices.is_empty() {
            self.radius / 8.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn slice_widths_read_the_backing_array() {
        let source = PieChartSource::demo();
        assert_eq!(source.value(&PIE_CHART_1, PlotField::SliceWidth, 0), Some(20.0));
        assert_eq!(source.value(&PIE_CHART_1, PlotField::SliceWidth, 1), Some(30.0));
        assert_eq!(source.value(&PIE_CHART_1, PlotField::SliceWidth, 2), Some(60.0));
    }

    #[test]
    fn the_index_at_the_record_count_is_absent() {
        let source = PieChartSource::demo();
        assert_eq!(source.record_count(&PIE_CHART_1), 3);
        assert_eq!(source.value(&PIE_CHART_1, PlotField::SliceWidth, 3), None);
    }

    #[test]
    fn unknown_fields_are_absent_not_the_index() {
        let source = PieChartSource::demo();
        assert_eq!(source.value(&PIE_CHART_1, PlotField::X, 1), None);
        assert_eq!(source.value(&PIE_CHART_1, PlotField::BarTip, 1), None);
    }

    #[test]
    fn annotations_are_the_decimal_record_index() {
        let source = PieChartSource::demo();
        assert_eq!(source.data_label(&PIE_CHART_1, 0).as_deref(), Some("0"));
        assert_eq!(source.data_label(&PIE_CHART_1, 2).as_deref(), Some("2"));
        assert_eq!(source.data_label(&PIE_CHART_1, 3), None);
    }

    #[test]
    fn only_the_first_slice_is_displaced() {
        let source = PieChartSource::demo().with_radius(131.0);
        assert_eq!(source.radial_offset(&PIE_CHART_1, 0), 131.0 / 8.0);
        assert_eq!(source.radial_offset(&PIE_CHART_1, 1), 0.0);
        assert_eq!(source.radial_offset(&PIE_CHART_1, 2), 0.0);
        assert_eq!(source.radial_offset(&PIE_CHART_1, 3), 0.0);
    }

    #[test]
    fn an_empty_pie_has_no_displacement_at_all() {
        let source = PieChartSource::new(PIE_CHART_1, Vec::new());
        assert_eq!(source.radial_offset(&PIE_CHART_1, 0), 0.0);
    }

    #[test]
    fn selection_records_the_reported_index() {
        let mut source = PieChartSource::demo();
        assert_eq!(source.selection_title(), None);
        source.select(2);
        assert_eq!(source.selection_title(), Some("Selected index: 2"));
        source.select(0);
        assert_eq!(source.selection_title(), Some("Selected index: 0"));
    }
}
