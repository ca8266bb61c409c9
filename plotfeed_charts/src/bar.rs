// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar chart demo source.
//!
//! Two bar plots share one data source. Bar locations are the record index;
//! the bar tip rule is selected by plot identity, so the same index feeds
//! different heights into each plot.

extern crate alloc;

use alloc::vec::Vec;

use peniko::Brush;
use peniko::color::palette::css;
use plotfeed_core::{PlotDataSource, PlotField, PlotId, TransformTable, ValueTransform};

/// Identity of the first demo bar plot.
pub const BAR_PLOT_1: PlotId = PlotId::from_static("Bar Plot 1");
/// Identity of the second demo bar plot.
pub const BAR_PLOT_2: PlotId = PlotId::from_static("Bar Plot 2");

/// Renderer-facing description of one bar plot.
#[derive(Clone, Debug)]
pub struct BarPlotSpec {
    /// Plot identity.
    pub id: PlotId,
    /// Fill paint for the bars.
    pub fill: Brush,
    /// Baseline in data units.
    pub base_value: f64,
    /// Horizontal displacement of the bars, in bar-location units.
    pub bar_offset: f64,
    /// Corner radius for the bar ends.
    pub corner_radius: f64,
}

impl BarPlotSpec {
    /// Creates a spec with a zero baseline and square corners.
    pub fn new(id: PlotId, fill: impl Into<Brush>) -> Self {
        Self {
            id,
            fill: fill.into(),
            base_value: 0.0,
            bar_offset: 0.0,
            corner_radius: 0.0,
        }
    }

    /// Sets the baseline in data units.
    pub fn with_base_value(mut self, base_value: f64) -> Self {
        self.base_value = base_value;
        self
    }

    /// Sets the horizontal bar displacement.
    pub fn with_bar_offset(mut self, bar_offset: f64) -> Self {
        self.bar_offset = bar_offset;
        self
    }

    /// Sets the bar corner radius.
    pub fn with_corner_radius(mut self, corner_radius: f64) -> Self {
        self.corner_radius = corner_radius;
        self
    }
}

/// Data source shared by a group of bar plots.
///
/// There is no backing array: every value is a function of the record index
/// alone, with the tip rule resolved through the transform table.
#[derive(Clone, Debug)]
pub struct BarChartSource {
    plots: Vec<BarPlotSpec>,
    tips: TransformTable,
    record_count: usize,
}

impl BarChartSource {
    /// Creates a source with `record_count` records and per-identity tip
    /// rules.
    pub fn new(record_count: usize, tips: TransformTable) -> Self {
        Self {
            plots: Vec::new(),
            tips,
            record_count,
        }
    }

    /// Adds a plot description.
    pub fn with_plot(mut self, plot: BarPlotSpec) -> Self {
        self.plots.push(plot);
        self
    }

    /// The registered plot descriptions.
    pub fn plots(&self) -> &[BarPlotSpec] {
        &self.plots
    }

    /// The canonical two-plot demo: 16 records; [`BAR_PLOT_1`] tips at
    /// `(index + 1)^2` and [`BAR_PLOT_2`] tips at the raw index.
    ///
    /// The table's default is the squared rule, so identities that are not
    /// [`BAR_PLOT_2`] all resolve the way the first plot does.
    pub fn demo() -> Self {
        let tips = TransformTable::uniform(ValueTransform::SuccessorSquared)
            .with(BAR_PLOT_2, ValueTransform::Index);
        Self::new(16, tips)
            .with_plot(BarPlotSpec::new(BAR_PLOT_1, css::DARK_GRAY).with_bar_offset(-0.2))
            .with_plot(
                BarPlotSpec::new(BAR_PLOT_2, css::BLUE)
                    .with_bar_offset(0.25)
                    .with_corner_radius(2.0),
            )
    }
}

impl PlotDataSource for BarChartSource {
    fn record_count(&self, _plot: &PlotId) -> usize {
        self.record_count
    }

    fn value(&self, plot: &PlotId, field: PlotField, record: usize) -> Option<f64> {
        if record >= self.record_count {
            return None;
        }
        match field {
            PlotField::BarLocation => Some(record as f64),
            PlotField::BarTip => self.tips.apply(plot, record, None),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn locations_are_the_record_index_for_both_plots() {
        let source = BarChartSource::demo();
        for id in [&BAR_PLOT_1, &BAR_PLOT_2] {
            assert_eq!(source.value(id, PlotField::BarLocation, 0), Some(0.0));
            assert_eq!(source.value(id, PlotField::BarLocation, 7), Some(7.0));
        }
    }

    #[test]
    fn tips_dispatch_on_plot_identity() {
        let source = BarChartSource::demo();
        for i in 0..source.record_count(&BAR_PLOT_1) {
            let expected = (i as f64 + 1.0) * (i as f64 + 1.0);
            assert_eq!(source.value(&BAR_PLOT_1, PlotField::BarTip, i), Some(expected));
            assert_eq!(source.value(&BAR_PLOT_2, PlotField::BarTip, i), Some(i as f64));
        }
    }

    #[test]
    fn unregistered_identities_fall_back_to_the_default_rule() {
        let source = BarChartSource::demo();
        let other = PlotId::from_static("Bar Plot 3");
        assert_eq!(source.value(&other, PlotField::BarTip, 2), Some(9.0));
    }

    #[test]
    fn out_of_range_and_unknown_fields_are_absent() {
        let source = BarChartSource::demo();
        let count = source.record_count(&BAR_PLOT_1);
        assert_eq!(count, 16);
        assert_eq!(source.value(&BAR_PLOT_1, PlotField::BarTip, count), None);
        assert_eq!(source.value(&BAR_PLOT_1, PlotField::BarLocation, count), None);
        assert_eq!(source.value(&BAR_PLOT_1, PlotField::BarBase, 0), None);
        assert_eq!(source.value(&BAR_PLOT_1, PlotField::SliceWidth, 0), None);
    }

    #[test]
    fn demo_registers_both_plot_descriptions() {
        let source = BarChartSource::demo();
        let ids: std::vec::Vec<_> = source.plots().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids, [BAR_PLOT_1, BAR_PLOT_2]);
        assert_eq!(source.plots()[0].bar_offset, -0.2);
        assert_eq!(source.plots()[1].corner_radius, 2.0);
    }
}
