// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scatter plot demo source.
//!
//! Two scatter plots share one generate-once data series; the green plot
//! reads its Y values shifted up by one so both line shapes stay visible.

extern crate alloc;

use alloc::vec::Vec;

use peniko::color::palette::css;
use plotfeed_core::{
    PlotDataSource, PlotField, PlotId, Record, Series, TransformTable, ValueRange, ValueTransform,
};

use crate::random::uniform_values;
use crate::style::LineStyle;

/// Identity of the solid bound plot.
pub const BLUE_PLOT: PlotId = PlotId::from_static("Blue Plot");
/// Identity of the dashed, shifted plot.
pub const GREEN_PLOT: PlotId = PlotId::from_static("Green Plot");

/// Renderer-facing description of one scatter plot.
#[derive(Clone, Debug)]
pub struct ScatterPlotSpec {
    /// Plot identity.
    pub id: PlotId,
    /// Data line style.
    pub line: LineStyle,
    /// Baseline for the area fill under the line, if any.
    pub area_base: Option<f64>,
}

impl ScatterPlotSpec {
    /// Creates a spec with no area fill.
    pub fn new(id: PlotId, line: LineStyle) -> Self {
        Self {
            id,
            line,
            area_base: None,
        }
    }

    /// Sets the area-fill baseline.
    pub fn with_area_base(mut self, area_base: f64) -> Self {
        self.area_base = Some(area_base);
        self
    }
}

/// Data source shared by a group of scatter plots.
///
/// The backing series is produced once at construction and owned by the
/// source; Y values are routed through an identity-keyed transform table.
#[derive(Clone, Debug)]
pub struct ScatterChartSource {
    data: Series,
    y_rules: TransformTable,
    plots: Vec<ScatterPlotSpec>,
    x_range: ValueRange,
    y_range: ValueRange,
}

impl ScatterChartSource {
    /// Creates a source over prepared data with per-identity Y rules.
    ///
    /// The default plot-space extents are those of the demo: X over `[1, 4]`
    /// and Y over `[1, 3]`.
    pub fn new(data: Series, y_rules: TransformTable) -> Self {
        Self {
            data,
            y_rules,
            plots: Vec::new(),
            x_range: ValueRange::new(1.0, 4.0),
            y_range: ValueRange::new(1.0, 3.0),
        }
    }

    /// The canonical two-plot demo: 60 records with `x = 1 + 0.05·i` and
    /// random Y in `[1.2, 2.4]` generated once from `seed`; [`GREEN_PLOT`]
    /// reads Y + 1.
    pub fn demo(seed: u32) -> Self {
        let records: Vec<Record> = uniform_values(seed, 60, 1.2, 1.2)
            .iter()
            .enumerate()
            .map(|(i, &y)| Record::xy(1.0 + 0.05 * i as f64, y))
            .collect();
        let y_rules = TransformTable::uniform(ValueTransform::Backing)
            .with(GREEN_PLOT, ValueTransform::Shifted(1.0));
        Self::new(Series::from_records(records), y_rules)
            .with_plot(
                ScatterPlotSpec::new(BLUE_PLOT, LineStyle::solid(css::BLUE, 3.0))
                    .with_area_base(0.0),
            )
            .with_plot(
                ScatterPlotSpec::new(GREEN_PLOT, LineStyle::dashed(css::GREEN, 3.0, [5.0, 5.0]))
                    .with_area_base(1.75),
            )
    }

    /// Adds a plot description.
    pub fn with_plot(mut self, plot: ScatterPlotSpec) -> Self {
        self.plots.push(plot);
        self
    }

    /// Sets the plot-space X extent descriptor.
    pub fn with_x_range(mut self, x_range: ValueRange) -> Self {
        self.x_range = x_range;
        self
    }

    /// Sets the plot-space Y extent descriptor.
    pub fn with_y_range(mut self, y_range: ValueRange) -> Self {
        self.y_range = y_range;
        self
    }

    /// The registered plot descriptions.
    pub fn plots(&self) -> &[ScatterPlotSpec] {
        &self.plots
    }

    /// Plot-space X extent descriptor.
    pub fn x_range(&self) -> ValueRange {
        self.x_range
    }

    /// Plot-space Y extent descriptor.
    pub fn y_range(&self) -> ValueRange {
        self.y_range
    }
}

impl PlotDataSource for ScatterChartSource {
    fn record_count(&self, _plot: &PlotId) -> usize {
        self.data.len()
    }

    fn value(&self, plot: &PlotId, field: PlotField, record: usize) -> Option<f64> {
        if record >= self.data.len() {
            return None;
        }
        match field {
            PlotField::X => self.data.value(PlotField::X, record),
            PlotField::Y => {
                self.y_rules
                    .apply(plot, record, self.data.value(PlotField::Y, record))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn the_green_plot_reads_y_shifted_by_one() {
        let source = ScatterChartSource::demo(7);
        for i in 0..source.record_count(&BLUE_PLOT) {
            let blue = source.value(&BLUE_PLOT, PlotField::Y, i).unwrap();
            let green = source.value(&GREEN_PLOT, PlotField::Y, i).unwrap();
            assert_eq!(green, blue + 1.0);
        }
    }

    #[test]
    fn x_values_follow_the_stored_curve() {
        let source = ScatterChartSource::demo(7);
        assert_eq!(source.value(&BLUE_PLOT, PlotField::X, 0), Some(1.0));
        assert_eq!(source.value(&GREEN_PLOT, PlotField::X, 20), Some(2.0));
    }

    #[test]
    fn the_data_is_generated_once_and_stable_across_pulls() {
        let source = ScatterChartSource::demo(7);
        let first = source.value(&BLUE_PLOT, PlotField::Y, 30);
        for _ in 0..3 {
            assert_eq!(source.value(&BLUE_PLOT, PlotField::Y, 30), first);
        }
        let again = ScatterChartSource::demo(7);
        assert_eq!(again.value(&BLUE_PLOT, PlotField::Y, 30), first);
    }

    #[test]
    fn out_of_range_and_unknown_fields_are_absent() {
        let source = ScatterChartSource::demo(7);
        let count = source.record_count(&GREEN_PLOT);
        assert_eq!(count, 60);
        assert_eq!(source.value(&GREEN_PLOT, PlotField::Y, count), None);
        assert_eq!(source.value(&BLUE_PLOT, PlotField::X, count), None);
        assert_eq!(source.value(&BLUE_PLOT, PlotField::SliceWidth, 0), None);
    }

    #[test]
    fn demo_extents_cover_the_generated_data() {
        let source = ScatterChartSource::demo(7);
        assert_eq!(source.x_range(), ValueRange::new(1.0, 4.0));
        assert_eq!(source.y_range(), ValueRange::new(1.0, 3.0));
        for i in 0..source.record_count(&BLUE_PLOT) {
            let x = source.value(&BLUE_PLOT, PlotField::X, i).unwrap();
            assert!(source.x_range().contains(x), "x {x} outside extent");
        }
    }
}
