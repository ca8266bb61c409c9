// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Date plot demo source.
//!
//! X positions are derived from the record index at a fixed step of one day;
//! Y values come from a generate-once backing series.

extern crate alloc;

use plotfeed_core::{PlotDataSource, PlotField, PlotId, Series, ValueTransform};

use crate::random::uniform_values;
use crate::time::SECONDS_PER_DAY;

/// Identity of the demo date plot.
pub const DATE_PLOT: PlotId = PlotId::from_static("Date Plot");

/// Data source for a date-based line plot.
#[derive(Clone, Debug)]
pub struct DateChartSource {
    id: PlotId,
    values: Series,
    x_rule: ValueTransform,
}

impl DateChartSource {
    /// Creates a source over backing Y values with whole-day X steps.
    pub fn new(id: PlotId, values: Series) -> Self {
        Self {
            id,
            values,
            x_rule: ValueTransform::ScaledIndex(SECONDS_PER_DAY),
        }
    }

    /// The canonical demo source: 5 random Y values in `[1.2, 2.4]`
    /// generated once from `seed`.
    pub fn demo(seed: u32) -> Self {
        Self::new(
            DATE_PLOT,
            Series::from_values(PlotField::Y, &uniform_values(seed, 5, 1.2, 1.2)),
        )
    }

    /// Sets a custom X step in seconds.
    pub fn with_step(mut self, step: f64) -> Self {
        self.x_rule = ValueTransform::ScaledIndex(step);
        self
    }

    /// Plot identity.
    pub fn id(&self) -> &PlotId {
        &self.id
    }
}

impl PlotDataSource for DateChartSource {
    fn record_count(&self, _plot: &PlotId) -> usize {
        self.values.len()
    }

    fn value(&self, _plot: &PlotId, field: PlotField, record: usize) -> Option<f64> {
        if record >= self.values.len() {
            return None;
        }
        match field {
            PlotField::X => self.x_rule.apply(record, None),
            PlotField::Y => self.values.value(PlotField::Y, record),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn x_positions_are_the_index_scaled_by_one_day() {
        let source = DateChartSource::demo(3);
        assert_eq!(source.value(&DATE_PLOT, PlotField::X, 0), Some(0.0));
        assert_eq!(
            source.value(&DATE_PLOT, PlotField::X, 4),
            Some(4.0 * SECONDS_PER_DAY)
        );
    }

    #[test]
    fn y_values_read_the_backing_series() {
        let source = DateChartSource::demo(3);
        for i in 0..source.record_count(&DATE_PLOT) {
            let y = source.value(&DATE_PLOT, PlotField::Y, i).unwrap();
            assert!((1.2..=2.4).contains(&y), "{y} out of range");
        }
    }

    #[test]
    fn the_index_at_the_record_count_is_absent_for_every_field() {
        let source = DateChartSource::demo(3);
        let count = source.record_count(&DATE_PLOT);
        assert_eq!(count, 5);
        assert_eq!(source.value(&DATE_PLOT, PlotField::X, count), None);
        assert_eq!(source.value(&DATE_PLOT, PlotField::Y, count), None);
    }

    #[test]
    fn a_custom_step_rescales_x() {
        let source = DateChartSource::demo(3).with_step(60.0);
        assert_eq!(source.value(&DATE_PLOT, PlotField::X, 2), Some(120.0));
    }
}
