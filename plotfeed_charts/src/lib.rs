// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo-grade chart data sources for `plotfeed_core`.
//!
//! Each chart-family module pairs a [`plotfeed_core::PlotDataSource`]
//! implementation with the per-plot descriptors a renderer needs:
//! - **Bar**: two plots share one source; the bar tip rule dispatches on
//!   plot identity.
//! - **Pie**: slice widths, decimal-index annotations, and an index-keyed
//!   radial offset.
//! - **Scatter**: generate-once random data shared by two plots, one of
//!   which reads its Y values shifted.
//! - **Date**: X positions derived from the record index at whole-day steps.
//!
//! Tick-label styling lives in derived descriptors ([`TickLabelStyler`],
//! [`CustomTickLabels`]): the renderer owns its label set and applies what
//! these pure derivations return. Rendering, layout, and coordinate mapping
//! stay out of scope.

#![no_std]

extern crate alloc;

mod bar;
mod date;
#[cfg(not(feature = "std"))]
mod float;
mod pie;
mod random;
mod scatter;
mod style;
mod tick_label;
mod time;

pub use bar::{BAR_PLOT_1, BAR_PLOT_2, BarChartSource, BarPlotSpec};
pub use date::{DATE_PLOT, DateChartSource};
pub use pie::{PIE_CHART_1, PieChartSource};
pub use random::uniform_values;
pub use scatter::{BLUE_PLOT, GREEN_PLOT, ScatterChartSource, ScatterPlotSpec};
pub use style::LineStyle;
pub use tick_label::{
    CustomTickLabels, TickLabelSpec, TickLabelStyler, label_color, whole_tick_exclusions,
};
pub use time::{SECONDS_PER_DAY, day_ticks, format_day};
