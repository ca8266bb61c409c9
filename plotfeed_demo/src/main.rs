// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot data-source demos.
//!
//! This binary stands in for the rendering collaborator: it builds each demo
//! source and pulls values the way a renderer would — record count first,
//! then one value per field per record, probing one index past the end to
//! show the absent result.

use std::fmt::Write as _;

use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;
use plotfeed_charts::{
    BAR_PLOT_1, BAR_PLOT_2, BLUE_PLOT, BarChartSource, CustomTickLabels, DATE_PLOT,
    DateChartSource, GREEN_PLOT, PIE_CHART_1, PieChartSource, ScatterChartSource, TickLabelStyler,
    day_ticks, format_day, label_color, whole_tick_exclusions,
};
use plotfeed_core::{PlotDataSource, PlotField};

const DEMO_SEED: u32 = 0x5EED;

fn main() {
    let sections = [
        bar_demo(),
        scatter_demo(),
        pie_demo(),
        date_demo(),
        tick_label_demo(),
    ];
    print!("{}", sections.join("\n"));
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => String::from("absent"),
    }
}

fn format_point(point: Point) -> String {
    format!("({:.3}, {:.3})", point.x, point.y)
}

fn color_name(brush: &Brush) -> &'static str {
    if *brush == Brush::Solid(css::GREEN) {
        "green"
    } else if *brush == Brush::Solid(css::RED) {
        "red"
    } else {
        "other"
    }
}

fn bar_demo() -> String {
    let source = BarChartSource::demo();
    let mut out = String::from("== Bar plots ==\n");
    let count = source.record_count(&BAR_PLOT_1);
    let _ = writeln!(
        out,
        "{count} records; \"{BAR_PLOT_1}\" tips at (i + 1)^2, \"{BAR_PLOT_2}\" at i"
    );
    let _ = writeln!(out, "{:>5} {:>10} {:>10} {:>10}", "#", "location", "tip 1", "tip 2");
    for record in 0..=count {
        let _ = writeln!(
            out,
            "{record:>5} {:>10} {:>10} {:>10}",
            format_value(source.value(&BAR_PLOT_1, PlotField::BarLocation, record)),
            format_value(source.value(&BAR_PLOT_1, PlotField::BarTip, record)),
            format_value(source.value(&BAR_PLOT_2, PlotField::BarTip, record)),
        );
    }
    out
}

fn scatter_demo() -> String {
    let source = ScatterChartSource::demo(DEMO_SEED);
    let mut out = String::from("== Scatter plots ==\n");
    let count = source.record_count(&BLUE_PLOT);
    let _ = writeln!(out, "{count} records generated once; \"{GREEN_PLOT}\" reads y + 1");
    let x = source.x_range();
    let y = source.y_range();
    let _ = writeln!(out, "x extent [{}, {}], y extent [{}, {}]", x.min, x.max, y.min, y.max);
    for record in 0..5 {
        let blue = source.point(&BLUE_PLOT, record).expect("in-range record");
        let green = source.point(&GREEN_PLOT, record).expect("in-range record");
        let _ = writeln!(
            out,
            "{record:>5} blue {}  green {}",
            format_point(blue),
            format_point(green)
        );
    }
    let _ = writeln!(
        out,
        "  ... y at {count}: {}",
        format_value(source.value(&BLUE_PLOT, PlotField::Y, count))
    );
    out
}

fn pie_demo() -> String {
    let mut source = PieChartSource::demo();
    let mut out = String::from("== Pie chart ==\n");
    let count = source.record_count(&PIE_CHART_1);
    let _ = writeln!(out, "{count} slices, radius {}", source.radius());
    for record in 0..=count {
        let _ = writeln!(
            out,
            "{record:>5} width {:>7} label {:>7} radial offset {}",
            format_value(source.value(&PIE_CHART_1, PlotField::SliceWidth, record)),
            source
                .data_label(&PIE_CHART_1, record)
                .unwrap_or_else(|| String::from("absent")),
            source.radial_offset(&PIE_CHART_1, record),
        );
    }
    source.select(2);
    let _ = writeln!(
        out,
        "after selecting slice 2: {}",
        source.selection_title().expect("selection recorded")
    );
    out
}

fn date_demo() -> String {
    let source = DateChartSource::demo(DEMO_SEED);
    let mut out = String::from("== Date plot ==\n");
    let count = source.record_count(&DATE_PLOT);
    for record in 0..count {
        let x = source
            .value(&DATE_PLOT, PlotField::X, record)
            .expect("in-range record");
        let y = source
            .value(&DATE_PLOT, PlotField::Y, record)
            .expect("in-range record");
        let _ = writeln!(out, "{:>8} ({x} s): {y:.3}", format_day(x));
    }
    let _ = writeln!(out, "day ticks: {:?}", day_ticks(count.saturating_sub(1)));
    out
}

fn tick_label_demo() -> String {
    let mut out = String::from("== Tick labels ==\n");
    let _ = writeln!(
        out,
        "sign rule: 5 -> {}, -0.01 -> {}, 0 -> {}",
        color_name(&Brush::Solid(label_color(5.0))),
        color_name(&Brush::Solid(label_color(-0.01))),
        color_name(&Brush::Solid(label_color(0.0))),
    );

    let styler =
        TickLabelStyler::new().with_exclusions(whole_tick_exclusions(&[1.0, 2.0, 3.0], 0.01));
    let locations = [-1.0, -0.5, 0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0];
    let labels = styler.labels(&locations);
    let _ = writeln!(
        out,
        "{} of {} locations labeled (whole ticks excluded):",
        labels.len(),
        locations.len()
    );
    for label in &labels {
        let _ = writeln!(out, "{:>6} -> {}", label.text, color_name(&label.fill));
    }

    let custom = CustomTickLabels::new()
        .with_label(1.0, "Label A")
        .with_label(5.0, "Label B")
        .with_label(10.0, "Label C")
        .with_label(15.0, "Label D")
        .with_rotation(std::f64::consts::FRAC_PI_4)
        .labels();
    let _ = writeln!(out, "custom bar-axis labels:");
    for label in &custom {
        let _ = writeln!(
            out,
            "{:>6} -> {:?} at rotation {:.3}",
            label.location, label.text, label.rotation
        );
    }
    out
}
