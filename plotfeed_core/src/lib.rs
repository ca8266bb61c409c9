// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal pull-based plot data model.
//!
//! This crate is the data layer under `plotfeed_charts`:
//! - **Series** hold ordered, immutable records keyed by a closed set of field tags.
//! - **Identities** distinguish rendered plots, so per-plot derivation rules can
//!   dispatch on the plot's label rather than its position or type.
//! - **Sources** implement the lazy callback contract a rendering collaborator
//!   pulls values through, one record at a time.
//!
//! Rendering, layout, and coordinate mapping are out of scope; an external
//! renderer consumes the values produced here and skips any record a source
//! answers with an absent value.

#![no_std]

extern crate alloc;

mod field;
mod identity;
mod range;
mod series;
mod source;
mod transform;

pub use field::PlotField;
pub use identity::PlotId;
pub use range::ValueRange;
pub use series::{Record, Series, SeriesError};
pub use source::PlotDataSource;
pub use transform::{TransformTable, ValueTransform};
