// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Field tags naming the numeric roles of a record.

/// A numeric role a record participates in.
///
/// The set is closed: sources match on it exhaustively and answer fields they
/// do not carry with an absent value, never a substitute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlotField {
    /// Horizontal position of a point.
    X,
    /// Vertical position of a point.
    Y,
    /// Bar position along the independent axis.
    BarLocation,
    /// Bar extent along the dependent axis.
    BarTip,
    /// Bar origin along the dependent axis, for bars whose bases vary.
    BarBase,
    /// Angular width of a pie slice.
    SliceWidth,
}
