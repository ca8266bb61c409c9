// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Identity-keyed value derivation rules.
//!
//! Some plots derive a field from the record index, others read a backing
//! value as-is or shifted. Which rule applies is a property of the plot's
//! identity, so the rules live in a table keyed by [`PlotId`] instead of
//! string comparisons scattered through source code.

extern crate alloc;

use hashbrown::HashMap;

use crate::identity::PlotId;

/// A derivation rule for one plot value.
///
/// Index-derived variants never consult the backing value; backing-derived
/// variants are absent exactly when the backing value is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueTransform {
    /// The record index itself.
    Index,
    /// The record index scaled by a fixed unit, such as seconds per day.
    ScaledIndex(f64),
    /// The square of the successor index, `(index + 1)^2`.
    SuccessorSquared,
    /// The backing value, unchanged.
    Backing,
    /// The backing value shifted by a constant.
    Shifted(f64),
}

impl ValueTransform {
    /// Applies the rule to one record.
    pub fn apply(&self, index: usize, backing: Option<f64>) -> Option<f64> {
        match *self {
            Self::Index => Some(index as f64),
            Self::ScaledIndex(unit) => Some(unit * index as f64),
            Self::SuccessorSquared => {
                let successor = index as f64 + 1.0;
                Some(successor * successor)
            }
            Self::Backing => backing,
            Self::Shifted(delta) => backing.map(|value| value + delta),
        }
    }
}

/// A total mapping from plot identity to derivation rule.
///
/// Identities without an explicit entry resolve to the default rule, so
/// dispatch never falls through at the call site.
#[derive(Clone, Debug)]
pub struct TransformTable {
    default: ValueTransform,
    by_plot: HashMap<PlotId, ValueTransform>,
}

impl TransformTable {
    /// Creates a table where every identity resolves to `default`.
    pub fn uniform(default: ValueTransform) -> Self {
        Self {
            default,
            by_plot: HashMap::new(),
        }
    }

    /// Adds an identity-specific rule.
    pub fn with(mut self, plot: impl Into<PlotId>, transform: ValueTransform) -> Self {
        self.by_plot.insert(plot.into(), transform);
        self
    }

    /// The rule for `plot`.
    pub fn resolve(&self, plot: &PlotId) -> ValueTransform {
        self.by_plot.get(plot).copied().unwrap_or(self.default)
    }

    /// Resolves and applies in one step.
    pub fn apply(&self, plot: &PlotId, index: usize, backing: Option<f64>) -> Option<f64> {
        self.resolve(plot).apply(index, backing)
    }
}
