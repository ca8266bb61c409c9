// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Series and record storage.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::Point;
use smallvec::SmallVec;

use crate::field::PlotField;

/// Errors returned when building a [`Series`] from paired inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesError {
    /// X and Y inputs have different lengths.
    MismatchedLengths {
        /// Number of X values provided.
        x: usize,
        /// Number of Y values provided.
        y: usize,
    },
}

/// One data point: a small map from field tags to numeric values.
///
/// Records carry at most a handful of fields, so storage is inline.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Record {
    fields: SmallVec<[(PlotField, f64); 2]>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// The common two-field point record.
    pub fn xy(x: f64, y: f64) -> Self {
        Self::new().with(PlotField::X, x).with(PlotField::Y, y)
    }

    /// Adds or replaces one field value.
    pub fn with(mut self, field: PlotField, value: f64) -> Self {
        self.set(field, value);
        self
    }

    /// Sets one field value, replacing any previous value for the same tag.
    pub fn set(&mut self, field: PlotField, value: f64) {
        for entry in &mut self.fields {
            if entry.0 == field {
                entry.1 = value;
                return;
            }
        }
        self.fields.push((field, value));
    }

    /// The value held for `field`, if any.
    pub fn get(&self, field: PlotField) -> Option<f64> {
        self.fields
            .iter()
            .find(|(tag, _)| *tag == field)
            .map(|(_, value)| *value)
    }
}

/// An ordered sequence of records backing one or more rendered plots.
///
/// A series is built once at setup time and immutable thereafter. Lookups
/// answer out-of-range indices with an absent value, never a default.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    records: Vec<Record>,
}

impl Series {
    /// Builds a series from prepared records.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Builds single-field records from a value slice.
    pub fn from_values(field: PlotField, values: &[f64]) -> Self {
        Self {
            records: values
                .iter()
                .map(|&value| Record::new().with(field, value))
                .collect(),
        }
    }

    /// Builds X/Y records from points.
    pub fn from_points(points: &[Point]) -> Self {
        Self {
            records: points.iter().map(|p| Record::xy(p.x, p.y)).collect(),
        }
    }

    /// Builds X/Y records from paired slices.
    ///
    /// Fails instead of truncating when the slices disagree on length.
    pub fn from_xy(xs: &[f64], ys: &[f64]) -> Result<Self, SeriesError> {
        if xs.len() != ys.len() {
            return Err(SeriesError::MismatchedLengths {
                x: xs.len(),
                y: ys.len(),
            });
        }
        Ok(Self {
            records: xs.iter().zip(ys).map(|(&x, &y)| Record::xy(x, y)).collect(),
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the series holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// One record by index.
    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// One field of one record.
    ///
    /// Absent for out-of-range indices and for fields the record does not
    /// carry.
    pub fn value(&self, field: PlotField, index: usize) -> Option<f64> {
        self.records.get(index)?.get(field)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;

    #[test]
    fn value_is_absent_at_and_past_the_length() {
        let series = Series::from_values(PlotField::SliceWidth, &[20.0, 30.0, 60.0]);
        assert_eq!(series.value(PlotField::SliceWidth, 1), Some(30.0));
        assert_eq!(series.value(PlotField::SliceWidth, 3), None);
        assert_eq!(series.value(PlotField::SliceWidth, 100), None);
    }

    #[test]
    fn missing_fields_are_absent_not_zero() {
        let series = Series::from_values(PlotField::Y, &[1.5]);
        assert_eq!(series.value(PlotField::X, 0), None);
        assert_eq!(series.value(PlotField::Y, 0), Some(1.5));
    }

    #[test]
    fn from_xy_rejects_mismatched_lengths() {
        let result = Series::from_xy(&[1.0, 2.0], &[3.0]);
        assert_eq!(result, Err(SeriesError::MismatchedLengths { x: 2, y: 1 }));
    }

    #[test]
    fn from_points_carries_both_fields() {
        let series = Series::from_points(&[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        assert_eq!(series.len(), 2);
        assert_eq!(series.value(PlotField::X, 1), Some(3.0));
        assert_eq!(series.value(PlotField::Y, 1), Some(4.0));
    }

    #[test]
    fn set_replaces_an_existing_field() {
        let mut record = Record::xy(1.0, 2.0);
        record.set(PlotField::Y, 9.0);
        assert_eq!(record.get(PlotField::Y), Some(9.0));
        assert_eq!(record.get(PlotField::X), Some(1.0));
    }

    #[test]
    fn from_records_preserves_order() {
        let series = Series::from_records(vec![Record::xy(0.0, 1.0), Record::xy(1.0, 2.0)]);
        assert_eq!(series.record(0).and_then(|r| r.get(PlotField::Y)), Some(1.0));
        assert_eq!(series.record(1).and_then(|r| r.get(PlotField::Y)), Some(2.0));
    }
}
