// Copyright 2026 the Plotfeed Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plot identities.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;

/// The opaque label distinguishing one rendered plot from another.
///
/// Several plots can share a single data source; the source tells them apart
/// by this label. Per-plot derivation rules dispatch on label equality, never
/// on the plot's position or concrete type.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlotId(Cow<'static, str>);

impl PlotId {
    /// Creates an identity from a static label.
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    /// Creates an identity from an owned label.
    pub fn new(name: impl Into<String>) -> Self {
        Self(Cow::Owned(name.into()))
    }

    /// The identity label.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for PlotId {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl core::fmt::Display for PlotId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::String;

    use super::*;

    #[test]
    fn borrowed_and_owned_labels_compare_equal() {
        let borrowed = PlotId::from_static("Green Plot");
        let owned = PlotId::new(String::from("Green Plot"));
        assert_eq!(borrowed, owned);
        assert_ne!(borrowed, PlotId::from_static("Blue Plot"));
    }

    #[test]
    fn display_is_the_label() {
        let id = PlotId::from_static("Bar Plot 1");
        assert_eq!(alloc::format!("{id}"), "Bar Plot 1");
        assert_eq!(id.name(), "Bar Plot 1");
    }
}
