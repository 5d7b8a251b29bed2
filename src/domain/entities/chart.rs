//! Chart input and output values.

use serde::Serialize;

/// Label used for the synthetic slice that absorbs small or overflowing values.
pub const OTHER_LABEL: &str = "Other";

/// A category label and its magnitude, as reported by the backend.
///
/// Magnitudes are expected to be non-negative. Non-finite values are
/// tolerated here and dropped by [`crate::analytics::reduce_slices`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledValue {
    pub name: String,
    pub value: f64,
}

impl LabeledValue {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One wedge of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub name: String,
    pub value: f64,
    pub percentage: f64,
}

impl Slice {
    pub fn new(name: impl Into<String>, value: f64, percentage: f64) -> Self {
        Self {
            name: name.into(),
            value,
            percentage,
        }
    }

    /// Returns true for the synthetic "Other" slice.
    pub fn is_other(&self) -> bool {
        self.name == OTHER_LABEL
    }
}

/// Bounds applied when reducing values to pie slices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartOptions {
    /// Maximum number of slices returned, "Other" included.
    pub max_slices: usize,
    /// Entries below this share of the total are grouped into "Other".
    pub min_percent: f64,
}

impl ChartOptions {
    pub const DEFAULT_MAX_SLICES: usize = 10;
    pub const DEFAULT_MIN_PERCENT: f64 = 2.0;

    pub fn new(max_slices: usize, min_percent: f64) -> Self {
        Self {
            max_slices,
            min_percent,
        }
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_SLICES, Self::DEFAULT_MIN_PERCENT)
    }
}
