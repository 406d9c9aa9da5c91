//! TimeSeries data structure for representing temporal data.

use crate::error::{ForecastError, Result};
use chrono::{DateTime, Duration, TimeZone, Utc};

/// A univariate time series with timestamps and values.
///
/// Timestamps and values always have the same length; this is enforced
/// at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    timestamps: Vec<DateTime<Utc>>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Create a time series from timestamps and values.
    ///
    /// Fails with [`ForecastError::DimensionMismatch`] if the two vectors
    /// have different lengths.
    pub fn new(timestamps: Vec<DateTime<Utc>>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: timestamps.len(),
                got: values.len(),
            });
        }
        Ok(Self { timestamps, values })
    }

    /// Create a time series from raw values, synthesizing hourly
    /// timestamps starting at the epoch.
    ///
    /// Convenience for callers that only have observations and no
    /// calendar information.
    pub fn from_values(values: Vec<f64>) -> Self {
        let base = Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap();
        let timestamps = (0..values.len())
            .map(|i| base + Duration::hours(i as i64))
            .collect();
        Self { timestamps, values }
    }

    /// Get the number of observations.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get timestamps.
    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    /// Get values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Check whether any value is NaN or infinite.
    pub fn has_missing(&self) -> bool {
        self.values.iter().any(|v| !v.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn make_timestamps(n: usize) -> Vec<DateTime<Utc>> {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        (0..n).map(|i| base + Duration::hours(i as i64)).collect()
    }

    #[test]
    fn new_validates_lengths() {
        let ts = TimeSeries::new(make_timestamps(3), vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(ts.len(), 3);
        assert!(!ts.is_empty());
        assert_eq!(ts.values(), &[1.0, 2.0, 3.0]);

        let err = TimeSeries::new(make_timestamps(3), vec![1.0, 2.0]);
        assert!(matches!(
            err,
            Err(ForecastError::DimensionMismatch {
                expected: 3,
                got: 2
            })
        ));
    }

    #[test]
    fn from_values_synthesizes_hourly_timestamps() {
        let ts = TimeSeries::from_values(vec![1.0, 2.0, 3.0]);
        assert_eq!(ts.len(), 3);
        assert_eq!(
            ts.timestamps()[1] - ts.timestamps()[0],
            Duration::hours(1)
        );
    }

    #[test]
    fn empty_series() {
        let ts = TimeSeries::new(vec![], vec![]).unwrap();
        assert!(ts.is_empty());
        assert_eq!(ts.len(), 0);
    }

    #[test]
    fn has_missing_detects_non_finite_values() {
        let ts = TimeSeries::from_values(vec![1.0, 2.0, 3.0]);
        assert!(!ts.has_missing());

        let ts = TimeSeries::from_values(vec![1.0, f64::NAN, 3.0]);
        assert!(ts.has_missing());

        let ts = TimeSeries::from_values(vec![1.0, f64::INFINITY]);
        assert!(ts.has_missing());
    }
}
