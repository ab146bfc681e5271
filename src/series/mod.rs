//! Time series handling: canonical grids, matching, and resampling.
//!
//! Raw instrument and model feeds arrive with irregular native
//! timestamps. This module provides the pieces that bring them onto the
//! simulation cycle's footing:
//!
//! - [`TimeSeries`] / [`WindSeries`]: validated raw streams
//! - [`TimeGrid`]: canonical per-stream time grids clipped to the
//!   simulation window
//! - [`time_match`]: nearest-timestamp pairing of two irregular series
//! - [`scalar_average`] / [`vector_average`]: bin averaging onto a grid
//!
//! All timestamps are f64 seconds since the Unix epoch.

mod grid;
mod matcher;
mod resample;

pub use grid::{Gap, InsufficientDataError, TimeGrid, TimeGrids, build_time_grids};
pub use matcher::{TimeMatch, native_tolerance, time_match};
pub use resample::{scalar_average, vector_average};

use thiserror::Error;

use crate::types::{Degrees, SimulationWindow};

/// Error type for time series construction.
#[derive(Debug, Error)]
pub enum SeriesError {
    /// Parallel arrays of different lengths
    #[error("times has {times} entries but values has {values}")]
    LengthMismatch { times: usize, values: usize },

    /// Timestamps not strictly increasing
    #[error("non-monotonic timestamp at index {index}")]
    NonMonotonic { index: usize },
}

/// An ordered scalar time series.
///
/// Timestamps are strictly increasing; this is checked at construction
/// so downstream alignment code can rely on it.
#[derive(Clone, Debug)]
pub struct TimeSeries {
    times: Vec<f64>,
    values: Vec<f64>,
    /// Optional name/identifier (station, instrument)
    pub name: Option<String>,
}

impl TimeSeries {
    /// Create a series from parallel arrays of epoch times and values.
    ///
    /// # Errors
    ///
    /// - `LengthMismatch` if the arrays differ in length
    /// - `NonMonotonic` if timestamps are not strictly increasing
    pub fn new(times: Vec<f64>, values: Vec<f64>) -> Result<Self, SeriesError> {
        if times.len() != values.len() {
            return Err(SeriesError::LengthMismatch {
                times: times.len(),
                values: values.len(),
            });
        }
        for i in 1..times.len() {
            if times[i] <= times[i - 1] {
                return Err(SeriesError::NonMonotonic { index: i });
            }
        }
        Ok(Self {
            times,
            values,
            name: None,
        })
    }

    /// Attach a name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Timestamps (epoch seconds).
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Values, parallel to [`times`](Self::times).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Samples falling inside the window (inclusive), as a new series.
    pub fn clip(&self, window: &SimulationWindow) -> Self {
        let mut times = Vec::new();
        let mut values = Vec::new();
        for (&t, &v) in self.times.iter().zip(&self.values) {
            if window.contains(t) {
                times.push(t);
                values.push(v);
            }
        }
        Self {
            times,
            values,
            name: self.name.clone(),
        }
    }

    /// Native sampling interval, estimated as the median of consecutive
    /// timestamp differences. `None` for series with fewer than two
    /// samples.
    pub fn native_interval(&self) -> Option<f64> {
        median_interval(&self.times)
    }
}

/// A wind stream: speed plus direction at each timestamp.
///
/// Kept separate from [`TimeSeries`] because averaging wind requires
/// vector (component-wise) treatment of the direction.
#[derive(Clone, Debug)]
pub struct WindSeries {
    times: Vec<f64>,
    speeds: Vec<f64>,
    directions: Vec<Degrees>,
}

impl WindSeries {
    /// Create a wind series from parallel arrays.
    ///
    /// # Errors
    ///
    /// Same conditions as [`TimeSeries::new`].
    pub fn new(
        times: Vec<f64>,
        speeds: Vec<f64>,
        directions: Vec<Degrees>,
    ) -> Result<Self, SeriesError> {
        if times.len() != speeds.len() || times.len() != directions.len() {
            return Err(SeriesError::LengthMismatch {
                times: times.len(),
                values: speeds.len().min(directions.len()),
            });
        }
        for i in 1..times.len() {
            if times[i] <= times[i - 1] {
                return Err(SeriesError::NonMonotonic { index: i });
            }
        }
        Ok(Self {
            times,
            speeds,
            directions,
        })
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check if the series is empty.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Timestamps (epoch seconds).
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Wind speeds.
    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    /// Wind directions.
    pub fn directions(&self) -> &[Degrees] {
        &self.directions
    }
}

/// Median of consecutive differences of a sorted timestamp array.
pub(crate) fn median_interval(times: &[f64]) -> Option<f64> {
    if times.len() < 2 {
        return None;
    }
    let mut diffs: Vec<f64> = times.windows(2).map(|w| w[1] - w[0]).collect();
    diffs.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    Some(diffs[diffs.len() / 2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_series_validation() {
        assert!(TimeSeries::new(vec![0.0, 1.0, 2.0], vec![1.0, 2.0, 3.0]).is_ok());

        let err = TimeSeries::new(vec![0.0, 1.0], vec![1.0]).unwrap_err();
        assert!(matches!(err, SeriesError::LengthMismatch { .. }));

        let err = TimeSeries::new(vec![0.0, 2.0, 1.0], vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, SeriesError::NonMonotonic { index: 2 }));
    }

    #[test]
    fn test_clip() {
        let start = Utc.with_ymd_and_hms(2018, 10, 3, 0, 0, 0).unwrap();
        let window = crate::types::SimulationWindow::from_duration_hours(start, 1);
        let t0 = window.start_epoch();

        let series = TimeSeries::new(
            vec![t0 - 600.0, t0, t0 + 1800.0, t0 + 7200.0],
            vec![1.0, 2.0, 3.0, 4.0],
        )
        .unwrap();

        let clipped = series.clip(&window);
        assert_eq!(clipped.len(), 2);
        assert_eq!(clipped.values(), &[2.0, 3.0]);
    }

    #[test]
    fn test_native_interval_is_median() {
        // one long gap should not skew the estimate
        let series =
            TimeSeries::new(vec![0.0, 600.0, 1200.0, 1800.0, 9000.0], vec![0.0; 5]).unwrap();
        assert_eq!(series.native_interval(), Some(600.0));
    }
}
