//! Simulation window handling.

use chrono::{DateTime, Duration, Utc};
use std::fmt;

/// The [start, end] interval one simulation cycle covers.
///
/// Raw instrument and model streams carry timestamps as f64 seconds
/// since the Unix epoch; the window converts to that representation
/// where the pipeline needs to compare against them.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use wavepipe::types::SimulationWindow;
///
/// let start = Utc.with_ymd_and_hms(2018, 10, 3, 0, 0, 0).unwrap();
/// let window = SimulationWindow::from_duration_hours(start, 24);
/// assert_eq!(window.duration_seconds(), 86400.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationWindow {
    /// Start of the cycle (UTC).
    pub start: DateTime<Utc>,
    /// End of the cycle (UTC).
    pub end: DateTime<Utc>,
}

impl SimulationWindow {
    /// Create a window from explicit start and end times.
    ///
    /// # Panics
    ///
    /// Panics if `end` is not after `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        assert!(end > start, "simulation window must have positive duration");
        Self { start, end }
    }

    /// Create a window from a start time and a duration in hours.
    pub fn from_duration_hours(start: DateTime<Utc>, hours: u32) -> Self {
        Self::new(start, start + Duration::hours(i64::from(hours)))
    }

    /// Window start as f64 seconds since the Unix epoch.
    #[inline]
    pub fn start_epoch(&self) -> f64 {
        self.start.timestamp() as f64
    }

    /// Window end as f64 seconds since the Unix epoch.
    #[inline]
    pub fn end_epoch(&self) -> f64 {
        self.end.timestamp() as f64
    }

    /// Window duration in seconds.
    #[inline]
    pub fn duration_seconds(&self) -> f64 {
        self.end_epoch() - self.start_epoch()
    }

    /// Check whether an epoch-seconds timestamp falls inside the window.
    #[inline]
    pub fn contains(&self, epoch_seconds: f64) -> bool {
        epoch_seconds >= self.start_epoch() && epoch_seconds <= self.end_epoch()
    }

    /// Date string used to label the cycle's artifacts, e.g.
    /// `2018-10-03T000000Z`.
    pub fn date_string(&self) -> String {
        self.start.format("%Y-%m-%dT%H%M%SZ").to_string()
    }
}

impl fmt::Display for SimulationWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.start, self.end)
    }
}
