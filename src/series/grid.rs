//! Canonical time grid construction (pre-processing alignment).
//!
//! Each input category (wave, wind, water level) gets its own grid at
//! the stream's native sampling interval, spanning at least the
//! simulation window. Stretches of the grid with no native sample
//! nearby are recorded as data-availability gaps rather than silently
//! dropped.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::{TimeSeries, WindSeries, median_interval};
use crate::types::SimulationWindow;

/// A required stream had no usable samples inside the simulation
/// window: either none at all, or only coincident timestamps from which
/// no sampling interval can be derived.
///
/// Unrecoverable for the cycle: downstream steps assume non-empty grids,
/// so this must propagate to the caller before anything is written.
#[derive(Debug, Error)]
#[error("no usable '{stream}' samples between {start} and {end}")]
pub struct InsufficientDataError {
    /// Stream category ("wave", "wind", "water level")
    pub stream: String,
    /// Window start
    pub start: DateTime<Utc>,
    /// Window end
    pub end: DateTime<Utc>,
}

/// A stretch of grid timestamps with no native sample available.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gap {
    /// First grid timestamp in the gap (epoch seconds)
    pub start: f64,
    /// Last grid timestamp in the gap (epoch seconds)
    pub end: f64,
}

/// Canonical timestamps for one input stream over a simulation window.
///
/// The grid starts at or before the window start and ends at or after
/// the window end, stepped by the stream's native sampling interval.
#[derive(Clone, Debug)]
pub struct TimeGrid {
    times: Vec<f64>,
    interval: f64,
    gaps: Vec<Gap>,
}

impl TimeGrid {
    /// Build the canonical grid for one stream.
    ///
    /// The native interval is the median spacing of the samples inside
    /// the window; a stream with a single in-window sample gets a
    /// single-step grid spanning the whole window. Grid points further
    /// than half an interval from every native sample are recorded as
    /// [`Gap`]s.
    ///
    /// # Errors
    ///
    /// [`InsufficientDataError`] if no native sample falls inside the
    /// window, or if the in-window timestamps yield no positive
    /// sampling interval (duplicate-heavy raw gauge feeds).
    pub fn build(
        stream: &str,
        window: &SimulationWindow,
        native_times: &[f64],
    ) -> Result<Self, InsufficientDataError> {
        let inside: Vec<f64> = native_times
            .iter()
            .copied()
            .filter(|&t| window.contains(t))
            .collect();
        if inside.is_empty() {
            return Err(InsufficientDataError {
                stream: stream.to_string(),
                start: window.start,
                end: window.end,
            });
        }

        let interval = median_interval(&inside).unwrap_or_else(|| window.duration_seconds());
        // a non-positive interval would stall the stepping loops below
        if interval <= 0.0 {
            return Err(InsufficientDataError {
                stream: stream.to_string(),
                start: window.start,
                end: window.end,
            });
        }

        // Anchor on the first in-window sample and step back so the grid
        // covers the window start, then forward until it covers the end.
        let mut t0 = inside[0];
        while t0 > window.start_epoch() {
            t0 -= interval;
        }
        let mut times = Vec::new();
        let mut t = t0;
        while t < window.end_epoch() {
            times.push(t);
            t += interval;
        }
        times.push(t);

        let gaps = find_gaps(&times, &inside, interval, window);

        Ok(Self {
            times,
            interval,
            gaps,
        })
    }

    /// Grid timestamps (epoch seconds, ascending).
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// A grid is never empty once built, but mirror the usual API.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Grid step (seconds).
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Data-availability gaps detected at build time.
    pub fn gaps(&self) -> &[Gap] {
        &self.gaps
    }
}

/// In-window grid points without a native sample within half an
/// interval, merged into contiguous gaps. The padding points outside
/// the window (there to satisfy the span requirement) are not gaps.
fn find_gaps(grid: &[f64], native: &[f64], interval: f64, window: &SimulationWindow) -> Vec<Gap> {
    let half = interval / 2.0 + 1e-6;
    let mut gaps: Vec<Gap> = Vec::new();
    let mut j = 0usize;
    let mut open: Option<Gap> = None;

    for &t in grid {
        if !window.contains(t) {
            continue;
        }
        while j + 1 < native.len() && native[j + 1] <= t {
            j += 1;
        }
        // nearest native sample is native[j] or native[j + 1]
        let mut nearest = (native[j] - t).abs();
        if j + 1 < native.len() {
            nearest = nearest.min((native[j + 1] - t).abs());
        }
        if nearest > half {
            open = Some(match open {
                Some(g) => Gap { start: g.start, end: t },
                None => Gap { start: t, end: t },
            });
        } else if let Some(g) = open.take() {
            gaps.push(g);
        }
    }
    if let Some(g) = open {
        gaps.push(g);
    }
    gaps
}

/// One canonical grid per input category.
#[derive(Clone, Debug)]
pub struct TimeGrids {
    /// Grid for the wave spectra stream
    pub wave: TimeGrid,
    /// Grid for the water level stream
    pub water_level: TimeGrid,
    /// Grid for the wind stream
    pub wind: TimeGrid,
}

/// Build the per-category grids for a cycle.
///
/// # Errors
///
/// [`InsufficientDataError`] for the first category with no samples in
/// the window; the error names the offending stream.
pub fn build_time_grids(
    window: &SimulationWindow,
    wave_times: &[f64],
    water_level: &TimeSeries,
    wind: &WindSeries,
) -> Result<TimeGrids, InsufficientDataError> {
    Ok(TimeGrids {
        wave: TimeGrid::build("wave", window, wave_times)?,
        water_level: TimeGrid::build("water level", window, water_level.times())?,
        wind: TimeGrid::build("wind", window, wind.times())?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_window() -> SimulationWindow {
        let start = Utc.with_ymd_and_hms(2018, 10, 3, 0, 0, 0).unwrap();
        SimulationWindow::from_duration_hours(start, 2)
    }

    #[test]
    fn test_grid_spans_window() {
        let window = test_window();
        let t0 = window.start_epoch();
        // hourly samples offset 10 minutes into the window
        let native: Vec<f64> = (0..3).map(|i| t0 + 600.0 + i as f64 * 3600.0).collect();

        let grid = TimeGrid::build("wave", &window, &native).unwrap();
        assert_eq!(grid.interval(), 3600.0);
        assert!(grid.times()[0] <= window.start_epoch());
        assert!(*grid.times().last().unwrap() >= window.end_epoch());
        assert!(grid.gaps().is_empty());
    }

    #[test]
    fn test_no_samples_in_window_errors() {
        let window = test_window();
        let native = vec![window.start_epoch() - 7200.0, window.end_epoch() + 7200.0];

        let err = TimeGrid::build("wave", &window, &native).unwrap_err();
        assert_eq!(err.stream, "wave");
    }

    #[test]
    fn test_gap_recorded_not_dropped() {
        let window = test_window();
        let t0 = window.start_epoch();
        // 10-minute cadence with a 40-minute hole after the third sample
        let mut native: Vec<f64> = (0..3).map(|i| t0 + i as f64 * 600.0).collect();
        native.extend((0..8).map(|i| t0 + 4200.0 + i as f64 * 600.0));

        let grid = TimeGrid::build("wave", &window, &native).unwrap();
        assert_eq!(grid.interval(), 600.0);
        assert_eq!(grid.gaps().len(), 1);
        let gap = grid.gaps()[0];
        assert!(gap.start > t0 + 1200.0 && gap.end < t0 + 4200.0);
        // the grid itself keeps the gap timestamps
        let n_expected = ((window.duration_seconds() / 600.0) as usize) + 1;
        assert!(grid.len() >= n_expected);
    }

    #[test]
    fn test_duplicate_timestamps_rejected() {
        let window = test_window();
        let t0 = window.start_epoch();
        // raw gauge feed stuck on one timestamp: no interval derivable
        let native = vec![t0 + 600.0, t0 + 600.0, t0 + 600.0, t0 + 1200.0];

        let err = TimeGrid::build("wave", &window, &native).unwrap_err();
        assert_eq!(err.stream, "wave");
    }

    #[test]
    fn test_stray_duplicate_tolerated() {
        let window = test_window();
        let t0 = window.start_epoch();
        // one repeated sample in an otherwise clean 10-minute cadence
        let native = vec![
            t0,
            t0 + 600.0,
            t0 + 600.0,
            t0 + 1200.0,
            t0 + 1800.0,
            t0 + 2400.0,
        ];

        let grid = TimeGrid::build("wave", &window, &native).unwrap();
        assert_eq!(grid.interval(), 600.0);
    }

    #[test]
    fn test_single_sample_grid() {
        let window = test_window();
        let native = vec![window.start_epoch() + 3600.0];

        let grid = TimeGrid::build("water level", &window, &native).unwrap();
        assert_eq!(grid.interval(), window.duration_seconds());
        assert!(grid.len() >= 2);
    }
}
