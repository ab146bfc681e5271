//! Nearest-timestamp matching of two irregular time series.
//!
//! Observation and model output rarely share exact timestamps. Matching
//! pairs samples whose times agree within a tolerance; unmatched samples
//! are excluded, never interpolated.

use super::median_interval;

/// Index correspondences between two matched time series.
///
/// `times[k]` is the timestamp of match `k` (taken from the left
/// series), with `left[k]` / `right[k]` indexing the original arrays.
/// Zero matches is a valid outcome and means no comparison is possible.
#[derive(Clone, Debug, Default)]
pub struct TimeMatch {
    /// Matched timestamps (left series convention)
    pub times: Vec<f64>,
    /// Indices into the left series
    pub left: Vec<usize>,
    /// Indices into the right series
    pub right: Vec<usize>,
}

impl TimeMatch {
    /// Number of matched pairs.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when no timestamps matched.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Pull the matched values out of the two original value arrays.
    pub fn select(&self, left_values: &[f64], right_values: &[f64]) -> (Vec<f64>, Vec<f64>) {
        let l = self.left.iter().map(|&i| left_values[i]).collect();
        let r = self.right.iter().map(|&i| right_values[i]).collect();
        (l, r)
    }
}

/// Match two ascending timestamp arrays at a fixed tolerance.
///
/// Greedy in time order: each candidate pair within `tolerance` seconds
/// is committed only if neither side's next sample sits strictly closer,
/// then both cursors advance, so every sample is used at most once and
/// always against its nearest counterpart. Disjoint series produce an
/// empty match.
pub fn time_match(left: &[f64], right: &[f64], tolerance: f64) -> TimeMatch {
    let mut m = TimeMatch::default();
    let (mut i, mut j) = (0usize, 0usize);

    while i < left.len() && j < right.len() {
        let dt = left[i] - right[j];
        if dt.abs() <= tolerance {
            if j + 1 < right.len() && (left[i] - right[j + 1]).abs() < dt.abs() {
                j += 1;
            } else if i + 1 < left.len() && (left[i + 1] - right[j]).abs() < dt.abs() {
                i += 1;
            } else {
                m.times.push(left[i]);
                m.left.push(i);
                m.right.push(j);
                i += 1;
                j += 1;
            }
        } else if dt < 0.0 {
            i += 1;
        } else {
            j += 1;
        }
    }
    m
}

/// Default matching tolerance: the tighter of the two series' native
/// sampling intervals, falling back to zero (exact matches only) when
/// neither series has two samples.
pub fn native_tolerance(left: &[f64], right: &[f64]) -> f64 {
    let l = median_interval(left);
    let r = median_interval(right);
    match (l, r) {
        (Some(a), Some(b)) => a.min(b) / 2.0,
        (Some(a), None) => a / 2.0,
        (None, Some(b)) => b / 2.0,
        (None, None) => 0.0,
    }
}
