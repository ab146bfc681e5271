//! Bin averaging of raw streams onto a canonical time grid.
//!
//! Water level is scalar-averaged; wind is vector-averaged so that
//! directions near the 0/360 boundary do not cancel.

use super::{TimeGrid, TimeSeries, WindSeries};
use crate::types::Degrees;

/// Average scalar samples into half-interval bins around each grid
/// point. Grid points in a data gap come out as NaN.
pub fn scalar_average(series: &TimeSeries, grid: &TimeGrid) -> Vec<f64> {
    let half = grid.interval() / 2.0;
    grid.times()
        .iter()
        .map(|&t| {
            let mut sum = 0.0;
            let mut n = 0usize;
            for (&st, &sv) in series.times().iter().zip(series.values()) {
                if (st - t).abs() <= half {
                    sum += sv;
                    n += 1;
                }
            }
            if n == 0 { f64::NAN } else { sum / n as f64 }
        })
        .collect()
}

/// Vector-average wind onto a grid.
///
/// Speed and direction are decomposed into east/north components,
/// averaged per bin, and recombined. Returns parallel speed and
/// direction arrays; empty bins are NaN in both.
pub fn vector_average(wind: &WindSeries, grid: &TimeGrid) -> (Vec<f64>, Vec<f64>) {
    let half = grid.interval() / 2.0;
    let mut speeds = Vec::with_capacity(grid.len());
    let mut directions = Vec::with_capacity(grid.len());

    for &t in grid.times() {
        let mut east = 0.0;
        let mut north = 0.0;
        let mut n = 0usize;
        for ((&st, &speed), &dir) in wind
            .times()
            .iter()
            .zip(wind.speeds())
            .zip(wind.directions())
        {
            if (st - t).abs() <= half {
                east += speed * dir.sin();
                north += speed * dir.cos();
                n += 1;
            }
        }
        if n == 0 {
            speeds.push(f64::NAN);
            directions.push(f64::NAN);
        } else {
            let east = east / n as f64;
            let north = north / n as f64;
            speeds.push(east.hypot(north));
            directions.push(Degrees::new(east.atan2(north).to_degrees()).value());
        }
    }
    (speeds, directions)
}
