//! Dense spatial output grid for map-style products.

use ndarray::{Array1, Array3};
use thiserror::Error;

use crate::types::Degrees;

/// Error type for field grid construction.
#[derive(Debug, Error)]
#[error("field variable '{variable}' has shape {actual:?}, expected {expected:?}")]
pub struct FieldShapeError {
    /// Offending variable name
    pub variable: &'static str,
    /// Shape found
    pub actual: (usize, usize, usize),
    /// Shape implied by the axes
    pub expected: (usize, usize, usize),
}

/// Wave and bathymetry parameters over (time, y, x) for one cycle.
///
/// Produced once per simulation and not owned by any station. Axis
/// order matches the output file schema: alongshore (y) before
/// cross-shore (x).
#[derive(Clone, Debug)]
pub struct FieldGrid {
    /// Timestamps (epoch seconds)
    pub times: Vec<f64>,
    /// Cross-shore FRF coordinates (m)
    pub x_frf: Array1<f64>,
    /// Alongshore FRF coordinates (m)
    pub y_frf: Array1<f64>,
    /// Significant wave height (m), (time, y, x)
    pub wave_hs: Array3<f64>,
    /// Peak period (s), (time, y, x)
    pub wave_tp: Array3<f64>,
    /// Mean direction (degrees true north), (time, y, x)
    pub wave_dm: Array3<f64>,
    /// Bathymetric elevation (m, positive down), (time, y, x)
    pub bathymetry: Array3<f64>,
    /// Azimuth of the model grid's x-axis from true north
    pub grid_azimuth: Degrees,
}

impl FieldGrid {
    /// Create a field grid, validating every variable against the axes.
    pub fn new(
        times: Vec<f64>,
        x_frf: Array1<f64>,
        y_frf: Array1<f64>,
        wave_hs: Array3<f64>,
        wave_tp: Array3<f64>,
        wave_dm: Array3<f64>,
        bathymetry: Array3<f64>,
        grid_azimuth: Degrees,
    ) -> Result<Self, FieldShapeError> {
        let expected = (times.len(), y_frf.len(), x_frf.len());
        for (variable, array) in [
            ("waveHs", &wave_hs),
            ("waveTp", &wave_tp),
            ("waveDm", &wave_dm),
            ("bathymetry", &bathymetry),
        ] {
            if array.dim() != expected {
                return Err(FieldShapeError {
                    variable,
                    actual: array.dim(),
                    expected,
                });
            }
        }
        Ok(Self {
            times,
            x_frf,
            y_frf,
            wave_hs,
            wave_tp,
            wave_dm,
            bathymetry,
            grid_azimuth,
        })
    }

    /// Number of timestamps.
    pub fn n_times(&self) -> usize {
        self.times.len()
    }

    /// Spatial shape (ny, nx).
    pub fn spatial_shape(&self) -> (usize, usize) {
        (self.y_frf.len(), self.x_frf.len())
    }
}
