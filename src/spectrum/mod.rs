//! Directional wave spectra.
//!
//! A [`DirectionalSpectrum`] is energy density over (time, frequency,
//! direction), with its angular convention and directional density
//! carried as metadata so transformations can never be applied twice or
//! to the wrong convention.

mod transform;

use ndarray::{Array3, ArrayView2, Axis};
use thiserror::Error;

use crate::types::{AngleConvention, Degrees, EnergyUnits};

/// Error type for spectrum construction.
#[derive(Debug, Error)]
pub enum SpectrumError {
    /// Energy array shape does not match the bin axes
    #[error(
        "energy shape ({nt}, {nf}, {nd}) does not match {freq} frequency and {dir} direction bins"
    )]
    ShapeMismatch {
        nt: usize,
        nf: usize,
        nd: usize,
        freq: usize,
        dir: usize,
    },

    /// Bins must be strictly ascending (and therefore unique)
    #[error("{axis} bins are not strictly ascending at index {index}")]
    UnsortedBins { axis: &'static str, index: usize },

    /// Spectral energy density cannot be negative
    #[error("negative energy {value} at (time {t}, frequency {f}, direction {d})")]
    NegativeEnergy {
        t: usize,
        f: usize,
        d: usize,
        value: f64,
    },
}

/// Directional wave energy density over (time, frequency, direction).
///
/// Invariants checked at construction and preserved by every transform:
/// frequency bins strictly ascending (Hz), direction bins strictly
/// ascending and unique, energy non-negative.
#[derive(Clone, Debug)]
pub struct DirectionalSpectrum {
    energy: Array3<f64>,
    frequency_bins: Vec<f64>,
    direction_bins: Vec<Degrees>,
    convention: AngleConvention,
    units: EnergyUnits,
}

impl DirectionalSpectrum {
    /// Create a spectrum, validating shape and invariants.
    pub fn new(
        energy: Array3<f64>,
        frequency_bins: Vec<f64>,
        direction_bins: Vec<Degrees>,
        convention: AngleConvention,
        units: EnergyUnits,
    ) -> Result<Self, SpectrumError> {
        let (nt, nf, nd) = energy.dim();
        if nf != frequency_bins.len() || nd != direction_bins.len() {
            return Err(SpectrumError::ShapeMismatch {
                nt,
                nf,
                nd,
                freq: frequency_bins.len(),
                dir: direction_bins.len(),
            });
        }
        for i in 1..frequency_bins.len() {
            if frequency_bins[i] <= frequency_bins[i - 1] {
                return Err(SpectrumError::UnsortedBins {
                    axis: "frequency",
                    index: i,
                });
            }
        }
        for i in 1..direction_bins.len() {
            if direction_bins[i].value() <= direction_bins[i - 1].value() {
                return Err(SpectrumError::UnsortedBins {
                    axis: "direction",
                    index: i,
                });
            }
        }
        if let Some(((t, f, d), &value)) =
            energy.indexed_iter().find(|(_, &v)| v < 0.0)
        {
            return Err(SpectrumError::NegativeEnergy { t, f, d, value });
        }

        Ok(Self {
            energy,
            frequency_bins,
            direction_bins,
            convention,
            units,
        })
    }

    /// Number of timestamps.
    pub fn n_times(&self) -> usize {
        self.energy.len_of(Axis(0))
    }

    /// Number of frequency bins.
    pub fn n_frequencies(&self) -> usize {
        self.frequency_bins.len()
    }

    /// Number of direction bins.
    pub fn n_directions(&self) -> usize {
        self.direction_bins.len()
    }

    /// Frequency bins in Hz, ascending.
    pub fn frequency_bins(&self) -> &[f64] {
        &self.frequency_bins
    }

    /// Direction bins, ascending.
    pub fn direction_bins(&self) -> &[Degrees] {
        &self.direction_bins
    }

    /// Full energy array, indexed (time, frequency, direction).
    pub fn energy(&self) -> &Array3<f64> {
        &self.energy
    }

    /// Energy slice for one timestamp, indexed (frequency, direction).
    pub fn at_time(&self, t: usize) -> ArrayView2<'_, f64> {
        self.energy.index_axis(Axis(0), t)
    }

    /// Which directional convention the bins are expressed in.
    pub fn convention(&self) -> AngleConvention {
        self.convention
    }

    /// Which directional density the energy is expressed in.
    pub fn units(&self) -> EnergyUnits {
        self.units
    }
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;

    /// Uniform-bin spectrum with all energy in a single
    /// (frequency, direction) cell at every timestamp.
    pub fn single_bin_spectrum(
        n_times: usize,
        value: f64,
        peak_freq_idx: usize,
        peak_dir_idx: usize,
    ) -> DirectionalSpectrum {
        let frequency_bins: Vec<f64> = (0..10).map(|i| 0.05 + i as f64 * 0.01).collect();
        let direction_bins: Vec<Degrees> =
            (0..72).map(|i| Degrees::new(i as f64 * 5.0)).collect();

        let mut energy = Array3::zeros((n_times, frequency_bins.len(), direction_bins.len()));
        for t in 0..n_times {
            energy[[t, peak_freq_idx, peak_dir_idx]] = value;
        }
        DirectionalSpectrum::new(
            energy,
            frequency_bins,
            direction_bins,
            AngleConvention::TrueNorth,
            EnergyUnits::PerDegree,
        )
        .unwrap()
    }
}
