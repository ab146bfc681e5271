//! Coordinate and unit transformations for directional spectra.
//!
//! All transforms are pure: they return a new spectrum and leave the
//! input untouched. Only the direction axis ever changes shape; time
//! and frequency axes pass through.
//!
//! # Half-plane boundary policy
//!
//! [`DirectionalSpectrum::chop_half_plane`] retains a direction bin when
//! its adjusted bearing falls in the closed interval [0°, 180°]. A bin
//! landing exactly on either boundary is kept. This is the one place
//! that policy is defined; call sites do not get to re-decide it.

use ndarray::{Array3, Axis};

use super::DirectionalSpectrum;
use crate::types::{AngleConvention, Degrees, EnergyUnits};

/// Ratio converting per-radian densities to per-degree.
const RAD_PER_DEG: f64 = std::f64::consts::PI / 180.0;

impl DirectionalSpectrum {
    /// Rotate a grid-relative spectrum to true-north geographic bearings
    /// by the model grid's azimuth.
    ///
    /// Direction bins are shifted, wrapped to [0, 360), re-sorted
    /// ascending, and the energy array permuted to match.
    ///
    /// # Panics
    ///
    /// Debug-panics if the spectrum is already in geographic convention.
    pub fn to_geographic(&self, grid_azimuth: Degrees) -> Self {
        debug_assert_eq!(
            self.convention(),
            AngleConvention::GridRelative,
            "spectrum is already geographic"
        );
        self.rotated(grid_azimuth, AngleConvention::TrueNorth)
    }

    /// Inverse of [`to_geographic`](Self::to_geographic): rotate
    /// geographic bearings back into the model grid's frame.
    ///
    /// # Panics
    ///
    /// Debug-panics if the spectrum is already grid-relative.
    pub fn to_grid_relative(&self, grid_azimuth: Degrees) -> Self {
        debug_assert_eq!(
            self.convention(),
            AngleConvention::TrueNorth,
            "spectrum is already grid-relative"
        );
        self.rotated(-grid_azimuth, AngleConvention::GridRelative)
    }

    /// Shift every direction bin by `offset`, re-sort, and permute the
    /// energy direction axis accordingly.
    fn rotated(&self, offset: Degrees, convention: AngleConvention) -> Self {
        let shifted: Vec<Degrees> = self
            .direction_bins()
            .iter()
            .map(|&d| d + offset)
            .collect();

        let mut order: Vec<usize> = (0..shifted.len()).collect();
        order.sort_by(|&a, &b| {
            shifted[a]
                .value()
                .partial_cmp(&shifted[b].value())
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let direction_bins: Vec<Degrees> = order.iter().map(|&i| shifted[i]).collect();

        let (nt, nf, nd) = self.energy().dim();
        let mut energy = Array3::zeros((nt, nf, nd));
        for (new_idx, &old_idx) in order.iter().enumerate() {
            energy
                .index_axis_mut(Axis(2), new_idx)
                .assign(&self.energy().index_axis(Axis(2), old_idx));
        }

        Self::new(
            energy,
            self.frequency_bins().to_vec(),
            direction_bins,
            convention,
            self.units(),
        )
        .expect("rotation preserves spectrum invariants")
    }

    /// Convert the energy density to the target directional units.
    ///
    /// Per-radian to per-degree multiplies the energy by π/180 (the
    /// degree sits on the denominator); the inverse divides. The units
    /// metadata guarantees the scale is applied exactly once: converting
    /// to the units the spectrum already has is a clone.
    pub fn with_units(&self, target: EnergyUnits) -> Self {
        if self.units() == target {
            return self.clone();
        }
        let scale = match target {
            EnergyUnits::PerDegree => RAD_PER_DEG,
            EnergyUnits::PerRadian => 1.0 / RAD_PER_DEG,
        };
        Self::new(
            self.energy() * scale,
            self.frequency_bins().to_vec(),
            self.direction_bins().to_vec(),
            self.convention(),
            target,
        )
        .expect("unit scaling preserves spectrum invariants")
    }

    /// Restrict the spectrum to the half plane [0°, 180°] after adding
    /// `angle_adjust` to every bin (see the module-level boundary
    /// policy). Retained bins keep their original bearings; the energy
    /// array is compacted to the surviving directions.
    pub fn chop_half_plane(&self, angle_adjust: Degrees) -> Self {
        let keep: Vec<usize> = self
            .direction_bins()
            .iter()
            .enumerate()
            .filter(|(_, &d)| (d + angle_adjust).value() <= 180.0)
            .map(|(i, _)| i)
            .collect();

        let direction_bins: Vec<Degrees> =
            keep.iter().map(|&i| self.direction_bins()[i]).collect();

        let (nt, nf, _) = self.energy().dim();
        let mut energy = Array3::zeros((nt, nf, keep.len()));
        for (new_idx, &old_idx) in keep.iter().enumerate() {
            energy
                .index_axis_mut(Axis(2), new_idx)
                .assign(&self.energy().index_axis(Axis(2), old_idx));
        }

        Self::new(
            energy,
            self.frequency_bins().to_vec(),
            direction_bins,
            self.convention(),
            self.units(),
        )
        .expect("chop preserves spectrum invariants")
    }
}
