//! End-to-end spectral transformation tests.
//!
//! Pushes a synthetic spectrum with known analytic moments through
//! rotate -> unit conversion -> chop -> statistics and checks the bulk
//! parameters against hand-computed values.

use ndarray::Array3;
use wavepipe::spectrum::DirectionalSpectrum;
use wavepipe::types::{AngleConvention, Degrees, EnergyUnits};
use wavepipe::wave_statistics;

const TOL: f64 = 1e-9;

/// 10 frequency bins at 0.01 Hz spacing, 72 direction bins at 5°.
fn synthetic_spectrum(
    energy_value: f64,
    peak_freq_idx: usize,
    peak_dir_idx: usize,
    n_times: usize,
) -> DirectionalSpectrum {
    let frequency_bins: Vec<f64> = (0..10).map(|i| 0.05 + i as f64 * 0.01).collect();
    let direction_bins: Vec<Degrees> = (0..72).map(|i| Degrees::new(i as f64 * 5.0)).collect();

    let mut energy = Array3::zeros((n_times, 10, 72));
    for t in 0..n_times {
        energy[[t, peak_freq_idx, peak_dir_idx]] = energy_value;
    }
    DirectionalSpectrum::new(
        energy,
        frequency_bins,
        direction_bins,
        AngleConvention::GridRelative,
        EnergyUnits::PerRadian,
    )
    .unwrap()
}

#[test]
fn analytic_moments_survive_rotation_and_conversion() {
    // all energy at 0.10 Hz, grid direction 40°
    let energy = 2.0;
    let spec = synthetic_spectrum(energy, 5, 8, 3);

    let azimuth = Degrees::new(70.0);
    let out = spec
        .to_geographic(azimuth)
        .with_units(EnergyUnits::PerDegree);

    let stats = wave_statistics(&out, &[0.0, 1800.0, 3600.0]);

    // m0 = E * df * ddir(rad), independent of the output units
    let m0 = energy * 0.01 * 5.0_f64.to_radians();
    for t in 0..3 {
        assert!((stats.hm0[t] - 4.0 * m0.sqrt()).abs() < TOL);
        assert!((stats.tp[t] - 10.0).abs() < TOL);
        // grid 40° + azimuth 70° = bearing 110°
        assert!((stats.dm[t] - 110.0).abs() < TOL);
    }
    assert_eq!(stats.n_degenerate, 0);
}

#[test]
fn chop_boundary_bin_keeps_the_peak() {
    // peak lands exactly on the 180° chop boundary: 110° + 70° = 180°
    let energy = 2.0;
    let spec = synthetic_spectrum(energy, 5, 8, 1)
        .to_geographic(Degrees::new(70.0))
        .with_units(EnergyUnits::PerDegree);

    let chopped = spec.chop_half_plane(Degrees::new(70.0));
    assert!(chopped.n_directions() < spec.n_directions());

    // the boundary bin is retained, so the statistics are unchanged
    let before = wave_statistics(&spec, &[0.0]);
    let after = wave_statistics(&chopped, &[0.0]);
    assert!((after.hm0[0] - before.hm0[0]).abs() < TOL);
    assert!((after.dm[0] - before.dm[0]).abs() < TOL);
}

#[test]
fn chop_drops_energy_outside_the_half_plane() {
    // peak at bearing 255°: 255° + 70° = 325°, outside [0°, 180°]
    let spec = synthetic_spectrum(2.0, 5, 37, 1)
        .to_geographic(Degrees::new(70.0))
        .with_units(EnergyUnits::PerDegree);

    let chopped = spec.chop_half_plane(Degrees::new(70.0));
    let stats = wave_statistics(&chopped, &[0.0]);
    // all the energy sat outside the retained half plane
    assert_eq!(stats.n_degenerate, 1);
    assert!(stats.hm0[0].is_nan());
}

#[test]
fn rotation_and_conversion_round_trip_through_statistics() {
    let spec = synthetic_spectrum(1.5, 3, 20, 2);
    let azimuth = Degrees::new(71.8);

    let there = spec
        .to_geographic(azimuth)
        .with_units(EnergyUnits::PerDegree);
    let back = there
        .with_units(EnergyUnits::PerRadian)
        .to_grid_relative(azimuth);

    let a = wave_statistics(&spec, &[0.0, 1800.0]);
    let b = wave_statistics(&back, &[0.0, 1800.0]);
    for t in 0..2 {
        assert!((a.hm0[t] - b.hm0[t]).abs() < TOL);
        assert!((a.tp[t] - b.tp[t]).abs() < TOL);
        assert!((a.dm[t] - b.dm[t]).abs() < TOL);
    }
}
