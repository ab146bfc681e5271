//! Bulk wave parameters from directional spectra.
//!
//! Statistics come from the spectral moments mₙ = Σ fⁿ·S(f)·Δf of the
//! direction-integrated spectrum, and from the frequency-integrated
//! directional distribution for angular quantities. The mean period
//! used throughout is the first-moment period `Tm = m0/m1`; angular
//! means and spreads are circular (vector-averaged), never arithmetic.

use thiserror::Error;

use crate::series::median_interval;
use crate::spectrum::DirectionalSpectrum;
use crate::types::EnergyUnits;

/// Total energy (m0) vanished for a timestamp.
///
/// Recoverable: the statistics for that timestamp are marked missing
/// (NaN) and processing continues with the remaining timestamps.
#[derive(Debug, Error)]
#[error("zero-energy spectrum at time index {time_index}")]
pub struct DegenerateSpectrumError {
    /// Index into the spectrum's time axis
    pub time_index: usize,
}

/// Bulk statistics for one timestamp.
#[derive(Clone, Copy, Debug)]
pub struct BulkSample {
    /// Significant wave height, 4·√m0 (m)
    pub hm0: f64,
    /// Peak period, 1/f at the maximum of the frequency spectrum (s)
    pub tp: f64,
    /// Mean period m0/m1 (s)
    pub tm: f64,
    /// Mean direction, energy-weighted vector average, [0, 360)
    pub dm: f64,
    /// Frequency spread √(m0·m2/m1² − 1) (dimensionless)
    pub sprd_f: f64,
    /// Directional spread √(2(1 − r)) (degrees)
    pub sprd_d: f64,
}

/// Bulk statistics for every timestamp of one spectrum source.
///
/// Arrays are parallel to `times`; a timestamp whose spectrum was
/// degenerate holds NaN in every statistic.
#[derive(Clone, Debug)]
pub struct BulkStatistics {
    /// Timestamps (epoch seconds)
    pub times: Vec<f64>,
    /// Significant wave height Hm0 (m)
    pub hm0: Vec<f64>,
    /// Peak period Tp (s)
    pub tp: Vec<f64>,
    /// Mean period Tm (s)
    pub tm: Vec<f64>,
    /// Mean direction Dm (degrees, [0, 360))
    pub dm: Vec<f64>,
    /// Frequency spread sprdF
    pub sprd_f: Vec<f64>,
    /// Directional spread sprdD (degrees)
    pub sprd_d: Vec<f64>,
    /// Timestamps skipped as degenerate (zero energy)
    pub n_degenerate: usize,
}

impl BulkStatistics {
    /// Number of timestamps.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Check if there are no timestamps.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Look a statistic array up by its canonical name
    /// (`Hm0`, `Tp`, `Tm`, `Dm`, `sprdF`, `sprdD`).
    pub fn by_name(&self, name: &str) -> Option<&[f64]> {
        match name {
            "Hm0" => Some(&self.hm0),
            "Tp" => Some(&self.tp),
            "Tm" => Some(&self.tm),
            "Dm" => Some(&self.dm),
            "sprdF" => Some(&self.sprd_f),
            "sprdD" => Some(&self.sprd_d),
            _ => None,
        }
    }
}

/// Compute bulk statistics for every timestamp of a spectrum.
///
/// `times` must be parallel to the spectrum's time axis. Degenerate
/// (zero-energy) timestamps are recorded as NaN rather than failing the
/// whole series.
///
/// # Panics
///
/// Panics if `times` does not match the spectrum's time axis length.
pub fn wave_statistics(spectrum: &DirectionalSpectrum, times: &[f64]) -> BulkStatistics {
    assert_eq!(
        times.len(),
        spectrum.n_times(),
        "times must be parallel to the spectrum time axis"
    );

    let n = times.len();
    let mut stats = BulkStatistics {
        times: times.to_vec(),
        hm0: Vec::with_capacity(n),
        tp: Vec::with_capacity(n),
        tm: Vec::with_capacity(n),
        dm: Vec::with_capacity(n),
        sprd_f: Vec::with_capacity(n),
        sprd_d: Vec::with_capacity(n),
        n_degenerate: 0,
    };

    for t in 0..n {
        match sample_statistics(spectrum, t) {
            Ok(s) => {
                stats.hm0.push(s.hm0);
                stats.tp.push(s.tp);
                stats.tm.push(s.tm);
                stats.dm.push(s.dm);
                stats.sprd_f.push(s.sprd_f);
                stats.sprd_d.push(s.sprd_d);
            }
            Err(DegenerateSpectrumError { .. }) => {
                stats.hm0.push(f64::NAN);
                stats.tp.push(f64::NAN);
                stats.tm.push(f64::NAN);
                stats.dm.push(f64::NAN);
                stats.sprd_f.push(f64::NAN);
                stats.sprd_d.push(f64::NAN);
                stats.n_degenerate += 1;
            }
        }
    }
    stats
}

/// Statistics for a single timestamp.
///
/// # Errors
///
/// [`DegenerateSpectrumError`] when the zeroth moment is zero.
pub fn sample_statistics(
    spectrum: &DirectionalSpectrum,
    time_index: usize,
) -> Result<BulkSample, DegenerateSpectrumError> {
    let freq = spectrum.frequency_bins();
    let dirs = spectrum.direction_bins();
    let df = bin_widths(freq);

    // Direction bins are uniform instrument bins; the width is their
    // median spacing, which stays at the native resolution even when a
    // chopped axis has one large jump across the removed arc. Expressed
    // in the units the energy density carries.
    let dir_values: Vec<f64> = dirs.iter().map(|d| d.value()).collect();
    let width = median_interval(&dir_values).unwrap_or(1.0);
    let width = match spectrum.units() {
        EnergyUnits::PerDegree => width,
        EnergyUnits::PerRadian => width.to_radians(),
    };
    let ddir = vec![width; dirs.len()];

    let slice = spectrum.at_time(time_index);

    // frequency marginal S(f) = Σ_dir E·Δdir
    let fspec: Vec<f64> = (0..freq.len())
        .map(|fi| (0..dirs.len()).map(|di| slice[[fi, di]] * ddir[di]).sum())
        .collect();

    let moment = |order: i32| -> f64 {
        fspec
            .iter()
            .zip(freq)
            .zip(&df)
            .map(|((&s, &f), &w)| f.powi(order) * s * w)
            .sum()
    };
    let m0 = moment(0);
    if m0 <= 0.0 {
        return Err(DegenerateSpectrumError { time_index });
    }
    let m1 = moment(1);
    let m2 = moment(2);

    let hm0 = 4.0 * m0.sqrt();
    let tm = m0 / m1;
    let sprd_f = (m0 * m2 / (m1 * m1) - 1.0).max(0.0).sqrt();

    // peak of the frequency marginal
    let peak = fspec
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(i, _)| i)
        .unwrap_or(0);
    let tp = 1.0 / freq[peak];

    // directional distribution D(θ) = Σ_f E·Δf, vector-averaged
    let mut sin_sum = 0.0;
    let mut cos_sum = 0.0;
    for (di, d) in dirs.iter().enumerate() {
        let dd: f64 = (0..freq.len()).map(|fi| slice[[fi, di]] * df[fi]).sum();
        sin_sum += d.sin() * dd * ddir[di];
        cos_sum += d.cos() * dd * ddir[di];
    }
    let (sin_mean, cos_mean) = (sin_sum / m0, cos_sum / m0);
    let mut dm = sin_mean.atan2(cos_mean).to_degrees();
    if dm < 0.0 {
        dm += 360.0;
    }
    let r = sin_mean.hypot(cos_mean).min(1.0);
    let sprd_d = (2.0 * (1.0 - r)).sqrt().to_degrees();

    Ok(BulkSample {
        hm0,
        tp,
        tm,
        dm,
        sprd_f,
        sprd_d,
    })
}

/// Centered bin widths for an ascending axis: interior bins get half
/// the distance between their neighbours, edge bins the distance to
/// their single neighbour. A one-bin axis gets unit width.
fn bin_widths(bins: &[f64]) -> Vec<f64> {
    let n = bins.len();
    if n < 2 {
        return vec![1.0; n];
    }
    (0..n)
        .map(|i| {
            if i == 0 {
                bins[1] - bins[0]
            } else if i == n - 1 {
                bins[n - 1] - bins[n - 2]
            } else {
                (bins[i + 1] - bins[i - 1]) / 2.0
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::testutil::single_bin_spectrum;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_single_bin_analytics() {
        // all energy at f = 0.1 Hz (index 5), direction 45° (index 9)
        let energy = 2.5;
        let spec = single_bin_spectrum(1, energy, 5, 9);
        let stats = wave_statistics(&spec, &[0.0]);

        let (df, ddir) = (0.01, 5.0);
        let m0 = energy * df * ddir;
        assert!((stats.hm0[0] - 4.0 * m0.sqrt()).abs() < TOL);
        assert!((stats.tp[0] - 10.0).abs() < TOL);
        assert!((stats.tm[0] - 10.0).abs() < TOL);
        assert!((stats.dm[0] - 45.0).abs() < TOL);
        // single-bin spectra have no spread
        assert!(stats.sprd_f[0].abs() < 1e-6);
        assert!(stats.sprd_d[0].abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_timestamp_marked_missing() {
        // energy only at the second of three timestamps
        let spec = single_bin_spectrum(3, 0.0, 5, 9);
        let live = single_bin_spectrum(1, 1.0, 5, 9);
        let mut energy = spec.energy().clone();
        energy
            .index_axis_mut(ndarray::Axis(0), 1)
            .assign(&live.at_time(0));
        let spec = crate::spectrum::DirectionalSpectrum::new(
            energy,
            spec.frequency_bins().to_vec(),
            spec.direction_bins().to_vec(),
            spec.convention(),
            spec.units(),
        )
        .unwrap();

        let stats = wave_statistics(&spec, &[0.0, 600.0, 1200.0]);
        assert_eq!(stats.n_degenerate, 2);
        assert!(stats.hm0[0].is_nan());
        assert!(stats.hm0[1].is_finite());
        assert!(stats.dm[2].is_nan());
    }

    #[test]
    fn test_dm_wraps_across_north() {
        // equal energy at 355° and 5° must average to ~0, not 180
        let base = single_bin_spectrum(1, 1.0, 5, 71); // 355°
        let mut energy = base.energy().clone();
        energy[[0, 5, 1]] = 1.0; // 5°
        let spec = crate::spectrum::DirectionalSpectrum::new(
            energy,
            base.frequency_bins().to_vec(),
            base.direction_bins().to_vec(),
            base.convention(),
            base.units(),
        )
        .unwrap();

        let stats = wave_statistics(&spec, &[0.0]);
        let dm = stats.dm[0];
        assert!(dm < 1.0 || dm > 359.0, "Dm should wrap to ~0, got {dm}");
    }

    #[test]
    fn test_units_do_not_change_hm0() {
        let spec = single_bin_spectrum(1, 2.0, 4, 10);
        let per_radian = spec.with_units(crate::types::EnergyUnits::PerRadian);

        let a = wave_statistics(&spec, &[0.0]);
        let b = wave_statistics(&per_radian, &[0.0]);
        assert!((a.hm0[0] - b.hm0[0]).abs() < TOL);
        assert!((a.dm[0] - b.dm[0]).abs() < TOL);
    }

    #[test]
    fn test_by_name() {
        let spec = single_bin_spectrum(1, 1.0, 5, 9);
        let stats = wave_statistics(&spec, &[0.0]);
        assert!(stats.by_name("Hm0").is_some());
        assert!(stats.by_name("sprdD").is_some());
        assert!(stats.by_name("bogus").is_none());
    }
}
