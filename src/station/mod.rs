//! Comparison stations and their per-cycle data.

use crate::analysis::BulkStatistics;
use crate::spectrum::DirectionalSpectrum;

/// One comparison location: identity plus the spectra and bulk
/// statistics gathered for it during a cycle.
///
/// The record carries per-station slices of the larger model arrays; it
/// never owns the full field.
#[derive(Clone, Debug)]
pub struct StationRecord {
    /// Station identifier (e.g. `waverider-26m`)
    pub name: String,
    /// Longitude (degrees East)
    pub longitude: f64,
    /// Latitude (degrees North)
    pub latitude: f64,
    /// Cross-shore coordinate in the FRF local frame (m), if known
    pub x_frf: Option<f64>,
    /// Alongshore coordinate in the FRF local frame (m), if known
    pub y_frf: Option<f64>,
    /// Rotated model spectrum extracted at this station
    pub model_spectrum: Option<DirectionalSpectrum>,
    /// Bulk statistics derived from the model spectrum
    pub model_stats: Option<BulkStatistics>,
    /// Bulk statistics derived from the gauge's observed spectrum
    pub obs_stats: Option<BulkStatistics>,
}

impl StationRecord {
    /// Create a station record with no data attached yet.
    pub fn new(name: impl Into<String>, longitude: f64, latitude: f64) -> Self {
        Self {
            name: name.into(),
            longitude,
            latitude,
            x_frf: None,
            y_frf: None,
            model_spectrum: None,
            model_stats: None,
            obs_stats: None,
        }
    }

    /// Set FRF local coordinates.
    pub fn with_frf_coords(mut self, x: f64, y: f64) -> Self {
        self.x_frf = Some(x);
        self.y_frf = Some(y);
        self
    }

    /// Attach the rotated model spectrum for this station.
    pub fn with_model_spectrum(mut self, spectrum: DirectionalSpectrum) -> Self {
        self.model_spectrum = Some(spectrum);
        self
    }

    /// Attach model-derived bulk statistics.
    pub fn with_model_stats(mut self, stats: BulkStatistics) -> Self {
        self.model_stats = Some(stats);
        self
    }

    /// Attach observation-derived bulk statistics.
    pub fn with_obs_stats(mut self, stats: BulkStatistics) -> Self {
        self.obs_stats = Some(stats);
        self
    }

    /// Check if FRF coordinates are set.
    pub fn has_frf_coords(&self) -> bool {
        self.x_frf.is_some() && self.y_frf.is_some()
    }
}

/// FRF cross-shore gauge array.
///
/// Standard stations for validation at the Field Research Facility,
/// Duck NC, offshore to onshore. Coordinates are approximate and should
/// be verified against the gauge database.
pub mod frf_gauges {
    use super::StationRecord;

    /// 26 m depth waverider buoy, the offshore boundary reference.
    pub fn waverider_26m() -> StationRecord {
        StationRecord::new("waverider-26m", -75.59, 36.26).with_frf_coords(16100.0, 4780.0)
    }

    /// 17 m depth waverider buoy.
    pub fn waverider_17m() -> StationRecord {
        StationRecord::new("waverider-17m", -75.67, 36.20).with_frf_coords(3710.0, 1303.0)
    }

    /// AWAC at 11 m depth.
    pub fn awac_11m() -> StationRecord {
        StationRecord::new("awac-11m", -75.72, 36.19).with_frf_coords(1302.0, 933.0)
    }

    /// 8 m depth pressure gauge array.
    pub fn array_8m() -> StationRecord {
        StationRecord::new("8m-array", -75.74, 36.19).with_frf_coords(914.0, 915.0)
    }

    /// AWAC at 6 m depth.
    pub fn awac_6m() -> StationRecord {
        StationRecord::new("awac-6m", -75.74, 36.19).with_frf_coords(606.0, 937.0)
    }

    /// AWAC at 4.5 m depth.
    pub fn awac_4_5m() -> StationRecord {
        StationRecord::new("awac-4.5m", -75.75, 36.19).with_frf_coords(400.0, 939.0)
    }

    /// Aquadopp at 3.5 m depth.
    pub fn adop_3_5m() -> StationRecord {
        StationRecord::new("adop-3.5m", -75.75, 36.19).with_frf_coords(306.0, 940.0)
    }

    /// Cross-shore pressure sensor, 200 m line.
    pub fn xp200m() -> StationRecord {
        StationRecord::new("xp200m", -75.75, 36.19).with_frf_coords(200.0, 940.0)
    }

    /// Cross-shore pressure sensor, 150 m line.
    pub fn xp150m() -> StationRecord {
        StationRecord::new("xp150m", -75.75, 36.19).with_frf_coords(150.0, 940.0)
    }

    /// Cross-shore pressure sensor, 125 m line.
    pub fn xp125m() -> StationRecord {
        StationRecord::new("xp125m", -75.75, 36.19).with_frf_coords(125.0, 940.0)
    }

    /// All gauges, offshore to onshore.
    pub fn all_stations() -> Vec<StationRecord> {
        vec![
            waverider_26m(),
            waverider_17m(),
            awac_11m(),
            array_8m(),
            awac_6m(),
            awac_4_5m(),
            adop_3_5m(),
            xp200m(),
            xp150m(),
            xp125m(),
        ]
    }
}
