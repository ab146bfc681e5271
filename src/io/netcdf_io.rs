//! NetCDF writers for the cycle's Field and Station products.
//!
//! Both files follow the fixed archive schema: dimensions
//! `{time, station, frequency, direction}`, time as seconds since the
//! Unix epoch, directions in degrees true north, energy density per
//! degree. Writes go to a temporary sibling path and are renamed into
//! place only on success, so a failed write never leaves a partial
//! artifact at the published location.

use std::path::Path;

use chrono::Utc;
use netcdf::create;

use super::OutputError;
use crate::field::FieldGrid;
use crate::station::StationRecord;
use crate::types::EnergyUnits;

/// Write the spatial field product for one cycle.
pub fn write_field_file(path: &Path, field: &FieldGrid) -> Result<(), OutputError> {
    write_atomic(path, |file| {
        let (ny, nx) = field.spatial_shape();
        file.add_dimension("time", field.n_times())?;
        file.add_dimension("y", ny)?;
        file.add_dimension("x", nx)?;

        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "seconds since 1970-01-01 00:00:00")?;
        time_var.put_attribute("calendar", "gregorian")?;
        time_var.put_values(&field.times, ..)?;

        let mut x_var = file.add_variable::<f64>("xFRF", &["x"])?;
        x_var.put_attribute("units", "m")?;
        x_var.put_values(&field.x_frf.to_vec(), ..)?;

        let mut y_var = file.add_variable::<f64>("yFRF", &["y"])?;
        y_var.put_attribute("units", "m")?;
        y_var.put_values(&field.y_frf.to_vec(), ..)?;

        for (name, units, array) in [
            ("waveHs", "m", &field.wave_hs),
            ("waveTp", "s", &field.wave_tp),
            ("waveDm", "degrees true north", &field.wave_dm),
            ("bathymetry", "m", &field.bathymetry),
        ] {
            let mut var = file.add_variable::<f64>(name, &["time", "y", "x"])?;
            var.put_attribute("units", units)?;
            let data = array.as_standard_layout().to_owned().into_raw_vec();
            var.put_values(&data, ..)?;
        }

        file.add_attribute("grid_azimuth", field.grid_azimuth.value())?;
        file.add_attribute("station_name", "Regional Simulation Field Data")?;
        Ok(())
    })
}

/// Write one station's product: bulk statistics plus the rotated
/// directional spectrum.
///
/// # Errors
///
/// `MissingStationData` if the record carries no model spectrum or
/// statistics; the schema requires both.
pub fn write_station_file(path: &Path, station: &StationRecord) -> Result<(), OutputError> {
    let spectrum = station
        .model_spectrum
        .as_ref()
        .ok_or_else(|| OutputError::MissingStationData {
            station: station.name.clone(),
            missing: "model spectrum",
        })?;
    let stats = station
        .model_stats
        .as_ref()
        .ok_or_else(|| OutputError::MissingStationData {
            station: station.name.clone(),
            missing: "model statistics",
        })?;
    // the schema fixes the density; a spectrum still per-radian is
    // converted here rather than stamped with the wrong units
    let spectrum = spectrum.with_units(EnergyUnits::PerDegree);

    write_atomic(path, |file| {
        file.add_dimension("time", stats.len())?;
        file.add_dimension("station", 1)?;
        file.add_dimension("frequency", spectrum.n_frequencies())?;
        file.add_dimension("direction", spectrum.n_directions())?;

        let mut time_var = file.add_variable::<f64>("time", &["time"])?;
        time_var.put_attribute("units", "seconds since 1970-01-01 00:00:00")?;
        time_var.put_attribute("calendar", "gregorian")?;
        time_var.put_values(&stats.times, ..)?;

        let mut freq_var = file.add_variable::<f64>("waveFrequency", &["frequency"])?;
        freq_var.put_attribute("units", "Hz")?;
        freq_var.put_values(spectrum.frequency_bins(), ..)?;

        let dirs: Vec<f64> = spectrum.direction_bins().iter().map(|d| d.value()).collect();
        let mut dir_var = file.add_variable::<f64>("waveDirectionBins", &["direction"])?;
        dir_var.put_attribute("units", "degrees true north")?;
        dir_var.put_values(&dirs, ..)?;

        let mut efth = file.add_variable::<f64>(
            "directionalWaveEnergyDensity",
            &["time", "station", "frequency", "direction"],
        )?;
        efth.put_attribute("units", "m2/Hz/deg")?;
        let data = spectrum.energy().as_standard_layout().to_owned().into_raw_vec();
        efth.put_values(&data, ..)?;

        for (name, units, values) in [
            ("waveHs", "m", &stats.hm0),
            ("waveTp", "s", &stats.tp),
            ("waveTm", "s", &stats.tm),
            ("waveDm", "degrees true north", &stats.dm),
        ] {
            let mut var = file.add_variable::<f64>(name, &["time"])?;
            var.put_attribute("units", units)?;
            var.put_values(values, ..)?;
        }

        file.add_attribute("station_name", station.name.as_str())?;
        file.add_attribute("longitude", station.longitude)?;
        file.add_attribute("latitude", station.latitude)?;
        if let (Some(x), Some(y)) = (station.x_frf, station.y_frf) {
            file.add_attribute("xFRF", x)?;
            file.add_attribute("yFRF", y)?;
        }
        Ok(())
    })
}

/// Create the file at a temporary sibling path, populate it, then
/// rename into place. The temporary file is removed if anything fails.
fn write_atomic<F>(path: &Path, populate: F) -> Result<(), OutputError>
where
    F: FnOnce(&mut netcdf::FileMut) -> Result<(), OutputError>,
{
    let tmp = path.with_extension("nc.tmp");

    let result = (|| {
        let mut file = create(&tmp)?;
        file.add_attribute("Conventions", "CF-1.6")?;
        file.add_attribute("history", format!("created {}", Utc::now().to_rfc3339()).as_str())?;
        populate(&mut file)?;
        Ok(())
    })();

    match result {
        Ok(()) => {
            std::fs::rename(&tmp, path)?;
            Ok(())
        }
        Err(e) => {
            let _ = std::fs::remove_file(&tmp);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::wave_statistics;
    use crate::spectrum::testutil::single_bin_spectrum;
    use ndarray::{Array1, Array3};

    use crate::types::Degrees;

    #[test]
    fn test_field_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("field.nc");

        let field = FieldGrid::new(
            vec![0.0, 1800.0],
            Array1::linspace(0.0, 100.0, 5),
            Array1::linspace(0.0, 50.0, 3),
            Array3::from_elem((2, 3, 5), 1.5),
            Array3::zeros((2, 3, 5)),
            Array3::zeros((2, 3, 5)),
            Array3::from_elem((2, 3, 5), -8.0),
            Degrees::new(70.0),
        )
        .unwrap();

        write_field_file(&path, &field).unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("nc.tmp").exists());

        let file = netcdf::open(&path).unwrap();
        let hs = file.variable("waveHs").unwrap();
        let values = hs.get_values::<f64, _>(..).unwrap();
        assert_eq!(values.len(), 2 * 3 * 5);
        assert_eq!(values[0], 1.5);
    }

    #[test]
    fn test_station_file_requires_spectrum() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("station.nc");
        let station = crate::station::frf_gauges::waverider_26m();

        let err = write_station_file(&path, &station).unwrap_err();
        assert!(matches!(err, OutputError::MissingStationData { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_station_file_converts_per_radian_energy() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("station.nc");

        // per-degree reference and its per-radian equivalent
        let reference = single_bin_spectrum(1, 1.0, 5, 9);
        let per_radian = reference.with_units(crate::types::EnergyUnits::PerRadian);
        let stats = wave_statistics(&per_radian, &[0.0]);
        let station = crate::station::frf_gauges::waverider_26m()
            .with_model_spectrum(per_radian)
            .with_model_stats(stats);

        write_station_file(&path, &station).unwrap();

        let file = netcdf::open(&path).unwrap();
        let efth = file.variable("directionalWaveEnergyDensity").unwrap();
        let values = efth.get_values::<f64, _>(..).unwrap();
        // flattened (time, station, frequency, direction) peak cell
        let peak = 5 * 72 + 9;
        assert!((values[peak] - 1.0).abs() < 1e-12, "got {}", values[peak]);
    }

    #[test]
    fn test_station_file_schema() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("station.nc");

        let spectrum = single_bin_spectrum(2, 1.0, 5, 9);
        let stats = wave_statistics(&spectrum, &[0.0, 1800.0]);
        let station = crate::station::frf_gauges::waverider_26m()
            .with_model_spectrum(spectrum)
            .with_model_stats(stats);

        write_station_file(&path, &station).unwrap();

        let file = netcdf::open(&path).unwrap();
        for dim in ["time", "station", "frequency", "direction"] {
            assert!(file.dimension(dim).is_some(), "missing dimension {dim}");
        }
        assert!(file.variable("directionalWaveEnergyDensity").is_some());
        assert!(file.variable("waveDirectionBins").is_some());
    }
}
