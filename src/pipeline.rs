//! The per-cycle analysis driver.
//!
//! Sequences the post-run half of a simulation cycle: transform model
//! spectra to the output conventions, derive bulk statistics for model
//! and observations, write the Field and Station products, then hold
//! the boundary against the reference station's observations. A gate
//! rejection rolls the written artifacts back and propagates, so a
//! rejected cycle leaves nothing in the published location.

use std::path::Path;

use crate::analysis::{BulkStatistics, ValidationGate, ValidationOutcome, wave_statistics};
use crate::config::RunConfig;
use crate::error::PipelineError;
use crate::field::FieldGrid;
use crate::io::OutputManifest;
use crate::series::{native_tolerance, time_match};
use crate::spectrum::DirectionalSpectrum;
use crate::station::StationRecord;
use crate::types::{AngleConvention, Degrees, EnergyUnits, SimulationWindow};

/// Per-station input to the analysis step.
#[derive(Clone, Debug)]
pub struct StationInput {
    /// Station identity (name, coordinates)
    pub station: StationRecord,
    /// Model output timestamps at this station (epoch seconds)
    pub model_times: Vec<f64>,
    /// Model spectrum as the model writes it: grid-relative, per-radian
    pub model_spectrum: DirectionalSpectrum,
    /// Observation timestamps, when the gauge reported
    pub obs_times: Vec<f64>,
    /// Observed spectrum: geographic, per-degree
    pub obs_spectrum: Option<DirectionalSpectrum>,
}

/// Everything the analysis step consumes for one cycle.
#[derive(Clone, Debug)]
pub struct CycleInputs {
    /// Spatial field extracted from the model run
    pub field: FieldGrid,
    /// Per-station spectra and times
    pub stations: Vec<StationInput>,
}

/// The validated products of one cycle.
#[derive(Debug)]
pub struct CycleOutput {
    /// Spatial field, unchanged
    pub field: FieldGrid,
    /// Stations with rotated spectra and both statistic sets attached
    pub stations: Vec<StationRecord>,
    /// The gate's accepting outcome
    pub outcome: ValidationOutcome,
    /// Artifacts written for this cycle
    pub manifest: OutputManifest,
}

/// Run the analysis half of a cycle.
///
/// Model spectra are rotated to true north by the field's grid azimuth
/// and converted to per-degree density; observation spectra are chopped
/// to the shoreward half plane when `full_plane` is off. Statistics for
/// both feed the gate at `config.reference_station` on `Hm0`.
///
/// Output files are written through the manifest before the gate runs,
/// mirroring the operational flow; rejection discards them all.
///
/// # Errors
///
/// - [`PipelineError::MissingReferenceStation`] if the configured
///   station is absent (artifacts are discarded; an unvalidated cycle
///   is never published)
/// - [`PipelineError::ValidationRejected`] when the gate fails
/// - [`PipelineError::Output`] on write or rollback failures
pub fn analyze_cycle(
    config: &RunConfig,
    window: &SimulationWindow,
    inputs: CycleInputs,
    output_dir: &Path,
) -> Result<CycleOutput, PipelineError> {
    let date_string = window.date_string();
    let mut manifest = OutputManifest::new();

    let field_path = crate::io::field_file_name(output_dir, &date_string);
    #[cfg(feature = "netcdf")]
    {
        crate::io::write_field_file(&field_path, &inputs.field)?;
        manifest.record(&field_path);
    }
    #[cfg(not(feature = "netcdf"))]
    let _ = &field_path;

    let grid_azimuth = inputs.field.grid_azimuth;
    let mut stations = Vec::with_capacity(inputs.stations.len());
    for input in inputs.stations {
        let station = prepare_station(input, grid_azimuth, config.full_plane);

        #[cfg(feature = "netcdf")]
        {
            let path = crate::io::station_file_name(output_dir, &station.name, &date_string);
            crate::io::write_station_file(&path, &station)?;
            manifest.record(&path);
        }
        stations.push(station);
    }

    match gate_boundary(config, &stations) {
        Ok(outcome) => Ok(CycleOutput {
            field: inputs.field,
            stations,
            outcome,
            manifest,
        }),
        Err(e) => {
            manifest.discard()?;
            Err(e)
        }
    }
}

/// Transform one station's spectra and attach statistics.
fn prepare_station(
    input: StationInput,
    grid_azimuth: Degrees,
    full_plane: bool,
) -> StationRecord {
    let model_spectrum = rotate_for_output(&input.model_spectrum, grid_azimuth);
    let model_stats = wave_statistics(&model_spectrum, &input.model_times);

    let obs_stats = input.obs_spectrum.as_ref().map(|obs| {
        let obs = if full_plane {
            obs.clone()
        } else {
            // the shore-normal adjustment for the FRF grid is its azimuth
            obs.chop_half_plane(grid_azimuth)
        };
        wave_statistics(&obs, &input.obs_times)
    });

    let mut station = input
        .station
        .with_model_spectrum(model_spectrum)
        .with_model_stats(model_stats);
    if let Some(stats) = obs_stats {
        station = station.with_obs_stats(stats);
    }
    station
}

/// Bring a model spectrum onto the output schema's conventions:
/// true-north bearings, per-degree energy density. Spectra already in
/// either convention pass through that step untouched.
fn rotate_for_output(spectrum: &DirectionalSpectrum, grid_azimuth: Degrees) -> DirectionalSpectrum {
    let geographic = match spectrum.convention() {
        AngleConvention::GridRelative => spectrum.to_geographic(grid_azimuth),
        AngleConvention::TrueNorth => spectrum.clone(),
    };
    geographic.with_units(EnergyUnits::PerDegree)
}

/// Match model and observation wave height at the reference station and
/// run the gate.
fn gate_boundary(
    config: &RunConfig,
    stations: &[StationRecord],
) -> Result<ValidationOutcome, PipelineError> {
    let reference = stations
        .iter()
        .find(|s| s.name == config.reference_station)
        .ok_or_else(|| PipelineError::MissingReferenceStation {
            station: config.reference_station.clone(),
        })?;

    let gate = ValidationGate::new(&reference.name, "Hm0", config.thresholds);

    let (model, obs) = match (&reference.model_stats, &reference.obs_stats) {
        (Some(m), Some(o)) => matched_hm0(m, o),
        // nothing to compare against: the gate treats this as rejection
        _ => (Vec::new(), Vec::new()),
    };

    Ok(gate.evaluate(&model, &obs)?)
}

/// Time-match two statistic sets and pull out the paired Hm0 samples.
fn matched_hm0(model: &BulkStatistics, obs: &BulkStatistics) -> (Vec<f64>, Vec<f64>) {
    let tolerance = native_tolerance(&obs.times, &model.times);
    let matched = time_match(&obs.times, &model.times, tolerance);
    let (obs_vals, model_vals) = matched.select(&obs.hm0, &model.hm0);
    (model_vals, obs_vals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spectrum::testutil::single_bin_spectrum;

    #[test]
    fn test_rotate_for_output_is_idempotent_on_geographic() {
        let spec = single_bin_spectrum(1, 1.0, 5, 9); // true north, per degree
        let out = rotate_for_output(&spec, Degrees::new(70.0));
        assert_eq!(out.convention(), AngleConvention::TrueNorth);
        assert_eq!(out.units(), EnergyUnits::PerDegree);
        assert_eq!(out.energy()[[0, 5, 9]], spec.energy()[[0, 5, 9]]);
    }

    #[test]
    fn test_matched_hm0_uses_overlap() {
        let spec = single_bin_spectrum(3, 1.0, 5, 9);
        let model = wave_statistics(&spec, &[0.0, 1800.0, 3600.0]);
        let obs = wave_statistics(&spec, &[1800.0, 3600.0, 5400.0]);

        let (m, o) = matched_hm0(&model, &obs);
        assert_eq!(m.len(), 2);
        assert_eq!(m, o);
    }
}
