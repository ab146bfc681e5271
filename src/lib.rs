//! # wavepipe
//!
//! Boundary preparation and validation pipeline for coastal wave model
//! runs.
//!
//! One simulation cycle flows through this crate in two halves. Before
//! the run, raw observation streams are aligned onto canonical time
//! grids clipped to the simulation window. After the run, model and
//! observation spectra are brought onto a common footing (true-north
//! bearings, per-degree energy density), reduced to bulk wave
//! parameters, and compared at a reference station; only a cycle whose
//! boundary passes the bias/RMSE gate keeps its output files.
//!
//! Building blocks:
//! - Canonical time grids and nearest-timestamp matching
//! - Directional-spectrum rotation, unit conversion, and half-plane chop
//! - Bulk statistics from spectral moments (Hm0, Tp, Tm, Dm, spreads)
//! - A terminal accept/reject quality gate with artifact rollback
//! - Field/Station NetCDF products (behind the `netcdf` feature)

pub mod analysis;
pub mod config;
pub mod error;
pub mod field;
pub mod io;
pub mod pipeline;
pub mod series;
pub mod spectrum;
pub mod station;
pub mod types;

// Re-export main types for convenience
pub use analysis::{
    BulkSample, BulkStatistics, ComparisonMetrics, DegenerateSpectrumError, GateState,
    GateThresholds, ValidationGate, ValidationOutcome, ValidationRejectedError,
    sample_statistics, wave_statistics,
};
pub use config::RunConfig;
pub use error::PipelineError;
pub use field::{FieldGrid, FieldShapeError};
pub use io::{OutputError, OutputManifest, field_file_name, station_file_name};
pub use pipeline::{CycleInputs, CycleOutput, StationInput, analyze_cycle};
pub use series::{
    Gap, InsufficientDataError, SeriesError, TimeGrid, TimeGrids, TimeMatch, TimeSeries,
    WindSeries, build_time_grids, native_tolerance, scalar_average, time_match, vector_average,
};
pub use spectrum::{DirectionalSpectrum, SpectrumError};
pub use station::{StationRecord, frf_gauges};
pub use types::{AngleConvention, Degrees, EnergyUnits, SimulationWindow};

#[cfg(feature = "netcdf")]
pub use io::{write_field_file, write_station_file};
