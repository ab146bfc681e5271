//! Crate-level error taxonomy.
//!
//! Per-module errors convert into [`PipelineError`] at the cycle
//! driver. The split follows how far each failure reaches: a
//! zero-energy timestamp is localized (marked missing, processing
//! continues), while a missing stream or a gate rejection aborts the
//! whole cycle before anything is published.

use thiserror::Error;

use crate::analysis::{DegenerateSpectrumError, ValidationRejectedError};
use crate::io::OutputError;
use crate::series::{InsufficientDataError, SeriesError};
use crate::spectrum::SpectrumError;

/// Any error a simulation cycle can surface to its caller.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A required stream had no samples in the window (fatal for the cycle)
    #[error(transparent)]
    InsufficientData(#[from] InsufficientDataError),

    /// A timestamp's spectrum carried no energy (localized; only
    /// surfaced when a caller asks for that single timestamp)
    #[error(transparent)]
    DegenerateSpectrum(#[from] DegenerateSpectrumError),

    /// The quality gate rejected the run (fatal; artifacts discarded)
    #[error(transparent)]
    ValidationRejected(#[from] ValidationRejectedError),

    /// The configured reference station was not among the inputs
    #[error("reference station '{station}' not found in cycle inputs")]
    MissingReferenceStation { station: String },

    /// Malformed input series
    #[error(transparent)]
    Series(#[from] SeriesError),

    /// Malformed spectrum
    #[error(transparent)]
    Spectrum(#[from] SpectrumError),

    /// Output writing or rollback failure
    #[error(transparent)]
    Output(#[from] OutputError),
}
