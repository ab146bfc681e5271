//! Bulk statistics, model/observation comparison, and the quality gate.
//!
//! This module turns directional spectra into the bulk parameters the
//! validation step runs on, and holds the acceptance decision itself:
//!
//! - [`wave_statistics`]: Hm0, Tp, Tm, Dm, sprdF, sprdD per timestamp
//! - [`ComparisonMetrics`]: bias/RMSE/MAE over matched samples
//! - [`ValidationGate`]: the accept/reject decision for the cycle
//!
//! # Example
//!
//! ```ignore
//! use wavepipe::analysis::{GateThresholds, ValidationGate, wave_statistics};
//!
//! let model_stats = wave_statistics(&model_spectrum, &times);
//! let obs_stats = wave_statistics(&obs_spectrum, &times);
//!
//! let gate = ValidationGate::new("waverider-26m", "Hm0", GateThresholds::default());
//! let outcome = gate.evaluate(&model_stats.hm0, &obs_stats.hm0)?;
//! println!("boundary {outcome}");
//! ```

mod gate;
mod metrics;
mod stats;

pub use gate::{
    GateState, GateThresholds, ValidationGate, ValidationOutcome, ValidationRejectedError,
};
pub use metrics::ComparisonMetrics;
pub use stats::{
    BulkSample, BulkStatistics, DegenerateSpectrumError, sample_statistics, wave_statistics,
};
