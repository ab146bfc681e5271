//! Model-acceptance quality gate.
//!
//! Before a cycle's output is published, the model's boundary statistics
//! are compared against the reference station's observations. The gate
//! is a two-state machine: it starts `Pending` and evaluates exactly
//! once to `Accepted` or `Rejected` (evaluation consumes the gate, so
//! the decision is terminal by construction). A rejected cycle must not
//! leave output behind; the pipeline discards already-written artifacts
//! and surfaces the rejection to the caller.

use std::fmt;
use thiserror::Error;

use super::ComparisonMetrics;

/// Acceptance thresholds for the gate.
///
/// Defaults are the operational values: bias and RMSE of the boundary
/// wave height must both be within 0.10 length-units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GateThresholds {
    /// Maximum acceptable |bias|
    pub bias: f64,
    /// Maximum acceptable RMSE
    pub rmse: f64,
}

impl Default for GateThresholds {
    fn default() -> Self {
        Self { bias: 0.10, rmse: 0.10 }
    }
}

/// Gate states. `Pending` transitions exactly once to one of the two
/// terminal states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    /// Not yet evaluated
    Pending,
    /// Model accepted; output may be published
    Accepted,
    /// Model rejected; output must be discarded
    Rejected,
}

/// The structured outcome of a gate evaluation.
#[derive(Clone, Debug)]
pub struct ValidationOutcome {
    /// Whether the model was accepted
    pub accepted: bool,
    /// Reference station the comparison ran at
    pub station: String,
    /// Statistic compared (canonically `Hm0`)
    pub statistic: String,
    /// Computed bias, mean(model - obs)
    pub bias: f64,
    /// Computed RMSE
    pub rmse: f64,
    /// Thresholds the values were held against
    pub thresholds: GateThresholds,
    /// Number of finite matched samples behind the metrics
    pub n_samples: usize,
}

impl ValidationOutcome {
    /// The terminal state this outcome represents.
    pub fn state(&self) -> GateState {
        if self.accepted {
            GateState::Accepted
        } else {
            GateState::Rejected
        }
    }
}

impl fmt::Display for ValidationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} for {}: bias {:.4} (limit {:.2}), RMSE {:.4} (limit {:.2}), n={}",
            if self.accepted { "accepted" } else { "rejected" },
            self.station,
            self.statistic,
            self.bias,
            self.thresholds.bias,
            self.rmse,
            self.thresholds.rmse,
            self.n_samples,
        )
    }
}

/// The quality gate failed; the cycle's output must not be published.
#[derive(Debug, Error)]
#[error("model boundary validation failed: {outcome}")]
pub struct ValidationRejectedError {
    /// Full evaluation context for diagnosis without re-running
    pub outcome: ValidationOutcome,
}

/// Quality gate comparing matched model/observation statistics at one
/// reference station.
#[derive(Clone, Debug)]
pub struct ValidationGate {
    station: String,
    statistic: String,
    thresholds: GateThresholds,
}

impl ValidationGate {
    /// Create a gate in the `Pending` state.
    pub fn new(
        station: impl Into<String>,
        statistic: impl Into<String>,
        thresholds: GateThresholds,
    ) -> Self {
        Self {
            station: station.into(),
            statistic: statistic.into(),
            thresholds,
        }
    }

    /// A pending gate has not evaluated yet.
    pub fn state(&self) -> GateState {
        GateState::Pending
    }

    /// Evaluate the gate over matched model/observation samples,
    /// consuming it (the decision is terminal).
    ///
    /// Accepts when both |bias| and RMSE are strictly under their
    /// thresholds. Zero finite matched samples means the boundary could
    /// not be validated at all, which is a rejection: unvalidated output
    /// is never published.
    ///
    /// # Errors
    ///
    /// [`ValidationRejectedError`] carrying the full outcome on any
    /// rejection.
    pub fn evaluate(
        self,
        model: &[f64],
        observation: &[f64],
    ) -> Result<ValidationOutcome, ValidationRejectedError> {
        let metrics = ComparisonMetrics::compute(model, observation);
        let accepted = metrics.n_points > 0
            && metrics.bias.abs() < self.thresholds.bias
            && metrics.rmse < self.thresholds.rmse;

        let outcome = ValidationOutcome {
            accepted,
            station: self.station,
            statistic: self.statistic,
            bias: metrics.bias,
            rmse: metrics.rmse,
            thresholds: self.thresholds,
            n_samples: metrics.n_points,
        };

        if accepted {
            Ok(outcome)
        } else {
            Err(ValidationRejectedError { outcome })
        }
    }
}
