//! Run configuration for a simulation cycle.

use crate::analysis::GateThresholds;

/// Options recognized by the pipeline for one cycle.
///
/// Defaults mirror the operational setup: 24-hour cycles, full 360°
/// directional plane, 0.10 m bias/RMSE acceptance thresholds, and the
/// offshore waverider as the boundary reference station.
///
/// # Example
///
/// ```
/// use wavepipe::config::RunConfig;
///
/// let config = RunConfig::default()
///     .with_duration_hours(12)
///     .with_reference_station("waverider-17m");
/// assert_eq!(config.simulation_duration_hours, 12);
/// ```
#[derive(Clone, Debug)]
pub struct RunConfig {
    /// Cycle length in hours.
    pub simulation_duration_hours: u32,
    /// Whether reporting plots are produced (side effect only).
    pub plot_flag: bool,
    /// Use the full 360° directional plane. When false, observation
    /// spectra are chopped to the shoreward half plane before statistics.
    pub full_plane: bool,
    /// Acceptance thresholds for the validation gate.
    pub thresholds: GateThresholds,
    /// Station whose matched model/observation statistics gate the cycle.
    pub reference_station: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            simulation_duration_hours: 24,
            plot_flag: true,
            full_plane: true,
            thresholds: GateThresholds::default(),
            reference_station: "waverider-26m".to_string(),
        }
    }
}

impl RunConfig {
    /// Set the cycle duration in hours.
    pub fn with_duration_hours(mut self, hours: u32) -> Self {
        self.simulation_duration_hours = hours;
        self
    }

    /// Enable or disable plotting side effects.
    pub fn with_plot_flag(mut self, flag: bool) -> Self {
        self.plot_flag = flag;
        self
    }

    /// Use the full 360° plane (true) or the shoreward half plane (false).
    pub fn with_full_plane(mut self, full: bool) -> Self {
        self.full_plane = full;
        self
    }

    /// Override the gate thresholds.
    pub fn with_thresholds(mut self, thresholds: GateThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Override the reference station.
    pub fn with_reference_station(mut self, station: impl Into<String>) -> Self {
        self.reference_station = station.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RunConfig::default();
        assert_eq!(config.simulation_duration_hours, 24);
        assert!(config.full_plane);
        assert_eq!(config.reference_station, "waverider-26m");
        assert_eq!(config.thresholds.bias, 0.10);
        assert_eq!(config.thresholds.rmse, 0.10);
    }

    #[test]
    fn test_builder() {
        let config = RunConfig::default()
            .with_duration_hours(48)
            .with_plot_flag(false)
            .with_full_plane(false);
        assert_eq!(config.simulation_duration_hours, 48);
        assert!(!config.plot_flag);
        assert!(!config.full_plane);
    }
}
