//! Strongly-typed domain types for safer APIs.
//!
//! Newtypes and small enums keep quantities that share an underlying
//! representation (f64 degrees, f64 epoch seconds) from being mixed up,
//! and make the angular conventions of directional spectra explicit
//! instead of assumed.
//!
//! # Example
//!
//! ```
//! use wavepipe::types::{AngleConvention, Degrees};
//!
//! // Bearings wrap into [0, 360) and carry their convention with them
//! let grid_azimuth = Degrees::new(70.0);
//! let geographic = Degrees::new(340.0) + grid_azimuth;
//! assert_eq!(geographic.value(), 50.0);
//! assert_ne!(AngleConvention::GridRelative, AngleConvention::TrueNorth);
//! ```

mod angle;
mod window;

pub use angle::{AngleConvention, Degrees, EnergyUnits};
pub use window::SimulationWindow;
