//! Angular value types for directional wave data.
//!
//! Directions show up in two conventions (grid-relative and true north)
//! and two densities (per-radian and per-degree energy). Keeping the
//! angle itself a newtype and the conventions explicit enums prevents
//! the silent mix-ups that raw f64 bearings invite.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A compass direction in degrees, canonical range [0, 360).
///
/// Arithmetic wraps back into the canonical range, so
/// `Degrees::new(350.0) + Degrees::new(20.0)` is 10°.
///
/// # Example
///
/// ```
/// use wavepipe::types::Degrees;
///
/// let d = Degrees::new(380.0);
/// assert_eq!(d.value(), 20.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Degrees(f64);

impl Degrees {
    /// Create a direction, wrapping into [0, 360).
    #[inline]
    pub fn new(degrees: f64) -> Self {
        let mut d = degrees % 360.0;
        if d < 0.0 {
            d += 360.0;
        }
        // -0.0 % 360.0 can yield -0.0; normalize it
        Self(d + 0.0)
    }

    /// Due north.
    pub const NORTH: Self = Self(0.0);

    /// Get the angle in degrees.
    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Get the angle in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Sine of the angle.
    #[inline]
    pub fn sin(self) -> f64 {
        self.radians().sin()
    }

    /// Cosine of the angle.
    #[inline]
    pub fn cos(self) -> f64 {
        self.radians().cos()
    }

    /// Convert to raw f64 degrees.
    #[inline]
    pub fn into_inner(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Degrees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}°", self.0)
    }
}

impl From<Degrees> for f64 {
    #[inline]
    fn from(d: Degrees) -> f64 {
        d.0
    }
}

impl Add for Degrees {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.0 + rhs.0)
    }
}

impl Sub for Degrees {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.0 - rhs.0)
    }
}

impl Neg for Degrees {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.0)
    }
}

/// Directional convention a spectrum's direction bins are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleConvention {
    /// Directions measured relative to the model grid's orientation.
    GridRelative,
    /// Geographic bearings, degrees clockwise from true north.
    TrueNorth,
}

/// Directional density the spectral energy is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnergyUnits {
    /// m²/Hz/rad
    PerRadian,
    /// m²/Hz/deg
    PerDegree,
}
