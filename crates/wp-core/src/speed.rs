//! Travel speed value type.
//!
//! Stored canonically in metres/second; the user-facing unit is km/h (the
//! unit a route front end asks for), converted on construction.  The type
//! itself carries no validity check — `MovementScheduler::start` rejects
//! non-positive speeds before any planning happens.

/// A travel speed, stored as metres per second.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Speed(f64);

impl Speed {
    /// From kilometres per hour.
    #[inline]
    pub fn from_kmh(kmh: f64) -> Self {
        Speed(kmh / 3.6)
    }

    /// From metres per second.
    #[inline]
    pub fn from_mps(mps: f64) -> Self {
        Speed(mps)
    }

    /// Metres per second.
    #[inline]
    pub fn mps(self) -> f64 {
        self.0
    }

    /// Kilometres per hour.
    #[inline]
    pub fn kmh(self) -> f64 {
        self.0 * 3.6
    }

    /// `true` for a finite, strictly positive speed.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1} km/h", self.kmh())
    }
}
