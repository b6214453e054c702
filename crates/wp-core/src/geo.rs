//! Geographic coordinate type and the two pieces of math the simulator needs.
//!
//! `GeoPoint` uses `f64` (double-precision) latitude/longitude.  Emitted
//! positions feed a location provider directly, and traversal endpoints must
//! round-trip exactly through interpolation, so the usual single-precision
//! economy is not taken here.

/// A WGS-84 geographic coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Spherical Earth model, mean radius 6 371 000 m.  Symmetric, and zero
    /// for identical points.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Linear interpolation between `self` and `other`.
    ///
    /// Latitude and longitude are interpolated independently in coordinate
    /// space — not along a geodesic.  That is acceptable for the short
    /// segments this framework consumes (tens of kilometres at most, small
    /// relative to Earth's radius).
    ///
    /// `fraction` must already be clamped to `[0.0, 1.0]` by the caller.
    /// `lerp(other, 0.0)` returns `self` exactly; `lerp(other, 1.0)` returns
    /// `other` exactly.
    #[inline]
    pub fn lerp(self, other: GeoPoint, fraction: f64) -> GeoPoint {
        GeoPoint {
            lat: self.lat + (other.lat - self.lat) * fraction,
            lon: self.lon + (other.lon - self.lon) * fraction,
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
