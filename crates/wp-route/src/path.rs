//! Ordered waypoint sequence.

use wp_core::GeoPoint;

/// An ordered route of waypoints.  Insertion order is significant.
///
/// A path is **traversable** once it holds at least two waypoints; shorter
/// paths are valid objects (a front end grows them one tap at a time) but
/// are rejected by `MovementScheduler::start`.
///
/// Serializes transparently as a JSON array of `{lat, lon}` objects, which
/// is also the slot-store wire format.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct Path {
    points: Vec<GeoPoint>,
}

impl Path {
    /// An empty path.
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a path from an existing waypoint list, preserving order.
    pub fn from_points(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    /// Append a waypoint at the end of the route.
    pub fn push(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    /// Remove all waypoints.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// `true` once the path can be traversed (≥ 2 waypoints).
    #[inline]
    pub fn is_traversable(&self) -> bool {
        self.points.len() >= 2
    }

    /// Number of legs between consecutive waypoints (0 for short paths).
    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    #[inline]
    pub fn first(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }

    /// The full ordered waypoint slice.
    #[inline]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
}

impl FromIterator<GeoPoint> for Path {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self { points: iter.into_iter().collect() }
    }
}
