//! Unit tests for wp-route.

use wp_core::GeoPoint;

use crate::Path;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Taipei Main Station → 101 → Songshan Airport, roughly.
fn three_point_path() -> Path {
    Path::from_points(vec![
        GeoPoint::new(25.0478, 121.5170),
        GeoPoint::new(25.0340, 121.5645),
        GeoPoint::new(25.0697, 121.5525),
    ])
}

#[cfg(test)]
mod path {
    use super::*;

    #[test]
    fn grows_by_append_in_order() {
        let mut p = Path::new();
        assert!(p.is_empty());
        assert!(!p.is_traversable());

        p.push(GeoPoint::new(25.0, 121.0));
        assert_eq!(p.len(), 1);
        assert!(!p.is_traversable());
        assert_eq!(p.segment_count(), 0);

        p.push(GeoPoint::new(26.0, 122.0));
        assert!(p.is_traversable());
        assert_eq!(p.segment_count(), 1);
        assert_eq!(p.first(), Some(GeoPoint::new(25.0, 121.0)));
        assert_eq!(p.last(), Some(GeoPoint::new(26.0, 122.0)));
    }

    #[test]
    fn clear_resets() {
        let mut p = three_point_path();
        p.clear();
        assert!(p.is_empty());
        assert_eq!(p.segment_count(), 0);
    }

    #[test]
    fn segment_count_is_len_minus_one() {
        assert_eq!(three_point_path().segment_count(), 2);
    }

    #[test]
    fn serializes_as_bare_array() {
        let p = Path::from_points(vec![GeoPoint::new(1.0, 2.0)]);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"[{"lat":1.0,"lon":2.0}]"#);
    }
}

#[cfg(test)]
mod segment {
    use super::*;
    use crate::Segment;
    use wp_core::Speed;

    #[test]
    fn duration_is_distance_over_speed() {
        let a = GeoPoint::new(25.0, 121.0);
        let b = GeoPoint::new(26.0, 121.0); // ~111.2 km
        let s = Segment::plan(a, b, Speed::from_mps(10.0));
        assert!((s.distance_m - 111_195.0).abs() < 100.0);
        // 111.2 km at 10 m/s ≈ 11 120 s
        let expected_ms = (s.distance_m / 10.0 * 1000.0).round() as u64;
        assert_eq!(s.duration_ms, expected_ms);
    }

    #[test]
    fn zero_length_leg_has_zero_duration() {
        let p = GeoPoint::new(25.0, 121.0);
        let s = Segment::plan(p, p, Speed::from_kmh(60.0));
        assert!(s.distance_m < 1e-9);
        assert_eq!(s.duration_ms, 0);
    }
}

#[cfg(test)]
mod store {
    use super::*;
    use crate::{JsonSlotStore, PathStore, RouteError};

    #[test]
    fn save_load_round_trip_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSlotStore::new(dir.path()).unwrap();

        let original = three_point_path();
        store.save(2, &original).unwrap();
        let loaded = store.load(2).unwrap();
        assert_eq!(loaded, original);
        assert_eq!(loaded.points(), original.points());
    }

    #[test]
    fn slots_are_independent() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSlotStore::new(dir.path()).unwrap();

        let a = Path::from_points(vec![GeoPoint::new(1.0, 1.0), GeoPoint::new(2.0, 2.0)]);
        let b = Path::from_points(vec![GeoPoint::new(3.0, 3.0), GeoPoint::new(4.0, 4.0)]);
        store.save(0, &a).unwrap();
        store.save(1, &b).unwrap();
        assert_eq!(store.load(0).unwrap(), a);
        assert_eq!(store.load(1).unwrap(), b);
    }

    #[test]
    fn empty_slot_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSlotStore::new(dir.path()).unwrap();
        match store.load(7) {
            Err(RouteError::SlotEmpty(7)) => {}
            other => panic!("expected SlotEmpty(7), got {other:?}"),
        }
    }

    #[test]
    fn overwriting_a_slot_replaces_it() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSlotStore::new(dir.path()).unwrap();

        store.save(0, &three_point_path()).unwrap();
        let shorter = Path::from_points(vec![GeoPoint::new(0.0, 0.0), GeoPoint::new(1.0, 1.0)]);
        store.save(0, &shorter).unwrap();
        assert_eq!(store.load(0).unwrap(), shorter);
    }

    #[test]
    fn last_position_memory() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonSlotStore::new(dir.path()).unwrap();

        assert_eq!(store.load_last_position().unwrap(), None);
        let p = GeoPoint::new(25.0330, 121.5654);
        store.save_last_position(p).unwrap();
        assert_eq!(store.load_last_position().unwrap(), Some(p));
    }
}
