//! Unit tests for wp-core primitives.

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(25.0330, 121.5654);
        assert!(p.distance_m(p) < 1e-9);
    }

    #[test]
    fn one_degree_latitude_approx() {
        // ~1 degree of latitude ≈ 111.2 km on a 6371 km sphere
        let a = GeoPoint::new(25.0, 121.0);
        let b = GeoPoint::new(26.0, 121.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 100.0, "got {d}");
    }

    #[test]
    fn distance_is_symmetric() {
        let a = GeoPoint::new(25.0330, 121.5654);
        let b = GeoPoint::new(24.1477, 120.6736);
        assert!((a.distance_m(b) - b.distance_m(a)).abs() < 1e-6);
    }

    #[test]
    fn lerp_endpoints_exact() {
        let a = GeoPoint::new(25.0, 121.0);
        let b = GeoPoint::new(26.0, 122.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn lerp_midpoint() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(10.0, 10.0);
        assert_eq!(a.lerp(b, 0.5), GeoPoint::new(5.0, 5.0));
    }

    #[test]
    fn display_six_decimals() {
        let p = GeoPoint::new(25.0330, 121.5654);
        assert_eq!(p.to_string(), "(25.033000, 121.565400)");
    }
}

#[cfg(test)]
mod speed {
    use crate::Speed;

    #[test]
    fn kmh_mps_conversion() {
        let s = Speed::from_kmh(36.0);
        assert!((s.mps() - 10.0).abs() < 1e-12);
        assert!((s.kmh() - 36.0).abs() < 1e-12);
    }

    #[test]
    fn validity() {
        assert!(Speed::from_kmh(60.0).is_valid());
        assert!(!Speed::from_kmh(0.0).is_valid());
        assert!(!Speed::from_kmh(-5.0).is_valid());
        assert!(!Speed::from_kmh(f64::NAN).is_valid());
    }

    #[test]
    fn display() {
        assert_eq!(Speed::from_kmh(60.0).to_string(), "60.0 km/h");
    }
}

#[cfg(test)]
mod time {
    use crate::{Clock, ManualClock, SystemClock};

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(1_000);
        assert_eq!(clock.now_ms(), 1_000);
        clock.advance(500);
        assert_eq!(clock.now_ms(), 1_500);
        clock.set(10_000);
        assert_eq!(clock.now_ms(), 10_000);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
